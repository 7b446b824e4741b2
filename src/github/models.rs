// src/github/models.rs
#![allow(dead_code)]
use serde::{Deserialize, Serialize};

const TOP_REPO_LIMIT: usize = 5;

/// Structure representing a GitHub user profile
/// Example: https://api.github.com/users/octocat
#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: Option<String>,
}

/// One entry of https://api.github.com/users/{login}/repos
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub fork: bool,
    pub updated_at: Option<String>,
}

/// One entry of https://api.github.com/users/{login}/events/public
#[derive(Debug, Clone, Deserialize)]
pub struct GithubEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: Option<String>,
}

/// Reshaped profile data attached to a candidate report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubIntel {
    pub username: String,
    pub profile_url: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub followers: u32,
    pub public_repos: u32,
    pub languages: Vec<LanguageUsage>,
    pub top_repos: Vec<RepoHighlight>,
    pub activity: ActivitySummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageUsage {
    pub language: String,
    pub repo_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoHighlight {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ActivitySummary {
    pub total_events: u32,
    pub push_events: u32,
    pub pull_request_events: u32,
    pub issue_events: u32,
    pub other_events: u32,
    pub last_event_at: Option<String>,
}

impl GithubIntel {
    /// Reshapes the raw API records into the report form: language usage is
    /// tallied across original (non-fork) repositories, the top repositories
    /// are ranked by stargazers, and events are bucketed by type.
    pub fn from_api(user: GithubUser, repos: Vec<GithubRepo>, events: Vec<GithubEvent>) -> Self {
        let mut language_counts: Vec<LanguageUsage> = Vec::new();
        for repo in repos.iter().filter(|r| !r.fork) {
            if let Some(language) = &repo.language {
                match language_counts.iter_mut().find(|l| &l.language == language) {
                    Some(entry) => entry.repo_count += 1,
                    None => language_counts.push(LanguageUsage {
                        language: language.clone(),
                        repo_count: 1,
                    }),
                }
            }
        }
        // Most-used first; name breaks ties so the output is deterministic.
        language_counts.sort_by(|a, b| {
            b.repo_count
                .cmp(&a.repo_count)
                .then_with(|| a.language.cmp(&b.language))
        });

        let mut ranked: Vec<&GithubRepo> = repos.iter().filter(|r| !r.fork).collect();
        ranked.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
        let top_repos = ranked
            .into_iter()
            .take(TOP_REPO_LIMIT)
            .map(|repo| RepoHighlight {
                name: repo.name.clone(),
                url: repo.html_url.clone(),
                description: repo.description.clone(),
                language: repo.language.clone(),
                stars: repo.stargazers_count,
            })
            .collect();

        let mut activity = ActivitySummary {
            // The events feed is newest-first, so the first timestamp is the
            // most recent one.
            last_event_at: events.first().and_then(|e| e.created_at.clone()),
            ..ActivitySummary::default()
        };
        for event in &events {
            activity.total_events += 1;
            match event.event_type.as_str() {
                "PushEvent" => activity.push_events += 1,
                "PullRequestEvent" | "PullRequestReviewEvent" => {
                    activity.pull_request_events += 1
                }
                "IssuesEvent" | "IssueCommentEvent" => activity.issue_events += 1,
                _ => activity.other_events += 1,
            }
        }

        GithubIntel {
            username: user.login,
            profile_url: user.html_url,
            display_name: user.name,
            bio: user.bio,
            company: user.company,
            location: user.location,
            followers: user.followers,
            public_repos: user.public_repos,
            languages: language_counts,
            top_repos,
            activity,
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, language: Option<&str>, stars: u32, fork: bool) -> GithubRepo {
        GithubRepo {
            name: name.to_string(),
            html_url: format!("https://github.com/janedoe/{name}"),
            description: None,
            language: language.map(|l| l.to_string()),
            stargazers_count: stars,
            forks_count: 0,
            fork,
            updated_at: None,
        }
    }

    fn user() -> GithubUser {
        serde_json::from_value(serde_json::json!({
            "login": "janedoe",
            "name": "Jane Doe",
            "bio": "Backend engineer",
            "company": null,
            "location": "San Francisco",
            "blog": "",
            "html_url": "https://github.com/janedoe",
            "public_repos": 12,
            "followers": 34,
            "following": 7,
            "created_at": "2015-02-01T00:00:00Z"
        }))
        .expect("user fixture should deserialize")
    }

    #[test]
    fn test_user_deserializes_with_null_fields() {
        let user = user();
        assert_eq!(user.login, "janedoe");
        assert_eq!(user.company, None);
        assert_eq!(user.followers, 34);
    }

    #[test]
    fn test_language_tally_skips_forks_and_sorts_by_usage() {
        let repos = vec![
            repo("a", Some("Rust"), 1, false),
            repo("b", Some("Go"), 5, false),
            repo("c", Some("Rust"), 2, false),
            repo("d", Some("Python"), 90, true),
            repo("e", None, 0, false),
        ];
        let intel = GithubIntel::from_api(user(), repos, vec![]);

        assert_eq!(
            intel.languages,
            vec![
                LanguageUsage { language: "Rust".into(), repo_count: 2 },
                LanguageUsage { language: "Go".into(), repo_count: 1 },
            ]
        );
    }

    #[test]
    fn test_top_repos_ranked_by_stars_excluding_forks() {
        let repos = vec![
            repo("low", Some("Rust"), 1, false),
            repo("forked", Some("Rust"), 500, true),
            repo("high", Some("Rust"), 40, false),
            repo("mid", Some("Go"), 7, false),
        ];
        let intel = GithubIntel::from_api(user(), repos, vec![]);

        let names: Vec<&str> = intel.top_repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
        assert_eq!(intel.top_repos[0].stars, 40);
    }

    #[test]
    fn test_activity_buckets_event_types() {
        let events: Vec<GithubEvent> = serde_json::from_value(serde_json::json!([
            { "type": "PushEvent", "created_at": "2024-06-03T10:00:00Z" },
            { "type": "PushEvent", "created_at": "2024-06-02T10:00:00Z" },
            { "type": "PullRequestEvent", "created_at": "2024-06-01T10:00:00Z" },
            { "type": "IssueCommentEvent", "created_at": "2024-05-30T10:00:00Z" },
            { "type": "WatchEvent", "created_at": "2024-05-29T10:00:00Z" }
        ]))
        .expect("events fixture should deserialize");

        let intel = GithubIntel::from_api(user(), vec![], events);
        assert_eq!(intel.activity.total_events, 5);
        assert_eq!(intel.activity.push_events, 2);
        assert_eq!(intel.activity.pull_request_events, 1);
        assert_eq!(intel.activity.issue_events, 1);
        assert_eq!(intel.activity.other_events, 1);
        assert_eq!(
            intel.activity.last_event_at.as_deref(),
            Some("2024-06-03T10:00:00Z")
        );
    }
}
