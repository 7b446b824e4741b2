// src/github/client.rs
use crate::github::models::{GithubEvent, GithubIntel, GithubRepo, GithubUser};
use crate::utils::error::GithubError;
use reqwest::header;
use std::time::Duration;

const GITHUB_API_BASE: &str = "https://api.github.com";
// GitHub rejects requests without a User-Agent outright.
const GITHUB_USER_AGENT: &str = "candidate_scout/0.1 (candidate intelligence CLI)";
// Unauthenticated clients get 60 requests/hour; stay polite between calls.
const GITHUB_REQUEST_DELAY_MS: u64 = 150;

const REPO_PAGE_SIZE: u32 = 100;
const EVENT_PAGE_SIZE: u32 = 100;

/// Creates a reqwest client configured for the GitHub REST API.
/// Picks up an optional `GITHUB_TOKEN` from the environment for a higher
/// rate limit; everything fetched is public either way.
fn build_github_client() -> Result<reqwest::Client, GithubError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github+json"),
    );
    if let Ok(token) = std::env::var("GITHUB_TOKEN") {
        let value = header::HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| GithubError::Parse("GITHUB_TOKEN is not a valid header value".to_string()))?;
        headers.insert(header::AUTHORIZATION, value);
        tracing::debug!("Using GITHUB_TOKEN from environment");
    }

    reqwest::Client::builder()
        .user_agent(GITHUB_USER_AGENT)
        .default_headers(headers)
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(GithubError::Network)
}

/// Issues one GET against the API, mapping the status codes we care about.
async fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    username: &str,
) -> Result<T, GithubError> {
    tracing::debug!("Fetching: {}", url);
    tokio::time::sleep(Duration::from_millis(GITHUB_REQUEST_DELAY_MS)).await;

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GithubError::UserNotFound(username.to_string()));
        }
        if status == reqwest::StatusCode::FORBIDDEN {
            tracing::warn!("Received 403 Forbidden - likely rate limited; set GITHUB_TOKEN to raise the limit.");
            return Err(GithubError::RateLimited);
        }
        return Err(GithubError::Http(status));
    }

    let body = response.json::<T>().await?;
    Ok(body)
}

/// Fetches the public profile for a username.
pub async fn fetch_user(username: &str) -> Result<GithubUser, GithubError> {
    let client = build_github_client()?;
    let url = format!("{}/users/{}", GITHUB_API_BASE, username);
    get_json(&client, &url, username).await
}

/// Fetches the user's repositories, most recently updated first.
pub async fn fetch_repos(username: &str) -> Result<Vec<GithubRepo>, GithubError> {
    let client = build_github_client()?;
    let url = format!(
        "{}/users/{}/repos?per_page={}&sort=updated",
        GITHUB_API_BASE, username, REPO_PAGE_SIZE
    );
    get_json(&client, &url, username).await
}

/// Fetches the user's recent public events.
pub async fn fetch_recent_events(username: &str) -> Result<Vec<GithubEvent>, GithubError> {
    let client = build_github_client()?;
    let url = format!(
        "{}/users/{}/events/public?per_page={}",
        GITHUB_API_BASE, username, EVENT_PAGE_SIZE
    );
    get_json(&client, &url, username).await
}

/// Aggregates profile, repository, and activity data for a username into the
/// report shape. The profile itself is mandatory; a failure fetching the
/// events feed degrades to an empty activity summary rather than aborting,
/// since the feed 451s/410s for some accounts.
pub async fn gather_candidate_intel(username: &str) -> Result<GithubIntel, GithubError> {
    tracing::info!("Aggregating GitHub intel for user: {}", username);

    let user = fetch_user(username).await?;
    let repos = fetch_repos(username).await?;
    tracing::info!("Fetched {} repositories for {}", repos.len(), username);

    let events = match fetch_recent_events(username).await {
        Ok(events) => events,
        Err(e) => {
            tracing::warn!("Could not fetch events for {}: {}", username, e);
            Vec::new()
        }
    };

    Ok(GithubIntel::from_api(user, repos, events))
}
