// src/main.rs
mod github;
mod ingest;
mod parser;
mod report;
mod utils;

use clap::Parser;
use github::client;
use parser::resume::parse_resume_text;
use report::{CandidateReport, ReportWriter};
use std::path::PathBuf;
use utils::AppError;

/// Command Line Interface for the candidate intelligence reporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the resume file (txt, md, or pdf)
    #[arg(short, long)]
    resume: PathBuf,

    /// GitHub username to aggregate (overrides the one parsed from the resume)
    #[arg(short, long)]
    github_user: Option<String>,

    /// Output directory for generated reports
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Skip GitHub profile aggregation entirely
    #[arg(long)]
    skip_github: bool,

    /// Debug mode - additionally dump the normalized resume text
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Initialize report output
    let writer = ReportWriter::new(&args.output_dir)?;

    // 4. Extract text from the uploaded document
    let text = ingest::extract_text(&args.resume)?;
    tracing::info!(
        "Extracted {} bytes of text from {}",
        text.len(),
        args.resume.display()
    );

    // 5. Run the heuristic parser (total; never fails for any text)
    let parsed = parse_resume_text(&text);
    tracing::info!(
        "Parsed resume: name={:?}, headline={:?}, {} email(s), {} phone(s), {} skill(s)",
        parsed.name,
        parsed.headline,
        parsed.emails.len(),
        parsed.phones.len(),
        parsed.skills.len()
    );

    // 6. Resolve the GitHub username: explicit flag beats the parsed link
    let username = if args.skip_github {
        None
    } else {
        args.github_user
            .clone()
            .or_else(|| parsed.profile_username.clone())
    };
    if !args.skip_github && username.is_none() {
        tracing::warn!("No GitHub username on the resume and none given; report will be resume-only");
    }

    // 7. Aggregate profile data; a remote failure degrades the report rather
    //    than aborting the run
    let intel = match &username {
        Some(username) => match client::gather_candidate_intel(username).await {
            Ok(intel) => {
                tracing::info!(
                    "Aggregated GitHub intel for {}: {} language(s), {} top repo(s), {} recent event(s)",
                    username,
                    intel.languages.len(),
                    intel.top_repos.len(),
                    intel.activity.total_events
                );
                Some(intel)
            }
            Err(e) => {
                tracing::error!("GitHub aggregation failed for {}: {}", username, e);
                None
            }
        },
        None => None,
    };

    // 8. Assemble and save the report
    let report = CandidateReport::new(&args.resume, parsed, intel);
    let report_path = writer.save_report(&report)?;
    tracing::info!("Saved candidate report to: {}", report_path.display());

    if args.debug {
        let raw_path = writer.save_raw_text(&report)?;
        tracing::info!("Saved normalized resume text to: {}", raw_path.display());
    }

    Ok(())
}
