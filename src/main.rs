use std::io;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::level_filters;
use tracing_subscriber::fmt::format::FmtSpan;

use forge_onboarding::config;
use forge_onboarding::runner::{QuizRunner, SessionError, SubmitOutcome};
use forge_onboarding::submit::{ApiClient, ScoreReport, SubmitScore};

mod prompt;

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let rust_log = std::env::var("LOG_LEVEL").unwrap_or("info".into());
    tracing_subscriber::fmt()
        .with_max_level(level_filters::LevelFilter::from_level(
            rust_log.parse().context("LOG_LEVEL is not a valid level")?,
        ))
        .with_span_events(FmtSpan::ENTER)
        .log_internal_errors(true)
        .with_ansi(true)
        .with_line_number(true)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let catalog_path =
        std::env::var("CATALOG_PATH").unwrap_or_else(|_| config::DEFAULT_CATALOG_PATH.to_owned());
    // TODO: replace the demo questions in data/onboarding.json with the real onboarding set
    let catalog = config::load_catalog(&catalog_path)?;
    let client = ApiClient::from_env().context("failed to configure the account API client")?;
    let mut runner = QuizRunner::new(catalog);

    println!("Welcome to the Forge 307 onboarding quiz!");
    loop {
        prompt::wait_for_enter("Press Enter to start.")?;
        runner.start()?;

        while let Some(question) = runner.current_question().cloned() {
            if let Some((current, total)) = runner.progress() {
                println!("\nQuestion {} of {}", current + 1, total);
            }

            let draft = prompt::read_answer(&question)?;
            match runner.submit_answer(draft) {
                Ok(SubmitOutcome::Next(_)) => {}
                Ok(SubmitOutcome::Complete { score }) => {
                    println!("\nOnboarding complete! Your health score is {score}%.");
                }
                Err(SessionError::InvalidAnswer(reason)) => {
                    println!("That answer was not accepted: {reason}");
                }
                Err(other) => return Err(other.into()),
            }
        }

        if let Some(score) = runner.score() {
            let report = ScoreReport {
                session_id: runner.session_id(),
                score,
            };
            if let Err(e) = client.submit_score(&report) {
                log::warn!("could not submit the health score: {e}");
                println!("Could not reach the account service; your score was kept locally.");
            }
        }

        if !prompt::confirm("Run onboarding again? (yes/no)")? {
            break;
        }
        runner.reset()?;
    }

    Ok(())
}
