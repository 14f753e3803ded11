//! Active weather alerts for a US state
//!
//! Usage:
//!   weather_alerts texas          - One lookup, then exit
//!   weather_alerts                - Prompt for states until EOF or "quit"
//!
//! Set RUST_LOG=info to see request logging.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use weather_alerts::{
    cli::SettingsArgs, render::ElementKind, state_names::state_name_for_code, AlertsClient,
    AlertsFormController, Page, SubmissionOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "weather_alerts")]
#[command(about = "Look up active weather alerts by US state name or code")]
struct Args {
    /// State name or two-letter code; omit for interactive mode
    state: Vec<String>,

    #[command(flatten)]
    settings: SettingsArgs,
}

fn print_outcome(out: &mut impl Write, outcome: &SubmissionOutcome, page: &Page) -> io::Result<()> {
    match outcome {
        SubmissionOutcome::Succeeded { code, .. } => {
            if let Some(name) = state_name_for_code(code) {
                writeln!(out, "[{} - {}]", code, name)?;
            }
            for element in page.results().children() {
                match element.kind {
                    ElementKind::Heading => writeln!(out, "{}", element.text)?,
                    ElementKind::Notice => writeln!(out, "  {}", element.text)?,
                    ElementKind::Card => writeln!(out, "  - {}", element.text)?,
                }
            }
        }
        SubmissionOutcome::Rejected | SubmissionOutcome::Failed(_) => {
            writeln!(out, "error: {}", page.error().text())?;
        }
        SubmissionOutcome::Superseded => {}
    }
    out.flush()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = args.settings.settings();
    let client = AlertsClient::new(&settings)?;
    let controller = AlertsFormController::with_settings(client, &settings);
    let page = Mutex::new(Page::new());
    let mut stdout = io::stdout();

    if !args.state.is_empty() {
        let input = args.state.join(" ");
        let outcome = controller.submit(&input, &page).await;
        let failed = !matches!(outcome, SubmissionOutcome::Succeeded { .. });
        {
            let page = page.lock().unwrap_or_else(|e| e.into_inner());
            print_outcome(&mut stdout, &outcome, &page)?;
        }
        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    write!(stdout, "state> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        page.lock().unwrap_or_else(|e| e.into_inner()).input = line.clone();
        let outcome = controller.submit(&line, &page).await;
        {
            let page = page.lock().unwrap_or_else(|e| e.into_inner());
            print_outcome(&mut stdout, &outcome, &page)?;
        }

        write!(stdout, "state> ")?;
        stdout.flush()?;
    }

    Ok(())
}
