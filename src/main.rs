//! Preflight CLI binary entry point.
//! Validates the firmware tree under the chosen root and prints the report.

use clap::Parser;
use preflight::cli::Cli;
use preflight::config::Effective;
use preflight::models::Checklist;
use preflight::runner::{self, Outcome};
use preflight::utils;

fn main() {
    let cli = Cli::parse();
    let eff = Effective::from(&cli);
    let checklist = Checklist::firmware();

    if eff.verbose {
        eprintln!(
            "{} checking {} paths under {}",
            utils::info_prefix(),
            checklist.len(),
            eff.repo_root.display()
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match runner::run_preflight(&eff, &checklist, &mut out) {
        Ok(outcome) => {
            if let Outcome::Failed { missing } = outcome {
                if eff.verbose {
                    eprintln!(
                        "{} {} of {} paths missing; skipped statistics",
                        utils::note_prefix(),
                        missing,
                        checklist.len()
                    );
                }
            }
            std::process::exit(outcome.exit_code());
        }
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}
