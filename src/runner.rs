//! Preflight runner: validation, then statistics, then rendering.
//!
//! Everything is computed before the first byte is rendered, so a fatal
//! error leaves the sink untouched.

use crate::cli::OutputMode;
use crate::config::Effective;
use crate::error::Result;
use crate::models::Checklist;
use crate::{output, stats, validate};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Terminal state of a completed run.
pub enum Outcome {
    Passed,
    Failed { missing: usize },
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Passed => 0,
            Outcome::Failed { .. } => 1,
        }
    }
}

/// Run the preflight checks for `checklist` and render the report into `out`.
pub fn run_preflight<W: Write>(
    eff: &Effective,
    checklist: &Checklist,
    out: &mut W,
) -> Result<Outcome> {
    let validation = validate::validate(&eff.repo_root, checklist)?;
    let verdict = validation.verdict();
    let project_stats = if verdict {
        Some(stats::collect(&eff.repo_root, checklist, &validation)?)
    } else {
        None
    };

    match eff.output {
        OutputMode::Json => output::write_json(out, &validation, project_stats.as_ref())?,
        OutputMode::Human => {
            output::write_human(out, &validation, project_stats.as_ref(), eff.color)?
        }
    }
    out.flush()?;

    Ok(if verdict {
        Outcome::Passed
    } else {
        Outcome::Failed {
            missing: validation.missing().count(),
        }
    })
}
