//! Report rendering for a preflight run.
//!
//! Supports `human` (default) and `json` outputs. Renderers write into an
//! injected sink and perform no other I/O. The JSON form carries per-file
//! fields, a summary, and the statistics when the tree is complete.

use crate::models::{ProjectStats, Validation};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

const FEATURES: [&str; 7] = [
    "Fall Detection (MPU6050 IMU)",
    "Obstacle Detection (VL53L1X ToF)",
    "RFID Tracking (MFRC522)",
    "SOS Emergency Button",
    "Battery Monitoring",
    "BLE GATT Interface (NimBLE)",
    "Haptic Feedback (Buzzer, Vibration, LED)",
];

const BUILD_GUIDE: &str = "  This is Arduino firmware for ESP32-S3 hardware.
  It cannot be compiled or run by this tool.

  To compile and upload:

  Option 1 - PlatformIO (Recommended):
    1. Install PlatformIO: https://platformio.org/install
    2. Run: pio run
    3. Upload: pio run --target upload

  Option 2 - Arduino IDE:
    1. Install Arduino IDE 2.0+
    2. Install ESP32 board support
    3. Install required libraries (see README.md)
    4. Select 'ESP32S3 Dev Module' board
    5. Upload sketch

  📖 See README.md for detailed instructions
";

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Paint `text` with `style` only when colors are on.
fn paint(color: bool, text: &str, style: impl Fn(&str) -> String) -> String {
    if color {
        style(text)
    } else {
        text.to_string()
    }
}

/// Write the human report.
///
/// `stats` must be `Some` exactly when the validation verdict holds; the
/// statistics, features, and guide are skipped otherwise.
pub fn write_human<W: Write>(
    out: &mut W,
    validation: &Validation,
    stats: Option<&ProjectStats>,
    color: bool,
) -> io::Result<()> {
    write_banner(out, color)?;

    writeln!(out, "📋 Checking required files...\n")?;
    for rec in &validation.records {
        let marker = if rec.exists { "✅" } else { "❌" };
        let path = if !rec.exists && color {
            rec.entry.path.red().to_string()
        } else {
            rec.entry.path.clone()
        };
        writeln!(out, "  {} {}", marker, path)?;
    }
    writeln!(out)?;

    match stats {
        Some(stats) if validation.verdict() => {
            writeln!(
                out,
                "{}\n",
                paint(color, "✅ All required files are present!", |s| s
                    .green()
                    .bold()
                    .to_string())
            )?;
            write_stats(out, stats)?;
            write_features(out)?;
            writeln!(out, "🔧 Compilation Guide:\n")?;
            writeln!(out, "{}", BUILD_GUIDE)?;
            writeln!(out, "{}", rule())?;
            writeln!(
                out,
                "{}",
                paint(color, "✅ Project validation successful!", |s| s
                    .green()
                    .bold()
                    .to_string())
            )?;
            writeln!(out, "{}\n", rule())?;
        }
        _ => {
            writeln!(
                out,
                "{}",
                paint(color, "❌ Some required files are missing!", |s| s
                    .red()
                    .bold()
                    .to_string())
            )?;
            writeln!(out, "   Please ensure all firmware files are present.\n")?;
        }
    }
    Ok(())
}

fn write_banner<W: Write>(out: &mut W, color: bool) -> io::Result<()> {
    writeln!(out, "\n{}", rule())?;
    writeln!(
        out,
        "  {}",
        paint(color, "Smart Walking Stick Firmware - Project Validator", |s| s
            .bold()
            .to_string())
    )?;
    writeln!(out, "  ESP32-S3 + NimBLE")?;
    writeln!(out, "{}\n", rule())
}

fn write_stats<W: Write>(out: &mut W, stats: &ProjectStats) -> io::Result<()> {
    writeln!(out, "📊 Project Statistics:\n")?;
    writeln!(out, "  Total lines of code: {}", stats.total_lines)?;
    writeln!(out, "  Source files: {}", stats.source_files)?;
    writeln!(out)
}

fn write_features<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "✨ Features:\n")?;
    for f in FEATURES {
        writeln!(out, "  • {}", f)?;
    }
    writeln!(out)
}

/// Write the JSON report followed by a newline.
pub fn write_json<W: Write>(
    out: &mut W,
    validation: &Validation,
    stats: Option<&ProjectStats>,
) -> io::Result<()> {
    let doc = compose_report_json(validation, stats);
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(validation: &Validation, stats: Option<&ProjectStats>) -> JsonVal {
    let ok = validation.verdict();
    let files: Vec<_> = validation
        .records
        .iter()
        .map(|r| {
            json!({
                "path": r.entry.path,
                "category": r.entry.category.as_str(),
                "exists": r.exists,
            })
        })
        .collect();
    let missing = validation.missing().count();
    let summary = json!({
        "total": validation.records.len(),
        "present": validation.records.len() - missing,
        "missing": missing,
    });
    let stats = if ok {
        stats.map(|s| json!({"total_lines": s.total_lines, "source_files": s.source_files}))
    } else {
        None
    };
    json!({"ok": ok, "files": files, "summary": summary, "stats": stats})
}
