use crate::core::RunSummary;
use crate::utils::error::{Result, ScrubError};

/// Human-readable summary line, e.g. `strip-empty-lines: 3 lines read, 2 written -> out.txt`.
pub fn summary_line(summary: &RunSummary) -> String {
    let mut line = format!(
        "{}: {} lines read, {} written -> {}",
        summary.report.filter,
        summary.report.lines_read,
        summary.report.lines_written,
        summary.output_path
    );
    if summary.report.truncated {
        line.push_str(" (line cap reached)");
    }
    line
}

pub fn print_summaries(summaries: &[RunSummary], json: bool) -> Result<()> {
    if json {
        let rendered = if let [single] = summaries {
            serde_json::to_string_pretty(single)?
        } else {
            serde_json::to_string_pretty(summaries)?
        };
        println!("{}", rendered);
    } else {
        for summary in summaries {
            println!("✅ {}", summary_line(summary));
        }
    }
    Ok(())
}

/// Logs the failure with its category and prints a short diagnostic on stderr.
pub fn report_failure(error: &ScrubError) {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?})",
        error,
        error.category()
    );
    tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());

    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
}
