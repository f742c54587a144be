use std::fmt::Write;

use crate::domain::model::Report;
use crate::utils::error::Result;

/// Plain-text report, one block per drill.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for m in &report.measurements {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Task {}: {}", m.task.ordinal(), m.title);
        let _ = writeln!(
            out,
            "Time: {:.6} seconds, Space: {} bytes\n",
            m.elapsed.as_secs_f64(),
            m.bytes
        );
    }
    out
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
