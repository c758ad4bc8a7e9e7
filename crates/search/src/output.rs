use std::time::Duration;

const RULE_WIDTH: usize = 50;

/// Keeps at most `max_lines` newline-separated pieces of `output`.
///
/// Pieces are counted the way `str::split('\n')` yields them, so a trailing newline counts as
/// one (empty) piece. Returns the bounded text and whether anything was cut.
pub fn truncate_lines(output: &str, max_lines: usize) -> (String, bool) {
    let pieces = output.split('\n').count();
    if pieces <= max_lines {
        return (output.to_string(), false);
    }

    let mut kept = output
        .split('\n')
        .take(max_lines)
        .collect::<Vec<_>>()
        .join("\n");
    kept.push_str(&format!("\n... (output truncated to {max_lines} lines)"));
    (kept, true)
}

pub fn timing_header(label: &str, elapsed: Duration) -> String {
    format!(
        "{label} completed in {:.3} seconds\n{}\n",
        elapsed.as_secs_f64(),
        "=".repeat(RULE_WIDTH)
    )
}
