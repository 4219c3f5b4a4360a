//! Terminal rendering of check results

use console::style;
use report::{CheckRecord, RunStats};
use shared::CheckId;

/// One line per finished check
pub fn render_record(record: &CheckRecord) -> String {
    let duration = style(format!("({} ms)", record.duration_ms)).dim();
    if record.passed() {
        format!("{} {} {}", style("✓ PASS").green().bold(), record.check, duration)
    } else {
        let reason = record.detail.as_deref().unwrap_or("no reason recorded");
        format!(
            "{} {} {}\n    {}",
            style("✗ FAIL").red().bold(),
            record.check,
            duration,
            style(reason).red()
        )
    }
}

/// Closing summary line
pub fn render_summary(stats: &RunStats, base_url: &str) -> String {
    let verdict = if stats.total > 0 && stats.failed == 0 {
        style("all checks passed").green().bold()
    } else if stats.total == 0 {
        style("no checks ran").yellow().bold()
    } else {
        style("smoke run failed").red().bold()
    };
    format!(
        "{}: {} passed, {} failed against {}",
        verdict, stats.passed, stats.failed, base_url
    )
}

/// One line per available check
pub fn render_check_listing(id: CheckId) -> String {
    let set = if id.is_core() { "core" } else { "extended" };
    format!("  {:<30} {:<9} {}", id.as_str(), set, id.description())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn plain(s: String) -> String {
        console::strip_ansi_codes(&s).to_string()
    }

    #[test]
    fn test_render_pass() {
        let record = CheckRecord::pass(CheckId::HomePage, Duration::from_millis(14));
        assert_eq!(plain(render_record(&record)), "✓ PASS home-page (14 ms)");
    }

    #[test]
    fn test_render_failure_includes_reason() {
        let record = CheckRecord::fail(
            CheckId::ObservationsPagination,
            Duration::from_millis(9),
            "Assertion failed: page size was 20, expected 1",
        );
        let text = plain(render_record(&record));
        assert!(text.starts_with("✗ FAIL observations-pagination (9 ms)"));
        assert!(text.ends_with("page size was 20, expected 1"));
    }

    #[test]
    fn test_render_summary() {
        let stats = RunStats {
            total: 3,
            passed: 2,
            failed: 1,
        };
        assert_eq!(
            plain(render_summary(&stats, "http://localhost:8080")),
            "smoke run failed: 2 passed, 1 failed against http://localhost:8080"
        );

        let empty = RunStats {
            total: 0,
            passed: 0,
            failed: 0,
        };
        assert!(plain(render_summary(&empty, "x")).starts_with("no checks ran"));
    }

    #[test]
    fn test_listing_marks_extended() {
        let line = render_check_listing(CheckId::Health);
        assert!(line.contains("health"));
        assert!(line.contains("extended"));
    }
}
