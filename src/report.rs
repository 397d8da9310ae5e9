//! Aligned text rendering of the call log.

use chrono::{Local, TimeZone};

use crate::types::CallEntry;

/// Width of the right-justified duration column.
const DURATION_WIDTH: usize = 22;

/// Width of the timestamp column, `%Y-%m-%d %H:%M`.
const TIMESTAMP_WIDTH: usize = 16;

/// Render seconds as a compound duration, largest unit first.
///
/// Inner zero components are kept once a larger unit is present
/// (`1 hours 0 minutes 0 seconds`); zero itself renders empty.
pub fn humanize(mut secs: u64) -> String {
    const UNITS: [(u64, &str); 4] = [
        (60, "seconds"),
        (60, "minutes"),
        (24, "hours"),
        (1000, "days"),
    ];

    let mut parts = Vec::new();
    for (count, name) in UNITS {
        if secs == 0 {
            break;
        }
        let n = secs % count;
        secs /= count;
        parts.push(format!("{n} {name}"));
    }
    parts.reverse();
    parts.join(" ")
}

/// Render at most `limit` entries as an aligned table.
///
/// The name, number and type columns are sized to the widest value in the
/// rendered batch; a rule as wide as the longest data line separates the
/// header from the rows.
pub fn render(entries: &[CallEntry], limit: usize) -> String {
    let batch = &entries[..entries.len().min(limit)];
    let name_w = widest(batch, |e| e.name.len());
    let number_w = widest(batch, |e| e.number.len());
    let type_w = widest(batch, |e| e.call_type.len());

    let lines: Vec<String> = batch
        .iter()
        .map(|e| {
            format!(
                "  {:<TIMESTAMP_WIDTH$}  |  {:<name_w$}  |  {:<number_w$}  |  {:<type_w$}  |  {:>DURATION_WIDTH$}",
                format_timestamp(e.datetime),
                e.name,
                e.number,
                e.call_type,
                humanize(e.duration),
            )
        })
        .collect();

    let mut out = format!(
        "  {:<TIMESTAMP_WIDTH$}  |  {:<name_w$}  |  {:<number_w$}  |  {:<type_w$}  |  {}\n",
        "TIMESTAMP", "NAME", "NUMBER", "TYPE", "DURATION",
    );
    let rule_w = lines.iter().map(String::len).max().unwrap_or(0);
    out.push_str(&"-".repeat(rule_w));
    out.push('\n');
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn widest<F>(batch: &[CallEntry], field_len: F) -> usize
where
    F: Fn(&CallEntry) -> usize,
{
    batch.iter().map(field_len).max().unwrap_or(0)
}

/// Local time rendered to minute precision, always [`TIMESTAMP_WIDTH`] chars.
fn format_timestamp(epoch: i64) -> String {
    match Local.timestamp_opt(epoch, 0).single() {
        Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        None => epoch.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, number: &str, call_type: &str, duration: u64) -> CallEntry {
        CallEntry {
            datetime: 1_700_000_000,
            name: name.to_string(),
            number: number.to_string(),
            call_type: call_type.to_string(),
            duration,
        }
    }

    #[test]
    fn humanize_zero_is_empty() {
        assert_eq!(humanize(0), "");
    }

    #[test]
    fn humanize_seconds_only() {
        assert_eq!(humanize(59), "59 seconds");
    }

    #[test]
    fn humanize_keeps_inner_zero_components() {
        assert_eq!(humanize(3600), "1 hours 0 minutes 0 seconds");
    }

    #[test]
    fn humanize_compound() {
        assert_eq!(humanize(90_061), "1 days 1 hours 1 minutes 1 seconds");
        assert_eq!(humanize(62), "1 minutes 2 seconds");
    }

    #[test]
    fn format_timestamp_is_fixed_width() {
        assert_eq!(format_timestamp(1_700_000_000).len(), TIMESTAMP_WIDTH);
    }

    #[test]
    fn render_honors_the_limit() {
        let entries = vec![
            entry("Alice", "0611111111", "missed", 0),
            entry("Bob", "0622222222", "accepted", 62),
            entry("Carol", "0633333333", "outgoing", 5),
        ];
        let out = render(&entries, 2);
        assert!(out.contains("Alice"));
        assert!(out.contains("Bob"));
        assert!(!out.contains("Carol"));
        // Header, rule, two rows.
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn render_sizes_columns_to_the_batch() {
        let entries = vec![
            entry("Alexandra", "0611111111", "missed", 0),
            entry("Bob", "061", "accepted", 62),
        ];
        let out = render(&entries, 15);
        let lines: Vec<&str> = out.lines().collect();
        let rows: Vec<Vec<&str>> = lines[2..].iter().map(|l| l.split("  |  ").collect()).collect();
        // Name column padded to the widest name in the batch.
        assert_eq!(rows[0][1], "Alexandra");
        assert_eq!(rows[1][1], "Bob      ");
        // Duration right-justified to its fixed width.
        assert_eq!(rows[1][4], format!("{:>DURATION_WIDTH$}", "1 minutes 2 seconds"));
    }

    #[test]
    fn render_rule_matches_longest_row() {
        let entries = vec![
            entry("Alice", "0611111111", "missed", 0),
            entry("Bob", "0622222222", "accepted", 90_061),
        ];
        let out = render(&entries, 15);
        let lines: Vec<&str> = out.lines().collect();
        let longest = lines[2..].iter().map(|l| l.len()).max().unwrap();
        assert_eq!(lines[1].len(), longest);
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn render_empty_log_is_header_only() {
        let out = render(&[], 15);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("TIMESTAMP"));
        assert!(lines[1].is_empty());
    }
}
