use std::time::Duration;

use crate::config::TimeField;

/// Format as `m:ss`; minutes are not padded and keep growing past an hour.
pub fn format_time(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Join the configured time fields, e.g. `1:02 / 3:45`. `None` when no field
/// is configured.
pub fn time_text(
    elapsed: Duration,
    total: Duration,
    fields: &[TimeField],
    separator: &str,
) -> Option<String> {
    if fields.is_empty() {
        return None;
    }

    let parts: Vec<String> = fields
        .iter()
        .map(|f| match f {
            TimeField::Elapsed => format_time(elapsed),
            TimeField::Total => format_time(total),
            TimeField::Remaining => format!("-{}", format_time(total.saturating_sub(elapsed))),
        })
        .collect();
    Some(parts.join(separator))
}
