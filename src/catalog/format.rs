/// Format whole seconds as `m:ss` (minutes are not zero-padded).
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Format a running time as `"H hr M min"`, or `"M min"` below one hour.
pub fn format_total_duration(secs: u32) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    if hours > 0 {
        format!("{hours} hr {mins} min")
    } else {
        format!("{mins} min")
    }
}
