//! Display strings for distances and durations, for renderers that need
//! text where the source payload carried none (computed totals, edge
//! labels). Metres below one kilometre, one-decimal kilometres from
//! there; whole minutes below one hour, `hr`/`min` from there.

/// Formats a distance in metres: `"450 m"`, `"1.2 km"`.
pub fn format_distance(metres: u32) -> String {
    if metres >= 1000 {
        format!("{:.1} km", metres as f64 / 1000.0)
    } else {
        format!("{} m", metres)
    }
}

/// Formats a duration in seconds: `"7 min"`, `"1 hr 30 min"`.
pub fn format_duration(seconds: u32) -> String {
    if seconds >= 3600 {
        format!("{} hr {} min", seconds / 3600, seconds % 3600 / 60)
    } else {
        format!("{} min", seconds / 60)
    }
}
