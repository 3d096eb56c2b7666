use std::collections::HashSet;

use crate::types::Track;

/// Curated searches behind the retro gaming mix, in request order.
pub const RETRO_GAMING_QUERIES: [&str; 6] = [
    "chiptune 8bit",
    "video game music",
    "retro gaming soundtrack",
    "synthwave gaming",
    "pixel music",
    "arcade music",
];

/// Results requested per curated search.
pub const RETRO_GAMING_QUERY_LIMIT: u32 = 10;

/// Maximum size of the retro gaming mix.
pub const RETRO_GAMING_MIX_SIZE: usize = 20;

/// Renders a duration as `m:ss`.
///
/// Minutes are never rolled over into hours, so an hour-long track is
/// `"60:00"`.
pub fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

/// Drops tracks whose id was already seen, keeping the first occurrence.
pub fn remove_duplicate_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}
