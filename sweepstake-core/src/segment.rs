/// Segmentation of the ranked team list.
///
/// Pure functions of list lengths and order — no randomness, no
/// assignment state. Teams are split into consecutive chunks of
/// `min(participant_count, team_count)` so that each chunk can be raffled
/// off in one round where every participant receives at most one team.
use std::ops::Range;

/// Segment size for a draw: `min(participant_slots, team_count)`.
///
/// `participant_slots` counts input occurrences, duplicates included.
pub fn segment_size(participant_slots: usize, team_count: usize) -> usize {
    participant_slots.min(team_count)
}

/// Boundaries of consecutive segments tiling `0..team_count`.
///
/// Every segment has length `size` except the last, which holds the
/// remainder (1..=size). `size == 0` or `team_count == 0` yields no
/// segments.
pub fn segment_bounds(team_count: usize, size: usize) -> Vec<Range<usize>> {
    if size == 0 || team_count == 0 {
        return Vec::new();
    }

    let mut bounds = Vec::with_capacity(team_count.div_ceil(size));
    let mut start = 0;
    while start < team_count {
        let end = (start + size).min(team_count);
        bounds.push(start..end);
        start = end;
    }
    bounds
}

/// Chunk view of the ranked team list, one slice per segment.
pub fn segment_teams(teams: &[String], size: usize) -> Vec<&[String]> {
    segment_bounds(teams.len(), size)
        .into_iter()
        .map(|r| &teams[r])
        .collect()
}
