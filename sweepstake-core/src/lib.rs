/// sweepstake-core: segmented random team assignment.
///
/// Takes two ordered lists — participants and teams in ranking order —
/// and raffles the teams off in consecutive segments of
/// `min(participants, teams)`. Within a segment every participant can win
/// at most once, so strong and weak teams spread evenly across the group.
/// No IO, no printing — just the draw. Bring your own lists.
///
/// # Quick start
///
/// ```rust
/// use sweepstake_core::Sweepstake;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let participants = vec!["Alice".to_string(), "Bob".to_string()];
/// let teams = vec![
///     "Brazil".to_string(),
///     "France".to_string(),
///     "Japan".to_string(),
/// ];
///
/// let mut sweepstake = Sweepstake::new(participants, teams).unwrap();
///
/// // Pass a seeded RNG for a reproducible draw, or call
/// // `sweepstake.assign()` for an unseeded one.
/// let mut rng = SmallRng::seed_from_u64(7);
/// sweepstake.assign_all(&mut rng);
///
/// for (name, teams) in sweepstake.assignments().iter() {
///     println!("{name} ({}):", teams.len());
///     for team in teams {
///         println!("  {team}");
///     }
/// }
/// ```

pub mod engine;
pub mod segment;
pub mod types;

// Re-export primary public API at crate root.
pub use engine::Sweepstake;
pub use segment::{segment_bounds, segment_size, segment_teams};
pub use types::{Assignments, SweepstakeError};
