/// Sweepstake assigner.
///
/// Owns both input lists and the assignment mapping, and raffles each
/// segment of the ranked team list to participants. Randomness comes in
/// as `&mut impl Rng` so callers choose between a thread RNG and a seeded
/// one; the shape of the computation (segment boundaries, draw counts) is
/// deterministic either way.
use std::ops::Range;

use rand::Rng;

use crate::segment::{segment_bounds, segment_size, segment_teams};
use crate::types::{Assignments, SweepstakeError};

#[derive(Debug)]
pub struct Sweepstake {
    /// Participant occurrences as given, duplicates kept — each is one
    /// draw slot per segment.
    participants: Vec<String>,
    /// Teams in ranking order.
    teams: Vec<String>,
    /// slot index → key index in `assignments`.
    slot_keys: Vec<usize>,
    assignments: Assignments,
}

impl Sweepstake {
    /// Set up a sweepstake with an empty assignment mapping.
    ///
    /// Fails with `InvalidInput` when there are teams to hand out but no
    /// participants to receive them. No participants and no teams is fine
    /// (an empty draw), as is participants with zero teams.
    pub fn new(participants: Vec<String>, teams: Vec<String>) -> Result<Self, SweepstakeError> {
        if participants.is_empty() && !teams.is_empty() {
            return Err(SweepstakeError::InvalidInput(format!(
                "cannot assign {} team(s) to zero participants",
                teams.len()
            )));
        }

        let (assignments, slot_keys) = Assignments::from_participants(&participants);
        Ok(Sweepstake { participants, teams, slot_keys, assignments })
    }

    /// Segment size in effect for this draw: `min(slots, teams)`.
    pub fn segment_size(&self) -> usize {
        segment_size(self.participants.len(), self.teams.len())
    }

    /// The ranked team list split into segments.
    pub fn segments(&self) -> Vec<&[String]> {
        segment_teams(&self.teams, self.segment_size())
    }

    /// Raffle one segment: each team in `range`, in ranking order, goes to
    /// a uniformly drawn slot that has not yet received a team in this
    /// segment.
    ///
    /// The pool starts with every slot and shrinks by one per draw, so a
    /// slot never receives two teams from the same segment and a draw
    /// never faces an empty pool (`range.len() <= segment_size <= slots`).
    /// Ranges from [`segment_bounds`] over this sweepstake's lists always
    /// satisfy that; `assign_all` is the usual entry point.
    ///
    /// # Panics
    ///
    /// Panics if `range` reaches past the team list or holds more teams
    /// than there are draw slots.
    pub fn assign_segment(&mut self, range: Range<usize>, rng: &mut impl Rng) {
        assert!(
            range.end <= self.teams.len(),
            "segment range end {} past team count {}",
            range.end,
            self.teams.len()
        );
        assert!(
            range.len() <= self.slot_keys.len(),
            "segment of {} team(s) exceeds {} draw slot(s)",
            range.len(),
            self.slot_keys.len()
        );

        let mut pool: Vec<usize> = self.slot_keys.clone();
        for team_idx in range {
            let drawn = rng.random_range(0..pool.len());
            let key_idx = pool.remove(drawn);
            self.assignments.push(key_idx, self.teams[team_idx].clone());
        }
    }

    /// Raffle every segment in ranking order. Each segment draws from a
    /// fresh pool, independently of the others.
    pub fn assign_all(&mut self, rng: &mut impl Rng) {
        for range in segment_bounds(self.teams.len(), self.segment_size()) {
            self.assign_segment(range, rng);
        }
    }

    /// Raffle every segment with an unseeded thread RNG.
    pub fn assign(&mut self) {
        self.assign_all(&mut rand::rng());
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }
}
