use std::collections::HashMap;

/// Errors produced while setting up a sweepstake.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepstakeError {
    /// The input lists cannot produce a valid assignment
    /// (e.g. teams to hand out but nobody to receive them).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// The participant → assigned-teams mapping.
///
/// Keys are distinct participant names in first-seen order, which is also
/// the display order. Duplicate names in the input collapse into a single
/// entry here — the duplicates still act as separate draw slots during
/// assignment, but their teams all land under the one shared key. This
/// mirrors the input as given rather than rejecting it; callers who want
/// duplicates refused should dedupe before construction.
///
/// Each entry's team list is created once, empty, and grown in place as
/// segments are assigned.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignments {
    /// Distinct participant names, first-seen order.
    names: Vec<String>,
    /// Name → index into `names` / `teams`.
    name_to_idx: HashMap<String, usize>,
    /// Assigned teams per name, parallel to `names`. Append order is
    /// draw order: earlier segments before later ones.
    teams: Vec<Vec<String>>,
}

impl Assignments {
    /// Build an empty mapping from the raw participant list.
    ///
    /// Returns the mapping plus a slot table: for each input occurrence
    /// (duplicates included) the index of its key. The slot table is what
    /// the draw pool is built from, so duplicate names keep their extra
    /// chances of being drawn within a segment.
    pub(crate) fn from_participants(participants: &[String]) -> (Self, Vec<usize>) {
        let mut names: Vec<String> = Vec::new();
        let mut name_to_idx: HashMap<String, usize> = HashMap::with_capacity(participants.len());
        let mut slot_keys = Vec::with_capacity(participants.len());

        for name in participants {
            let idx = match name_to_idx.get(name) {
                Some(&idx) => idx,
                None => {
                    let idx = names.len();
                    names.push(name.clone());
                    name_to_idx.insert(name.clone(), idx);
                    idx
                }
            };
            slot_keys.push(idx);
        }

        let teams = vec![Vec::new(); names.len()];
        (Assignments { names, name_to_idx, teams }, slot_keys)
    }

    pub(crate) fn push(&mut self, key_idx: usize, team: String) {
        self.teams[key_idx].push(team);
    }

    /// Number of distinct participant keys.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Teams assigned to `name`, in assignment order. `None` for unknown names.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.name_to_idx.get(name).map(|&idx| self.teams[idx].as_slice())
    }

    /// Iterate `(name, assigned_teams)` in first-seen participant order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.names
            .iter()
            .zip(self.teams.iter())
            .map(|(name, teams)| (name.as_str(), teams.as_slice()))
    }

    /// Total teams assigned across all participants.
    pub fn total_assigned(&self) -> usize {
        self.teams.iter().map(Vec::len).sum()
    }
}
