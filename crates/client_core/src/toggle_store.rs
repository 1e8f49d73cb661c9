use std::{collections::BTreeMap, sync::Arc};

use serde::Serialize;
use shared::domain::EntryId;
use tracing::{debug, info};

use crate::haptics::{HapticFeedback, HapticPulse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ToggleState {
    pub liked: bool,
    pub has_voted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded,
    AlreadyVoted,
}

/// Votes are one-way: only [`ToggleStore::reset`] clears them.
pub struct ToggleStore {
    flags: BTreeMap<EntryId, ToggleState>,
    haptics: Arc<dyn HapticFeedback>,
}

impl ToggleStore {
    pub fn new(haptics: Arc<dyn HapticFeedback>) -> Self {
        Self {
            flags: BTreeMap::new(),
            haptics,
        }
    }

    /// Flips the liked flag and returns its new value.
    pub fn like(&mut self, id: EntryId) -> bool {
        let state = self.flags.entry(id).or_default();
        state.liked = !state.liked;
        debug!(entry = %id, liked = state.liked, "toggles: like flipped");
        state.liked
    }

    pub fn vote(&mut self, id: EntryId) -> VoteOutcome {
        let state = self.flags.entry(id).or_default();
        if state.has_voted {
            debug!(entry = %id, "toggles: duplicate vote ignored");
            return VoteOutcome::AlreadyVoted;
        }

        state.has_voted = true;
        self.haptics.pulse(HapticPulse::Vote);
        info!(entry = %id, "toggles: vote recorded");
        VoteOutcome::Recorded
    }

    pub fn state(&self, id: EntryId) -> ToggleState {
        self.flags.get(&id).copied().unwrap_or_default()
    }

    pub fn is_liked(&self, id: EntryId) -> bool {
        self.state(id).liked
    }

    pub fn has_voted(&self, id: EntryId) -> bool {
        self.state(id).has_voted
    }

    pub fn voted_ids(&self) -> Vec<EntryId> {
        self.flags
            .iter()
            .filter(|(_, state)| state.has_voted)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn snapshot(&self) -> BTreeMap<EntryId, ToggleState> {
        self.flags.clone()
    }

    pub fn reset(&mut self) {
        self.flags.clear();
    }
}

#[cfg(test)]
#[path = "tests/toggle_store_tests.rs"]
mod tests;
