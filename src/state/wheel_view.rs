#[cfg(test)]
#[path = "wheel_view_test.rs"]
mod wheel_view_test;

use wheel::engine::{Action, EngineCore};

/// The slice of engine state the DOM chrome renders.
///
/// Rotation and confetti are deliberately absent: they change every frame and
/// only the canvas needs them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WheelView {
    pub entries: Vec<String>,
    pub spinning: bool,
    pub winner: Option<String>,
}

impl WheelView {
    #[must_use]
    pub fn from_core(core: &EngineCore) -> Self {
        Self {
            entries: core.entries().to_vec(),
            spinning: core.spinning(),
            winner: core.winner().map(str::to_owned),
        }
    }

    /// Entries can be added or removed only between spins.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        !self.spinning
    }

    #[must_use]
    pub fn can_spin(&self) -> bool {
        !self.spinning && !self.entries.is_empty()
    }

    /// Banner text for the current winner.
    #[must_use]
    pub fn banner_text(&self) -> Option<String> {
        self.winner.as_ref().map(|w| format!("🏆 Winner: {w}"))
    }
}

/// Whether an add request was accepted, so the draft field can be cleared.
#[must_use]
pub fn entry_added(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::EntryAdded { .. }))
}
