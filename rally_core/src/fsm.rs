//! Match phase state machine.
//!
//! Table-driven transitions; invalid actions are rejected without mutating
//! the phase. User intents and simulation-driven actions (scoring, the serve
//! timer elapsing) go through the same table.

use log::debug;

/// Match phases; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Rules,
    DifficultySelect,
    Playing,
    BetweenPoints,
    Won,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    // User intents
    ShowRules,
    Back,
    OpenDifficultySelect,
    StartMatch,
    Rematch,
    ReturnToMenu,
    // Simulation-driven
    PointScored,
    MatchWon,
    ServeReady,
}

/// Result of a phase transition attempt
#[derive(Debug, Clone, Copy)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
    pub action: MatchAction,
}

/// Match phase machine
#[derive(Debug)]
pub struct MatchFsm {
    phase: Phase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            phase: Phase::Start,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check whether an action is valid in the current phase
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from = self.phase;

        if let Some(to) = self.next_phase(action) {
            self.phase = to;
            debug!("phase {from:?} -> {to:?} ({action:?})");
            TransitionResult {
                success: true,
                from,
                to,
                action,
            }
        } else {
            debug!("rejected {action:?} in {from:?}");
            TransitionResult {
                success: false,
                from,
                to: from,
                action,
            }
        }
    }

    /// Next phase for an action in the current phase, if any
    fn next_phase(&self, action: MatchAction) -> Option<Phase> {
        match (self.phase, action) {
            // Menu navigation
            (Phase::Start, MatchAction::ShowRules) => Some(Phase::Rules),
            (Phase::Rules, MatchAction::Back) => Some(Phase::Start),
            (Phase::Start, MatchAction::OpenDifficultySelect) => Some(Phase::DifficultySelect),
            (Phase::DifficultySelect, MatchAction::Back) => Some(Phase::Start),

            // Into and out of a match
            (Phase::DifficultySelect, MatchAction::StartMatch) => Some(Phase::Playing),
            (Phase::Playing, MatchAction::PointScored) => Some(Phase::BetweenPoints),
            (Phase::Playing, MatchAction::MatchWon) => Some(Phase::Won),
            (Phase::BetweenPoints, MatchAction::ServeReady) => Some(Phase::Playing),

            // Abandoning a match is always allowed mid-game
            (Phase::Playing, MatchAction::ReturnToMenu) => Some(Phase::Start),
            (Phase::BetweenPoints, MatchAction::ReturnToMenu) => Some(Phase::Start),

            // After the match
            (Phase::Won, MatchAction::Rematch) => Some(Phase::DifficultySelect),
            (Phase::Won, MatchAction::ReturnToMenu) => Some(Phase::Start),

            _ => None,
        }
    }

    /// Whether simulation steps should run this frame
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Whether a match is in progress (playing or paused between points)
    pub fn in_match(&self) -> bool {
        matches!(self.phase, Phase::Playing | Phase::BetweenPoints)
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
