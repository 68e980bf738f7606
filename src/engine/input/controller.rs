// Controller abstraction shared by keyboard players and computer players

use super::logical::LogicalInputs;

/// Simulation time, in milliseconds
pub type WorldTime = u32;

/// Where a controller's logical inputs come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerType {
    Player,
    Computer,
    Gamepad,
}

/// Logical input state of one controller for the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalInputState {
    /// Inputs currently held
    is_down: LogicalInputs,

    /// Inputs that became held this frame
    went_down: LogicalInputs,

    /// Inputs that were released this frame
    went_up: LogicalInputs,
}

impl LogicalInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_down_mask(&self) -> LogicalInputs {
        self.is_down
    }

    pub fn went_down_mask(&self) -> LogicalInputs {
        self.went_down
    }

    pub fn went_up_mask(&self) -> LogicalInputs {
        self.went_up
    }

    /// True if any of `bits` is held
    pub fn is_down(&self, bits: LogicalInputs) -> bool {
        self.is_down.intersects(bits)
    }

    /// True if any of `bits` was pressed this frame
    pub fn went_down(&self, bits: LogicalInputs) -> bool {
        self.went_down.intersects(bits)
    }

    /// True if any of `bits` was released this frame
    pub fn went_up(&self, bits: LogicalInputs) -> bool {
        self.went_up.intersects(bits)
    }

    pub fn clear_all_logical_inputs(&mut self) {
        self.is_down = LogicalInputs::empty();
        self.went_down = LogicalInputs::empty();
        self.went_up = LogicalInputs::empty();
    }

    /// Accumulate raw per-key samples into the three masks
    pub(crate) fn accumulate(
        &mut self,
        bits: LogicalInputs,
        is_down: bool,
        went_down: bool,
        went_up: bool,
    ) {
        if is_down {
            self.is_down |= bits;
        }
        if went_down {
            self.went_down |= bits;
        }
        if went_up {
            self.went_up |= bits;
        }
    }

    /// Set or clear `bits` in the held mask, recording the edges that produces.
    /// Used by controllers that decide their inputs directly.
    pub fn set_logical_inputs(&mut self, bits: LogicalInputs, value: bool) {
        if value {
            self.went_down |= bits & !self.is_down;
            self.is_down |= bits;
        } else {
            self.went_up |= bits & self.is_down;
            self.is_down &= !bits;
        }
    }
}

/// Anything that produces logical inputs for a character once per frame
pub trait Controller {
    fn controller_type(&self) -> ControllerType;

    /// Logical input state computed by the last `advance_frame`
    fn state(&self) -> &LogicalInputState;

    /// Recompute the logical input state for this frame
    fn advance_frame(&mut self, delta_time: WorldTime);

    fn is_down(&self, bits: LogicalInputs) -> bool {
        self.state().is_down(bits)
    }

    fn went_down(&self, bits: LogicalInputs) -> bool {
        self.state().went_down(bits)
    }

    fn went_up(&self, bits: LogicalInputs) -> bool {
        self.state().went_up(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_empty() {
        let state = LogicalInputState::new();
        assert!(state.is_down_mask().is_empty());
        assert!(state.went_down_mask().is_empty());
        assert!(state.went_up_mask().is_empty());
    }

    #[test]
    fn test_accumulate_ors_bits() {
        let mut state = LogicalInputState::new();
        state.accumulate(LogicalInputs::THROW_PIE, true, true, false);
        state.accumulate(LogicalInputs::UP, true, false, false);

        assert_eq!(
            state.is_down_mask(),
            LogicalInputs::THROW_PIE | LogicalInputs::UP
        );
        assert_eq!(state.went_down_mask(), LogicalInputs::THROW_PIE);
        assert!(state.went_up_mask().is_empty());
    }

    #[test]
    fn test_queries_match_any_bit() {
        let mut state = LogicalInputState::new();
        state.accumulate(LogicalInputs::LEFT, true, false, false);

        assert!(state.is_down(LogicalInputs::LEFT | LogicalInputs::RIGHT));
        assert!(!state.is_down(LogicalInputs::RIGHT));
        assert!(!state.went_down(LogicalInputs::LEFT));
    }

    #[test]
    fn test_set_logical_inputs_rising_edge() {
        let mut state = LogicalInputState::new();
        state.set_logical_inputs(LogicalInputs::DEFLECT, true);
        assert!(state.is_down(LogicalInputs::DEFLECT));
        assert!(state.went_down(LogicalInputs::DEFLECT));

        state.clear_all_logical_inputs();
        state.set_logical_inputs(LogicalInputs::DEFLECT, true);
        // Clearing drops the held state too, so this is a new press
        assert!(state.went_down(LogicalInputs::DEFLECT));
    }

    #[test]
    fn test_set_logical_inputs_no_edge_when_already_held() {
        let mut state = LogicalInputState::new();
        state.set_logical_inputs(LogicalInputs::UP, true);
        let mut next = LogicalInputState::new();
        next.accumulate(state.is_down_mask(), true, false, false);

        next.set_logical_inputs(LogicalInputs::UP, true);
        assert!(next.is_down(LogicalInputs::UP));
        assert!(!next.went_down(LogicalInputs::UP));
    }

    #[test]
    fn test_set_logical_inputs_falling_edge() {
        let mut state = LogicalInputState::new();
        state.set_logical_inputs(LogicalInputs::SELECT | LogicalInputs::LEFT, true);
        state.set_logical_inputs(LogicalInputs::SELECT, false);

        assert!(!state.is_down(LogicalInputs::SELECT));
        assert!(state.is_down(LogicalInputs::LEFT));
        assert!(state.went_up(LogicalInputs::SELECT));
        assert!(!state.went_up(LogicalInputs::LEFT));
    }

    #[test]
    fn test_release_unheld_has_no_edge() {
        let mut state = LogicalInputState::new();
        state.set_logical_inputs(LogicalInputs::RIGHT, false);
        assert!(!state.went_up(LogicalInputs::RIGHT));
    }
}
