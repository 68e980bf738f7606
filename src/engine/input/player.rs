// Keyboard-driven player controller

use super::controller::{Controller, ControllerType, LogicalInputState, WorldTime};
use super::scheme::ControlScheme;
use super::system::InputSystem;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;

/// Input source shared between the event pump and every player controller
pub type SharedInput = Rc<RefCell<dyn InputSystem>>;

/// Samples a control scheme's keybinds from an input system once per frame
pub struct PlayerController {
    input_system: Option<SharedInput>,
    scheme: Option<&'static ControlScheme>,
    state: LogicalInputState,
    warned_unbound: bool,
}

impl PlayerController {
    /// Create an unbound player controller.
    /// Call `initialize` before the first `advance_frame`.
    pub fn new() -> Self {
        Self {
            input_system: None,
            scheme: None,
            state: LogicalInputState::new(),
            warned_unbound: false,
        }
    }

    /// Bind to an input system and control scheme, replacing any earlier binding
    pub fn initialize(&mut self, input_system: SharedInput, scheme: &'static ControlScheme) {
        self.input_system = Some(input_system);
        self.scheme = Some(scheme);
    }

    /// The bound control scheme, if any
    pub fn scheme(&self) -> Option<&'static ControlScheme> {
        self.scheme
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for PlayerController {
    fn controller_type(&self) -> ControllerType {
        ControllerType::Player
    }

    fn state(&self) -> &LogicalInputState {
        &self.state
    }

    fn advance_frame(&mut self, _delta_time: WorldTime) {
        self.state.clear_all_logical_inputs();

        let (Some(input_system), Some(scheme)) = (&self.input_system, self.scheme) else {
            if !self.warned_unbound {
                warn!("Player controller advanced before initialize, reporting no input");
                self.warned_unbound = true;
            }
            return;
        };

        let input = input_system.borrow();
        for keybind in scheme.keybinds {
            let button = input.button(keybind.physical_input);
            self.state.accumulate(
                keybind.logical_input,
                button.is_down(),
                button.went_down(),
                button.went_up(),
            );
        }
    }
}
