// Input binding system
//
// Maps physical key presses to logical game actions, one controller per player,
// sampled once per simulation tick.
//
// ## Architecture
//
// - `logical`: The `LogicalInputs` flag set (Select, ThrowPie, Deflect, directions)
// - `scheme`: Keybinds and the predefined per-player control schemes
// - `system`: Per-key button state and the winit-backed keyboard input system
// - `controller`: The `Controller` trait and the three per-frame input masks
// - `player`: Keyboard-driven `PlayerController`
//
// ## Usage Example
//
// ```rust
// use engine::input::{default_control_scheme, Controller, KeyboardInput, LogicalInputs, PlayerController};
//
// let keyboard = Rc::new(RefCell::new(KeyboardInput::new()));
// let mut player = PlayerController::new();
// player.initialize(keyboard.clone(), default_control_scheme(0));
//
// // In your event loop, feed keyboard events
// keyboard.borrow_mut().process_keyboard_event(&key_event);
//
// // Once per tick: sample, then end the input frame
// player.advance_frame(delta_time);
// keyboard.borrow_mut().update();
//
// if player.went_down(LogicalInputs::THROW_PIE) {
//     // Throw!
// }
// ```

pub mod controller;
pub mod logical;
pub mod player;
pub mod scheme;
pub mod system;

// Re-export commonly used types
pub use controller::{Controller, ControllerType, LogicalInputState, WorldTime};
pub use logical::LogicalInputs;
pub use player::{PlayerController, SharedInput};
pub use scheme::{default_control_scheme, ControlScheme, Keybind, DEFINED_CONTROL_SCHEME_COUNT};
pub use system::{Button, InputSystem, KeyboardInput};
