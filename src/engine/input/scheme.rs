// Keybinds and the predefined per-player control schemes

use super::logical::LogicalInputs;
use winit::keyboard::KeyCode;

/// Maps one physical key to one or more logical inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybind {
    pub physical_input: KeyCode,
    pub logical_input: LogicalInputs,
}

impl Keybind {
    pub const fn new(physical_input: KeyCode, logical_input: LogicalInputs) -> Self {
        Self {
            physical_input,
            logical_input,
        }
    }
}

/// Full set of keybinds assigned to one player
#[derive(Debug, PartialEq, Eq)]
pub struct ControlScheme {
    pub keybinds: &'static [Keybind],
}

impl ControlScheme {
    pub const fn new(keybinds: &'static [Keybind]) -> Self {
        Self { keybinds }
    }
}

const fn bind(key: KeyCode, logical: LogicalInputs) -> Keybind {
    Keybind::new(key, logical)
}

// Each scheme reuses its throw/deflect keys as up/down for menu navigation.

static KEYBINDS_0: [Keybind; 7] = [
    bind(KeyCode::KeyE, LogicalInputs::SELECT),
    bind(KeyCode::KeyW, LogicalInputs::THROW_PIE),
    bind(KeyCode::KeyS, LogicalInputs::DEFLECT),
    bind(KeyCode::KeyW, LogicalInputs::UP),
    bind(KeyCode::KeyS, LogicalInputs::DOWN),
    bind(KeyCode::KeyA, LogicalInputs::LEFT),
    bind(KeyCode::KeyD, LogicalInputs::RIGHT),
];

static KEYBINDS_1: [Keybind; 7] = [
    bind(KeyCode::KeyO, LogicalInputs::SELECT),
    bind(KeyCode::KeyI, LogicalInputs::THROW_PIE),
    bind(KeyCode::KeyK, LogicalInputs::DEFLECT),
    bind(KeyCode::KeyI, LogicalInputs::UP),
    bind(KeyCode::KeyK, LogicalInputs::DOWN),
    bind(KeyCode::KeyJ, LogicalInputs::LEFT),
    bind(KeyCode::KeyL, LogicalInputs::RIGHT),
];

static KEYBINDS_2: [Keybind; 7] = [
    bind(KeyCode::Enter, LogicalInputs::SELECT),
    bind(KeyCode::ArrowUp, LogicalInputs::THROW_PIE),
    bind(KeyCode::ArrowDown, LogicalInputs::DEFLECT),
    bind(KeyCode::ArrowUp, LogicalInputs::UP),
    bind(KeyCode::ArrowDown, LogicalInputs::DOWN),
    bind(KeyCode::ArrowLeft, LogicalInputs::LEFT),
    bind(KeyCode::ArrowRight, LogicalInputs::RIGHT),
];

static KEYBINDS_3: [Keybind; 7] = [
    bind(KeyCode::NumpadEnter, LogicalInputs::SELECT),
    bind(KeyCode::Numpad8, LogicalInputs::THROW_PIE),
    bind(KeyCode::Numpad5, LogicalInputs::DEFLECT),
    bind(KeyCode::Numpad8, LogicalInputs::UP),
    bind(KeyCode::Numpad5, LogicalInputs::DOWN),
    bind(KeyCode::Numpad4, LogicalInputs::LEFT),
    bind(KeyCode::Numpad6, LogicalInputs::RIGHT),
];

/// Number of predefined control schemes
pub const DEFINED_CONTROL_SCHEME_COUNT: usize = 4;

static DEFAULT_SCHEMES: [ControlScheme; DEFINED_CONTROL_SCHEME_COUNT] = [
    ControlScheme::new(&KEYBINDS_0),
    ControlScheme::new(&KEYBINDS_1),
    ControlScheme::new(&KEYBINDS_2),
    ControlScheme::new(&KEYBINDS_3),
];

/// Get a predefined control scheme. Out of range indices wrap around.
pub fn default_control_scheme(index: usize) -> &'static ControlScheme {
    &DEFAULT_SCHEMES[index % DEFINED_CONTROL_SCHEME_COUNT]
}
