// Physical input polling: per-key button state sampled once per frame

use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// State of one physical button for the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button {
    is_down: bool,
    went_down: bool,
    went_up: bool,
}

impl Button {
    /// Whether the button is currently held
    pub fn is_down(&self) -> bool {
        self.is_down
    }

    /// Whether the button was pressed during this frame
    pub fn went_down(&self) -> bool {
        self.went_down
    }

    /// Whether the button was released during this frame
    pub fn went_up(&self) -> bool {
        self.went_up
    }

    /// Apply a raw state change. Repeated presses or releases are ignored.
    pub fn update(&mut self, down: bool) {
        if down && !self.is_down {
            self.went_down = true;
        } else if !down && self.is_down {
            self.went_up = true;
        }
        self.is_down = down;
    }

    /// Drop this frame's edges, keeping the held state
    pub fn end_frame(&mut self) {
        self.went_down = false;
        self.went_up = false;
    }
}

/// A source of per-frame button state, keyed by physical key
pub trait InputSystem {
    /// Button state for `key`. Keys never seen report an idle button.
    fn button(&self, key: KeyCode) -> Button;
}

/// Keyboard input fed by winit key events
#[derive(Debug, Default)]
pub struct KeyboardInput {
    buttons: HashMap<KeyCode, Button>,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only physical key codes are bindable; OS repeats carry no new edge
        if let PhysicalKey::Code(key_code) = event.physical_key {
            if event.repeat {
                return;
            }
            match event.state {
                ElementState::Pressed => self.press(key_code),
                ElementState::Released => self.release(key_code),
            }
        }
    }

    /// Register a key press
    pub fn press(&mut self, key: KeyCode) {
        self.buttons.entry(key).or_default().update(true);
    }

    /// Register a key release
    pub fn release(&mut self, key: KeyCode) {
        self.buttons.entry(key).or_default().update(false);
    }

    /// Release every held key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        for button in self.buttons.values_mut() {
            button.update(false);
        }
    }

    /// Update key state for a new frame.
    /// Call this once per frame after every controller has sampled input.
    pub fn update(&mut self) {
        self.buttons.retain(|_, button| {
            button.end_frame();
            button.is_down()
        });
    }

    /// Number of keys currently held
    pub fn held_count(&self) -> usize {
        self.buttons.values().filter(|b| b.is_down()).count()
    }
}

impl InputSystem for KeyboardInput {
    fn button(&self, key: KeyCode) -> Button {
        self.buttons.get(&key).copied().unwrap_or_default()
    }
}
