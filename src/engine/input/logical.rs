// Logical game inputs, independent of the physical keys that trigger them

use bitflags::bitflags;

bitflags! {
    /// Set of logical inputs a controller can report in one frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LogicalInputs: u32 {
        const UP        = 0b0000_0001;
        const DOWN      = 0b0000_0010;
        const LEFT      = 0b0000_0100;
        const RIGHT     = 0b0000_1000;
        const THROW_PIE = 0b0001_0000;
        const DEFLECT   = 0b0010_0000;
        const SELECT    = 0b0100_0000;
    }
}

impl LogicalInputs {
    /// Directional input as (horizontal, vertical), each in -1.0..=1.0
    pub fn direction(self) -> (f32, f32) {
        let mut horizontal = 0.0;
        let mut vertical = 0.0;

        if self.contains(Self::LEFT) {
            horizontal -= 1.0;
        }
        if self.contains(Self::RIGHT) {
            horizontal += 1.0;
        }
        if self.contains(Self::DOWN) {
            vertical -= 1.0;
        }
        if self.contains(Self::UP) {
            vertical += 1.0;
        }

        (horizontal, vertical)
    }
}
