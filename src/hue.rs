//! Rotating hue cursor driving the trunk head color

/// Number of hue steps in a full rotation
pub const HUE_PERIOD: u16 = 360;

/// Hue cursor in degrees, always within `0..HUE_PERIOD`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HueCursor(u16);

impl HueCursor {
    /// Create a cursor at hue 0
    pub const fn new() -> Self {
        Self(0)
    }

    /// Current hue
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Returns the current hue and moves the cursor one step forward
    ///
    /// The cursor wraps to 0 once it reaches [`HUE_PERIOD`].
    pub const fn advance(&mut self) -> u16 {
        let hue = self.0;
        self.0 += 1;
        if self.0 == HUE_PERIOD {
            self.0 = 0;
        }
        hue
    }

    /// Rewind the cursor to hue 0
    pub const fn reset(&mut self) {
        self.0 = 0;
    }
}
