//! Startup configuration of the tree
//!
//! Loaded once and never changed while the animation runs.

use embassy_time::Duration;

use crate::error::ConfigError;
use crate::strip::StripId;

/// Number of branch pairs fed from the trunk
pub const BRANCH_COUNT: usize = 3;

/// LEDs per strip in the reference build
pub const DEFAULT_LED_COUNT: usize = 60;

/// Trunk indices feeding branch pairs 1, 2 and 3
pub const DEFAULT_TAPS: [usize; BRANCH_COUNT] = [10, 30, 50];

pub const DEFAULT_BRIGHTNESS: u8 = 1;

/// Delay between frames in the reference build
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(10);

/// APA102 global brightness (5 bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Brightness(u8);

impl Brightness {
    pub const MAX: u8 = 31;

    /// Returns `None` if the value does not fit in 5 bits
    pub const fn new(value: u8) -> Option<Self> {
        if value > Self::MAX {
            return None;
        }
        Some(Self(value))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

/// One branch pair and the trunk position that feeds it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchConfig {
    /// Trunk index read to seed the pair
    pub tap: usize,
    pub left_len: usize,
    pub right_len: usize,
}

/// Configuration for the whole tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    pub trunk_len: usize,
    pub branches: [BranchConfig; BRANCH_COUNT],
    /// Global brightness, 0-31
    pub brightness: u8,
    /// Saturation of the injected trunk color
    pub saturation: u8,
    /// Value of the injected trunk color
    pub value: u8,
    /// Pause between two frames
    pub frame_duration: Duration,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            trunk_len: DEFAULT_LED_COUNT,
            branches: DEFAULT_TAPS.map(|tap| BranchConfig {
                tap,
                left_len: DEFAULT_LED_COUNT,
                right_len: DEFAULT_LED_COUNT,
            }),
            brightness: DEFAULT_BRIGHTNESS,
            saturation: 255,
            value: 255,
            frame_duration: DEFAULT_FRAME_DURATION,
        }
    }
}

impl TreeConfig {
    /// Set every strip to the same length
    #[must_use]
    pub fn with_uniform_length(mut self, len: usize) -> Self {
        self.trunk_len = len;
        for branch in &mut self.branches {
            branch.left_len = len;
            branch.right_len = len;
        }
        self
    }

    /// Set the trunk indices feeding each branch pair
    #[must_use]
    pub fn with_taps(mut self, taps: [usize; BRANCH_COUNT]) -> Self {
        for (branch, tap) in self.branches.iter_mut().zip(taps) {
            branch.tap = tap;
        }
        self
    }

    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub fn with_saturation(mut self, saturation: u8) -> Self {
        self.saturation = saturation;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: u8) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_frame_duration(mut self, duration: Duration) -> Self {
        self.frame_duration = duration;
        self
    }

    /// Configured length of a strip
    pub fn strip_len(&self, id: StripId) -> usize {
        match id {
            StripId::Trunk => self.trunk_len,
            StripId::Branch1Left => self.branches[0].left_len,
            StripId::Branch1Right => self.branches[0].right_len,
            StripId::Branch2Left => self.branches[1].left_len,
            StripId::Branch2Right => self.branches[1].right_len,
            StripId::Branch3Left => self.branches[2].left_len,
            StripId::Branch3Right => self.branches[2].right_len,
        }
    }

    /// Validated global brightness
    pub fn brightness(&self) -> Result<Brightness, ConfigError> {
        Brightness::new(self.brightness).ok_or(ConfigError::BrightnessOutOfRange(self.brightness))
    }

    /// Check the configuration against a buffer capacity
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        for strip in StripId::ALL {
            let len = self.strip_len(strip);
            if len > capacity {
                return Err(ConfigError::StripTooLong {
                    strip,
                    len,
                    capacity,
                });
            }
        }

        for (branch, config) in (1u8..).zip(&self.branches) {
            if config.tap >= self.trunk_len {
                return Err(ConfigError::TapOutOfRange {
                    branch,
                    tap: config.tap,
                    trunk_len: self.trunk_len,
                });
            }
        }

        self.brightness()?;
        Ok(())
    }
}
