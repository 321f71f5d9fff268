use thiserror::Error;

use crate::strip::StripId;

/// Rejected tree configuration
///
/// Configuration is validated once at startup; none of these are recoverable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tap {tap} of branch {branch} is outside the trunk ({trunk_len} LEDs)")]
    TapOutOfRange {
        /// Branch pair number, starting at 1
        branch: u8,
        tap: usize,
        trunk_len: usize,
    },
    #[error("strip {strip} needs {len} LEDs but the buffer holds {capacity}")]
    StripTooLong {
        strip: StripId,
        len: usize,
        capacity: usize,
    },
    #[error("brightness {0} exceeds the APA102 maximum of 31")]
    BrightnessOutOfRange(u8),
}
