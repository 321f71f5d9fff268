#![no_std]

pub mod color;
pub mod config;
pub mod error;
pub mod frame_scheduler;
pub mod hue;
mod logging;
pub mod strip;
pub mod tree;

pub use color::{Rgb, hsv_to_rgb};
pub use config::{BranchConfig, Brightness, TreeConfig};
pub use error::ConfigError;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use hue::HueCursor;
pub use strip::{STRIP_COUNT, Strip, StripId, shift_toward_tail};
pub use tree::{BranchPair, RainbowTree};
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver
///
/// Implement this trait to support different hardware platforms.
/// The scheduler owns one driver per strip.
pub trait OutputDriver {
    /// Error reported by a failed write
    type Error: core::fmt::Debug;

    /// Write colors to the LED strip with the global brightness
    fn write(&mut self, colors: &[Rgb], brightness: Brightness) -> Result<(), Self::Error>;
}
