//! Frame scheduling and output
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::config::{Brightness, TreeConfig};
use crate::error::ConfigError;
use crate::logging::log;
use crate::strip::{STRIP_COUNT, StripId};
use crate::tree::RainbowTree;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Number of strips whose write failed and were skipped this frame.
    pub failed_writes: u8,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Advances the tree and writes every strip to its driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(&TreeConfig::default(), drivers)?;
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<D: OutputDriver, const N: usize> {
    outputs: [D; STRIP_COUNT],
    tree: RainbowTree<N>,
    brightness: Brightness,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<D: OutputDriver, const N: usize> FrameScheduler<D, N> {
    /// Create a new frame scheduler.
    ///
    /// `outputs` are indexed by [`StripId::index`].
    pub fn new(config: &TreeConfig, outputs: [D; STRIP_COUNT]) -> Result<Self, ConfigError> {
        let tree = RainbowTree::new(config)?;
        let brightness = config.brightness()?;

        log!(
            "[FrameScheduler.new] {} strips, brightness {}, frame {}ms",
            STRIP_COUNT,
            brightness.get(),
            config.frame_duration.as_millis()
        );

        Ok(Self {
            outputs,
            tree,
            brightness,
            next_frame: Instant::from_millis(0),
            frame_duration: config.frame_duration,
        })
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Advances the animation
    /// 3. Writes every strip to its driver, skipping failed ones
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Restart the schedule instead of bursting after a long stall
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            log!(
                "[FrameScheduler.tick] {}ms behind, resetting schedule",
                (now - self.next_frame).as_millis()
            );
            self.next_frame = now;
        }

        self.tree.advance();
        let failed_writes = self.write_all();

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            failed_writes,
        }
    }

    /// Restart the animation and the frame schedule from time zero
    ///
    /// The tree goes back to black with hue 0 and the next `tick` is treated
    /// as the first frame.
    pub fn reset(&mut self) {
        self.tree.reset();
        self.next_frame = Instant::from_millis(0);
    }

    /// Write every strip, returning the number of failed writes
    fn write_all(&mut self) -> u8 {
        let mut failed = 0;
        for (strip, output) in self.tree.strips().zip(self.outputs.iter_mut()) {
            if let Err(err) = output.write(strip.colors(), self.brightness) {
                log!(
                    "[FrameScheduler.write_all] skipping {}: {:?}",
                    strip.id(),
                    err
                );
                failed += 1;
            }
        }
        failed
    }

    /// Get a reference to the animation state.
    pub fn tree(&self) -> &RainbowTree<N> {
        &self.tree
    }

    /// Get a mutable reference to the animation state.
    pub fn tree_mut(&mut self) -> &mut RainbowTree<N> {
        &mut self.tree
    }

    /// Driver of a strip
    pub fn output(&self, id: StripId) -> &D {
        &self.outputs[id.index()]
    }

    /// Mutable driver of a strip
    pub fn output_mut(&mut self, id: StripId) -> &mut D {
        &mut self.outputs[id.index()]
    }

    /// Global brightness sent with every write
    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Pause between two frames
    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }
}
