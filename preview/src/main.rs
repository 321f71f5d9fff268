//! Desktop preview app for the rainbow tree
//!
//! Runs the frame scheduler on a synthetic clock and paints each strip as a
//! row of LEDs.

use std::convert::Infallible;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use rainbow_tree::{
    Brightness, ConfigError, FrameScheduler, Instant, OutputDriver, Rgb, STRIP_COUNT, StripId, TreeConfig,
};

/// Buffer capacity of every strip
const MAX_LEDS: usize = 120;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Width reserved for the strip name
const LABEL_WIDTH: f32 = 110.0;

/// Upper bound of frames simulated per repaint, so a large speed-up cannot stall the UI
const MAX_FRAMES_PER_UPDATE: usize = 256;

/// Keeps the last frame written to a strip
#[derive(Debug, Default)]
struct PreviewDriver {
    colors: Vec<Rgb>,
    brightness: u8,
}

impl OutputDriver for PreviewDriver {
    type Error = Infallible;

    fn write(&mut self, colors: &[Rgb], brightness: Brightness) -> Result<(), Self::Error> {
        self.colors.clear();
        self.colors.extend_from_slice(colors);
        self.brightness = brightness.get();
        Ok(())
    }
}

type PreviewScheduler = FrameScheduler<PreviewDriver, MAX_LEDS>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 360.0])
            .with_title("Rainbow Tree Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "rainbow-tree-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()?))),
    )
}

struct PreviewApp {
    scheduler: PreviewScheduler,
    config: TreeConfig,
    /// Last configuration error, shown instead of the strips
    error: Option<String>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Synthetic time at which the next frame is due
    next_frame_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Scale displayed colors by the APA102 brightness
    simulate_brightness: bool,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Result<Self, ConfigError> {
        let config = TreeConfig::default().with_brightness(Brightness::MAX);
        let scheduler = Self::build(&config)?;

        Ok(Self {
            scheduler,
            config,
            error: None,
            t_ms: 0,
            next_frame_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            simulate_brightness: false,
            led_size: LED_SIZE,
        })
    }

    fn build(config: &TreeConfig) -> Result<PreviewScheduler, ConfigError> {
        let drivers: [PreviewDriver; STRIP_COUNT] = std::array::from_fn(|_| PreviewDriver::default());
        FrameScheduler::new(config, drivers)
    }

    /// Rebuild the scheduler from the current configuration
    fn restart(&mut self) {
        match Self::build(&self.config) {
            Ok(scheduler) => {
                self.scheduler = scheduler;
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        self.reset_time();
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.next_frame_ms = 0;
        self.last_frame = StdInstant::now();
        self.scheduler.reset();
    }

    /// Toggle playing state
    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Run every frame that is due at the current synthetic time
    fn run_frames(&mut self) {
        let mut frames = 0;
        while self.next_frame_ms <= self.t_ms && frames < MAX_FRAMES_PER_UPDATE {
            let result = self.scheduler.tick(Instant::from_millis(self.next_frame_ms));
            self.next_frame_ms = result.next_deadline.as_millis();
            frames += 1;
        }
        if self.next_frame_ms <= self.t_ms {
            // Too far behind, drop the backlog
            self.next_frame_ms = self.t_ms;
        }
    }

    fn display_color(&self, pixel: Rgb, brightness: u8) -> egui::Color32 {
        if !self.simulate_brightness {
            return egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
        }
        let scale = |channel: u8| -> u8 {
            #[allow(clippy::cast_possible_truncation)]
            let scaled = (u16::from(channel) * u16::from(brightness) / u16::from(Brightness::MAX)) as u8;
            scaled
        };
        egui::Color32::from_rgb(scale(pixel.r), scale(pixel.g), scale(pixel.b))
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        if self.error.is_none() {
            self.run_frames();
        }

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset_time();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.toggle_playing();
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        let secs = self.t_ms / 1000;
                        let ms = self.t_ms % 1000;
                        ui.label(format!("Time: {secs}.{ms:03}s"));
                        ui.add_space(8.0);
                        ui.label(format!("Hue: {}", self.scheduler.tree().hue()));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <TreeControls>
                ui.vertical(|ui| {
                    let old_config = self.config.clone();

                    ui.horizontal(|ui| {
                        ui.label("Saturation:");
                        ui.add(egui::DragValue::new(&mut self.config.saturation).range(0u8..=255u8));
                        ui.add_space(8.0);
                        ui.label("Value:");
                        ui.add(egui::DragValue::new(&mut self.config.value).range(0u8..=255u8));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Brightness:");
                        ui.add(
                            egui::DragValue::new(&mut self.config.brightness)
                                .range(0u8..=Brightness::MAX),
                        );
                        ui.add_space(8.0);
                        ui.checkbox(&mut self.simulate_brightness, "Simulate brightness");
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("LEDs:");
                        // Every tap must stay inside the trunk
                        let min_leds = self.config.branches.iter().map(|b| b.tap + 1).max().unwrap_or(1);
                        let mut led_count = self.config.trunk_len;
                        ui.add(egui::Slider::new(&mut led_count, min_leds..=MAX_LEDS));
                        if led_count != self.config.trunk_len {
                            self.config = self.config.clone().with_uniform_length(led_count);
                        }
                        ui.add_space(8.0);
                        ui.label("Size:");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });

                    if self.config != old_config {
                        self.restart();
                    }
                });
                // </TreeControls>
            });

            ui.add_space(16.0);

            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, error.as_str());
                return;
            }

            // === Strip Display ===
            let led_pitch = self.led_size + LED_GAP;
            for id in StripId::ALL {
                let output = self.scheduler.output(id);
                ui.horizontal(|ui| {
                    ui.add_sized([LABEL_WIDTH, led_pitch], egui::Label::new(id.as_str()));

                    #[allow(clippy::cast_precision_loss)]
                    let width = output.colors.len() as f32 * led_pitch;
                    let (response, painter) =
                        ui.allocate_painter(egui::vec2(width, led_pitch), egui::Sense::hover());
                    let origin = response.rect.min;

                    #[allow(clippy::cast_precision_loss)]
                    for (i, pixel) in output.colors.iter().enumerate() {
                        let x = origin.x + i as f32 * led_pitch;
                        let rect = egui::Rect::from_min_size(
                            egui::pos2(x, origin.y),
                            egui::vec2(self.led_size, self.led_size),
                        );
                        let color = self.display_color(*pixel, output.brightness);
                        painter.rect_filled(rect, 3.0, color);
                    }
                });
            }
        });
    }
}
