mod tests {
    use embassy_time::{Duration, Instant};
    use rainbow_tree::color::{Rgb, hsv_to_rgb};
    use rainbow_tree::{
        Brightness, ConfigError, FrameScheduler, OutputDriver, STRIP_COUNT, StripId, TreeConfig,
    };

    const LEDS: usize = 60;

    /// Records every frame written to it
    #[derive(Debug, Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
        brightness: Vec<u8>,
        fail: bool,
    }

    #[derive(Debug, PartialEq, Eq)]
    struct WriteFailed;

    impl OutputDriver for RecordingDriver {
        type Error = WriteFailed;

        fn write(&mut self, colors: &[Rgb], brightness: Brightness) -> Result<(), Self::Error> {
            if self.fail {
                return Err(WriteFailed);
            }
            self.frames.push(colors.to_vec());
            self.brightness.push(brightness.get());
            Ok(())
        }
    }

    fn drivers() -> [RecordingDriver; STRIP_COUNT] {
        core::array::from_fn(|_| RecordingDriver::default())
    }

    fn scheduler(config: &TreeConfig) -> FrameScheduler<RecordingDriver, LEDS> {
        FrameScheduler::new(config, drivers()).unwrap()
    }

    #[test]
    fn test_tick_writes_every_strip() {
        let mut scheduler = scheduler(&TreeConfig::default().with_brightness(7));
        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.failed_writes, 0);

        for id in StripId::ALL {
            let output = scheduler.output(id);
            assert_eq!(output.frames.len(), 1);
            assert_eq!(output.frames[0].len(), LEDS);
            assert_eq!(output.brightness, [7]);
            assert_eq!(output.frames[0], scheduler.tree().colors(id));
        }
        assert_eq!(
            scheduler.output(StripId::Trunk).frames[0][0],
            hsv_to_rgb(0, 255, 255)
        );
    }

    #[test]
    fn test_emitted_frames_follow_tree() {
        let mut scheduler = scheduler(&TreeConfig::default());
        for frame in 0..12u64 {
            scheduler.tick(Instant::from_millis(frame * 10));
        }
        let trunk = &scheduler.output(StripId::Trunk).frames;
        let branch = &scheduler.output(StripId::Branch1Left).frames;
        assert_eq!(trunk.len(), 12);
        for (trunk_frame, branch_frame) in trunk.iter().zip(branch) {
            assert_eq!(branch_frame[0], trunk_frame[10]);
        }
        assert_eq!(branch[10][0], hsv_to_rgb(0, 255, 255));
    }

    #[test]
    fn test_failed_write_is_skipped() {
        let mut scheduler = scheduler(&TreeConfig::default());
        scheduler.output_mut(StripId::Branch2Left).fail = true;

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.failed_writes, 1);
        assert!(scheduler.output(StripId::Branch2Left).frames.is_empty());
        assert_eq!(scheduler.output(StripId::Branch2Right).frames.len(), 1);
        assert_eq!(scheduler.output(StripId::Branch3Right).frames.len(), 1);

        scheduler.output_mut(StripId::Branch2Left).fail = false;
        let result = scheduler.tick(Instant::from_millis(10));
        assert_eq!(result.failed_writes, 0);
        assert_eq!(scheduler.output(StripId::Branch2Left).frames.len(), 1);
        assert_eq!(scheduler.tree().hue(), 2);
    }

    #[test]
    fn test_frame_pacing() {
        let mut scheduler = scheduler(&TreeConfig::default());
        assert_eq!(scheduler.frame_duration(), Duration::from_millis(10));

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let result = scheduler.tick(Instant::from_millis(14));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(6));

        let result = scheduler.tick(Instant::from_millis(35));
        assert_eq!(result.next_deadline, Instant::from_millis(30));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_drift_resets_schedule() {
        let mut scheduler = scheduler(&TreeConfig::default());
        scheduler.tick(Instant::from_millis(0));

        let result = scheduler.tick(Instant::from_millis(500));
        assert_eq!(result.next_deadline, Instant::from_millis(510));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }

    #[test]
    fn test_reset_restarts_schedule() {
        let mut scheduler = scheduler(&TreeConfig::default());
        for frame in 0..500u64 {
            scheduler.tick(Instant::from_millis(frame * 10));
        }
        assert_eq!(scheduler.tree().hue(), 500 % 360);

        scheduler.reset();
        assert_eq!(scheduler.tree().hue(), 0);
        assert!(
            scheduler
                .tree()
                .strips()
                .all(|strip| strip.colors().iter().all(|c| *c == Rgb::default()))
        );

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
        assert_eq!(
            scheduler.tree().trunk().get(0),
            Some(hsv_to_rgb(0, 255, 255))
        );
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = TreeConfig::default().with_brightness(40);
        let err = FrameScheduler::<RecordingDriver, LEDS>::new(&config, drivers()).err();
        assert_eq!(err, Some(ConfigError::BrightnessOutOfRange(40)));
    }
}
