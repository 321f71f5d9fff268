mod tests {
    use rainbow_tree::color::{BLACK, Rgb};
    use rainbow_tree::{ConfigError, STRIP_COUNT, Strip, StripId, shift_toward_tail};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_shift_toward_tail() {
        let mut values = [1, 2, 3, 4, 5];
        shift_toward_tail(&mut values);
        assert_eq!(values, [1, 1, 2, 3, 4]);

        let mut values = [7, 8];
        shift_toward_tail(&mut values);
        assert_eq!(values, [7, 7]);
    }

    #[test]
    fn test_shift_short_sequences_is_noop() {
        let mut empty: [u8; 0] = [];
        shift_toward_tail(&mut empty);
        assert_eq!(empty, [0u8; 0]);

        let mut single = [RED];
        shift_toward_tail(&mut single);
        assert_eq!(single, [RED]);
    }

    #[test]
    fn test_strip_starts_black() {
        let strip = Strip::<8>::new(StripId::Trunk, 5).unwrap();
        assert_eq!(strip.len(), 5);
        assert_eq!(strip.id(), StripId::Trunk);
        assert!(strip.colors().iter().all(|c| *c == BLACK));
    }

    #[test]
    fn test_strip_too_long() {
        let err = Strip::<4>::new(StripId::Branch2Left, 5).unwrap_err();
        assert_eq!(
            err,
            ConfigError::StripTooLong {
                strip: StripId::Branch2Left,
                len: 5,
                capacity: 4,
            }
        );
    }

    #[test]
    fn test_push_head() {
        let mut strip = Strip::<4>::new(StripId::Trunk, 3).unwrap();
        strip.push_head(RED);
        assert_eq!(strip.colors(), [RED, BLACK, BLACK]);
        strip.push_head(BLUE);
        assert_eq!(strip.colors(), [BLUE, RED, BLACK]);
        strip.push_head(BLUE);
        strip.push_head(BLUE);
        assert_eq!(strip.colors(), [BLUE, BLUE, BLUE]);
        assert_eq!(strip.len(), 3);

        strip.clear();
        assert_eq!(strip.colors(), [BLACK, BLACK, BLACK]);
    }

    #[test]
    fn test_push_head_on_empty_strip() {
        let mut strip = Strip::<4>::new(StripId::Branch3Right, 0).unwrap();
        strip.push_head(RED);
        assert!(strip.is_empty());
        assert_eq!(strip.get(0), None);
    }

    #[test]
    fn test_strip_id_names() {
        assert_eq!(StripId::ALL.len(), STRIP_COUNT);
        for (index, id) in StripId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), index);
            assert_eq!(StripId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(StripId::Branch2Right.as_str(), "branch2_right");
        assert_eq!(StripId::parse_from_str("branch4_left"), None);
    }
}
