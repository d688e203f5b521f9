mod tests {
    use myrtio_rgb_ring::color::{Hsv, RGB8};
    use myrtio_rgb_ring::{
        BRIGHT_MAX, Channel, Color, ColorKind, IntensityOutOfRange, MAX_INTENSITY,
    };

    fn rgb(color: Color) -> (u8, u8, u8) {
        (color.red(), color.green(), color.blue())
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Color::new(BRIGHT_MAX, 0, 0), Err(IntensityOutOfRange(BRIGHT_MAX)));
        assert_eq!(Color::new(0, 0, 200), Err(IntensityOutOfRange(200)));
        let color = Color::new(MAX_INTENSITY, 0, 1).unwrap();
        assert_eq!(rgb(color), (15, 0, 1));
    }

    #[test]
    fn test_saturating_clamps() {
        assert_eq!(rgb(Color::saturating(16, 255, 3)), (15, 15, 3));
        assert_eq!(Color::saturating(0, 0, 0), Color::OFF);
        assert!(Color::OFF.is_off());
    }

    #[test]
    fn test_with_channel() {
        let color = Color::OFF.with_channel(Channel::Green, 9).unwrap();
        assert_eq!(color.channel(Channel::Green), 9);
        assert_eq!(
            Color::OFF.with_channel(Channel::Blue, 16),
            Err(IntensityOutOfRange(16))
        );
        assert_eq!(Color::OFF.with_clamped(Channel::Red, 40).red(), MAX_INTENSITY);
    }

    #[test]
    fn test_unicolor() {
        assert_eq!(rgb(Color::unicolor(Channel::Red, 0)), (15, 0, 0));
        assert_eq!(rgb(Color::unicolor(Channel::Red, 15)), (15, 15, 0));
        assert_eq!(rgb(Color::unicolor(Channel::Green, 4)), (0, 15, 4));
        assert_eq!(rgb(Color::unicolor(Channel::Blue, 3)), (3, 0, 15));
        assert_eq!(rgb(Color::unicolor(Channel::Blue, 99)), (15, 0, 15));
    }

    #[test]
    fn test_color_kind_at_level() {
        assert_eq!(rgb(ColorKind::Yellow.at_level(7)), (7, 7, 0));
        assert_eq!(rgb(ColorKind::Turquoise.at_level(2)), (0, 2, 2));
        assert_eq!(rgb(ColorKind::Fuchsia.at_level(15)), (15, 0, 15));
        assert_eq!(rgb(ColorKind::White.at_level(20)), (15, 15, 15));
        assert_eq!(ColorKind::Black.at_level(15), Color::OFF);
        assert_eq!(ColorKind::White.at_level(0), Color::OFF);
    }

    #[test]
    fn test_color_kind_names() {
        for kind in ColorKind::ALL {
            assert_eq!(ColorKind::parse_from_str(kind.as_str()), Some(kind));
            assert_eq!(ColorKind::from_raw(kind as u8), Some(kind));
        }
        assert_eq!(ColorKind::parse_from_str("turquoise"), Some(ColorKind::Turquoise));
        assert_eq!(ColorKind::parse_from_str("orange"), None);
        assert_eq!(ColorKind::from_raw(8), None);
    }

    #[test]
    fn test_rgb8_conversion() {
        let color = Color::from_rgb8(RGB8 { r: 255, g: 128, b: 0 });
        assert_eq!(rgb(color), (15, 8, 0));
        assert_eq!(color.to_rgb8(), RGB8 { r: 255, g: 136, b: 0 });
        assert_eq!(Color::from(RGB8 { r: 15, g: 16, b: 17 }), Color::new(0, 1, 1).unwrap());
        assert_eq!(RGB8::from(Color::OFF), RGB8 { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_hsv_conversion() {
        let red = Color::from_hsv(Hsv { hue: 0, sat: 255, val: 255 });
        assert_eq!(red.red(), MAX_INTENSITY);
        assert_eq!(red.blue(), 0);
        assert_eq!(Color::from_hsv(Hsv { hue: 100, sat: 0, val: 0 }), Color::OFF);
    }
}
