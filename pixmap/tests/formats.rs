use gfxprim_pixmap::{
    pixel_to_rgba, rgba_to_pixel, BitOrder, PackAction, PixelAccess, PixelFlags, PixelPack,
    PixelType, Pixmap,
};

#[test]
fn put_then_get_returns_masked_value() {
    let values = [0u32, 1, 0x5a5a_5a5a, 0xffff_ffff, 0x8000_0001];

    for &pixel_type in PixelType::ALL {
        let mut pixmap = Pixmap::new(11, 5, pixel_type).unwrap();
        let mask = ((1u64 << pixel_type.bpp()) - 1) as u32;

        for (i, &value) in values.iter().enumerate() {
            let (x, y) = (2 * i as i32 + 1, i as i32);
            pixmap.put_pixel(x, y, value);
            assert_eq!(pixmap.get_pixel(x, y), value & mask, "{}", pixel_type);
            // Neighbours sharing the byte stay untouched.
            assert_eq!(pixmap.get_pixel(x - 1, y), 0, "{}", pixel_type);
            assert_eq!(pixmap.get_pixel(x + 1, y), 0, "{}", pixel_type);
        }
    }
}

#[test]
fn one_bit_up_first_byte() {
    let mut pixmap = Pixmap::new(8, 2, PixelType::G1_UB).unwrap();
    pixmap.put_pixel(0, 1, 1);
    pixmap.put_pixel(1, 1, 0);

    let row = pixmap.as_bytes()[pixmap.bytes_per_row()];
    assert_eq!(row & 0x80, 0x80);
    assert_eq!(row & 0x40, 0);
}

#[test]
fn one_bit_down_first_byte() {
    let mut pixmap = Pixmap::new(8, 1, PixelType::G1_DB).unwrap();
    pixmap.put_pixel(0, 0, 1);
    pixmap.put_pixel(7, 0, 1);
    assert_eq!(pixmap.as_bytes()[0], 0x81);
    pixmap.put_pixel(0, 0, 0);
    assert_eq!(pixmap.as_bytes()[0], 0x80);
}

#[test]
fn format_bridging() {
    assert_eq!(PixelType::rgb_match(0xf800, 0x07e0, 0x001f, 0, 16), PixelType::RGB565);
    assert_eq!(PixelType::rgb_match(0x7c00, 0x03e0, 0x001f, 0, 16), PixelType::RGB555);
    assert_eq!(PixelType::rgb_match(0xf800, 0x07e0, 0x001f, 0, 32), PixelType::Unknown);
    assert_eq!(PixelType::rgb_match(0x001f, 0x07e0, 0xf800, 0, 16), PixelType::Unknown);
    assert_eq!(
        PixelType::rgb_lookup((8, 16), (8, 8), (8, 0), (0, 0), 24),
        PixelType::RGB888
    );
    assert_eq!(
        PixelType::rgb_lookup((8, 16), (8, 8), (8, 0), (0, 0), 32),
        PixelType::xRGB8888
    );
}

#[test]
fn names_and_flags() {
    assert_eq!(PixelType::by_name("g1"), Some(PixelType::G1_UB));
    assert_eq!(PixelType::by_name("rgba8888"), Some(PixelType::RGBA8888));
    assert_eq!(PixelType::by_name("RGB666"), None);

    let desc = PixelType::GA88.desc();
    assert!(desc.has_flags(PixelFlags::GRAYSCALE | PixelFlags::ALPHA));
    assert!(!desc.has_flags(PixelFlags::RGB));
    assert_eq!(desc.channel("A").map(|ch| ch.offset()), Some(8));
}

#[test]
fn storage_classes() {
    assert_eq!(PixelType::G2_DB.pack().bit_order(), Some(BitOrder::DownFirst));
    assert_eq!(PixelType::P4.pack().bit_order(), Some(BitOrder::UpFirst));
    assert_eq!(PixelType::RGB888.pack().bytes(), Some(3));

    for &pixel_type in PixelType::ALL {
        assert_eq!(pixel_type.pack().bpp(), pixel_type.bpp());
    }
}

#[test]
fn generic_code_binds_once() {
    struct CountSet<'a> {
        row: &'a [u8],
        width: u32,
    }

    impl PackAction<usize> for CountSet<'_> {
        fn run<A: PixelAccess>(self, _: A) -> usize {
            (0..self.width).filter(|&x| A::get(self.row, 0, x) != 0).count()
        }
    }

    let mut pixmap = Pixmap::new(12, 1, PixelType::G4_DB).unwrap();
    pixmap.put_pixel(3, 0, 1);
    pixmap.put_pixel(11, 0, 9);

    let count = pixmap.layout().pack().action(CountSet {
        row: pixmap.as_bytes(),
        width: 12,
    });
    assert_eq!(count, 2);
}

#[test]
fn rgba_round_trip_where_lossless() {
    for pixel_type in [PixelType::RGBA8888, PixelType::xRGB8888, PixelType::BGR888] {
        let pixel = rgba_to_pixel(pixel_type, [1, 2, 3, 0xff]).unwrap();
        assert_eq!(pixel_to_rgba(pixel_type, pixel).unwrap(), [1, 2, 3, 0xff]);
    }
}
