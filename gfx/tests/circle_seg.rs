mod common;

use common::{check, render};
use gfxprim_gfx::{self as gfx, CircleSegments};
use gfxprim_pixmap::{PixelType, Pixmap};

#[test]
fn circle_seg_empty() {
    #[rustfmt::skip]
    let expected = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    check(11, 11, &expected, |pixmap| {
        gfx::circle_seg(pixmap, 5, 5, 0, CircleSegments::empty(), 1)
    });
}

#[test]
fn circle_seg_r_0_upper_right() {
    #[rustfmt::skip]
    let expected = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    check(11, 11, &expected, |pixmap| {
        gfx::circle_seg(pixmap, 5, 5, 0, CircleSegments::UPPER_RIGHT, 1)
    });
}

#[test]
fn circle_seg_r_1_upper_right() {
    #[rustfmt::skip]
    let expected = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    check(11, 11, &expected, |pixmap| {
        gfx::circle_seg(pixmap, 5, 5, 1, CircleSegments::UPPER_RIGHT, 1)
    });
}

#[test]
fn circle_seg_r_1_upper_left() {
    #[rustfmt::skip]
    let expected = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    check(11, 11, &expected, |pixmap| {
        gfx::circle_seg(pixmap, 5, 5, 1, CircleSegments::UPPER_LEFT, 1)
    });
}

#[test]
fn circle_seg_r_1_lower_left() {
    #[rustfmt::skip]
    let expected = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    check(11, 11, &expected, |pixmap| {
        gfx::circle_seg(pixmap, 5, 5, 1, CircleSegments::LOWER_LEFT, 1)
    });
}

#[test]
fn circle_seg_r_1_lower_right() {
    #[rustfmt::skip]
    let expected = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    check(11, 11, &expected, |pixmap| {
        gfx::circle_seg(pixmap, 5, 5, 1, CircleSegments::LOWER_RIGHT, 1)
    });
}

#[test]
fn circle_seg_r_2_upper_half() {
    #[rustfmt::skip]
    let expected = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0,
        0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0,
        0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    check(11, 11, &expected, |pixmap| {
        gfx::circle_seg(pixmap, 5, 5, 2, CircleSegments::UPPER_RIGHT | CircleSegments::UPPER_LEFT, 1)
    });
}

#[test]
fn circle_seg_r_2_upper_right_lower_left() {
    #[rustfmt::skip]
    let expected = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
        0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0,
        0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    check(11, 11, &expected, |pixmap| {
        gfx::circle_seg(pixmap, 5, 5, 2, CircleSegments::UPPER_RIGHT | CircleSegments::LOWER_LEFT, 1)
    });
}

#[test]
fn circle_seg_r_2_right_half() {
    #[rustfmt::skip]
    let expected = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
        0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    check(11, 11, &expected, |pixmap| {
        gfx::circle_seg(pixmap, 5, 5, 2, CircleSegments::UPPER_RIGHT | CircleSegments::LOWER_RIGHT, 1)
    });
}

#[test]
fn circle_seg_negative_r_2_upper_right_lower_left() {
    #[rustfmt::skip]
    let expected = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
        0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0,
        0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    check(11, 11, &expected, |pixmap| {
        gfx::circle_seg(pixmap, 5, 5, -2, CircleSegments::UPPER_RIGHT | CircleSegments::LOWER_LEFT, 1)
    });
}


fn drawn(draw: impl FnOnce(&mut Pixmap)) -> String {
    let mut pixmap = Pixmap::new(31, 31, PixelType::G8).unwrap();
    draw(&mut pixmap);
    render(&pixmap)
}

#[test]
fn all_segments_are_the_whole_circle() {
    for r in 0..14 {
        let all = CircleSegments::all();
        assert_eq!(
            drawn(|pixmap| gfx::circle_seg(pixmap, 15, 15, r, all, 1)),
            drawn(|pixmap| gfx::circle(pixmap, 15, 15, r, 1)),
            "r = {}",
            r
        );
        assert_eq!(
            drawn(|pixmap| gfx::fill_circle_seg(pixmap, 15, 15, r, all, 1)),
            drawn(|pixmap| gfx::fill_circle(pixmap, 15, 15, r, 1)),
            "r = {}",
            r
        );
    }
}

#[test]
fn segments_add_up() {
    let halves = [
        CircleSegments::UPPER_RIGHT | CircleSegments::LOWER_LEFT,
        CircleSegments::UPPER_LEFT | CircleSegments::LOWER_RIGHT,
    ];

    let pieces = drawn(|pixmap| {
        for segments in halves {
            gfx::fill_ring_seg(pixmap, 15, 15, 4, 11, segments, 1);
        }
    });
    let whole = drawn(|pixmap| gfx::fill_ring(pixmap, 15, 15, 11, 4, 1));
    assert_eq!(pieces, whole);
}

#[test]
fn ring_segments_are_two_circles() {
    let segments = CircleSegments::UPPER_LEFT | CircleSegments::LOWER_LEFT;
    let ring = drawn(|pixmap| gfx::ring_seg(pixmap, 15, 15, 3, 9, segments, 1));
    let circles = drawn(|pixmap| {
        gfx::circle_seg(pixmap, 15, 15, 3, segments, 1);
        gfx::circle_seg(pixmap, 15, 15, 9, segments, 1);
    });
    assert_eq!(ring, circles);
}

#[test]
fn filled_segment_stays_in_its_quadrant() {
    let mut pixmap = Pixmap::new(31, 31, PixelType::G8).unwrap();
    gfx::fill_ring_seg(&mut pixmap, 15, 15, 5, 12, CircleSegments::LOWER_RIGHT, 1);

    let set = common::set_pixels(&pixmap);
    assert!(!set.is_empty());
    assert!(set.iter().all(|&(x, y)| x >= 15 && y >= 15));
    assert_eq!(pixmap.get_pixel(27, 15), 1);
    assert_eq!(pixmap.get_pixel(15, 27), 1);
    assert_eq!(pixmap.get_pixel(17, 17), 0);
}

#[test]
fn arc_halves_make_the_ellipse() {
    let pi = core::f64::consts::PI;
    for (a, b) in [(1, 1), (6, 3), (4, 11), (13, 13)] {
        let arcs = drawn(|pixmap| {
            gfx::arc_segment(pixmap, 15, 15, a, b, gfx::ArcHalf::Upper, pi, 0.0, 1);
            gfx::arc_segment(pixmap, 15, 15, a, b, gfx::ArcHalf::Lower, 0.0, pi, 1);
        });
        let ellipse = drawn(|pixmap| gfx::ellipse(pixmap, 15, 15, a, b, 1));
        assert_eq!(arcs, ellipse, "{}x{}", a, b);
    }
}
