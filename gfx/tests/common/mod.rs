#![allow(dead_code)]
use gfxprim_pixmap::{Coord, PixelType, Pixmap, Size};

/// Draw into a `width` by `height` G8 pixmap and compare against `expected`, row by row.
///
/// The pixmap is a view into a larger one, a border of one pixel all around must stay clear.
pub fn check(
    width: Size,
    height: Size,
    expected: &[u8],
    draw: impl FnOnce(&mut Pixmap<&mut [u8]>),
) {
    assert_eq!(expected.len(), (width * height) as usize, "fixture size");

    let mut canvas = Pixmap::new(width + 2, height + 2, PixelType::G8).unwrap();
    {
        let mut view = canvas.sub_pixmap(1, 1, width, height);
        draw(&mut view);
    }

    let got = render(&canvas.sub_pixmap_ref(1, 1, width, height));
    let expected = rows(width, expected.iter().map(|&v| u32::from(v)));
    assert_eq!(got, expected, "\ngot:\n{}\nexpected:\n{}", got, expected);

    for y in 0..height as Coord + 2 {
        for x in 0..width as Coord + 2 {
            let inside = (1..=width as Coord).contains(&x) && (1..=height as Coord).contains(&y);
            if !inside {
                assert_eq!(canvas.get_pixel(x, y), 0, "wrote outside at {},{}", x, y);
            }
        }
    }
}

/// The pixels of a pixmap in user coordinates, one line per row.
pub fn render<D: AsRef<[u8]>>(pixmap: &Pixmap<D>) -> String {
    let width = pixmap.width();
    let pixels = (0..pixmap.height() as Coord)
        .flat_map(|y| (0..width as Coord).map(move |x| (x, y)))
        .map(|(x, y)| pixmap.get_pixel(x, y));
    rows(width, pixels)
}

/// The set pixels of a pixmap, in user coordinates.
pub fn set_pixels<D: AsRef<[u8]>>(pixmap: &Pixmap<D>) -> Vec<(Coord, Coord)> {
    let mut set = Vec::new();
    for y in 0..pixmap.height() as Coord {
        for x in 0..pixmap.width() as Coord {
            if pixmap.get_pixel(x, y) != 0 {
                set.push((x, y));
            }
        }
    }
    set
}

fn rows(width: Size, pixels: impl Iterator<Item = u32>) -> String {
    let mut out = String::new();
    for (i, pixel) in pixels.enumerate() {
        if i > 0 && i % width as usize == 0 {
            out.push('\n');
        }
        out.push(if pixel != 0 { '1' } else { '0' });
    }
    out
}
