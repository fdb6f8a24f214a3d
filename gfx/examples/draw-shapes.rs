use gfxprim_gfx as gfx;
use gfxprim_pixmap::{pixel_to_rgba, rgba_to_pixel, PixelType, Pixmap, PixmapError, Symmetry};

const SZ_W: u32 = 640;
const SZ_H: u32 = 480;

/// Draws every primitive once into an RGB pixmap, and writes it as PNG.
///
/// Set `GFXPRIM_SKIP_IO` to only draw.
fn main() -> Result<(), PixmapError> {
    let mut pixmap = Pixmap::new(SZ_W, SZ_H, PixelType::RGB888)?;

    let white = rgba_to_pixel(PixelType::RGB888, [0xff, 0xff, 0xff, 0xff])?;
    let red = rgba_to_pixel(PixelType::RGB888, [0xe0, 0x20, 0x20, 0xff])?;
    let green = rgba_to_pixel(PixelType::RGB888, [0x20, 0xc0, 0x40, 0xff])?;
    let blue = rgba_to_pixel(PixelType::RGB888, [0x30, 0x50, 0xe0, 0xff])?;

    pixmap.fill(white);

    gfx::line(&mut pixmap, 10, 10, 630, 470, red);
    gfx::line_th(&mut pixmap, 10, 470, 630, 10, 4, blue);
    gfx::circle(&mut pixmap, 120, 120, 90, green);
    gfx::fill_circle(&mut pixmap, 120, 120, 40, green);
    gfx::fill_ring(&mut pixmap, 520, 120, 60, 90, blue);
    gfx::ellipse(&mut pixmap, 320, 240, 150, 60, red);
    gfx::fill_ellipse(&mut pixmap, 320, 240, 50, 20, red);
    gfx::rect(&mut pixmap, 40, 300, 200, 450, blue);
    gfx::fill_rect(&mut pixmap, 60, 320, 180, 430, green);
    gfx::fill_triangle(&mut pixmap, 440, 300, 620, 460, 400, 460, red);
    gfx::polygon(&mut pixmap, &[(250, 330), (390, 320), (360, 460), (280, 400)], blue);

    // Coordinates from here on are in the rotated view.
    pixmap.rotate(Symmetry::Rotate180);
    gfx::fill_polygon(&mut pixmap, &[(250, 330), (390, 320), (360, 460), (280, 400)], green);

    if std::env::var_os("GFXPRIM_SKIP_IO").is_none() {
        let mut container = Vec::with_capacity((SZ_W * SZ_H * 3) as usize);
        for y in 0..SZ_H {
            for x in 0..SZ_W {
                let rgba = pixel_to_rgba(PixelType::RGB888, pixmap.get_pixel_raw(x, y))?;
                container.extend_from_slice(&rgba[..3]);
            }
        }

        let image = image::ImageBuffer::<image::Rgb<u8>, _>::from_raw(SZ_W, SZ_H, container).unwrap();

        let output = concat!(env!("CARGO_MANIFEST_DIR"), "/../shapes.png");
        image.save(output).unwrap();
    }

    Ok(())
}
