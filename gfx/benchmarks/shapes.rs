//! Benchmarks drawing primitives into pixmaps of different storage classes.
use brunch::Bench;

use gfxprim_pixmap::{PixelType, Pixmap, PixmapError};

#[derive(Clone, Copy, Debug)]
enum Shape {
    Lines,
    ThickLines,
    FilledCircles,
    Polygon,
}

struct Draw {
    shape: Shape,
    pixel_type: PixelType,
    sz: u32,
}

impl Draw {
    fn name(&self) -> String {
        format!("shapes({:?}, {}, {})", self.shape, self.pixel_type, self.sz)
    }

    fn prepare(self) -> Result<impl FnMut(), PixmapError> {
        let mut pixmap = Pixmap::new(self.sz, self.sz, self.pixel_type)?;
        let pixel = 1;
        let sz = self.sz as i32;

        let star: Vec<_> = (0..11)
            .map(|i| {
                let angle = i as f32 * core::f32::consts::TAU * 3.0 / 11.0;
                let r = (sz / 2) as f32;
                ((r + r * angle.cos()) as i32, (r + r * angle.sin()) as i32)
            })
            .collect();

        let shape = self.shape;
        Ok(move || match shape {
            Shape::Lines => {
                for i in (0..sz).step_by(4) {
                    gfxprim_gfx::line(&mut pixmap, 0, i, sz - 1, sz - 1 - i, pixel);
                }
            }
            Shape::ThickLines => {
                for i in (0..sz).step_by(16) {
                    gfxprim_gfx::line_th(&mut pixmap, 0, i, sz - 1, sz - 1 - i, 3, pixel);
                }
            }
            Shape::FilledCircles => {
                for r in (1..sz / 2).step_by(8) {
                    gfxprim_gfx::fill_circle(&mut pixmap, sz / 2, sz / 2, r, pixel);
                }
            }
            Shape::Polygon => gfxprim_gfx::fill_polygon(&mut pixmap, &star, pixel),
        })
    }
}

fn main() {
    let mut tests = vec![];
    for shape in [Shape::Lines, Shape::ThickLines, Shape::FilledCircles, Shape::Polygon] {
        for pixel_type in [PixelType::G1_UB, PixelType::G4_DB, PixelType::G8, PixelType::RGB888] {
            tests.push(Draw {
                shape,
                pixel_type,
                sz: 256,
            });
        }
    }

    let mut benches = brunch::Benches::default();
    benches.extend(tests.into_iter().map(|draw| {
        Bench::new(format!("gfx::shapes::main::{}", draw.name()))
            .run(draw.prepare().expect("Failed to setup benchmark"))
    }));
    benches.finish();
}
