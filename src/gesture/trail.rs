use embedded_graphics::{
    pixelcolor::PixelColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
};

use super::types::GesturePoint;

const SINGLE_POINT_DIAMETER: u32 = 6;

fn to_pixel(point: GesturePoint) -> Point {
    Point::new(point.x.round() as i32, point.y.round() as i32)
}

/// Draws the feedback trail for the captured points.
///
/// Consecutive points are joined by `stroke_width` lines. A lone point is shown
/// as a small ring so a fresh capture is still visible.
pub fn draw_trail<C, D>(
    points: &[GesturePoint],
    color: C,
    stroke_width: u32,
    target: &mut D,
) -> Result<(), D::Error>
where
    C: PixelColor,
    D: DrawTarget<Color = C>,
{
    let style = PrimitiveStyle::with_stroke(color, stroke_width);
    match points {
        [] => Ok(()),
        [only] => {
            let center = to_pixel(*only);
            Circle::with_center(center, SINGLE_POINT_DIAMETER)
                .into_styled(PrimitiveStyle::with_stroke(color, 1))
                .draw(target)
        }
        _ => {
            for pair in points.windows(2) {
                Line::new(to_pixel(pair[0]), to_pixel(pair[1]))
                    .into_styled(style)
                    .draw(target)?;
            }
            Ok(())
        }
    }
}
