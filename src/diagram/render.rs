//! Rasterization of a `DiagramLayout`

use super::layout::{Circle, DiagramLayout, Line, Point, CANVAS_SIZE};
use image::{Rgb, RgbImage};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Colours and stroke used for one rendering
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub base: Rgb<u8>,
    pub top: Rgb<u8>,
    pub line: Rgb<u8>,
    pub line_width: u32,
}

/// Paint lines first, then base circles, then the top circle
pub fn rasterize(layout: &DiagramLayout, palette: &Palette) -> RgbImage {
    let mut img = RgbImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND);

    for line in &layout.lines {
        draw_line(&mut img, line, palette.line_width, palette.line);
    }
    for circle in &layout.base_circles {
        fill_circle(&mut img, circle, palette.base);
    }
    fill_circle(&mut img, &layout.top_circle, palette.top);

    img
}

fn fill_circle(img: &mut RgbImage, circle: &Circle, color: Rgb<u8>) {
    let r2 = circle.radius * circle.radius;
    paint_box(
        img,
        circle.center,
        circle.center,
        circle.radius,
        |p| {
            let dx = p.x - circle.center.x;
            let dy = p.y - circle.center.y;
            dx * dx + dy * dy <= r2
        },
        color,
    );
}

fn draw_line(img: &mut RgbImage, line: &Line, width: u32, color: Rgb<u8>) {
    let half = (width as f64 / 2.0).max(0.5);
    paint_box(
        img,
        line.from,
        line.to,
        half,
        |p| distance_to_segment(p, line.from, line.to) <= half,
        color,
    );
}

/// Visit every pixel centre in the box spanning `a`..`b` grown by `pad`
fn paint_box(
    img: &mut RgbImage,
    a: Point,
    b: Point,
    pad: f64,
    inside: impl Fn(Point) -> bool,
    color: Rgb<u8>,
) {
    let (w, h) = img.dimensions();
    let clamp = |v: f64, max: u32| v.max(0.0).min(max as f64) as u32;

    let x0 = clamp((a.x.min(b.x) - pad).floor(), w);
    let x1 = clamp((a.x.max(b.x) + pad).ceil(), w);
    let y0 = clamp((a.y.min(b.y) - pad).floor(), h);
    let y1 = clamp((a.y.max(b.y) + pad).ceil(), h);

    for y in y0..y1 {
        for x in x0..x1 {
            let centre = Point {
                x: x as f64 + 0.5,
                y: y as f64 + 0.5,
            };
            if inside(centre) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const GREEN: Rgb<u8> = Rgb([0, 128, 0]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn palette(width: u32) -> Palette {
        Palette {
            base: RED,
            top: GREEN,
            line: BLACK,
            line_width: width,
        }
    }

    fn pixel_at(img: &RgbImage, p: Point) -> Rgb<u8> {
        *img.get_pixel(p.x as u32, p.y as u32)
    }

    #[test]
    fn test_circles_painted_with_their_colors() {
        let layout = DiagramLayout::compute(5);
        let img = rasterize(&layout, &palette(3));

        assert_eq!(pixel_at(&img, layout.top_circle.center), GREEN);
        for circle in &layout.base_circles {
            assert_eq!(pixel_at(&img, circle.center), RED);
        }
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn test_lines_painted_between_circles() {
        let layout = DiagramLayout::compute(5);
        let img = rasterize(&layout, &palette(3));

        for line in &layout.lines {
            // just past the midpoint, outside both circles
            let mid = Point {
                x: line.from.x + (line.to.x - line.from.x) * 0.55,
                y: line.from.y + (line.to.y - line.from.y) * 0.55,
            };
            assert_eq!(pixel_at(&img, mid), BLACK);
        }
    }

    #[test]
    fn test_distance_to_segment() {
        let a = Point { x: 0.0, y: 0.0 };
        let b = Point { x: 10.0, y: 0.0 };
        assert_eq!(distance_to_segment(Point { x: 5.0, y: 3.0 }, a, b), 3.0);
        assert_eq!(distance_to_segment(Point { x: -4.0, y: 3.0 }, a, b), 5.0);
        assert_eq!(distance_to_segment(Point { x: 1.0, y: 0.0 }, a, a), 1.0);
    }
}
