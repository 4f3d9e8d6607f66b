//! Geometry of the layered-circle diagram

use serde::Serialize;

/// Canvas width and height in pixels
pub const CANVAS_SIZE: u32 = 800;

const CENTER: Point = Point { x: 400.0, y: 460.0 };
const RING_RADIUS: f64 = 250.0;
const BASE_RADIUS: f64 = 40.0;
const TOP_RADIUS: f64 = 50.0;
const TOP_CENTER: Point = Point { x: 400.0, y: 110.0 };

/// First base circle sits at the top of the ring
const START_ANGLE_DEG: f64 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

/// Every shape of one diagram, in image coordinates (y grows downwards)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramLayout {
    pub base_circles: Vec<Circle>,
    pub top_circle: Circle,
    /// One line per base circle, from the top circle centre to its centre
    pub lines: Vec<Line>,
}

impl DiagramLayout {
    /// Spread `base_circle_count` circles evenly around the ring
    pub fn compute(base_circle_count: usize) -> Self {
        let step = 360.0 / base_circle_count.max(1) as f64;

        let base_circles: Vec<Circle> = (0..base_circle_count)
            .map(|i| {
                let angle = (START_ANGLE_DEG + step * i as f64).to_radians();
                Circle {
                    center: Point {
                        x: CENTER.x + RING_RADIUS * angle.cos(),
                        y: CENTER.y + RING_RADIUS * angle.sin(),
                    },
                    radius: BASE_RADIUS,
                }
            })
            .collect();

        let top_circle = Circle {
            center: TOP_CENTER,
            radius: TOP_RADIUS,
        };

        let lines = base_circles
            .iter()
            .map(|base| Line {
                from: top_circle.center,
                to: base.center,
            })
            .collect();

        Self {
            base_circles,
            top_circle,
            lines,
        }
    }
}
