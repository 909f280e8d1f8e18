use glam::{DVec2, DVec3};

use crate::color::Color;

pub const ASPHALT: Color = Color::from_u32(0x333333);
pub const TRACK_DEPTH: f64 = 0.2;

const CURB_RED: Color = Color::from_u32(0xff0000);
const CURB_WHITE: Color = Color::from_u32(0xffffff);
const CURBS_PER_GROUP: usize = 8;
const CURB_SPACING: f64 = 3.0;
const MARKING_HEIGHT: f64 = 0.01;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Segment {
    Line { to: DVec2 },
    Quadratic { control: DVec2, to: DVec2 },
}

/// A closed outline in the track's flat shape space, before it is laid on
/// the ground. Shape (x, y) lands on world (x, 0, -y).
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    pub start: DVec2,
    pub segments: Vec<Segment>,
}

impl Outline {
    // Rounded rectangle centred on the origin: straights end `radius` short
    // of each corner, and each corner is a quadratic curve through it
    fn rounded_rect(half_width: f64, half_height: f64, radius: f64) -> Outline {
        let (w, h, r) = (half_width, half_height, radius);
        let pt = DVec2::new;

        Outline {
            start: pt(-(w - r), -h),
            segments: vec![
                Segment::Line { to: pt(w - r, -h) },
                Segment::Quadratic { control: pt(w, -h), to: pt(w, -(h - r)) },
                Segment::Line { to: pt(w, h - r) },
                Segment::Quadratic { control: pt(w, h), to: pt(w - r, h) },
                Segment::Line { to: pt(-(w - r), h) },
                Segment::Quadratic { control: pt(-w, h), to: pt(-w, h - r) },
                Segment::Line { to: pt(-w, -(h - r)) },
                Segment::Quadratic { control: pt(-w, -h), to: pt(-(w - r), -h) },
            ],
        }
    }

    /// Flattens the outline to a polyline. Curves are split into
    /// `steps_per_curve` chords; the closing point is not repeated.
    pub fn sample(&self, steps_per_curve: usize) -> Vec<DVec2> {
        let steps = steps_per_curve.max(1);
        let mut points = vec![self.start];
        let mut from = self.start;

        for segment in &self.segments {
            match *segment {
                Segment::Line { to } => {
                    points.push(to);
                    from = to;
                }
                Segment::Quadratic { control, to } => {
                    for i in 1..=steps {
                        let t = i as f64 / steps as f64;
                        points.push(quadratic_point(from, control, to, t));
                    }
                    from = to;
                }
            }
        }

        if points.len() > 1 && points.last() == Some(&self.start) {
            points.pop();
        }
        points
    }
}

fn quadratic_point(p0: DVec2, control: DVec2, p1: DVec2, t: f64) -> DVec2 {
    let u = 1.0 - t;
    p0 * (u * u) + control * (2.0 * u * t) + p1 * (t * t)
}

pub fn shape_to_world(point: DVec2) -> DVec3 {
    DVec3::new(point.x, 0.0, -point.y)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Curb {
    pub position: DVec3,
    pub rotation_y: f64,
    pub size: DVec3,
    pub color: Color,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StartLine {
    pub position: DVec3,
    pub width: f64,
    pub length: f64,
}

pub struct Track {
    pub outer: Outline,
    pub inner: Outline,
    pub start_line: StartLine,
    pub curbs: Vec<Curb>,
}

impl Track {
    pub fn new() -> Track {
        Track {
            outer: Outline::rounded_rect(75.0, 30.0, 15.0),
            inner: Outline::rounded_rect(69.0, 24.0, 15.0),
            start_line: StartLine {
                position: DVec3::new(0.0, MARKING_HEIGHT, 0.0),
                width: 2.0,
                length: 0.3,
            },
            curbs: curbs(),
        }
    }

    pub fn surface_color(&self) -> Color {
        ASPHALT
    }
}

impl Default for Track {
    fn default() -> Self {
        Track::new()
    }
}

// red/white runs of boxes fanning out from the two corner anchors
fn curbs() -> Vec<Curb> {
    let anchors = [(60.0, 0.0, 0.0), (-60.0, 0.0, std::f64::consts::PI)];

    anchors
        .iter()
        .flat_map(|&(x, z, rotation): &(f64, f64, f64)| {
            (0..CURBS_PER_GROUP).map(move |i| {
                let along = i as f64 * CURB_SPACING;
                Curb {
                    position: DVec3::new(
                        x + rotation.cos() * along,
                        MARKING_HEIGHT,
                        z + rotation.sin() * along,
                    ),
                    rotation_y: rotation,
                    size: DVec3::new(3.0, 0.1, 1.5),
                    color: if i % 2 == 0 { CURB_RED } else { CURB_WHITE },
                }
            })
        })
        .collect()
}
