#![allow(dead_code)] // Not every test binary uses every helper.

use keywalk_core::keymap::{self, CoordMap};
use keywalk_core::trace::{KeyTrace, Point};

pub fn qwerty_map() -> CoordMap {
    keymap::build_coord_map("qwerty")
}

/// Points of `text` on QWERTY, lowercased the way the pipeline does it.
pub fn qwerty_points(text: &str) -> Vec<Point> {
    KeyTrace::build(text, &qwerty_map()).points
}

/// A synthetic point at raw coordinates for geometry-only tests.
pub fn pt(x: f32, y: f32) -> Point {
    Point {
        x,
        y,
        key: '?',
        ch: '?',
    }
}
