use serde::{Deserialize, Serialize};

use crate::keymap::{self, CoordMap};

/// One plotted key press. `key` is the base key that carries the character,
/// `ch` is the (lowercased) source character it came from; the two differ
/// exactly when the character was reached through the shift table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub key: char,
    pub ch: char,
}

/// A character that could not be placed on the keyboard, with its index in
/// the lowercased input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownChar {
    pub ch: char,
    pub index: usize,
}

/// Geometric trace of one input string: the plottable points in input order
/// plus the characters that stayed off the board. Unknown characters leave
/// no gap in `points`; consecutive mapped characters stay consecutive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyTrace {
    pub points: Vec<Point>,
    pub unknown: Vec<UnknownChar>,
}

impl KeyTrace {
    /// Lowercases `text` (code-point-wise, so one source character may expand
    /// to several) and resolves each resulting character against the map.
    /// Whitespace is always recorded as unknown, never resolved.
    pub fn build(text: &str, map: &CoordMap) -> Self {
        let mut points = Vec::new();
        let mut unknown = Vec::new();

        for (index, ch) in text.chars().flat_map(char::to_lowercase).enumerate() {
            if ch.is_whitespace() {
                unknown.push(UnknownChar { ch, index });
                continue;
            }
            match keymap::resolve_key(ch, map).and_then(|key| map.get(key).map(|s| (key, s))) {
                Some((key, slot)) => points.push(Point {
                    x: slot.x,
                    y: slot.y,
                    key,
                    ch,
                }),
                None => unknown.push(UnknownChar { ch, index }),
            }
        }

        Self { points, unknown }
    }
}
