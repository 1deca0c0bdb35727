use fnv::FnvHashMap;

use crate::consts;
use crate::layouts::KnownLayout;

/// Canvas position of one key, in px. Coordinates are the top-left corner of
/// the key cell; all geometry below works on deltas, so the anchor choice
/// never matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeySlot {
    pub x: f32,
    pub y: f32,
}

/// Immutable char-to-position table for one layout. Built once per layout
/// and shared read-only across analyses, including parallel batch runs.
#[derive(Debug, Clone)]
pub struct CoordMap {
    pub layout: KnownLayout,
    slots: FnvHashMap<char, KeySlot>,
}

impl CoordMap {
    pub fn get(&self, ch: char) -> Option<KeySlot> {
        self.slots.get(&ch).copied()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.slots.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// US-shifted symbols mapped back to the base key that produces them.
/// Applied only when the symbol itself has no slot in the active layout.
pub const SHIFT_UNMAP: [(char, char); 21] = [
    ('!', '1'),
    ('@', '2'),
    ('#', '3'),
    ('$', '4'),
    ('%', '5'),
    ('^', '6'),
    ('&', '7'),
    ('*', '8'),
    ('(', '9'),
    (')', '0'),
    ('~', '`'),
    ('_', '-'),
    ('+', '='),
    ('{', '['),
    ('}', ']'),
    ('|', '\\'),
    (':', ';'),
    ('"', '\''),
    ('<', ','),
    ('>', '.'),
    ('?', '/'),
];

/// Base key for a shifted symbol, if the symbol is part of the shift table.
pub fn shift_unmap(ch: char) -> Option<char> {
    SHIFT_UNMAP
        .iter()
        .find(|(shifted, _)| *shifted == ch)
        .map(|(_, base)| *base)
}

/// Builds the coordinate table for a layout name. Unknown names resolve to
/// the default layout, so this is total.
pub fn build_coord_map(layout_name: &str) -> CoordMap {
    build_for(KnownLayout::resolve(layout_name))
}

/// Builds the coordinate table for a known layout.
///
/// Rows are placed on a staggered grid: row `r` starts at
/// `PAD_X + ROW_STAGGER[r] * COL_GAP` and key `c` within it sits another
/// `c * COL_GAP` to the right, at `PAD_Y + r * ROW_GAP` down. Layouts without
/// a digit row have their letter block shifted to visual rows 1..=3 and the
/// digits 1..0 filled in at visual row 0.
pub fn build_for(layout: KnownLayout) -> CoordMap {
    let rows = layout.rows();
    let row_base = if rows.len() < 4 { 1 } else { 0 };

    let mut slots = FnvHashMap::default();
    for (i, row) in rows.iter().enumerate() {
        let visual = i + row_base;
        for (col, ch) in row.chars().enumerate() {
            slots.insert(ch, slot_at(visual, col));
        }
    }

    // Synthetic digit row for letter-only layouts. Digits already claimed by
    // the layout itself keep their layout position.
    for (col, digit) in "1234567890".chars().enumerate() {
        slots.entry(digit).or_insert_with(|| slot_at(0, col));
    }

    CoordMap { layout, slots }
}

/// Resolves one already-lowercased character to the key that carries it:
/// direct slot first, then the shift table. Whitespace and anything else
/// without a slot resolves to `None`.
pub fn resolve_key(ch: char, map: &CoordMap) -> Option<char> {
    if map.contains(ch) {
        return Some(ch);
    }
    shift_unmap(ch).filter(|base| map.contains(*base))
}

#[inline]
fn slot_at(visual_row: usize, col: usize) -> KeySlot {
    let stagger = consts::ROW_STAGGER
        .get(visual_row)
        .copied()
        .unwrap_or(0.0);
    KeySlot {
        x: consts::PAD_X + (stagger + col as f32) * consts::COL_GAP,
        y: consts::PAD_Y + visual_row as f32 * consts::ROW_GAP,
    }
}
