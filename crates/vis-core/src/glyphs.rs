//! Authored letterform rasters for the glyph-raster sampler.
//!
//! Each glyph is a hand-drawn 5x7 pixel cell; the sampler turns lit cells
//! into unit-square offsets and places them at per-letter slot positions
//! along a baseline. These are configuration data, not computed geometry.

use fnv::FnvHashMap;
use glam::Vec2;

pub const GLYPH_COLS: usize = 5;
pub const GLYPH_ROWS: usize = 7;

const GLYPH_A: [&str; GLYPH_ROWS] = [
    "..#..", //
    ".#.#.", //
    "#...#", //
    "#...#", //
    "#####", //
    "#...#", //
    "#...#",
];

const GLYPH_E: [&str; GLYPH_ROWS] = [
    "#####", //
    "#....", //
    "#....", //
    "####.", //
    "#....", //
    "#....", //
    "#####",
];

const GLYPH_N: [&str; GLYPH_ROWS] = [
    "#...#", //
    "##..#", //
    "##..#", //
    "#.#.#", //
    "#..##", //
    "#..##", //
    "#...#",
];

const GLYPH_O: [&str; GLYPH_ROWS] = [
    ".###.", //
    "#...#", //
    "#...#", //
    "#...#", //
    "#...#", //
    "#...#", //
    ".###.",
];

const GLYPH_R: [&str; GLYPH_ROWS] = [
    "####.", //
    "#...#", //
    "#...#", //
    "####.", //
    "#.#..", //
    "#..#.", //
    "#...#",
];

const GLYPH_V: [&str; GLYPH_ROWS] = [
    "#...#", //
    "#...#", //
    "#...#", //
    "#...#", //
    "#...#", //
    ".#.#.", //
    "..#..",
];

const GLYPH_0: [&str; GLYPH_ROWS] = [
    ".###.", //
    "#...#", //
    "#..##", //
    "#.#.#", //
    "##..#", //
    "#...#", //
    ".###.",
];

const GLYPH_1: [&str; GLYPH_ROWS] = [
    "..#..", //
    ".##..", //
    "..#..", //
    "..#..", //
    "..#..", //
    "..#..", //
    ".###.",
];

/// Lookup table from character to lit-cell offsets, built once per mount.
///
/// Offsets are in cell units with the origin at the glyph's bottom-left and
/// y growing upward; the sampler applies per-letter translation and scaling.
pub struct GlyphSet {
    cells: FnvHashMap<char, Vec<Vec2>>,
}

impl GlyphSet {
    pub fn standard() -> Self {
        let mut cells = FnvHashMap::default();
        for (ch, rows) in [
            ('A', &GLYPH_A),
            ('E', &GLYPH_E),
            ('N', &GLYPH_N),
            ('O', &GLYPH_O),
            ('R', &GLYPH_R),
            ('V', &GLYPH_V),
            ('0', &GLYPH_0),
            ('1', &GLYPH_1),
        ] {
            cells.insert(ch, raster_offsets(rows));
        }
        Self { cells }
    }

    pub fn offsets(&self, c: char) -> Option<&[Vec2]> {
        self.cells.get(&c.to_ascii_uppercase()).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn raster_offsets(rows: &[&str; GLYPH_ROWS]) -> Vec<Vec2> {
    let mut out = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        debug_assert_eq!(line.len(), GLYPH_COLS, "glyph row has wrong width");
        for (col, cell) in line.bytes().enumerate() {
            if cell == b'#' {
                // First authored row is the glyph's top.
                let y = (GLYPH_ROWS - 1 - row) as f32;
                out.push(Vec2::new(col as f32, y));
            }
        }
    }
    out
}
