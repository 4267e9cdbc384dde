//! Procedural target point-cloud generation.
//!
//! A [`ShapeDescriptor`] identifies one of five generators and carries its
//! numeric parameters. Sampling is pure apart from the jitter RNG: for a
//! fixed descriptor with [`Jitter::Disabled`] (or the same [`Jitter::Seeded`]
//! seed), two calls yield identical ordered point sequences. Particles are
//! assigned to points by index, so that stability is what keeps
//! particle-to-target assignment reproducible across re-renders.

use glam::{Vec2, Vec3};
use rand::prelude::*;

use crate::error::ConfigError;
use crate::glyphs::GlyphSet;

/// Seed used by inherently random generators (scatter, overlays) when jitter
/// is disabled, so every variant stays constructible and deterministic.
const FALLBACK_SEED: u64 = 0x5EED_CAFE;

/// Jitter/randomness policy for sampling.
///
/// `Disabled` emits only the deterministic lattice parts of a shape: no
/// positional jitter, no random overlay or supplemental scatter. Generators
/// that are random by nature (the scatter layout) fall back to a fixed seed
/// instead of emitting nothing. `Entropy` draws a fresh seed per call, which
/// is the mount-time default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jitter {
    Disabled,
    Seeded(u64),
    Entropy,
}

impl Jitter {
    fn rng(self) -> Option<StdRng> {
        match self {
            Jitter::Disabled => None,
            Jitter::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
            Jitter::Entropy => Some(StdRng::from_entropy()),
        }
    }

    fn rng_or_fallback(self) -> StdRng {
        self.rng()
            .unwrap_or_else(|| StdRng::seed_from_u64(FALLBACK_SEED))
    }
}

/// Per-point oscillation parameters emitted by the wave-field generator and
/// consumed later by the integrator. Zeroed for every other shape.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveMotion {
    pub amplitude: f32,
    pub speed: f32,
}

/// One sampled target point cloud. `waves` is parallel to `points` for the
/// wave field and empty otherwise.
#[derive(Clone, Debug, Default)]
pub struct SampleOutput {
    pub points: Vec<Vec3>,
    pub waves: Vec<WaveMotion>,
}

#[derive(Clone, Copy, Debug)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Ellipse {
    pub center: Vec2,
    pub radii: Vec2,
}

impl Ellipse {
    pub fn contains(&self, p: Vec2) -> bool {
        let d = (p - self.center) / self.radii;
        d.length_squared() <= 1.0
    }
}

/// Coin emblem: an annulus plus letterform strokes, all *excluded* from the
/// emitted set. The visual is formed by the absence of particles.
#[derive(Clone, Debug)]
pub struct RingGlyphParams {
    /// Half-size of the square candidate field.
    pub extent: f32,
    pub grid_step: f32,
    /// Uniform-random candidates layered over the grid to break up visible
    /// grid lines; classified by the same mask.
    pub overlay_points: usize,
    pub r_inner: f32,
    pub r_outer: f32,
    /// Axis-aligned strokes of the center glyph.
    pub rects: Vec<Rect>,
    /// Curved strokes of the center glyph.
    pub ellipses: [Ellipse; 2],
    pub jitter_amount: f32,
}

impl RingGlyphParams {
    /// True when `p` falls inside the composite exclusion mask.
    pub fn excludes(&self, p: Vec2) -> bool {
        let r = p.length();
        if r >= self.r_inner && r <= self.r_outer {
            return true;
        }
        self.rects.iter().any(|rect| rect.contains(p))
            || self.ellipses.iter().any(|e| e.contains(p))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CubeLatticeParams {
    pub half_size: f32,
    /// Segments per edge; each edge emits `edge_resolution + 1` points.
    pub edge_resolution: usize,
}

#[derive(Clone, Debug)]
pub struct GlyphRasterParams {
    pub text: String,
    /// World size of one glyph pixel.
    pub cell: f32,
    /// Gap between letter slots, in cells.
    pub letter_spacing: f32,
    pub baseline_y: f32,
    pub jitter_amount: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct WaveFieldParams {
    pub rows: usize,
    pub cols: usize,
    /// Half-extents of the field rectangle.
    pub extent: Vec2,
    pub jitter_amount: f32,
    /// Row oscillation amplitude, lerped bottom row to top row.
    pub amp_range: (f32, f32),
    /// Row oscillation speed (rad/s), lerped bottom row to top row.
    pub speed_range: (f32, f32),
    /// Supplemental random points inside the rectangle.
    pub scatter_points: usize,
    /// Supplemental points in a band just outside the rectangle, for
    /// full-bleed coverage.
    pub edge_points: usize,
    pub edge_band: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct ScatterParams {
    /// Half-extents of the layout rectangle.
    pub extent: Vec2,
    /// Depth spread on z.
    pub depth: f32,
    pub interior_points: usize,
    /// Points concentrated in a band along the rectangle edges.
    pub edge_points: usize,
    pub edge_band: f32,
}

/// Tagged shape descriptor, dispatched once at sampling time so the per-frame
/// integration path stays free of shape-specific branching.
#[derive(Clone, Debug)]
pub enum ShapeDescriptor {
    RingGlyph(RingGlyphParams),
    CubeLattice(CubeLatticeParams),
    GlyphRaster(GlyphRasterParams),
    WaveField(WaveFieldParams),
    Scatter(ScatterParams),
}

impl ShapeDescriptor {
    pub fn sample(&self, jitter: Jitter) -> Result<SampleOutput, ConfigError> {
        match self {
            ShapeDescriptor::RingGlyph(p) => sample_ring_glyph(p, jitter),
            ShapeDescriptor::CubeLattice(p) => sample_cube_lattice(p),
            ShapeDescriptor::GlyphRaster(p) => sample_glyph_raster(p, jitter),
            ShapeDescriptor::WaveField(p) => sample_wave_field(p, jitter),
            ShapeDescriptor::Scatter(p) => sample_scatter(p, jitter),
        }
    }
}

fn sample_ring_glyph(p: &RingGlyphParams, jitter: Jitter) -> Result<SampleOutput, ConfigError> {
    if p.grid_step <= 0.0 || p.extent <= 0.0 {
        return Err(ConfigError::InvalidDescriptor(
            "ring glyph needs a positive extent and grid step",
        ));
    }
    if p.r_inner >= p.r_outer {
        return Err(ConfigError::InvalidDescriptor(
            "ring glyph needs r_inner < r_outer",
        ));
    }

    let mut rng = jitter.rng();
    let mut out = SampleOutput::default();
    let steps = (2.0 * p.extent / p.grid_step).round() as i32;
    for iy in 0..=steps {
        let y = -p.extent + iy as f32 * p.grid_step;
        for ix in 0..=steps {
            let x = -p.extent + ix as f32 * p.grid_step;
            if p.excludes(Vec2::new(x, y)) {
                continue;
            }
            out.points.push(displace(Vec3::new(x, y, 0.0), p.jitter_amount, rng.as_mut()));
        }
    }

    // Random overlay goes through the same inside/outside test as the grid.
    if let Some(rng) = rng.as_mut() {
        for _ in 0..p.overlay_points {
            let v = Vec2::new(
                rng.gen_range(-p.extent..=p.extent),
                rng.gen_range(-p.extent..=p.extent),
            );
            if p.excludes(v) {
                continue;
            }
            let z = rng.gen_range(-p.jitter_amount..=p.jitter_amount);
            out.points.push(Vec3::new(v.x, v.y, z));
        }
    }
    Ok(out)
}

fn sample_cube_lattice(p: &CubeLatticeParams) -> Result<SampleOutput, ConfigError> {
    if p.half_size <= 0.0 || p.edge_resolution == 0 {
        return Err(ConfigError::InvalidDescriptor(
            "cube lattice needs a positive size and edge resolution",
        ));
    }
    let h = p.half_size;
    let res = p.edge_resolution;
    let mut out = SampleOutput::default();

    // 12 edges: for each axis, the four edges running along it.
    for axis in 0..3 {
        for &s1 in &[-1.0f32, 1.0] {
            for &s2 in &[-1.0f32, 1.0] {
                for i in 0..=res {
                    let t = -h + 2.0 * h * i as f32 / res as f32;
                    out.points.push(axis_point(axis, t, s1 * h, s2 * h));
                }
            }
        }
    }

    // Sparse interior face grids, every other grid line skipped.
    for axis in 0..3 {
        for &side in &[-1.0f32, 1.0] {
            for iu in 1..res {
                if iu % 2 == 1 {
                    continue;
                }
                for iv in 1..res {
                    if iv % 2 == 1 {
                        continue;
                    }
                    let u = -h + 2.0 * h * iu as f32 / res as f32;
                    let v = -h + 2.0 * h * iv as f32 / res as f32;
                    out.points.push(axis_point(axis, side * h, u, v));
                }
            }
        }
    }
    Ok(out)
}

// Build a point whose `axis` component is `along` and whose remaining two
// components (in axis order) are `a` and `b`.
fn axis_point(axis: usize, along: f32, a: f32, b: f32) -> Vec3 {
    match axis {
        0 => Vec3::new(along, a, b),
        1 => Vec3::new(a, along, b),
        _ => Vec3::new(a, b, along),
    }
}

fn sample_glyph_raster(p: &GlyphRasterParams, jitter: Jitter) -> Result<SampleOutput, ConfigError> {
    if p.text.trim().is_empty() {
        return Err(ConfigError::InvalidDescriptor("glyph raster text is empty"));
    }
    if p.cell <= 0.0 {
        return Err(ConfigError::InvalidDescriptor(
            "glyph raster needs a positive cell size",
        ));
    }
    let glyphs = GlyphSet::standard();
    let mut rng = jitter.rng();

    let slots = p.text.chars().count();
    let advance = (crate::glyphs::GLYPH_COLS as f32 + p.letter_spacing) * p.cell;
    let total_width = slots as f32 * advance - p.letter_spacing * p.cell;
    let x0 = -total_width * 0.5;

    let mut out = SampleOutput::default();
    for (slot, ch) in p.text.chars().enumerate() {
        if ch == ' ' {
            continue;
        }
        let offsets = glyphs.offsets(ch).ok_or(ConfigError::UnknownGlyph(ch))?;
        let slot_x = x0 + slot as f32 * advance;
        for off in offsets {
            let base = Vec3::new(
                slot_x + off.x * p.cell,
                p.baseline_y + off.y * p.cell,
                0.0,
            );
            out.points.push(displace(base, p.jitter_amount, rng.as_mut()));
        }
    }
    Ok(out)
}

fn sample_wave_field(p: &WaveFieldParams, jitter: Jitter) -> Result<SampleOutput, ConfigError> {
    if p.rows == 0 || p.cols == 0 {
        return Err(ConfigError::InvalidDescriptor(
            "wave field needs at least one row and column",
        ));
    }
    let mut rng = jitter.rng();
    let mut out = SampleOutput::default();

    for row in 0..p.rows {
        let row_frac = if p.rows > 1 {
            row as f32 / (p.rows - 1) as f32
        } else {
            0.0
        };
        let y = -p.extent.y + 2.0 * p.extent.y * row_frac;
        let motion = row_motion(p, row_frac);
        for col in 0..p.cols {
            let col_frac = if p.cols > 1 {
                col as f32 / (p.cols - 1) as f32
            } else {
                0.0
            };
            let x = -p.extent.x + 2.0 * p.extent.x * col_frac;
            out.points.push(displace(Vec3::new(x, y, 0.0), p.jitter_amount, rng.as_mut()));
            out.waves.push(motion);
        }
    }

    // Supplemental scatter and edge bands exist only when jitter is live;
    // with jitter disabled the field is exactly the rows * cols grid.
    if let Some(rng) = rng.as_mut() {
        for _ in 0..p.scatter_points {
            let x = rng.gen_range(-p.extent.x..=p.extent.x);
            let y = rng.gen_range(-p.extent.y..=p.extent.y);
            let row_frac = ((y + p.extent.y) / (2.0 * p.extent.y)).clamp(0.0, 1.0);
            out.points.push(Vec3::new(x, y, rng.gen_range(-p.jitter_amount..=p.jitter_amount)));
            out.waves.push(row_motion(p, row_frac));
        }
        for _ in 0..p.edge_points {
            let side = rng.gen_range(0..4u8);
            let (x, y) = match side {
                0 => (
                    -p.extent.x - rng.gen_range(0.0..=p.edge_band),
                    rng.gen_range(-p.extent.y..=p.extent.y),
                ),
                1 => (
                    p.extent.x + rng.gen_range(0.0..=p.edge_band),
                    rng.gen_range(-p.extent.y..=p.extent.y),
                ),
                2 => (
                    rng.gen_range(-p.extent.x..=p.extent.x),
                    -p.extent.y - rng.gen_range(0.0..=p.edge_band),
                ),
                _ => (
                    rng.gen_range(-p.extent.x..=p.extent.x),
                    p.extent.y + rng.gen_range(0.0..=p.edge_band),
                ),
            };
            let row_frac = ((y + p.extent.y) / (2.0 * p.extent.y)).clamp(0.0, 1.0);
            out.points.push(Vec3::new(x, y, 0.0));
            out.waves.push(row_motion(p, row_frac));
        }
    }
    Ok(out)
}

// Oscillation amplitude and speed are a monotonic function of the row.
fn row_motion(p: &WaveFieldParams, row_frac: f32) -> WaveMotion {
    WaveMotion {
        amplitude: lerp(p.amp_range.0, p.amp_range.1, row_frac),
        speed: lerp(p.speed_range.0, p.speed_range.1, row_frac),
    }
}

fn sample_scatter(p: &ScatterParams, jitter: Jitter) -> Result<SampleOutput, ConfigError> {
    if p.interior_points + p.edge_points == 0 {
        return Err(ConfigError::InvalidDescriptor(
            "scatter needs at least one point",
        ));
    }
    let mut rng = jitter.rng_or_fallback();
    let mut out = SampleOutput::default();
    for _ in 0..p.interior_points {
        out.points.push(Vec3::new(
            rng.gen_range(-p.extent.x..=p.extent.x),
            rng.gen_range(-p.extent.y..=p.extent.y),
            rng.gen_range(-p.depth..=p.depth),
        ));
    }
    for _ in 0..p.edge_points {
        let side = rng.gen_range(0..4u8);
        let band = rng.gen_range(0.0..=p.edge_band);
        let (x, y) = match side {
            0 => (-p.extent.x + band, rng.gen_range(-p.extent.y..=p.extent.y)),
            1 => (p.extent.x - band, rng.gen_range(-p.extent.y..=p.extent.y)),
            2 => (rng.gen_range(-p.extent.x..=p.extent.x), -p.extent.y + band),
            _ => (rng.gen_range(-p.extent.x..=p.extent.x), p.extent.y - band),
        };
        out.points
            .push(Vec3::new(x, y, rng.gen_range(-p.depth..=p.depth)));
    }
    Ok(out)
}

fn displace(base: Vec3, amount: f32, rng: Option<&mut StdRng>) -> Vec3 {
    match rng {
        Some(rng) if amount > 0.0 => {
            base + Vec3::new(
                rng.gen_range(-amount..=amount),
                rng.gen_range(-amount..=amount),
                rng.gen_range(-amount..=amount),
            )
        }
        _ => base,
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
