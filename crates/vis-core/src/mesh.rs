//! Low-poly unit-sphere mesh used as the per-particle display primitive.
//!
//! For a unit sphere the vertex normal equals its position, so only
//! positions are stored; both frontends instance this one mesh for every
//! particle.

pub struct SphereMesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

impl SphereMesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// UV sphere with `rings` latitude bands and `segments` longitude slices.
/// Kept deliberately coarse; at brand-visual particle sizes facets read as
/// sparkle, not as error.
pub fn unit_sphere(rings: u16, segments: u16) -> SphereMesh {
    let rings = rings.max(2);
    let segments = segments.max(3);

    let mut positions = Vec::with_capacity(((rings + 1) * segments) as usize);
    for ring in 0..=rings {
        let theta = std::f32::consts::PI * ring as f32 / rings as f32;
        let (sin_t, cos_t) = theta.sin_cos();
        for seg in 0..segments {
            let phi = std::f32::consts::TAU * seg as f32 / segments as f32;
            let (sin_p, cos_p) = phi.sin_cos();
            positions.push([sin_t * cos_p, cos_t, sin_t * sin_p]);
        }
    }

    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    for ring in 0..rings {
        for seg in 0..segments {
            let next_seg = (seg + 1) % segments;
            let a = ring * segments + seg;
            let b = ring * segments + next_seg;
            let c = (ring + 1) * segments + seg;
            let d = (ring + 1) * segments + next_seg;
            // Top and bottom bands collapse one triangle each.
            if ring != 0 {
                indices.extend_from_slice(&[a, b, c]);
            }
            if ring != rings - 1 {
                indices.extend_from_slice(&[b, d, c]);
            }
        }
    }

    SphereMesh { positions, indices }
}
