/// Wireframe shapes of a camera volume: eight corners, twelve edges.
///
/// Both shapes share the same corner layout so one edge table serves both:
/// - corners 0..4: face closest to the camera, in order BL, BR, TR, TL
/// - corners 4..8: face farthest from the camera, same order
///
/// Shapes are built in a local frame where the viewing direction is -Z
/// and transformed to world space by whatever matrix is active.

use glam::{Mat4, Vec3};

/// Edge list indexing into `WireShape::corners`.
pub const WIRE_SHAPE_EDGES: [(usize, usize); 12] = [
    // Near face
    (0, 1), (1, 2), (2, 3), (3, 0),
    // Far face
    (4, 5), (5, 6), (6, 7), (7, 4),
    // Connecting edges
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Eight-corner wireframe (box or truncated pyramid).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireShape {
    pub corners: [Vec3; 8],
}

impl WireShape {
    /// Axis-aligned box centered at `center` with full extents `size`.
    pub fn cuboid(center: Vec3, size: Vec3) -> Self {
        let h = size * 0.5;
        // The near face is the +Z face since the view looks down -Z
        let face = |z: f32| [
            center + Vec3::new(-h.x, -h.y, z),
            center + Vec3::new(h.x, -h.y, z),
            center + Vec3::new(h.x, h.y, z),
            center + Vec3::new(-h.x, h.y, z),
        ];
        let near = face(h.z);
        let far = face(-h.z);

        Self { corners: [near[0], near[1], near[2], near[3], far[0], far[1], far[2], far[3]] }
    }

    /// Truncated pyramid with its apex at `apex`, opening along -Z.
    ///
    /// # Arguments
    ///
    /// * `fov_degrees` - Vertical field of view
    /// * `max_range` - Distance from the apex to the far face
    /// * `min_range` - Distance from the apex to the near face
    /// * `aspect` - Width / height of each face
    pub fn frustum(apex: Vec3, fov_degrees: f32, max_range: f32, min_range: f32, aspect: f32) -> Self {
        let tan_half = (fov_degrees.to_radians() * 0.5).tan();
        let face = |distance: f32| {
            let hh = tan_half * distance;
            let hw = hh * aspect;
            [
                apex + Vec3::new(-hw, -hh, -distance),
                apex + Vec3::new(hw, -hh, -distance),
                apex + Vec3::new(hw, hh, -distance),
                apex + Vec3::new(-hw, hh, -distance),
            ]
        };
        let near = face(min_range);
        let far = face(max_range);

        Self { corners: [near[0], near[1], near[2], near[3], far[0], far[1], far[2], far[3]] }
    }

    /// Same shape with every corner transformed by `matrix`.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self { corners: self.corners.map(|c| matrix.transform_point3(c)) }
    }

    /// Iterate over the twelve edges as (start, end) pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        WIRE_SHAPE_EDGES.into_iter().map(move |(a, b)| (self.corners[a], self.corners[b]))
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
