/// DebugScene: retained reference host for the frustum gizmo.
///
/// Implements every host capability without a GPU:
/// - markers and materials live in SlotMaps with stable keys
/// - debug lines and gizmo edges are immediate mode (cleared by `begin_frame`)
/// - gizmo shapes are expanded to world-space edges with the active matrix
///
/// A renderer backend consumes the frame through `lines()`, `gizmo_lines()`
/// and `line_vertices()`, and the repositioned markers through
/// `take_dirty_markers()`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use crate::camera::WireShape;
use crate::color::Color;
use crate::error::Result;
use crate::host::{DebugDraw, DrawVisibility, GizmoDraw, MarkerHost, MarkerKey, MaterialKey};
use crate::{gizmo_bail, gizmo_debug};

/// Fixed-color material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugMaterial {
    pub color: Color,
}

/// Sphere marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugMarker {
    pub position: Vec3,
    pub scale: Vec3,
    pub material: MaterialKey,
}

/// World-space line segment recorded this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
    pub visibility: DrawVisibility,
}

/// GPU-ready line vertex (two per segment, line-list topology)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: Vec3,
    pub color: [f32; 4],
}

impl LineVertex {
    /// Raw bytes of a vertex slice, ready for a vertex buffer upload.
    pub fn as_bytes(vertices: &[LineVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Retained host recording markers, lines and gizmo edges.
pub struct DebugScene {
    /// Marker materials
    materials: SlotMap<MaterialKey, DebugMaterial>,
    /// Marker objects
    markers: SlotMap<MarkerKey, DebugMarker>,
    /// Markers moved since last take_dirty_markers()
    dirty_markers: FxHashSet<MarkerKey>,
    /// Debug lines drawn this frame
    lines: Vec<DebugLine>,
    /// Gizmo edges drawn this frame (world space)
    gizmo_lines: Vec<DebugLine>,
    /// Local-to-world matrix applied to gizmo shapes
    gizmo_matrix: Mat4,
    /// Color of gizmo edges
    gizmo_color: Color,
    /// Number of begin_frame() calls
    frame_index: u64,
}

impl DebugScene {
    pub fn new() -> Self {
        Self {
            materials: SlotMap::with_key(),
            markers: SlotMap::with_key(),
            dirty_markers: FxHashSet::default(),
            lines: Vec::new(),
            gizmo_lines: Vec::new(),
            gizmo_matrix: Mat4::IDENTITY,
            gizmo_color: Color::WHITE,
            frame_index: 0,
        }
    }

    /// Start a new frame: drops last frame's lines and gizmo edges.
    ///
    /// Markers are retained.
    pub fn begin_frame(&mut self) {
        self.lines.clear();
        self.gizmo_lines.clear();
        self.frame_index += 1;
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    // ===== MARKERS / MATERIALS =====

    pub fn marker(&self, key: MarkerKey) -> Option<&DebugMarker> {
        self.markers.get(key)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn markers(&self) -> impl Iterator<Item = (MarkerKey, &DebugMarker)> {
        self.markers.iter()
    }

    pub fn material(&self, key: MaterialKey) -> Option<&DebugMaterial> {
        self.materials.get(key)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Drain the set of markers repositioned since the last call.
    pub fn take_dirty_markers(&mut self) -> Vec<MarkerKey> {
        self.dirty_markers.drain().collect()
    }

    // ===== LINES =====

    /// Debug lines drawn this frame, in draw order.
    pub fn lines(&self) -> &[DebugLine] {
        &self.lines
    }

    /// Debug lines drawn this frame that are visible in `view`.
    pub fn lines_visible_in(&self, view: DrawVisibility) -> impl Iterator<Item = &DebugLine> {
        self.lines.iter().filter(move |line| line.visibility.intersects(view))
    }

    /// Gizmo edges drawn this frame.
    pub fn gizmo_lines(&self) -> &[DebugLine] {
        &self.gizmo_lines
    }

    pub fn set_gizmo_color(&mut self, color: Color) {
        self.gizmo_color = color;
    }

    /// Line-list vertices for every debug line and gizmo edge visible in `view`.
    pub fn line_vertices(&self, view: DrawVisibility) -> Vec<LineVertex> {
        self.lines
            .iter()
            .chain(self.gizmo_lines.iter())
            .filter(|line| line.visibility.intersects(view))
            .flat_map(|line| {
                let color = line.color.to_array();
                [
                    LineVertex { position: line.start, color },
                    LineVertex { position: line.end, color },
                ]
            })
            .collect()
    }

    fn push_gizmo_shape(&mut self, shape: WireShape) {
        let world = shape.transformed(&self.gizmo_matrix);
        let color = self.gizmo_color;
        self.gizmo_lines.extend(world.edges().map(|(start, end)| DebugLine {
            start,
            end,
            color,
            visibility: DrawVisibility::EDITOR,
        }));
    }
}

impl Default for DebugScene {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerHost for DebugScene {
    fn create_material(&mut self, color: Color) -> Result<MaterialKey> {
        Ok(self.materials.insert(DebugMaterial { color }))
    }

    fn create_marker(&mut self, scale: Vec3, material: MaterialKey) -> Result<MarkerKey> {
        if !self.materials.contains_key(material) {
            gizmo_bail!("frustum_gizmo::DebugScene", InvalidHandle,
                "Cannot create marker: material {:?} does not exist", material);
        }

        let key = self.markers.insert(DebugMarker { position: Vec3::ZERO, scale, material });
        gizmo_debug!("frustum_gizmo::DebugScene", "Created marker {:?}", key);
        Ok(key)
    }

    fn set_marker_position(&mut self, marker: MarkerKey, position: Vec3) -> Result<()> {
        let Some(entry) = self.markers.get_mut(marker) else {
            gizmo_bail!("frustum_gizmo::DebugScene", InvalidHandle,
                "Cannot move marker {:?}: it does not exist", marker);
        };

        entry.position = position;
        self.dirty_markers.insert(marker);
        Ok(())
    }

    fn destroy_marker(&mut self, marker: MarkerKey) -> Result<()> {
        if self.markers.remove(marker).is_none() {
            gizmo_bail!("frustum_gizmo::DebugScene", InvalidHandle,
                "Cannot destroy marker {:?}: it does not exist", marker);
        }

        self.dirty_markers.remove(&marker);
        Ok(())
    }

    fn destroy_material(&mut self, material: MaterialKey) -> Result<()> {
        if self.materials.remove(material).is_none() {
            gizmo_bail!("frustum_gizmo::DebugScene", InvalidHandle,
                "Cannot destroy material {:?}: it does not exist", material);
        }
        Ok(())
    }
}

impl DebugDraw for DebugScene {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Color, visibility: DrawVisibility) {
        self.lines.push(DebugLine { start, end, color, visibility });
    }
}

impl GizmoDraw for DebugScene {
    fn matrix(&self) -> Mat4 {
        self.gizmo_matrix
    }

    fn set_matrix(&mut self, matrix: Mat4) {
        self.gizmo_matrix = matrix;
    }

    fn draw_wire_cube(&mut self, center: Vec3, size: Vec3) {
        self.push_gizmo_shape(WireShape::cuboid(center, size));
    }

    fn draw_frustum(&mut self, apex: Vec3, fov_degrees: f32, max_range: f32, min_range: f32, aspect: f32) {
        self.push_gizmo_shape(WireShape::frustum(apex, fov_degrees, max_range, min_range, aspect));
    }
}

#[cfg(test)]
#[path = "debug_scene_tests.rs"]
mod tests;
