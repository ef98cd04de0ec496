/// MarkerPresenter: shows a FrustumFootprint with five markers and four lines.
///
/// Owns the five marker handles and their shared material. Markers snap to
/// the footprint every frame; the outline is redrawn every frame since debug
/// lines only last one frame.

use glam::Vec3;
use crate::color::Color;
use crate::error::Result;
use crate::host::{DebugDraw, DrawVisibility, MarkerHost, MarkerKey, MaterialKey};
use crate::sampler::{FrustumFootprint, ViewportSample};
use crate::gizmo_info;

/// Color of the footprint outline
pub const LINE_COLOR: Color = Color::RED;

/// The outline is a debug aid: editor view only
pub const LINE_VISIBILITY: DrawVisibility = DrawVisibility::EDITOR;

/// Five markers (one per ViewportSample) sharing one material.
#[derive(Debug)]
pub struct MarkerPresenter {
    material: MaterialKey,
    markers: [MarkerKey; 5],
}

impl MarkerPresenter {
    /// Create the shared material and the five markers.
    ///
    /// Markers are scaled uniformly by `radius`; `color` alpha is ignored.
    /// On failure, whatever was already created is destroyed again.
    pub fn create<H: MarkerHost + ?Sized>(host: &mut H, color: Color, radius: f32) -> Result<Self> {
        let material = host.create_material(color.opaque())?;
        let scale = Vec3::splat(radius);

        let mut markers = [MarkerKey::default(); 5];
        for (created, sample) in ViewportSample::ALL.iter().enumerate() {
            match host.create_marker(scale, material) {
                Ok(key) => markers[sample.index()] = key,
                Err(err) => {
                    for key in &markers[..created] {
                        let _ = host.destroy_marker(*key);
                    }
                    let _ = host.destroy_material(material);
                    return Err(err);
                }
            }
        }

        gizmo_info!("frustum_gizmo::MarkerPresenter",
            "Created {} markers (radius {}, color {:?})", markers.len(), radius, color.opaque());

        Ok(Self { material, markers })
    }

    /// Handle of the marker showing `sample`.
    pub fn marker(&self, sample: ViewportSample) -> MarkerKey {
        self.markers[sample.index()]
    }

    /// All marker handles in `ViewportSample::ALL` order.
    pub fn markers(&self) -> &[MarkerKey; 5] {
        &self.markers
    }

    pub fn material(&self) -> MaterialKey {
        self.material
    }

    /// Snap each marker to its sample, then draw the closed outline.
    pub fn present<H: MarkerHost + DebugDraw + ?Sized>(
        &self,
        host: &mut H,
        footprint: &FrustumFootprint,
    ) -> Result<()> {
        for sample in ViewportSample::ALL {
            host.set_marker_position(self.marker(sample), footprint.get(sample))?;
        }

        for (start, end) in footprint.outline() {
            host.draw_line(start, end, LINE_COLOR, LINE_VISIBILITY);
        }

        Ok(())
    }

    /// Destroy the markers and their material.
    ///
    /// Every destroy is attempted; the first error is returned.
    pub fn destroy<H: MarkerHost + ?Sized>(self, host: &mut H) -> Result<()> {
        let mut result = Ok(());
        for key in self.markers {
            if let Err(err) = host.destroy_marker(key) {
                result = result.and(Err(err));
            }
        }
        if let Err(err) = host.destroy_material(self.material) {
            result = result.and(Err(err));
        }

        gizmo_info!("frustum_gizmo::MarkerPresenter", "Destroyed markers");
        result
    }
}

#[cfg(test)]
#[path = "marker_presenter_tests.rs"]
mod tests;
