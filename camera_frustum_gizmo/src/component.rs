/// CameraFrustumGizmo: the component attached to one camera.
///
/// Lifecycle, in host frame-loop order:
/// 1. `new(desc)`: validate configuration
/// 2. `start(host)`: create markers
/// 3. `update(host, camera)` every frame: sample, then present
/// 4. `draw_gizmos(gizmos, camera)` whenever the editor redraws gizmos
/// 5. `destroy(host)`: release markers
///
/// The footprint is instance state, replaced as a whole by each update.

use crate::camera::CameraParams;
use crate::color::Color;
use crate::error::Result;
use crate::host::{DebugDraw, GizmoDraw, MarkerHost};
use crate::presentation::{GizmoRenderer, MarkerPresenter};
use crate::sampler::{FrustumFootprint, FrustumSampler};
use crate::{gizmo_bail, gizmo_trace};

/// Default marker scale
pub const DEFAULT_SPHERES_RADIUS: f32 = 0.5;

// ===== DESCRIPTOR =====

/// Per-instance configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumGizmoDesc {
    /// Marker color (alpha ignored)
    pub sphere_color: Color,
    /// Uniform marker scale, must be positive and finite
    pub spheres_radius: f32,
}

impl Default for FrustumGizmoDesc {
    fn default() -> Self {
        Self {
            sphere_color: Color::BLACK,
            spheres_radius: DEFAULT_SPHERES_RADIUS,
        }
    }
}

impl FrustumGizmoDesc {
    /// Check the radius is usable as a marker scale.
    pub fn validate(&self) -> Result<()> {
        if !self.spheres_radius.is_finite() || self.spheres_radius <= 0.0 {
            gizmo_bail!("frustum_gizmo::FrustumGizmoDesc", InvalidConfig,
                "spheres_radius must be positive and finite, got {}", self.spheres_radius);
        }
        Ok(())
    }
}

// ===== COMPONENT =====

/// Ground footprint visualizer for one camera.
pub struct CameraFrustumGizmo {
    desc: FrustumGizmoDesc,
    sampler: FrustumSampler,
    gizmo_renderer: GizmoRenderer,
    /// Created by start(), released by destroy()
    presenter: Option<MarkerPresenter>,
    /// Last sampled footprint
    footprint: FrustumFootprint,
}

impl CameraFrustumGizmo {
    pub fn new(desc: FrustumGizmoDesc) -> Result<Self> {
        desc.validate()?;

        Ok(Self {
            desc,
            sampler: FrustumSampler::new(),
            gizmo_renderer: GizmoRenderer::new(),
            presenter: None,
            footprint: FrustumFootprint::default(),
        })
    }

    pub fn desc(&self) -> &FrustumGizmoDesc {
        &self.desc
    }

    /// Footprint computed by the last `update()` (all zero before the first).
    pub fn footprint(&self) -> &FrustumFootprint {
        &self.footprint
    }

    /// Marker presenter, once started.
    pub fn presenter(&self) -> Option<&MarkerPresenter> {
        self.presenter.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.presenter.is_some()
    }

    /// Create the markers. Calling it again while started is a no-op.
    pub fn start<H: MarkerHost + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        if self.presenter.is_none() {
            self.presenter = Some(MarkerPresenter::create(
                host,
                self.desc.sphere_color,
                self.desc.spheres_radius,
            )?);
        }
        Ok(())
    }

    /// Per-frame pass: sample the ground footprint, then present it.
    pub fn update<H: MarkerHost + DebugDraw + ?Sized>(
        &mut self,
        host: &mut H,
        camera: &CameraParams,
    ) -> Result<()> {
        let Some(presenter) = self.presenter.as_ref() else {
            gizmo_bail!("frustum_gizmo::CameraFrustumGizmo", NotStarted,
                "update() called before start()");
        };

        self.footprint = self.sampler.sample(camera);
        gizmo_trace!("frustum_gizmo::CameraFrustumGizmo", "Footprint {:?}", self.footprint);

        presenter.present(host, &self.footprint)
    }

    /// Draw the editor wireframe of the camera volume.
    pub fn draw_gizmos<G: GizmoDraw + ?Sized>(&self, gizmos: &mut G, camera: &CameraParams) {
        self.gizmo_renderer.draw(gizmos, camera);
    }

    /// Release the markers. The component can be started again afterwards.
    pub fn destroy<H: MarkerHost + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        match self.presenter.take() {
            Some(presenter) => presenter.destroy(host),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "component_tests.rs"]
mod tests;
