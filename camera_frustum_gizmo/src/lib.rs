/*!
# Camera Frustum Gizmo

Visualizes what a camera sees on the ground plane.

Every frame the camera's four viewport corners and its viewport center are
turned into world-space rays, intersected with the horizontal plane at height
zero, and the resulting footprint is shown with five marker spheres joined by
a closed loop of debug lines. An editor-only gizmo draws the camera's
theoretical volume (wire frustum or orthographic box).

## Architecture

- **FrustumSampler**: viewport rays → ground-plane footprint
- **MarkerPresenter**: five markers + four debug lines per frame
- **GizmoRenderer**: wire frustum / box in the camera's local frame
- **CameraFrustumGizmo**: the component aggregate driving the three above

Engine capabilities (ray construction, marker creation, line and wireframe
drawing) are traits in [`host`]. [`DebugScene`](frustum_gizmo::DebugScene) is
a retained reference host implementing all of them.
*/

// Internal modules
mod error;
mod diagnostics;
mod color;
mod component;
mod debug_scene;
pub mod log;
pub mod camera;
pub mod host;
pub mod sampler;
pub mod presentation;

// Main frustum_gizmo namespace module
pub mod frustum_gizmo {
    // Error types
    pub use crate::error::{Error, Result};

    // Global logger access
    pub use crate::diagnostics::Diagnostics;

    pub use crate::color::Color;

    // Component aggregate and its configuration
    pub use crate::component::{CameraFrustumGizmo, FrustumGizmoDesc, DEFAULT_SPHERES_RADIUS};

    // Reference host
    pub use crate::debug_scene::{DebugScene, DebugLine, DebugMarker, DebugMaterial, LineVertex};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod host {
        pub use crate::host::*;
    }

    pub mod sampler {
        pub use crate::sampler::*;
    }

    pub mod presentation {
        pub use crate::presentation::*;
    }
}

// Re-export math library at crate root
pub use glam;
