/*!
# Autoframe Engine

Automatic camera-framing engine: given a camera, a pivot transform, and a
set of 3D objects, computes a camera pose (distance or orthographic scale,
plus an optical centering shift) that frames the visible geometry inside
the render frame.

## Architecture

- **Scene**: read-only substrate — mesh objects, recursive groups, AABBs
- **Collector**: gathers eligible world-space vertices, applying a typed
  exclusion rule (group membership, explicit flag, name substring)
- **Solver**: closed-form perspective distance estimate
- **Containment**: NDC-space frustum check that drives iterative refinement
- **Ortho**: closed-form orthographic scale (no iteration)
- **Shift**: optical re-centering of the projected silhouette
- **Session**: orchestrates one pass, owns the re-entrancy guard

The host application owns the camera, pivot, and scene; the engine mutates
camera and pivot in place and reports the outcome. Soft failures never
escalate — a pass always ends with a usable placement.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod framing;
pub mod scene;

// Main autoframe namespace module
pub mod autoframe {
    // Error types
    pub use crate::error::{FramingError, FramingResult};

    // Engine-wide services (logger management)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are crate-level
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Framing sub-module
    pub mod framing {
        pub use crate::framing::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
