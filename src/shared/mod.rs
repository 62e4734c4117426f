//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `core`, `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
mod surface;

pub use options::EditorOptions;
pub use render_scene::{AxisTick, CoordinateGrid, RenderScene};
pub use surface::{DrawSurface, SegmentBuffer};
