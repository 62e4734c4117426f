//! Core-Domänentypen: Geometrie, Polygone, Nachzeichnen, Formsammlungen.

pub mod collection;
pub mod error;
pub mod freehand;
/// Reine Geometrie-Funktionen (Eckpunkte, Umfang, Fläche, Rescale)
pub mod geometry;
pub mod regular;
pub mod trace;

pub use collection::{Completable, ShapeCollection};
pub use error::{ShapeError, SideCountIssue};
pub use freehand::{ConstructionState, FreehandPolygon};
pub use regular::RegularPolygon;
pub use trace::{TraceCapture, TraceSource};
