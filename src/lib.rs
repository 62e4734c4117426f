//! Geo Shape Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod store;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppMode, AppState, InputTarget, MeasureKind, UiButton,
    UiState, ViewState,
};
pub use core::{
    ConstructionState, FreehandPolygon, RegularPolygon, ShapeCollection, ShapeError,
    TraceCapture, TraceSource,
};
pub use shared::{EditorOptions, RenderScene};
pub use store::{parse_shape_store, write_shape_store, ParsedStore, ShapeStore};
