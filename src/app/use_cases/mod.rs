//! Use-Cases der Application-Layer-Orchestrierung.

pub mod frame;
pub mod measurement;
pub mod mode;
pub mod persistence;
pub mod shape_input;
pub mod trace;
pub mod view;
