//! Shared view-model state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`wallet`, `waves`, `compose`) and mutated only
//! through named entry points so every way the UI can change is enumerable.
//! The structs are plain data: signals wrap them at the component layer.

pub mod compose;
pub mod wallet;
pub mod waves;
