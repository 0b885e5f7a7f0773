//! Utility helpers shared across UI and contract modules.

pub mod time;
