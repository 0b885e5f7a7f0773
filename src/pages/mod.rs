//! Page-level components.

pub mod portal;
