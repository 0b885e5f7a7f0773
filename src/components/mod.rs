//! Reusable view components.

pub mod wave_form;
pub mod wave_list;
