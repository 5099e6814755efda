//! Components - Reusable UI Components
//!
//! Pure presentational components: each takes its parameters and renders a
//! markup tree, without I/O or shared state.

pub mod composite;
pub mod layout;
pub mod navigation;
pub mod primitives;
pub mod typography;
