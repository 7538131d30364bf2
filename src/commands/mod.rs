//! CLI commands for docsim

pub mod dispatch;
pub mod distance;
pub mod matrix;
pub mod predict;
pub mod separation;
pub mod vectors;
