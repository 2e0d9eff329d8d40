//! Presentation helpers shared by components.

pub mod style;
