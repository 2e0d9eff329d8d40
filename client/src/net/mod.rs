//! Browser networking.

pub mod api;
