//! HTTP delivery: inventory loading, routing, and page rendering.

pub mod app;
pub mod loader;
