//! Calculator service: arithmetic, scientific functions and unit conversion
//! over HTTP, with a bounded calculation history and a memory register.

pub mod api;
pub mod config;
pub mod engine;
pub mod models;
