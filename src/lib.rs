//! NoteEarly reading-comprehension platform.
//!
//! - `server` - REST API backend (axum + SeaORM)
//! - `client` - typed API client with silent token refresh
//! - `model` - DTOs shared by both sides of the wire

pub mod client;
pub mod model;
pub mod server;
