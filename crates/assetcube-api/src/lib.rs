//! Assetcube API
//!
//! The HTTP upload service: one multipart upload endpoint that validates a
//! per-user upload key, checks the file's declared type and streamed size,
//! resolves a collision-free destination name, and writes the file to object
//! storage under the user's prefix.
//!
//! The crate is a library plus a thin binary so integration tests can build
//! the router against in-memory backends.

pub mod error;
pub mod handlers;
pub mod multipart;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
