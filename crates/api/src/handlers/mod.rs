//! Request handlers for the catalog resources.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the matching service in [`crate::services`] and map
//! absent results to 404 via [`crate::error::AppError`].

pub mod games;
pub mod genres;
pub mod platforms;
