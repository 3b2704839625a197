//! The `{ "data": ... }` envelope wrapped around every catalog payload.
//!
//! Games, genres, platforms, relation lists and the game count all go out
//! through [`DataResponse`]. Errors use the separate `{ "error", "code" }`
//! shape from [`crate::error`], and file downloads bypass the envelope.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// 200 with `data` wrapped.
    pub fn ok(data: T) -> Json<Self> {
        Json(Self { data })
    }

    /// 201 for a freshly created game, genre or platform.
    pub fn created(data: T) -> (StatusCode, Json<Self>) {
        (StatusCode::CREATED, Json(Self { data }))
    }
}
