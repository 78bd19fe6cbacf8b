// src/common/extract.rs

use axum::extract::{FromRequest, FromRequestParts};

use crate::common::error::ApiError;

// Mesmo que `axum::Json`, mas rejeições viram o nosso envelope 400
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);
