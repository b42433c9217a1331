//! Request extractors that report rejections through [`AppError`].
//!
//! Axum's own `Json` and `Path` extractors answer a bad request with a plain-text body.
//! These wrappers reuse them but convert the rejection so the client receives the usual
//! JSON error envelope with status 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON body extractor; malformed JSON or a missing required field is a 400 `errorObj`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor; an unparsable id is a 400 `errorObj`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
