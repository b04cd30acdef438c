//! # API Route Modules
//!
//! - `store` — `POST /store`: archive a digest set, answer with a status envelope.
//! - `input` — `GET /get`: the startup input and its blob id (`with-input` only).
//!
//! Every route answers other methods with a plain-text 405 via
//! [`crate::error::method_not_allowed`].

pub mod input;
pub mod store;
