//! Thin wrappers over browser APIs. Everything here degrades to a no-op or a
//! fallback when the API is missing.

pub mod dom;
pub mod location;
pub mod speech;
pub mod storage;
