//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into domain parameters, call the
//! service layer, and convert domain models back into DTOs for the response.

pub mod product;
