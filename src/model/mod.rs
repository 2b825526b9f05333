//! Wire-format DTOs shared by the HTTP API.

pub mod api;
pub mod product;
