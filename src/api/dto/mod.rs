//! Request and response DTOs for the HTTP API.

pub mod clicks;
pub mod health;
pub mod pagination;
pub mod shorten;
pub mod stats;
