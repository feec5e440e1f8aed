//! Domain layer: entities, the expiration evaluator, and repository traits.

pub mod entities;
pub mod expiry;
pub mod repositories;
