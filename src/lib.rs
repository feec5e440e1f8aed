//! # shortleaf
//!
//! A URL shortener with per-click analytics and expiring links, built with
//! Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate is layered with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the expiration evaluator, and
//!   repository traits
//! - **Application Layer** ([`application`]) - Shortening, redirect
//!   resolution, and statistics services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers and DTOs
//!
//! ## Features
//!
//! - Random or caller-chosen short ids with bounded collision retry
//! - Time-based and click-count-based link expiration
//! - Per-redirect click analytics (user agent, referrer)
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to a local SQLite file
//! export DATABASE_URL="sqlite://shortleaf.db?mode=rwc"
//! export BASE_URL="https://s.example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ClientMeta, LinkService, RedirectOutcome, RedirectService, StatsService,
    };
    pub use crate::domain::entities::{Click, Link, NewClick, NewLink};
    pub use crate::domain::expiry::ExpiryReason;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
