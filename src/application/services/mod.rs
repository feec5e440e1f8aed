//! Application services orchestrating the domain layer.

pub mod link_service;
pub mod redirect_service;
pub mod stats_service;

pub use link_service::LinkService;
pub use redirect_service::{ClientMeta, RedirectOutcome, RedirectService};
pub use stats_service::StatsService;
