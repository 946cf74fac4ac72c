//! HTTP Module
//!
//! JSON API around the normalizer and the tweet store.
//! Routes: `/`, `/get`, `/input`, `/upload`, `/delete`, `/docs.json`.

pub mod docs;
pub mod handlers;
pub mod messages;
pub mod server;

pub use handlers::routes;
pub use messages::*;
pub use server::{serve, AppState};
