//! JSON REST API for the habits tracker.
//!
//! Exposes an axum [`Router`] backed by any [`habits_core::store::HabitStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = habits_api::api_router(store.clone());
//! ```

pub mod day;
pub mod error;
pub mod habits;
pub mod summary;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, patch, post},
};
use habits_core::store::HabitStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: HabitStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/habits", post(habits::create::<S>))
    .route("/habits/{id}/toggle", patch(habits::toggle::<S>))
    .route("/day", get(day::handler::<S>))
    .route("/summary", get(summary::handler::<S>))
    .with_state(store)
}
