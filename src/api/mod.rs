//! # API Module
//!
//! HTTP handlers of the web form. The whole surface is one input field: the
//! user types a playlist name and gets back either the name of the newly
//! created playlist or a message saying the playlist does not exist.
//!
//! ## Endpoints
//!
//! - [`form`] - `GET /` renders the single-field form
//! - [`recommendations`] - `POST /recommendations` runs the pipeline for the
//!   submitted `playlist_name`
//! - [`health`] - `GET /health` returns status and version for monitoring
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use sporlrec::api::{form, health, recommendations};
//!
//! let app = Router::new()
//!     .route("/", get(form))
//!     .route("/recommendations", post(recommendations))
//!     .route("/health", get(health));
//! ```

mod form;
mod health;
mod recommendations;

pub use form::form;
pub use health::health;
pub use recommendations::{RecommendationForm, recommendations};
