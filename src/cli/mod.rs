//! # CLI Module
//!
//! User-facing commands of Sporlrec. Each command resolves its configuration,
//! builds a [`crate::spotify::SpotifyCatalog`] and hands over to the
//! recommendation pipeline or the web form server.
//!
//! ## Commands
//!
//! - [`recommend`] - Runs the pipeline once from the terminal
//! - [`serve`] - Starts the single-field web form
//!
//! ## Usage
//!
//! ```bash
//! sporlrec recommend "Roadtrip"            # token from SPOTIFY_ACCESS_TOKEN
//! sporlrec recommend "Roadtrip" --token BQC...
//! sporlrec serve --addr 127.0.0.1:8080
//! ```

mod recommend;
mod serve;

pub use recommend::recommend;
pub use serve::serve;
