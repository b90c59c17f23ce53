//! Trivia Server
//!
//! HTTP catalog of trivia questions:
//! - Paginated question and category listings
//! - Question creation and deletion
//! - Case-insensitive question search
//! - Random quiz questions that skip what the player has already seen

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
