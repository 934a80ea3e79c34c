#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_async)]

//! math-api library — the building blocks of the `math-api` server.
//!
//! - `arith` — pure arithmetic operations
//! - `routes` — HTTP handlers and the router
//! - `error` — JSON error responses
//! - `config` — configuration loading
//! - `state` — shared application state

pub mod arith;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-export key types at crate root for convenience.
pub use config::Config;
pub use error::ApiError;
pub use state::AppState;
