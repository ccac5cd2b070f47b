//! # WMS Token Client Library
//!
//! Provides functionality for fetching an OAuth2 client-credentials access
//! token from the warehouse management authorization server, parsing the
//! response into a typed token, and classifying every failure mode.
//!
//! Modules:
//! - `config` — environment-backed auth and logging configuration
//! - `sources` — the OAuth2 token source (one POST per fetch)
//! - `parser` — parsing the token endpoint response
//! - `token` — typed access token with absolute expiration

pub mod config;
pub mod error;
pub mod parser;
pub mod sources;
pub mod tests;
pub mod token;
pub mod utils;


pub use crate::config::settings::AuthConfig;
pub use crate::error::{Error, Result};
pub use crate::token::AccessToken;
