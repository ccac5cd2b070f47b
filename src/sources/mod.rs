//! Token sources
//!
//! One source is supported: the OAuth2 client-credentials exchange against
//! the warehouse management authorization server.

pub mod oauth2;

pub use oauth2::OAuth2Source;
