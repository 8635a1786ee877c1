//! Domain Services
//!
//! Stateless helpers over domain values.

pub mod url_extract;

pub use url_extract::{heroku_url_from_info, heroku_url_from_json, join_url, vercel_url};
