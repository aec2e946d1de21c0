#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod builder;
mod error;
mod helpers;
mod params;
mod parser;
mod percent;
mod url;
mod url_components;

// Public API
pub use builder::UrlBuilder;
pub use error::{Result, UrlError};
pub use params::{ParamMap, ParamValue};
pub use url::Url;
pub use url_components::UrlComponents;
