//! URL string parsing.
//!
//! Parsing is a fixed sequence of cuts rather than a character state
//! machine: fragment, query, scheme, authority, then path/parameters.
//! [`splitter`] finds the boundaries on the raw text; this module decodes
//! the pieces and assembles a [`UrlComponents`].

mod splitter;

use crate::compat::{String, ToString};
use crate::error::Result;
use crate::params::ParamMap;
use crate::percent::decode;
use crate::url_components::UrlComponents;

/// Parse a URL string into decoded components.
///
/// Scheme and host are lowercased. Empty sections parse as absent, with
/// one exception: an authority marker with an empty host (`file:///x`)
/// keeps `host` as `Some("")` so the marker survives a round trip.
///
/// # Errors
///
/// Returns [`UrlError::InvalidPort`](crate::UrlError::InvalidPort) when
/// the text after the host's `:` is not a valid port number.
pub(crate) fn parse_components(
    input: &str,
    query_delimiter: &str,
    param_delimiter: &str,
) -> Result<UrlComponents> {
    let split = splitter::split(input, param_delimiter);

    let mut components = UrlComponents {
        scheme: split.scheme,
        query_delimiter: query_delimiter.to_string(),
        param_delimiter: param_delimiter.to_string(),
        ..UrlComponents::default()
    };

    if let Some(authority) = split.authority {
        let authority = splitter::split_authority(authority, param_delimiter)?;
        components.username = authority
            .username
            .filter(|username| !username.is_empty())
            .map(decode_owned);
        components.password = authority
            .password
            .filter(|password| !password.is_empty())
            .map(decode_owned);
        components.host = Some(decode(authority.host).to_lowercase());
        components.port = authority.port;
        if let Some(params) = authority.port_params {
            components.path_params.parse_into(&params, param_delimiter);
        }
    }

    components.path = split.path.map(decode_owned);
    if let Some(params) = split.params {
        components.path_params.parse_into(params, param_delimiter);
    }
    if let Some(query) = split.query {
        // Tolerate a doubled marker: the text after the first `?` may
        // itself start with one.
        let query = query.strip_prefix('?').unwrap_or(query);
        components.query = ParamMap::parse(query, query_delimiter);
    }
    components.fragment = split
        .fragment
        .filter(|fragment| !fragment.is_empty())
        .map(decode_owned);

    Ok(components)
}

fn decode_owned(text: &str) -> String {
    decode(text).into_owned()
}
