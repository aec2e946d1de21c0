use crate::compat::String;
use crate::params::ParamMap;
use crate::percent::{decode, encode_component, encode_host, encode_path, encode_scheme};

/// Default delimiter for path parameters.
pub const DEFAULT_PARAM_DELIMITER: &str = ";";
/// Default delimiter for query parameters.
pub const DEFAULT_QUERY_DELIMITER: &str = "&";

/// The decomposed parts of a URL.
///
/// This is the mutable staging record behind [`Url`](crate::Url): a plain
/// struct of owned fields with no invariants of its own. A `Url` lends out
/// its stored record via [`Url::components`](crate::Url::components),
/// gives it up via [`Url::into_components`](crate::Url::into_components)
/// and is rebuilt from one via
/// [`Url::from_components`](crate::Url::from_components); string fields
/// are wire-form (percent-encoded) at that boundary.
///
/// `host` is deliberately tri-state: `None` means no authority at all (no
/// `//` is rendered), `Some("")` means an authority that is present but
/// empty (`file:///path`), and `Some(host)` is a regular authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComponents {
    pub scheme: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub path_params: ParamMap,
    pub param_delimiter: String,
    pub query: ParamMap,
    pub query_delimiter: String,
    pub fragment: Option<String>,
}

impl Default for UrlComponents {
    fn default() -> Self {
        Self {
            scheme: None,
            username: None,
            password: None,
            host: None,
            port: None,
            path: None,
            path_params: ParamMap::new(),
            param_delimiter: String::from(DEFAULT_PARAM_DELIMITER),
            query: ParamMap::new(),
            query_delimiter: String::from(DEFAULT_QUERY_DELIMITER),
            fragment: None,
        }
    }
}

impl UrlComponents {
    /// Percent-encode every textual field for storage: scalars with the
    /// strict component set, the scheme, host and path with their widened
    /// sets, and both maps key-and-value. `port` and the delimiters pass
    /// through.
    ///
    /// This is a single-application transform: feeding already-encoded
    /// components through it escapes their `%` signs again.
    pub fn into_encoded(self) -> Self {
        Self {
            scheme: self.scheme.as_deref().map(encode_scheme),
            username: self.username.as_deref().map(encode_component),
            password: self.password.as_deref().map(encode_component),
            host: self.host.as_deref().map(encode_host),
            port: self.port,
            path: self.path.as_deref().map(encode_path),
            path_params: self.path_params.encoded(),
            param_delimiter: self.param_delimiter,
            query: self.query.encoded(),
            query_delimiter: self.query_delimiter,
            fragment: self.fragment.as_deref().map(encode_component),
        }
    }

    /// The inverse of [`into_encoded`](Self::into_encoded): percent-decode
    /// every textual field. Apply exactly once, to wire-form components.
    pub fn into_decoded(self) -> Self {
        let decode_owned = |text: &str| decode(text).into_owned();
        Self {
            scheme: self.scheme.as_deref().map(decode_owned),
            username: self.username.as_deref().map(decode_owned),
            password: self.password.as_deref().map(decode_owned),
            host: self.host.as_deref().map(decode_owned),
            port: self.port,
            path: self.path.as_deref().map(decode_owned),
            path_params: self.path_params.decoded(),
            param_delimiter: self.param_delimiter,
            query: self.query.decoded(),
            query_delimiter: self.query_delimiter,
            fragment: self.fragment.as_deref().map(decode_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiters() {
        let components = UrlComponents::default();
        assert_eq!(components.param_delimiter, ";");
        assert_eq!(components.query_delimiter, "&");
        assert_eq!(components.host, None);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let mut raw = UrlComponents {
            scheme: Some("https".into()),
            username: Some("user name".into()),
            path: Some("/a path/x".into()),
            fragment: Some("100%".into()),
            ..UrlComponents::default()
        };
        raw.query.set("q", "a b");

        let encoded = raw.clone().into_encoded();
        assert_eq!(encoded.username.as_deref(), Some("user%20name"));
        assert_eq!(encoded.path.as_deref(), Some("/a%20path/x"));
        assert_eq!(encoded.fragment.as_deref(), Some("100%25"));
        assert_eq!(encoded.query.serialize("&"), "q=a%20b");
        assert_eq!(encoded.into_decoded(), raw);
    }

    #[test]
    fn test_encode_keeps_compound_scheme() {
        let raw = UrlComponents {
            scheme: Some("svn+ssh".into()),
            ..UrlComponents::default()
        };
        assert_eq!(raw.into_encoded().scheme.as_deref(), Some("svn+ssh"));
    }

    #[test]
    fn test_port_and_delimiters_pass_through() {
        let raw = UrlComponents {
            port: Some(0),
            param_delimiter: ",".into(),
            ..UrlComponents::default()
        };
        let encoded = raw.clone().into_encoded();
        assert_eq!(encoded.port, Some(0));
        assert_eq!(encoded.param_delimiter, ",");
    }
}
