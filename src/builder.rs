use crate::compat::String;
use crate::error::Result;
use crate::params::ParamMap;
use crate::parser::parse_components;
use crate::percent::{encode_component, encode_host, encode_path, encode_scheme};
use crate::url::Url;
use crate::url_components::UrlComponents;

/// Staged construction of a [`Url`].
///
/// The builder is the one mutable stage in the URL lifecycle: set any
/// mix of a source string and individual components, then
/// [`build`](Self::build) a frozen value. Components set here are raw
/// text and get percent-encoded exactly once at build time; call
/// [`encoded(true)`](Self::encoded) when supplying pre-encoded text
/// instead.
///
/// Precedence at build time: a seeded base (from
/// [`Url::to_builder`]) is replaced wholesale by [`url`](Self::url) if
/// one is set, then individually set components override the result.
/// Untouched components pass through as-is; `clear_*` removes one.
///
/// ```
/// use imurl::Url;
///
/// let url = Url::builder()
///     .url("http://google.com/base")
///     .host("example.com")
///     .build()
///     .unwrap();
/// assert_eq!(url.as_str(), "http://example.com/base");
/// ```
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct UrlBuilder {
    base: Option<UrlComponents>,
    url: Option<String>,
    encoded: bool,
    scheme: Option<Option<String>>,
    username: Option<Option<String>>,
    password: Option<Option<String>>,
    host: Option<Option<String>>,
    port: Option<Option<u16>>,
    path: Option<Option<String>>,
    fragment: Option<Option<String>>,
    path_params: Option<ParamMap>,
    query: Option<ParamMap>,
    param_delimiter: Option<String>,
    query_delimiter: Option<String>,
}

impl UrlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder with already-encoded components; the backbone of
    /// [`Url::to_builder`]. Untouched fields keep their stored text with
    /// no decode/re-encode round trip.
    pub(crate) fn from_encoded(components: UrlComponents) -> Self {
        Self {
            base: Some(components),
            ..Self::default()
        }
    }

    /// A URL string to parse as the starting point. Parsed with the
    /// builder's delimiters at build time; components set on the builder
    /// override what the string provides.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Treat component values given to this builder as already
    /// percent-encoded, storing them verbatim instead of encoding them.
    /// Off by default. Does not affect the [`url`](Self::url) string,
    /// which is always wire form.
    pub fn encoded(mut self, encoded: bool) -> Self {
        self.encoded = encoded;
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(Some(scheme.into()));
        self
    }

    pub fn clear_scheme(mut self) -> Self {
        self.scheme = Some(None);
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(Some(username.into()));
        self
    }

    pub fn clear_username(mut self) -> Self {
        self.username = Some(None);
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(Some(password.into()));
        self
    }

    pub fn clear_password(mut self) -> Self {
        self.password = Some(None);
        self
    }

    /// Set the host. The empty string is meaningful: it keeps the `//`
    /// authority marker with nothing after it, as in `file:///path`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(Some(host.into()));
        self
    }

    /// Remove the host entirely; no `//` marker renders.
    pub fn clear_host(mut self) -> Self {
        self.host = Some(None);
        self
    }

    /// Set the port. Port `0` is a real port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(Some(port));
        self
    }

    pub fn clear_port(mut self) -> Self {
        self.port = Some(None);
        self
    }

    /// Set the path. Encoding leaves `/` and `:` alone, so a whole
    /// multi-segment path passes through as one string.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(Some(path.into()));
        self
    }

    pub fn clear_path(mut self) -> Self {
        self.path = Some(None);
        self
    }

    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(Some(fragment.into()));
        self
    }

    pub fn clear_fragment(mut self) -> Self {
        self.fragment = Some(None);
        self
    }

    /// Replace the whole path parameter map. An empty map clears it.
    pub fn path_params(mut self, params: ParamMap) -> Self {
        self.path_params = Some(params);
        self
    }

    /// Replace the whole query map. An empty map clears it.
    pub fn query(mut self, query: ParamMap) -> Self {
        self.query = Some(query);
        self
    }

    /// The delimiter between path parameters, `;` by default.
    pub fn param_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.param_delimiter = Some(delimiter.into());
        self
    }

    /// The delimiter between query parameters, `&` by default.
    pub fn query_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.query_delimiter = Some(delimiter.into());
        self
    }

    /// Assemble the [`Url`].
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidPort`](crate::UrlError::InvalidPort)
    /// when the [`url`](Self::url) string carries an unparseable port.
    pub fn build(self) -> Result<Url> {
        let already_encoded = self.encoded;
        let mut components = self.base.unwrap_or_default();
        if let Some(delimiter) = self.param_delimiter {
            components.param_delimiter = delimiter;
        }
        if let Some(delimiter) = self.query_delimiter {
            components.query_delimiter = delimiter;
        }

        if let Some(url) = self.url {
            components = parse_components(
                &url,
                &components.query_delimiter,
                &components.param_delimiter,
            )?
            .into_encoded();
        }

        if let Some(scheme) = self.scheme {
            components.scheme = scheme.map(|value| {
                if already_encoded {
                    value
                } else {
                    encode_scheme(&value)
                }
            });
        }
        if let Some(username) = self.username {
            components.username = username.map(|value| encode_scalar(value, already_encoded));
        }
        if let Some(password) = self.password {
            components.password = password.map(|value| encode_scalar(value, already_encoded));
        }
        if let Some(host) = self.host {
            components.host = host.map(|value| {
                if already_encoded {
                    value
                } else {
                    encode_host(&value)
                }
            });
        }
        if let Some(port) = self.port {
            components.port = port;
        }
        if let Some(path) = self.path {
            components.path = path.map(|value| encode_whole_path(value, already_encoded));
        }
        if let Some(fragment) = self.fragment {
            components.fragment = fragment.map(|value| encode_scalar(value, already_encoded));
        }
        if let Some(params) = self.path_params {
            components.path_params = if already_encoded {
                params
            } else {
                params.encoded()
            };
        }
        if let Some(query) = self.query {
            components.query = if already_encoded {
                query
            } else {
                query.encoded()
            };
        }

        Ok(Url::from_components(components))
    }
}

fn encode_scalar(value: String, already_encoded: bool) -> String {
    if already_encoded {
        value
    } else {
        encode_component(&value)
    }
}

fn encode_whole_path(value: String, already_encoded: bool) -> String {
    if already_encoded {
        value
    } else {
        encode_path(&value)
    }
}
