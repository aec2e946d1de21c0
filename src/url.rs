use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::builder::UrlBuilder;
use crate::compat::{String, ToString, Vec};
use crate::error::{Result, UrlError};
use crate::params::{ParamMap, ParamValue};
use crate::parser::parse_components;
use crate::percent::{decode, encode_component};
use crate::url_components::UrlComponents;

/// An immutable URL.
///
/// A `Url` is a value: parse one, read its components, derive new ones
/// with [`to_builder`](Self::to_builder) or the `set_`/`delete_` methods.
/// Nothing mutates in place, so a `Url` can be shared freely across
/// threads.
///
/// Components are stored percent-encoded; the component accessors decode
/// on the way out, while [`as_str`](Self::as_str) returns the wire form.
/// Two URLs are equal when their rendered strings are equal, whatever
/// mix of parsing and building produced them.
///
/// ```
/// use imurl::Url;
///
/// let url = Url::parse("https://example.com/path?q=search#frag").unwrap();
/// assert_eq!(url.scheme().as_deref(), Some("https"));
/// assert_eq!(url.host().as_deref(), Some("example.com"));
/// assert_eq!(url.path().as_deref(), Some("/path"));
///
/// let with_port = url.to_builder().port(8080).build().unwrap();
/// assert_eq!(with_port.as_str(), "https://example.com:8080/path?q=search#frag");
/// assert_eq!(url.as_str(), "https://example.com/path?q=search#frag");
/// ```
#[derive(Clone)]
pub struct Url {
    components: UrlComponents,
    rendered: String,
}

impl Url {
    /// Parse a URL string with the default `;` and `&` delimiters.
    ///
    /// To parse with different delimiters, go through the builder:
    /// `Url::builder().url(input).query_delimiter("|").build()`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidPort`] when the port is not a number
    /// in `0..=65535`.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = parse_components(
            input,
            crate::url_components::DEFAULT_QUERY_DELIMITER,
            crate::url_components::DEFAULT_PARAM_DELIMITER,
        )?;
        Ok(Self::from_components(raw.into_encoded()))
    }

    /// Start building a URL from nothing.
    pub fn builder() -> UrlBuilder {
        UrlBuilder::new()
    }

    /// A builder seeded with this URL's components, for deriving a
    /// modified copy. Untouched components carry over exactly as stored,
    /// with no decode/re-encode round trip.
    ///
    /// ```
    /// use imurl::Url;
    ///
    /// let url = Url::parse("https://example.com/path").unwrap();
    /// let other = url.to_builder().scheme("http").clear_path().build().unwrap();
    /// assert_eq!(other.as_str(), "http://example.com");
    /// ```
    pub fn to_builder(&self) -> UrlBuilder {
        UrlBuilder::from_encoded(self.components.clone())
    }

    /// Build a `Url` from already-encoded components. This is the
    /// lossless structural constructor: `url.components()` round-trips
    /// through it unchanged. For raw (unencoded) input use the builder.
    pub fn from_components(components: UrlComponents) -> Self {
        let rendered = render(&components);
        Self {
            components,
            rendered,
        }
    }

    /// The rendered URL string (wire form).
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Whether the URL renders as the empty string.
    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    /// The stored components, in encoded form.
    pub fn components(&self) -> &UrlComponents {
        &self.components
    }

    /// Consume the URL, returning its encoded components.
    pub fn into_components(self) -> UrlComponents {
        self.components
    }

    /// The URL scheme, e.g. `https`. Lowercased by the parser.
    pub fn scheme(&self) -> Option<String> {
        decoded_scalar(&self.components.scheme)
    }

    /// The username, decoded.
    pub fn username(&self) -> Option<String> {
        decoded_scalar(&self.components.username)
    }

    /// The password, decoded.
    pub fn password(&self) -> Option<String> {
        decoded_scalar(&self.components.password)
    }

    /// The host, decoded and lowercased by the parser.
    ///
    /// Three states: `None` when the URL has no authority at all,
    /// `Some("")` when the authority marker is present but empty
    /// (`file:///path`), `Some(host)` otherwise.
    pub fn host(&self) -> Option<String> {
        self.components
            .host
            .as_deref()
            .map(|host| decode(host).into_owned())
    }

    /// The port. `Some(0)` is a real port, distinct from `None`.
    pub fn port(&self) -> Option<u16> {
        self.components.port
    }

    /// The path, decoded.
    pub fn path(&self) -> Option<String> {
        decoded_scalar(&self.components.path)
    }

    /// The fragment, decoded.
    pub fn fragment(&self) -> Option<String> {
        decoded_scalar(&self.components.fragment)
    }

    /// The delimiter between path parameters, `;` unless configured.
    pub fn param_delimiter(&self) -> &str {
        &self.components.param_delimiter
    }

    /// The delimiter between query parameters, `&` unless configured.
    pub fn query_delimiter(&self) -> &str {
        &self.components.query_delimiter
    }

    /// The network location, `[userinfo@]host[:port]`, in wire form.
    /// Empty when the host is absent or empty.
    pub fn netloc(&self) -> String {
        netloc(&self.components).unwrap_or_default()
    }

    /// `username[:password]` in wire form, or `None` when there is no
    /// username. A password without a username does not render.
    pub fn userinfo(&self) -> Option<String> {
        userinfo(&self.components)
    }

    /// The path parameter block as a string, in wire form, without its
    /// leading delimiter. `None` when there are no path parameters.
    pub fn parameters(&self) -> Option<String> {
        let serialized = self
            .components
            .path_params
            .serialize(&self.components.param_delimiter);
        if serialized.is_empty() {
            None
        } else {
            Some(serialized)
        }
    }

    /// The query string, in wire form, without the leading `?`.
    /// `None` when there are no query parameters.
    pub fn query(&self) -> Option<String> {
        let serialized = self
            .components
            .query
            .serialize(&self.components.query_delimiter);
        if serialized.is_empty() {
            None
        } else {
            Some(serialized)
        }
    }

    /// The decoded path split at `/`, without the leading empty segment.
    /// `None` when the path is absent. A segment that contained an
    /// encoded `/` (`%2F`) stays one segment.
    pub fn path_segments(&self) -> Option<Vec<String>> {
        let path = self.components.path.as_deref()?;
        let path = path.strip_prefix('/').unwrap_or(path);
        Some(
            path.split('/')
                .map(|segment| decode(segment).into_owned())
                .collect(),
        )
    }

    /// A decoded copy of the path parameter map.
    pub fn param_map(&self) -> ParamMap {
        self.components.path_params.decoded()
    }

    /// A decoded copy of the query parameter map.
    pub fn query_map(&self) -> ParamMap {
        self.components.query.decoded()
    }

    /// Whether a path parameter named `key` (raw, unencoded) exists.
    pub fn has_parameter(&self, key: &str) -> bool {
        self.components.path_params.has(&encode_component(key))
    }

    /// The decoded value of the path parameter named `key`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::KeyNotFound`] when the key is absent.
    pub fn get_parameter(&self, key: &str) -> Result<ParamValue> {
        get(&self.components.path_params, key)
    }

    /// A new URL with the path parameter `key` set to `value`, replacing
    /// any existing entry in place. Key and value are raw and get
    /// encoded; pass [`ParamValue::Flag`] for a bare key.
    #[must_use = "set_parameter returns a new Url and leaves the receiver unchanged"]
    pub fn set_parameter(&self, key: &str, value: impl Into<ParamValue>) -> Self {
        let mut components = self.components.clone();
        components
            .path_params
            .set(encode_component(key), value.into().encoded());
        Self::from_components(components)
    }

    /// A new URL without the path parameter named `key`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::KeyNotFound`] when the key is absent.
    pub fn delete_parameter(&self, key: &str) -> Result<Self> {
        let mut components = self.components.clone();
        delete(&mut components.path_params, key)?;
        Ok(Self::from_components(components))
    }

    /// Whether a query parameter named `key` (raw, unencoded) exists.
    pub fn has_query(&self, key: &str) -> bool {
        self.components.query.has(&encode_component(key))
    }

    /// The decoded value of the query parameter named `key`.
    ///
    /// ```
    /// use imurl::Url;
    ///
    /// let url = Url::parse("https://example.com/?q=a%20phrase").unwrap();
    /// assert_eq!(url.get_query("q").unwrap().as_str(), Some("a phrase"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::KeyNotFound`] when the key is absent.
    pub fn get_query(&self, key: &str) -> Result<ParamValue> {
        get(&self.components.query, key)
    }

    /// A new URL with the query parameter `key` set to `value`, replacing
    /// any existing entry in place. Key and value are raw and get
    /// encoded; pass [`ParamValue::Flag`] for a bare key.
    ///
    /// ```
    /// use imurl::Url;
    ///
    /// let url = Url::parse("https://example.com/").unwrap();
    /// let searched = url.set_query("q", "a phrase");
    /// assert_eq!(searched.as_str(), "https://example.com/?q=a%20phrase");
    /// ```
    #[must_use = "set_query returns a new Url and leaves the receiver unchanged"]
    pub fn set_query(&self, key: &str, value: impl Into<ParamValue>) -> Self {
        let mut components = self.components.clone();
        components
            .query
            .set(encode_component(key), value.into().encoded());
        Self::from_components(components)
    }

    /// A new URL without the query parameter named `key`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::KeyNotFound`] when the key is absent.
    pub fn delete_query(&self, key: &str) -> Result<Self> {
        let mut components = self.components.clone();
        delete(&mut components.query, key)?;
        Ok(Self::from_components(components))
    }
}

fn decoded_scalar(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(|value| decode(value).into_owned())
}

fn get(map: &ParamMap, key: &str) -> Result<ParamValue> {
    map.get_value(&encode_component(key))
        .map(ParamValue::decoded)
        .ok_or_else(|| UrlError::KeyNotFound(key.to_string()))
}

fn delete(map: &mut ParamMap, key: &str) -> Result<ParamValue> {
    map.delete(&encode_component(key))
        .ok_or_else(|| UrlError::KeyNotFound(key.to_string()))
}

/// Render encoded components to the wire string:
/// `[scheme ":"] ["//" netloc] [path] [delim params] ["?" query] ["#" fragment]`.
///
/// The `//` marker follows host presence, not host emptiness, so
/// `file:///path` (empty host) and `file:/path` (absent host) both
/// survive a round trip. Empty scheme, userinfo and fragment are
/// skipped; an empty parameter or query block emits nothing.
fn render(components: &UrlComponents) -> String {
    let mut out = String::new();
    if let Some(scheme) = components.scheme.as_deref() {
        if !scheme.is_empty() {
            out.push_str(scheme);
            out.push(':');
        }
    }
    if let Some(netloc) = netloc(components) {
        out.push_str("//");
        out.push_str(&netloc);
    }
    if let Some(path) = components.path.as_deref() {
        out.push_str(path);
    }
    let params = components
        .path_params
        .serialize(&components.param_delimiter);
    if !params.is_empty() {
        out.push_str(&components.param_delimiter);
        out.push_str(&params);
    }
    let query = components.query.serialize(&components.query_delimiter);
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }
    if let Some(fragment) = components.fragment.as_deref() {
        if !fragment.is_empty() {
            out.push('#');
            out.push_str(fragment);
        }
    }
    out
}

/// `[userinfo "@"] host [":" port]`, or `None` when the host is absent.
/// A username or port with no host does not render at all.
fn netloc(components: &UrlComponents) -> Option<String> {
    let host = components.host.as_deref()?;
    let mut out = String::new();
    if let Some(userinfo) = userinfo(components) {
        out.push_str(&userinfo);
        out.push('@');
    }
    out.push_str(host);
    if let Some(port) = components.port {
        out.push(':');
        out.push_str(&port.to_string());
    }
    Some(out)
}

fn userinfo(components: &UrlComponents) -> Option<String> {
    let username = components
        .username
        .as_deref()
        .filter(|username| !username.is_empty())?;
    let mut out = String::new();
    out.push_str(username);
    if let Some(password) = components.password.as_deref() {
        if !password.is_empty() {
            out.push(':');
            out.push_str(password);
        }
    }
    Some(out)
}

impl Default for Url {
    /// The empty URL: every component absent, rendering as `""`.
    fn default() -> Self {
        Self::from_components(UrlComponents::default())
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}

impl From<UrlComponents> for Url {
    fn from(components: UrlComponents) -> Self {
        Self::from_components(components)
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Url").field(&self.rendered).finish()
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

impl PartialEq for Url {
    /// URLs compare by rendered string, so different internal
    /// representations that render identically are equal.
    fn eq(&self, other: &Self) -> bool {
        self.rendered == other.rendered
    }
}

impl Eq for Url {}

impl Hash for Url {
    /// Hashes the rendered string, keeping hashing consistent with
    /// equality.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rendered.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Url {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Url {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        let input = String::deserialize(deserializer)?;
        Self::parse(&input).map_err(serde::de::Error::custom)
    }
}
