use crate::compat::{String, ToString};
use crate::error::{Result, UrlError};
use crate::helpers::{prune_fragment, prune_query};

/// Raw sections of a URL string, undecoded, as produced by the generic
/// splitter plus the host/path disambiguation. `authority` distinguishes
/// `None` (no authority at all) from `Some("")` (authority marker present
/// but empty, as in `file:///x`).
pub(crate) struct RawSplit<'a> {
    pub scheme: Option<String>,
    pub authority: Option<&'a str>,
    pub path: Option<&'a str>,
    pub params: Option<&'a str>,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// The authority section taken apart, still undecoded. `port_params` is a
/// parameter string salvaged from a `host:80;key=value` port token.
#[derive(Debug)]
pub(crate) struct RawAuthority<'a> {
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<u16>,
    pub port_params: Option<String>,
}

/// Split a URL string at its token boundaries: `#` fragment, `?` query,
/// `scheme:`, `//authority`, then path vs. parameter string.
///
/// Without a scheme the grammar is ambiguous between "path only" and
/// "authority with trailing path". The splitter guesses authority-first
/// (the whole remainder lands in the authority slot) and then resolves:
/// a token starting with `/` or the parameter delimiter is really the
/// path section; a token containing `/` splits at the first `/` into
/// host + path; anything else stays a host.
pub(crate) fn split<'a>(input: &'a str, param_delimiter: &str) -> RawSplit<'a> {
    let (rest, fragment) = prune_fragment(input);
    let (rest, query) = prune_query(rest);
    let (scheme, rest) = split_scheme(rest);

    let (authority, path_section) = if let Some(after_slashes) = rest.strip_prefix("//") {
        match after_slashes.find('/') {
            Some(slash) => (
                Some(&after_slashes[..slash]),
                non_empty(&after_slashes[slash..]),
            ),
            None => (Some(after_slashes), None),
        }
    } else if scheme.is_some() {
        (None, non_empty(rest))
    } else if rest.starts_with('/') || rest.starts_with(param_delimiter) {
        // A token starting with `/` or the parameter delimiter cannot be
        // a host: it is the path section, and there is no authority.
        (None, Some(rest))
    } else if let Some(slash) = rest.find('/') {
        (Some(&rest[..slash]), Some(&rest[slash..]))
    } else {
        (non_empty(rest), None)
    };

    // The parameter block is everything after the first delimiter in the
    // path section.
    let (path, params) = match path_section {
        None => (None, None),
        Some(section) => match section.split_once(param_delimiter) {
            Some((path, params)) => (non_empty(path), Some(params)),
            None => (non_empty(section), None),
        },
    };

    RawSplit {
        scheme,
        authority,
        path,
        params,
        query,
        fragment,
    }
}

/// Take a leading `scheme:` off `rest` if one is present.
///
/// A candidate counts as a scheme when it is ALPHA *( ALPHA / DIGIT /
/// `+` / `-` / `.` ) and the text after the colon does not start with an
/// ASCII digit - a digit there reads as `host:port` instead, so that
/// `localhost:8080` keeps its port and `apt:a-package-name` keeps its
/// scheme. Schemes are lowercased.
fn split_scheme(rest: &str) -> (Option<String>, &str) {
    let Some(colon) = rest.find(':') else {
        return (None, rest);
    };
    let candidate = &rest[..colon];
    if !is_scheme_name(candidate) {
        return (None, rest);
    }
    let after = &rest[colon + 1..];
    if after.bytes().next().is_some_and(|b| b.is_ascii_digit()) {
        return (None, rest);
    }
    (Some(candidate.to_ascii_lowercase()), after)
}

fn is_scheme_name(candidate: &str) -> bool {
    let mut bytes = candidate.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

/// Take an authority section apart: userinfo at the last `@`, userinfo at
/// the first `:`, then host/port with the port/parameter salvage.
///
/// # Errors
///
/// Returns [`UrlError::InvalidPort`] when the port token is non-numeric
/// and splitting a parameter block off it does not leave a valid port.
pub(crate) fn split_authority<'a>(
    authority: &'a str,
    param_delimiter: &str,
) -> Result<RawAuthority<'a>> {
    let (userinfo, hostport) = match authority.rsplit_once('@') {
        Some((userinfo, hostport)) => (Some(userinfo), hostport),
        None => (None, authority),
    };
    let (username, password) = match userinfo {
        None => (None, None),
        Some(userinfo) => match userinfo.split_once(':') {
            Some((username, password)) => (Some(username), Some(password)),
            None => (Some(userinfo), None),
        },
    };

    let (host, port_token) = split_host_port(hostport);
    let mut port = None;
    let mut port_params = None;
    match port_token {
        None | Some("") => {}
        Some(token) => {
            if let Some(value) = parse_port(token) {
                port = Some(value);
            } else {
                // With an empty path the parameter block ends up glued to
                // the port token (`host:80;key=value`). Split it off once;
                // the leading segment must still be a valid port.
                match token.split_once(param_delimiter) {
                    Some((first, rest)) => {
                        let value = parse_port(first)
                            .ok_or_else(|| UrlError::InvalidPort(first.to_string()))?;
                        port = Some(value);
                        port_params = Some(rest.to_string());
                    }
                    None => return Err(UrlError::InvalidPort(token.to_string())),
                }
            }
        }
    }

    Ok(RawAuthority {
        username,
        password,
        host,
        port,
        port_params,
    })
}

/// Split `host[:port]`, keeping `[bracketed]` hosts intact: for those the
/// port only starts after the closing bracket.
fn split_host_port(hostport: &str) -> (&str, Option<&str>) {
    if hostport.starts_with('[') {
        if let Some(end) = hostport.find(']') {
            let port = hostport[end + 1..].strip_prefix(':');
            return (&hostport[..=end], port);
        }
        return (hostport, None);
    }
    match hostport.rfind(':') {
        Some(pos) => (&hostport[..pos], Some(&hostport[pos + 1..])),
        None => (hostport, None),
    }
}

/// Parse a port token to u16. Returns None if empty, contains non-digit
/// characters, or is out of range.
fn parse_port(token: &str) -> Option<u16> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u16>().ok()
}

fn non_empty(text: &str) -> Option<&str> {
    if text.is_empty() { None } else { Some(text) }
}
