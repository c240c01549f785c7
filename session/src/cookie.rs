//! Read-only access to the session indicator cookie.
//!
//! The backend sets the cookie on login and clears it on logout. The client
//! only reads it to forward as a bearer token on the probe request.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Name of the cookie carrying the session indicator.
pub const SESSION_COOKIE: &str = "session";

/// Extract the URL-decoded session token from a `document.cookie` string.
///
/// Cookies are `"; "`-separated `name=value` pairs. The first cookie named
/// exactly [`SESSION_COOKIE`] wins. Empty or undecodable values yield `None`.
#[must_use]
pub fn session_token(cookie_header: &str) -> Option<String> {
    cookie_value(cookie_header, SESSION_COOKIE)
}

fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    let raw = cookie_header
        .split(';')
        .map(str::trim_start)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then_some(value)
        })?;
    if raw.is_empty() {
        return None;
    }
    match urlencoding::decode(raw) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            log::warn!("ignoring undecodable {name} cookie: {e}");
            None
        }
    }
}
