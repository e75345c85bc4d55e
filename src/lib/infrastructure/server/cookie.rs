//! Session cookie helpers

use crate::application::SessionId;
use crate::constants::SESSION_COOKIE;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;

/// Session id from the request's `Cookie` headers, if present and well formed.
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.parse().ok())
}

pub fn session_cookie(id: SessionId) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn expired_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

pub fn attach(response: &mut Response, cookie: &str) {
    if let Ok(value) = HeaderValue::from_str(cookie) {
        response.headers_mut().append(SET_COOKIE, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_session_among_other_cookies() {
        let id = SessionId::new();
        let mut headers = HeaderMap::new();
        let raw = format!("theme=dark; {SESSION_COOKIE}={id}; other=1");
        headers.insert(COOKIE, HeaderValue::from_str(&raw).unwrap());
        assert_eq!(session_from_headers(&headers), Some(id));
    }

    #[test]
    fn ignores_malformed_session_value() {
        let mut headers = HeaderMap::new();
        let raw = format!("{SESSION_COOKIE}=garbage");
        headers.insert(COOKIE, HeaderValue::from_str(&raw).unwrap());
        assert_eq!(session_from_headers(&headers), None);
    }

    #[test]
    fn cookie_round_trips() {
        let id = SessionId::new();
        let mut headers = HeaderMap::new();
        let set = session_cookie(id);
        let pair = set.split(';').next().unwrap();
        headers.insert(COOKIE, HeaderValue::from_str(pair).unwrap());
        assert_eq!(session_from_headers(&headers), Some(id));
    }
}
