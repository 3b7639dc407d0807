//! Session Token
//!
//! The auth endpoints hand back a bearer token which is kept in a cookie.
//! A reload keeps the session while every other piece of state reseeds.

use wasm_bindgen::JsCast;

const TOKEN_COOKIE: &str = "argus_token";
const TOKEN_MAX_AGE_SECS: u32 = 60 * 60 * 24 * 7;

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Read the session token, if any
pub fn auth_token() -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    cookie_value(&cookies, TOKEN_COOKIE)
}

/// Store the session token after a successful login or signup
pub fn store_token(token: &str) {
    if let Some(doc) = html_document() {
        let cookie = format!(
            "{}={}; path=/; max-age={}; samesite=lax",
            TOKEN_COOKIE, token, TOKEN_MAX_AGE_SECS
        );
        let _ = doc.set_cookie(&cookie);
    }
}

/// Drop the session token
pub fn clear_token() {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{}=; path=/; max-age=0", TOKEN_COOKIE));
    }
}

/// Extract a named cookie from a `document.cookie` string
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|part| {
        part.trim_start()
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
            .map(|value| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_token_among_cookies() {
        let header = "theme=dark; argus_token=abc123; other=1";
        assert_eq!(cookie_value(header, "argus_token"), Some("abc123".to_string()));
    }

    #[test]
    fn test_finds_token_at_start_and_alone() {
        assert_eq!(
            cookie_value("argus_token=xyz; theme=dark", "argus_token"),
            Some("xyz".to_string())
        );
        assert_eq!(cookie_value("argus_token=xyz", "argus_token"), Some("xyz".to_string()));
    }

    #[test]
    fn test_missing_or_lookalike_names_return_none() {
        assert_eq!(cookie_value("", "argus_token"), None);
        assert_eq!(cookie_value("theme=dark", "argus_token"), None);
        // A longer cookie name sharing the prefix must not match.
        assert_eq!(cookie_value("argus_token_v2=abc", "argus_token"), None);
    }

    #[test]
    fn test_value_may_contain_equals() {
        assert_eq!(
            cookie_value("argus_token=a=b=c", "argus_token"),
            Some("a=b=c".to_string())
        );
    }
}
