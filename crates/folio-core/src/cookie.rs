//! # Access Cookie
//!
//! The access token issued by the gate is a fixed cookie value. Holding it
//! within its lifetime is the whole authorization; nothing identifies the
//! holder.

// =============================================================================
// CONSTANTS
// =============================================================================

/// Name of the access-token cookie.
pub const ACCESS_COOKIE_NAME: &str = "resume_access";

/// Value of the access-token cookie.
pub const ACCESS_COOKIE_VALUE: &str = "1";

/// Cookie lifetime in seconds (1 hour).
pub const ACCESS_COOKIE_MAX_AGE: u64 = 60 * 60;

/// Cookie path.
pub const ACCESS_COOKIE_PATH: &str = "/";

// =============================================================================
// COOKIE POLICY
// =============================================================================

/// Attributes of the issued cookie that vary by deployment.
///
/// Only `Secure` is configurable. It is on in production and off for local
/// development over plain HTTP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CookiePolicy {
    /// Emit the `Secure` attribute.
    pub secure: bool,
}

impl CookiePolicy {
    /// Policy for a production deployment (`Secure` set).
    pub fn production() -> Self {
        Self { secure: true }
    }

    /// Policy for local development (`Secure` unset).
    pub fn development() -> Self {
        Self { secure: false }
    }

    /// The `Set-Cookie` header value granting access.
    ///
    /// `resume_access=1; Max-Age=3600; HttpOnly; SameSite=Lax; Path=/[; Secure]`
    pub fn set_cookie_value(&self) -> String {
        let mut value = format!(
            "{}={}; Max-Age={}; HttpOnly; SameSite=Lax; Path={}",
            ACCESS_COOKIE_NAME, ACCESS_COOKIE_VALUE, ACCESS_COOKIE_MAX_AGE, ACCESS_COOKIE_PATH
        );
        if self.secure {
            value.push_str("; Secure");
        }
        value
    }
}

// =============================================================================
// COOKIE HEADER PARSING
// =============================================================================

/// Find a cookie's value in a `Cookie` request header.
///
/// Pairs are split on `;`, and surrounding whitespace is ignored. Returns
/// the first match.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then_some(value.trim())
    })
}

/// Whether any of the given `Cookie` headers carries a usable access token.
///
/// Absent and empty values are rejected. Any other value is accepted.
pub fn has_access_token<'a>(headers: impl IntoIterator<Item = &'a str>) -> bool {
    headers
        .into_iter()
        .filter_map(|header| find_cookie(header, ACCESS_COOKIE_NAME))
        .any(|value| !value.is_empty())
}

// =============================================================================
// TESTS
// =============================================================================
