//! # Access Gate
//!
//! Credential verification for the résumé download.
//!
//! The gate holds a single shared secret. A caller who presents it gets the
//! access-token cookie; there is no per-user identity, no lockout and no
//! revocation. When no secret is configured the gate is disabled and every
//! check reports [`GateError::NotConfigured`], which is distinct from an
//! authentication failure.

use crate::asset::ProtectedAsset;
use crate::cookie::CookiePolicy;
use std::fmt;
use subtle::ConstantTimeEq;
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Why a credential check did not grant access.
///
/// The `Display` text of each variant is safe to return to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    /// No secret is configured for this deployment; the feature is off.
    #[error("Resume download is not configured")]
    NotConfigured,

    /// The credential was absent, empty, or whitespace-only.
    #[error("Password is required")]
    MissingCredential,

    /// The credential does not match the secret.
    #[error("Incorrect password")]
    IncorrectCredential,
}

// =============================================================================
// SECRET
// =============================================================================

/// The deploy-time credential secret.
///
/// `Debug` is redacted so the value cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a configured value. Blank values count as "not configured".
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Compare a candidate against the secret in constant time.
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(candidate.as_bytes(), self.0.as_bytes())
    }

}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

/// Fixed-time byte comparison.
///
/// Returns early only when the lengths differ; length is not treated as
/// sensitive. For equal lengths the running time does not depend on where
/// the first differing byte sits.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

// =============================================================================
// GATE CONFIGURATION
// =============================================================================

/// Everything the gate and the asset server need, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct GateConfig {
    /// The shared secret, or `None` when the feature is disabled.
    pub secret: Option<Secret>,
    /// The file handed out to token holders.
    pub asset: ProtectedAsset,
    /// Attributes of the issued access cookie.
    pub cookie: CookiePolicy,
}

impl GateConfig {
    /// Create a config with the given secret and default asset/cookie settings.
    pub fn new(secret: Option<Secret>) -> Self {
        Self {
            secret,
            ..Self::default()
        }
    }

    /// Replace the protected asset.
    #[must_use]
    pub fn with_asset(mut self, asset: ProtectedAsset) -> Self {
        self.asset = asset;
        self
    }

    /// Replace the cookie policy.
    #[must_use]
    pub fn with_cookie(mut self, cookie: CookiePolicy) -> Self {
        self.cookie = cookie;
        self
    }

    /// Whether a secret is configured.
    pub fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }

    /// Check a submitted credential.
    ///
    /// The configuration check comes first, so a disabled gate reports
    /// `NotConfigured` whatever was submitted. Emptiness is judged on the
    /// trimmed value; the comparison uses the value as submitted.
    pub fn check_credential(&self, candidate: Option<&str>) -> Result<(), GateError> {
        let secret = self.secret.as_ref().ok_or(GateError::NotConfigured)?;

        let candidate = match candidate {
            Some(c) if !c.trim().is_empty() => c,
            _ => return Err(GateError::MissingCredential),
        };

        if secret.matches(candidate) {
            Ok(())
        } else {
            Err(GateError::IncorrectCredential)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
