//! # Folio Core
//!
//! The I/O-free logic behind the Folio portfolio server.
//!
//! - [`gate`]: credential secret, access check, gate configuration
//! - [`cookie`]: the access-token cookie (`resume_access`) and its policy
//! - [`asset`]: the protected file descriptor and download headers
//! - [`listing`]: search/tag filtering for project and notes listings
//! - [`diagram`]: architecture-diagram node selection with URL-hash sync
//!
//! File reads, HTTP and process configuration live in the `folio` app crate.

pub mod asset;
pub mod cookie;
pub mod diagram;
pub mod gate;
pub mod listing;

pub use asset::{DEFAULT_ASSET_PATH, PDF_CONTENT_TYPE, ProtectedAsset, RESUME_FILENAME};
pub use cookie::{
    ACCESS_COOKIE_MAX_AGE, ACCESS_COOKIE_NAME, ACCESS_COOKIE_VALUE, CookiePolicy, find_cookie,
    has_access_token,
};
pub use diagram::{Diagram, DiagramError, DiagramNode, Selection};
pub use gate::{GateConfig, GateError, Secret, constant_time_eq};
pub use listing::{ListingEntry, ListingFilter, all_tags};
