//! Filter HTML into a minimal safe subset: scripts, styles, comments, and a
//! fixed denylist of structural, media, and security sensitive tags are
//! removed at every depth, all attributes are stripped except `href` on
//! anchors, and whitespace is optionally collapsed.

/// Disallowed tag names.
pub mod denylist;
/// Tree filtering.
pub mod filter;
/// Whitespace normalization.
pub mod normalize;
/// End to end transformation.
pub mod transform;
// shortcut
pub use transform::{process_html, SieveConfig, SieveError};
