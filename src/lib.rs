//! Structured parsing of `git log --pretty=format` output.
//!
//! git substitutes placeholders like `%H` and `%an` with commit metadata, but
//! the resulting line gives no way to tell where one field ends and the next
//! begins. This crate solves that by tagging the format string first: every
//! recognized placeholder is wrapped in a [`DELIMITER`] that git passes
//! through untouched, so the emitted line can be split back into fields and
//! mapped onto a typed [`Record`].
//!
//! The intended flow is: tag the format with [`reformat`], hand the tagged
//! string to `git log`, then feed each output line together with the format
//! to [`parse`]. Running git is the caller's job; this crate only transforms
//! strings.
//!
//! ```
//! let tagged = prettylog::reformat("%h %s");
//!
//! // What git would emit for that tagged format string.
//! let line = tagged
//!     .replace("%h", "d3adb33f")
//!     .replace("%s", "Initial commit");
//!
//! let record = prettylog::parse(&line, "%h %s");
//! assert_eq!(record.abbrev_commit_hash.as_deref(), Some("d3adb33f"));
//! assert_eq!(record.subject.as_deref(), Some("Initial commit"));
//! ```
//!
//! Parsing never fails: unrecognized placeholders are skipped and lines with
//! missing fields produce partial records.

pub mod extract;
pub mod parser;
pub mod placeholder;
pub mod record;
pub mod reformat;

pub use extract::extract;
pub use parser::parse;
pub use record::{Identity, Record, Reflog, Signer};
pub use reformat::{reformat, DELIMITER};
