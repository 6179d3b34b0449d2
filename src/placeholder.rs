use crate::record::{Identity, Record, Reflog, Signer};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Character that introduces every placeholder token.
pub const SENTINEL: char = '%';

type Writer = fn(&mut Record, &str);

/// One recognized pretty-format placeholder and the record slot it fills.
pub struct Placeholder {
    pub token: &'static str,
    writer: Writer,
}

impl Placeholder {
    /// Write `value` into the record slot this placeholder maps to, applying
    /// the coercion (numeric parse, trim) the slot requires.
    pub fn write(&self, record: &mut Record, value: &str) {
        (self.writer)(record, value)
    }
}

fn authored(record: &mut Record) -> &mut Identity {
    record.authored.get_or_insert_with(Identity::default)
}

fn committed(record: &mut Record) -> &mut Identity {
    record.committed.get_or_insert_with(Identity::default)
}

fn signer(record: &mut Record) -> &mut Signer {
    record.signer.get_or_insert_with(Signer::default)
}

fn reflog(record: &mut Record) -> &mut Reflog {
    record.reflog.get_or_insert_with(Reflog::default)
}

/// Coerce a unix-timestamp segment to a number. Malformed input becomes NaN
/// rather than an error.
fn unix_seconds(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

/// Every placeholder that maps to a record field, grouped the way git
/// documents them.
pub static PLACEHOLDERS: &[Placeholder] = &[
    // Hashes
    Placeholder { token: "%H", writer: |r, v| r.commit_hash = Some(v.to_string()) },
    Placeholder { token: "%h", writer: |r, v| r.abbrev_commit_hash = Some(v.to_string()) },
    Placeholder { token: "%T", writer: |r, v| r.tree_hash = Some(v.to_string()) },
    Placeholder { token: "%t", writer: |r, v| r.abbrev_tree_hash = Some(v.to_string()) },
    Placeholder { token: "%P", writer: |r, v| r.parent_hash = Some(v.to_string()) },
    Placeholder { token: "%p", writer: |r, v| r.abbrev_parent_hash = Some(v.to_string()) },
    // Author
    Placeholder { token: "%an", writer: |r, v| authored(r).name = Some(v.to_string()) },
    Placeholder { token: "%aN", writer: |r, v| authored(r).mailmap_name = Some(v.to_string()) },
    Placeholder { token: "%ae", writer: |r, v| authored(r).email = Some(v.to_string()) },
    Placeholder { token: "%aE", writer: |r, v| authored(r).mailmap_email = Some(v.to_string()) },
    Placeholder { token: "%ad", writer: |r, v| authored(r).date = Some(v.to_string()) },
    Placeholder { token: "%aD", writer: |r, v| authored(r).rfc2822_date = Some(v.to_string()) },
    Placeholder { token: "%ar", writer: |r, v| authored(r).relative_date = Some(v.to_string()) },
    Placeholder { token: "%at", writer: |r, v| authored(r).unix_date = Some(unix_seconds(v)) },
    Placeholder { token: "%ai", writer: |r, v| authored(r).iso8601_date = Some(v.to_string()) },
    // Committer
    Placeholder { token: "%cn", writer: |r, v| committed(r).name = Some(v.to_string()) },
    Placeholder { token: "%cN", writer: |r, v| committed(r).mailmap_name = Some(v.to_string()) },
    Placeholder { token: "%ce", writer: |r, v| committed(r).email = Some(v.to_string()) },
    Placeholder { token: "%cE", writer: |r, v| committed(r).mailmap_email = Some(v.to_string()) },
    Placeholder { token: "%cd", writer: |r, v| committed(r).date = Some(v.to_string()) },
    Placeholder { token: "%cD", writer: |r, v| committed(r).rfc2822_date = Some(v.to_string()) },
    Placeholder { token: "%cr", writer: |r, v| committed(r).relative_date = Some(v.to_string()) },
    Placeholder { token: "%ct", writer: |r, v| committed(r).unix_date = Some(unix_seconds(v)) },
    Placeholder { token: "%ci", writer: |r, v| committed(r).iso8601_date = Some(v.to_string()) },
    // Commit information
    Placeholder { token: "%d", writer: |r, v| r.refs = Some(v.trim().to_string()) },
    Placeholder { token: "%e", writer: |r, v| r.encoding = Some(v.to_string()) },
    Placeholder { token: "%s", writer: |r, v| r.subject = Some(v.to_string()) },
    Placeholder { token: "%f", writer: |r, v| r.sanitized_subject = Some(v.to_string()) },
    Placeholder { token: "%b", writer: |r, v| r.body = Some(v.to_string()) },
    Placeholder { token: "%B", writer: |r, v| r.raw_body = Some(v.to_string()) },
    Placeholder { token: "%N", writer: |r, v| r.notes = Some(v.to_string()) },
    // Signature verification
    Placeholder { token: "%GG", writer: |r, v| r.verification = Some(v.to_string()) },
    Placeholder { token: "%G?", writer: |r, v| r.signature = Some(v.to_string()) },
    Placeholder { token: "%GS", writer: |r, v| signer(r).name = Some(v.to_string()) },
    Placeholder { token: "%GK", writer: |r, v| signer(r).key = Some(v.to_string()) },
    // Reflog
    Placeholder { token: "%gD", writer: |r, v| reflog(r).selector = Some(v.to_string()) },
    Placeholder { token: "%gd", writer: |r, v| reflog(r).abbrev_selector = Some(v.to_string()) },
    Placeholder { token: "%gn", writer: |r, v| reflog(r).name = Some(v.to_string()) },
    Placeholder { token: "%gN", writer: |r, v| reflog(r).mailmap_name = Some(v.to_string()) },
    Placeholder { token: "%ge", writer: |r, v| reflog(r).email = Some(v.to_string()) },
    Placeholder { token: "%gE", writer: |r, v| reflog(r).mailmap_email = Some(v.to_string()) },
    Placeholder { token: "%gs", writer: |r, v| reflog(r).subject = Some(v.to_string()) },
];

/// Tokens git understands but that carry no commit field (marks, newlines,
/// escapes). They are still delimited so neighboring fields stay aligned, and
/// skipped at parse time.
pub static PASSTHROUGH: &[&str] = &["%m", "%n", "%%", "%x00"];

static BY_TOKEN: Lazy<HashMap<&'static str, &'static Placeholder>> =
    Lazy::new(|| PLACEHOLDERS.iter().map(|p| (p.token, p)).collect());

/// Look up the placeholder for a token. Returns `None` for literal text,
/// passthrough tokens and anything git would not substitute.
pub fn lookup(token: &str) -> Option<&'static Placeholder> {
    BY_TOKEN.get(token).copied()
}

/// All tokens the reformatter must delimit, mapped and passthrough alike.
pub(crate) fn all_tokens() -> impl Iterator<Item = &'static str> {
    PLACEHOLDERS
        .iter()
        .map(|p| p.token)
        .chain(PASSTHROUGH.iter().copied())
}
