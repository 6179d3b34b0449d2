use serde::Serialize;

/// The structured result of parsing one line of `git log` output.
///
/// Every slot is optional: a field is `Some` only when the format string that
/// produced the line contained the matching placeholder. Nested groups
/// (author, committer, signer, reflog) are allocated on the first write to
/// any of their members, so a format string without author placeholders
/// leaves `authored` as `None` rather than an empty struct.
///
/// Serializing a record skips absent fields, so the JSON shape contains only
/// what the format string asked for.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    /// Full commit hash (`%H`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
    /// Abbreviated commit hash (`%h`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbrev_commit_hash: Option<String>,
    /// Tree hash (`%T`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_hash: Option<String>,
    /// Abbreviated tree hash (`%t`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbrev_tree_hash: Option<String>,
    /// Parent hashes (`%P`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_hash: Option<String>,
    /// Abbreviated parent hashes (`%p`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbrev_parent_hash: Option<String>,

    /// Author details (`%a*` placeholders)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored: Option<Identity>,
    /// Committer details (`%c*` placeholders)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed: Option<Identity>,

    /// Ref decorations such as branch and tag names (`%d`), trimmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    /// Commit encoding (`%e`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Subject line (`%s`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Sanitized subject line, suitable for a filename (`%f`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized_subject: Option<String>,
    /// Body (`%b`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Raw body, unwrapped subject and body (`%B`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_body: Option<String>,
    /// Commit notes (`%N`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Raw GPG verification message (`%GG`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<String>,
    /// Signature status letter (`%G?`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Signer details (`%GS`, `%GK`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer: Option<Signer>,

    /// Reflog details (`%g*` placeholders)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflog: Option<Reflog>,
}

/// Name, email and date variants for the author or committer of a commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Identity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name with .mailmap rewriting applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailmap_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Email with .mailmap rewriting applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailmap_email: Option<String>,
    /// Date in the format selected by `--date=`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// RFC 2822 date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfc2822_date: Option<String>,
    /// Relative date ("2 weeks ago")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_date: Option<String>,
    /// Unix timestamp in seconds; NaN when the segment was not numeric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unix_date: Option<f64>,
    /// ISO 8601 date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso8601_date: Option<String>,
}

/// Who signed a commit and with which key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Signer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Reflog identity and selector information.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reflog {
    /// Full reflog selector, e.g. `refs/stash@{0}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Shortened reflog selector, e.g. `stash@{0}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbrev_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailmap_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailmap_email: Option<String>,
    /// Reflog subject, e.g. `commit: add feature`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}
