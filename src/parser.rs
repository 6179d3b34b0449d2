use crate::placeholder::{self, SENTINEL};
use crate::record::Record;
use crate::reformat::{reformat, DELIMITER};
use once_cell::sync::Lazy;
use regex::Regex;

/// Decoration `--graph` prepends to each line, with any amount of trailing
/// whitespace (merge rendering pads it).
static GRAPH_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\s+").unwrap());

/// Parse one line of `git log` output into a [`Record`].
///
/// `format` is the pretty-format string the line was produced with. It may be
/// raw or already tagged with [`DELIMITER`]; a raw format is tagged here via
/// [`reformat`] first. Both strings are then split on the delimiter and
/// walked by index: each placeholder segment in the format claims the line
/// segment at the same position.
///
/// This never fails. Literal segments and unrecognized tokens are skipped,
/// and a line with fewer segments than the format yields a partial record.
pub fn parse(line: &str, format: &str) -> Record {
    let line = GRAPH_PREFIX_RE.replace(line, "");

    let tagged;
    let format = if format.contains(DELIMITER) {
        format
    } else {
        tagged = reformat(format);
        &tagged
    };

    let fields: Vec<&str> = format.split(DELIMITER).collect();
    let values: Vec<&str> = line.split(DELIMITER).collect();
    log::trace!(
        "parsing {} line segments against {} format segments",
        values.len(),
        fields.len()
    );

    let mut record = Record::default();
    for (i, field) in fields.iter().enumerate() {
        if !field.starts_with(SENTINEL) {
            continue; // literal text between placeholders
        }
        if let (Some(slot), Some(value)) = (placeholder::lookup(field), values.get(i).copied()) {
            slot.write(&mut record, value);
        }
    }

    record
}
