#[cfg(test)]
mod parser_tests {
    use pretty_assertions::assert_eq;
    use prettylog::{parse, reformat, Identity, Record, DELIMITER};

    /// What git would emit for a tagged format string: placeholders replaced
    /// by values, delimiters passed through untouched.
    fn render(format: &str, substitutions: &[(&str, &str)]) -> String {
        let mut line = reformat(format);
        for (token, value) in substitutions {
            line = line.replace(token, value);
        }
        line
    }

    #[test]
    fn recovers_fields_from_a_tagged_line() {
        let line = render(
            "%H%an%ae",
            &[
                ("%H", "abc123"),
                ("%an", "Jane"),
                ("%ae", "jane@x.com"),
            ],
        );

        let record = parse(&line, "%H%an%ae");
        assert_eq!(
            record,
            Record {
                commit_hash: Some("abc123".to_string()),
                authored: Some(Identity {
                    name: Some("Jane".to_string()),
                    email: Some("jane@x.com".to_string()),
                    ..Identity::default()
                }),
                ..Record::default()
            }
        );
    }

    #[test]
    fn literal_text_in_the_format_carries_no_field() {
        let line = render(
            "commit %h by %an",
            &[("%h", "d3adb33f"), ("%an", "Jane")],
        );

        let record = parse(&line, "commit %h by %an");
        assert_eq!(record.abbrev_commit_hash.as_deref(), Some("d3adb33f"));
        assert_eq!(record.authored.unwrap().name.as_deref(), Some("Jane"));
        assert_eq!(record.commit_hash, None);
    }

    #[test]
    fn accepts_a_pretagged_format_string() {
        let tagged = reformat("%s");
        let line = render("%s", &[("%s", "fix the thing")]);

        // Same result whether the caller passes the raw or the tagged format.
        assert_eq!(parse(&line, &tagged), parse(&line, "%s"));
        assert_eq!(
            parse(&line, &tagged).subject.as_deref(),
            Some("fix the thing")
        );
    }

    #[test]
    fn strips_a_graph_drawing_prefix() {
        let line = render("%H", &[("%H", "deadbeef")]);

        for prefix in ["* ", "*   "] {
            let decorated = format!("{}{}", prefix, line);
            let record = parse(&decorated, "%H");
            assert_eq!(record.commit_hash.as_deref(), Some("deadbeef"));
        }
    }

    #[test]
    fn coerces_unix_timestamps_to_numbers() {
        let line = render("%at%ct", &[("%at", "1609459200"), ("%ct", "1609459300")]);

        let record = parse(&line, "%at%ct");
        assert_eq!(record.authored.unwrap().unix_date, Some(1609459200.0));
        assert_eq!(record.committed.unwrap().unix_date, Some(1609459300.0));
    }

    #[test]
    fn malformed_timestamps_become_nan() {
        let line = render("%at", &[("%at", "not a number")]);

        let record = parse(&line, "%at");
        let unix = record.authored.unwrap().unix_date.unwrap();
        assert!(unix.is_nan());
    }

    #[test]
    fn trims_ref_decorations() {
        let line = render("%d", &[("%d", " (HEAD -> main, tag: v1.0)")]);

        let record = parse(&line, "%d");
        assert_eq!(record.refs.as_deref(), Some("(HEAD -> main, tag: v1.0)"));
    }

    #[test]
    fn short_lines_yield_partial_records() {
        // Line produced as if git only substituted the first placeholder.
        let line = format!("{}abc123", DELIMITER);

        let record = parse(&line, "%H%an%ae");
        assert_eq!(record.commit_hash.as_deref(), Some("abc123"));
        assert_eq!(record.authored, None);
    }

    #[test]
    fn empty_segments_are_empty_strings_not_absent() {
        // An empty decoration list substitutes to zero characters.
        let line = render("%d%s", &[("%d", ""), ("%s", "subject")]);

        let record = parse(&line, "%d%s");
        assert_eq!(record.refs.as_deref(), Some(""));
        assert_eq!(record.subject.as_deref(), Some("subject"));
    }

    #[test]
    fn unrecognized_placeholders_are_skipped() {
        // %Z is not a git placeholder; it stays literal in the line and the
        // parser writes nothing for it.
        let line = render("%h%Z", &[("%h", "d3adb33f")]);

        let record = parse(&line, "%h%Z");
        assert_eq!(
            record,
            Record {
                abbrev_commit_hash: Some("d3adb33f".to_string()),
                ..Record::default()
            }
        );
    }

    #[test]
    fn groups_are_created_lazily() {
        let line = render("%an", &[("%an", "Jane")]);

        let record = parse(&line, "%an");
        assert!(record.authored.is_some());
        assert_eq!(record.committed, None);
        assert_eq!(record.signer, None);
        assert_eq!(record.reflog, None);
    }

    #[test]
    fn reflog_and_signer_groups_are_populated() {
        let line = render(
            "%gD%gs%GS%GK",
            &[
                ("%gD", "refs/heads/main@{0}"),
                ("%gs", "commit: add feature"),
                ("%GS", "Jane"),
                ("%GK", "4AEE18F83AFDEB23"),
            ],
        );

        let record = parse(&line, "%gD%gs%GS%GK");
        let reflog = record.reflog.unwrap();
        assert_eq!(reflog.selector.as_deref(), Some("refs/heads/main@{0}"));
        assert_eq!(reflog.subject.as_deref(), Some("commit: add feature"));
        let signer = record.signer.unwrap();
        assert_eq!(signer.name.as_deref(), Some("Jane"));
        assert_eq!(signer.key.as_deref(), Some("4AEE18F83AFDEB23"));
    }

    #[test]
    fn parsing_is_idempotent() {
        let line = render("%h %s", &[("%h", "d3adb33f"), ("%s", "fix")]);

        assert_eq!(parse(&line, "%h %s"), parse(&line, "%h %s"));
    }

    #[test]
    fn serialized_records_skip_absent_fields() {
        let line = render("%H%an", &[("%H", "abc123"), ("%an", "Jane")]);

        let record = parse(&line, "%H%an");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "commit_hash": "abc123",
                "authored": { "name": "Jane" }
            })
        );
    }
}
