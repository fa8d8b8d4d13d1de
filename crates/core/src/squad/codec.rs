//! Line codec for the squad registry file.
//!
//! Each record is stored as `encode(team) + "|" + encode(members) + "\n"`.
//! Fields are percent-encoded, so an encoded field never contains the
//! delimiter, a line break or a bare `%`.

use super::types::SquadRecord;

/// Separates the team field from the members field on a registry line.
pub const FIELD_DELIMITER: char = '|';

/// Percent-encodes a field so it is free of delimiters and line breaks.
pub fn encode_field(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Reverses [`encode_field`].
///
/// Never fails: malformed escapes are kept verbatim and invalid UTF-8 is
/// replaced, so a hand-edited registry still loads.
pub fn decode_field(value: &str) -> String {
    let bytes = urlencoding::decode_binary(value.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Serializes a record as one complete registry line, newline included.
pub fn encode_record(record: &SquadRecord) -> String {
    format!(
        "{}{}{}\n",
        encode_field(&record.team),
        FIELD_DELIMITER,
        encode_field(&record.members)
    )
}

/// Parses one registry line.
///
/// Blank lines yield `None`. The line is split on the first delimiter only.
/// A line without any delimiter is read as a team with no members rather
/// than dropped.
pub fn decode_line(line: &str) -> Option<SquadRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let record = match line.split_once(FIELD_DELIMITER) {
        Some((team, members)) => SquadRecord::new(decode_field(team), decode_field(members)),
        None => SquadRecord::new(decode_field(line), String::new()),
    };

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_field_escapes_framing_characters() {
        let encoded = encode_field("Red|Blue\nGreen\r%");
        assert!(!encoded.contains('|'));
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('\r'));
        assert_eq!(encoded, "Red%7CBlue%0AGreen%0D%25");
    }

    #[test]
    fn test_encode_record_produces_single_line() {
        let record = SquadRecord::new("Alpha Squad", "Ann, Ben");
        let line = encode_record(&record);
        assert_eq!(line, "Alpha%20Squad|Ann%2C%20Ben\n");
        assert_eq!(line.matches('\n').count(), 1);
        assert_eq!(line.matches(FIELD_DELIMITER).count(), 1);
    }

    #[test]
    fn test_round_trip_with_hostile_content() {
        let record = SquadRecord::new("Team | Pipe", "Ann\nBen\r\n100% | Cid");
        let decoded = decode_line(&encode_record(&record)).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_round_trip_unicode() {
        let record = SquadRecord::new("Escuadrón Ñ", "Zoë, 李");
        assert_eq!(decode_line(&encode_record(&record)), Some(record));
    }

    #[test]
    fn test_round_trip_empty_fields() {
        let record = SquadRecord::new("", "");
        let line = encode_record(&record);
        assert_eq!(line, "|\n");
        assert_eq!(decode_line(&line), Some(record));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(decode_line(""), None);
        assert_eq!(decode_line("   "), None);
        assert_eq!(decode_line("\n"), None);
    }

    #[test]
    fn test_line_without_delimiter_is_team_only() {
        assert_eq!(
            decode_line("Lone%20Wolf"),
            Some(SquadRecord::new("Lone Wolf", ""))
        );
    }

    #[test]
    fn test_split_on_first_delimiter_only() {
        assert_eq!(
            decode_line("Alpha|Ann|Ben"),
            Some(SquadRecord::new("Alpha", "Ann|Ben"))
        );
    }

    #[test]
    fn test_decode_is_lenient() {
        assert_eq!(decode_field("100%"), "100%");
        assert_eq!(decode_field("%zz"), "%zz");
        assert_eq!(decode_field("%FF"), "\u{FFFD}");
    }

    #[test]
    fn test_decode_does_not_treat_plus_as_space() {
        assert_eq!(decode_field("a+b"), "a+b");
    }
}
