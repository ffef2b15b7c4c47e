//! Bid record type and the folder-name codec

use crate::error::{Error, Result};

/// Characters that cannot appear in a file or folder name on a Windows share
const ILLEGAL_NAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Separator between the fields of a bid folder name
const FIELD_SEPARATOR: &str = " - ";

/// Number of fields encoded in a bid folder name
const FIELD_COUNT: usize = 5;

/// A single bid, as encoded in a folder name and mirrored to a workbook row
///
/// `bid_number` is kept as text so that leading formatting survives the trip
/// through the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidRecord {
    pub bid_number: String,
    pub initials: String,
    pub due_date: String,
    pub customer: String,
    pub bid_name: String,
    /// Canonical folder name the record was parsed from or built into
    pub folder_name: String,
}

/// Replace filesystem-illegal characters with spaces, collapse whitespace
/// runs, and trim.
pub fn sanitize(value: &str) -> String {
    let replaced: String = value
        .chars()
        .map(|c| if ILLEGAL_NAME_CHARS.contains(&c) { ' ' } else { c })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a due date to zero-padded `MM-DD`.
///
/// Accepts `M-D`, `MM-D`, `M-DD`, and `MM-DD` with month 1-12 and day 1-31;
/// there is no calendar-validity check beyond those ranges.
pub fn normalize_due_date(raw: &str) -> Result<String> {
    let parse_part = |part: &str| -> Option<u32> {
        if part.is_empty() || part.len() > 2 || !part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };

    let parsed = raw
        .trim()
        .split_once('-')
        .and_then(|(month, day)| Some((parse_part(month)?, parse_part(day)?)))
        .filter(|&(month, day)| (1..=12).contains(&month) && (1..=31).contains(&day));

    match parsed {
        Some((month, day)) => Ok(format!("{month:02}-{day:02}")),
        None => Err(Error::InvalidFormat(format!(
            "Bid due date must be MM-DD (ex: 12-5 or 12-05), got: {raw}"
        ))),
    }
}

/// Build the canonical folder name for a bid.
///
/// The five fields are joined with `" - "` and the whole string is sanitized,
/// so stray separators inside a field collapse the same way they would have
/// when typed directly into a folder name.
pub fn build_folder_name(
    bid_number: &str,
    initials: &str,
    due_date: &str,
    customer: &str,
    bid_name: &str,
) -> String {
    sanitize(&format!(
        "{bid_number} - {initials} - {due_date} - {customer} - {bid_name}"
    ))
}

/// Parse a folder name into a [`BidRecord`].
///
/// Splits on `" - "` capped at five segments; the last segment absorbs any
/// further separators. Returns `None` for folders that do not follow the
/// naming pattern — callers skip those, they are not errors.
pub fn parse_folder_name(folder_name: &str) -> Option<BidRecord> {
    let parts: Vec<&str> = folder_name.splitn(FIELD_COUNT, FIELD_SEPARATOR).collect();
    if parts.len() < FIELD_COUNT {
        return None;
    }
    Some(BidRecord {
        bid_number: parts[0].trim().to_string(),
        initials: parts[1].trim().to_string(),
        due_date: parts[2].trim().to_string(),
        customer: parts[3].trim().to_string(),
        bid_name: parts[4].trim().to_string(),
        folder_name: folder_name.to_string(),
    })
}

/// Next available bid number: the highest leading numeric token across the
/// given folder names, plus one. `None` when no folder starts with a number.
pub fn next_bid_number<'a, I>(folder_names: I) -> Option<u32>
where
    I: IntoIterator<Item = &'a str>,
{
    folder_names
        .into_iter()
        .filter_map(leading_number)
        .max()
        .map(|max| max + 1)
}

/// Leading numeric token of a folder name, if it ends at a word boundary
fn leading_number(name: &str) -> Option<u32> {
    let trimmed = name.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    // "26001abc" is not a bid number; "26001 - ..." and plain "26001" are
    match trimmed[digits.len()..].chars().next() {
        Some(c) if c.is_alphanumeric() || c == '_' => None,
        _ => digits.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sanitize_strips_illegal_characters() {
        let cleaned = sanitize("A/B:C*D");
        assert_eq!(cleaned, "A B C D");
        assert!(!cleaned.contains("  "));
        assert!(cleaned.chars().all(|c| !ILLEGAL_NAME_CHARS.contains(&c)));
    }

    #[test]
    fn test_sanitize_collapses_and_trims_whitespace() {
        assert_eq!(sanitize("  a \t b  \n c "), "a b c");
        assert_eq!(sanitize("??"), "");
    }

    #[test]
    fn test_normalize_due_date_pads() {
        assert_eq!(normalize_due_date("12-5").unwrap(), "12-05");
        assert_eq!(normalize_due_date("2-29").unwrap(), "02-29");
        assert_eq!(normalize_due_date("02-09").unwrap(), "02-09");
    }

    #[test]
    fn test_normalize_due_date_rejects_out_of_range() {
        assert!(matches!(
            normalize_due_date("13-01"),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            normalize_due_date("12-32"),
            Err(Error::InvalidFormat(_))
        ));
        assert!(normalize_due_date("12").is_err());
        assert!(normalize_due_date("123-05").is_err());
        assert!(normalize_due_date("1a-05").is_err());
    }

    #[test]
    fn test_folder_name_round_trip() {
        let name = build_folder_name("26001", "MD", "12-05", "Acme Builders", "North Plant");
        assert_eq!(name, "26001 - MD - 12-05 - Acme Builders - North Plant");

        let record = parse_folder_name(&name).unwrap();
        assert_eq!(record.bid_number, "26001");
        assert_eq!(record.initials, "MD");
        assert_eq!(record.due_date, "12-05");
        assert_eq!(record.customer, "Acme Builders");
        assert_eq!(record.bid_name, "North Plant");
        assert_eq!(record.folder_name, name);
    }

    #[test]
    fn test_parse_last_segment_absorbs_extra_separators() {
        let record = parse_folder_name("26002 - TS - 01-15 - Acme - Plant - Phase 2").unwrap();
        assert_eq!(record.bid_name, "Plant - Phase 2");
    }

    #[test]
    fn test_parse_rejects_short_names() {
        assert!(parse_folder_name("26000 Proposal Templates").is_none());
        assert!(parse_folder_name("26003 - TS - 01-15 - Acme").is_none());
        assert!(parse_folder_name("").is_none());
    }

    #[test]
    fn test_next_bid_number() {
        let names = ["26001 - MD - 12-05 - Acme - Plant", "26007 - TS - 01-02 - Beta - Office", "zz archive"];
        assert_eq!(next_bid_number(names), Some(26008));
        assert_eq!(next_bid_number(["no numbers here"]), None);
        assert_eq!(next_bid_number(Vec::<&str>::new()), None);
    }

    #[test]
    fn test_leading_number_requires_word_boundary() {
        assert_eq!(leading_number("26001 - MD"), Some(26001));
        assert_eq!(leading_number("  26001"), Some(26001));
        assert_eq!(leading_number("26001abc"), None);
        assert_eq!(leading_number("abc"), None);
    }
}
