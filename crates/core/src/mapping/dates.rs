//! Packed-date conversions
//!
//! The ERP encodes dates as `YYYYMMDD` with an optional `Thhmmss` suffix;
//! locally dates are ISO `YYYY-MM-DD` strings. Many remote date fields are
//! legitimately blank or malformed, so the remote-to-local direction returns
//! `None` instead of an error.

use chrono::NaiveDate;

/// Convert a packed ERP date (`YYYYMMDD[Thhmmss]`) to ISO `YYYY-MM-DD`.
///
/// Only the leading eight digits are read; the time suffix is discarded.
/// Anything that does not start with a valid calendar date yields `None`.
pub fn packed_to_iso(raw: &str) -> Option<String> {
    let head = raw.trim().get(..8)?;
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(head, "%Y%m%d")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// Convert an ISO `YYYY-MM-DD` date to the packed `YYYYMMDD` form.
///
/// Returns `None` for anything that is not a valid ISO date; callers map an
/// absent local date to an absent remote field, never to an empty string.
pub fn iso_to_packed(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y%m%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_date_with_time_suffix_converts() {
        assert_eq!(packed_to_iso("20230615T143000"), Some("2023-06-15".to_string()));
    }

    #[test]
    fn packed_date_without_time_converts() {
        assert_eq!(packed_to_iso("20230615"), Some("2023-06-15".to_string()));
    }

    #[test]
    fn malformed_packed_dates_become_none() {
        assert_eq!(packed_to_iso("abc"), None);
        assert_eq!(packed_to_iso(""), None);
        assert_eq!(packed_to_iso("2023-06-15"), None);
        // Eight digits but not a calendar date
        assert_eq!(packed_to_iso("20231345"), None);
    }

    #[test]
    fn iso_date_packs() {
        assert_eq!(iso_to_packed("2023-06-15"), Some("20230615".to_string()));
    }

    #[test]
    fn malformed_iso_dates_become_none() {
        assert_eq!(iso_to_packed(""), None);
        assert_eq!(iso_to_packed("20230615"), None);
        assert_eq!(iso_to_packed("2023-13-45"), None);
    }

    #[test]
    fn conversions_invert_each_other() {
        let iso = packed_to_iso("20240229").unwrap();
        assert_eq!(iso_to_packed(&iso), Some("20240229".to_string()));
    }
}
