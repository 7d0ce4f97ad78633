//! Display names for groups.

use super::GroupType;

/// Suffix appended to every group name unless configured otherwise.
pub const DEFAULT_SUFFIX: &str = "班";

/// Spreadsheet-style column label for a 1-based id.
///
/// Bijective base 26: there is no zero digit, so `26` is `Z` and `27` is `AA`.
/// Returns an empty string for `0`.
pub fn alphabetic_label(id: u32) -> String {
    let mut letters = Vec::new();
    let mut n = id;

    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }

    letters.iter().rev().collect()
}

/// Full display name of a group: its label followed by `suffix`.
pub fn group_name(group_type: GroupType, id: u32, suffix: &str) -> String {
    match group_type {
        GroupType::Numeric => format!("{}{}", id, suffix),
        GroupType::Alphabetic => format!("{}{}", alphabetic_label(id), suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        assert_eq!(alphabetic_label(1), "A");
        assert_eq!(alphabetic_label(2), "B");
        assert_eq!(alphabetic_label(26), "Z");
    }

    #[test]
    fn two_letters_roll_over_like_spreadsheet_columns() {
        assert_eq!(alphabetic_label(27), "AA");
        assert_eq!(alphabetic_label(28), "AB");
        assert_eq!(alphabetic_label(52), "AZ");
        assert_eq!(alphabetic_label(53), "BA");
        assert_eq!(alphabetic_label(702), "ZZ");
    }

    #[test]
    fn three_letters() {
        assert_eq!(alphabetic_label(703), "AAA");
        assert_eq!(alphabetic_label(16384), "XFD");
    }

    #[test]
    fn zero_has_no_label() {
        assert_eq!(alphabetic_label(0), "");
    }

    #[test]
    fn numeric_names_use_suffix() {
        assert_eq!(group_name(GroupType::Numeric, 7, DEFAULT_SUFFIX), "7班");
        assert_eq!(group_name(GroupType::Numeric, 12, " team"), "12 team");
    }

    #[test]
    fn alphabetic_names_use_suffix() {
        insta::assert_snapshot!(group_name(GroupType::Alphabetic, 28, DEFAULT_SUFFIX), @"AB班");
        assert_eq!(group_name(GroupType::Alphabetic, 53, ""), "BA");
    }
}
