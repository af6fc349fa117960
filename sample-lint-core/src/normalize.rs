//! Text normalization for lenient comparisons

use regex_utils::text;

/// Strip the special characters authors commonly purge from a description
/// by hand, so a cleaned-up stored copy can be matched against the README.
pub fn sub_special_char(input: &str) -> String {
    text::strip_special_chars(input)
}
