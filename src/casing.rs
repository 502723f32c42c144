//! Pure casing primitives.
//!
//! Commands take their transformation as an injected [`CaseFn`] rather than
//! reaching for an ambient, locale-dependent casing routine. The functions
//! here use Rust's Unicode-aware case mappings and behave the same on every
//! host, which keeps command behavior deterministic under test.

/// A pure text transformation injected into a command at construction time.
pub type CaseFn = fn(&str) -> String;

/// Returns the fully upper-cased form of `text`.
pub fn upper_case(text: &str) -> String {
    text.to_uppercase()
}

/// Returns the title-cased form of `text`.
///
/// The first letter of each whitespace-delimited word is upper-cased and the
/// remaining letters of that word are lower-cased. Whitespace is preserved
/// exactly as it appears in the input.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_case_basic() {
        assert_eq!(upper_case("great expectations"), "GREAT EXPECTATIONS");
        assert_eq!(upper_case(""), "");
        assert_eq!(upper_case("Already UPPER"), "ALREADY UPPER");
    }

    #[test]
    fn upper_case_is_idempotent() {
        let once = upper_case("mixed Case input");
        assert_eq!(upper_case(&once), once);
    }

    #[test]
    fn title_case_basic() {
        assert_eq!(title_case("great expectations"), "Great Expectations");
        assert_eq!(title_case("a"), "A");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_lowers_trailing_letters() {
        assert_eq!(title_case("GREAT EXPECTATIONS"), "Great Expectations");
        assert_eq!(title_case("mIxEd cAsE"), "Mixed Case");
    }

    #[test]
    fn title_case_preserves_whitespace() {
        assert_eq!(title_case("two  spaces"), "Two  Spaces");
        assert_eq!(title_case(" leading tab\there"), " Leading Tab\tHere");
    }
}
