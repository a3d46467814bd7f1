use std::sync::LazyLock;

use regex::Regex;

// Unanchored, with `.` spelled as "any char but a line terminator" the way
// a browser's `RegExp.test` reads `.+@.+\..+` over the raw field value.
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\n\r\u{2028}\u{2029}]+@[^\n\r\u{2028}\u{2029}]+\.[^\n\r\u{2028}\u{2029}]+")
        .unwrap()
});

/// Minimal syntactic email check: something, `@`, something, `.`, something.
///
/// This only catches obviously malformed input before submission. It is not
/// address validation.
pub fn is_plausible_email(value: &str) -> bool {
    RE_EMAIL.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_shapes() {
        for value in ["a@b.c", "a@b.co", "user@example.com", "first.last@sub.example.org"] {
            assert!(is_plausible_email(value), "{value} should pass");
        }
    }

    #[test]
    fn rejects_malformed_values() {
        for value in ["", "not-an-email", "@b.c", "a@.c", "a@b.", "a@bc", "a.b@c", "ab.c"] {
            assert!(!is_plausible_email(value), "{value:?} should fail");
        }
    }

    #[test]
    fn line_terminators_break_every_part() {
        for value in [
            "\r@b.c",
            "a@\rb.c",
            "a@b.\u{2028}",
            "\u{2029}@b.c",
            "a\n@b.c",
            "a@b\r.c",
        ] {
            assert!(!is_plausible_email(value), "{value:?} should fail");
        }
        // A well-formed line next to a line break still matches, as in a browser.
        assert!(is_plausible_email("junk\r\na@b.c"));
    }

    #[test]
    fn is_permissive_about_the_rest() {
        assert!(is_plausible_email("a b@c d.e f"));
        assert!(is_plausible_email("a@@b..c"));
    }
}
