//! Per-kind rule registry.
//!
//! Each [`FieldKind`] maps to an ordered chain of [`FieldRule`]s. The whole
//! chain is always evaluated and the message of the LAST violated rule is the
//! one reported, so more specific checks are placed after broader ones.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use super::kinds::FieldKind;

/// Maximum length of the `name` field, in characters.
pub const NAME_MAX_CHARS: usize = 64;

/// Minimum number of digits a phone number must contain.
pub const PHONE_MIN_DIGITS: usize = 11;

/// Maximum length of the `comment` field, in characters.
pub const COMMENT_MAX_CHARS: usize = 1024;

/// Characters removed from a phone number before counting its digits.
pub const PHONE_SEPARATORS: [char; 5] = ['_', '-', '+', '(', ')'];

/// Characters HTML escaping rewrites (`&`, `<`, `>`, `"`).
const HTML_SPECIAL_CHARS: [char; 4] = ['&', '<', '>', '"'];

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё]+$").expect("valid regex"));

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\s*/?\s*[A-Za-z!?][^>]*>").expect("valid regex"));

/// A single check within a field's rule chain.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Message reported when this rule is the last one violated.
    pub message: &'static str,
    /// Returns `true` when the value breaks the rule.
    pub violated: fn(&str) -> bool,
}

const NAME_RULES: &[FieldRule] = &[
    FieldRule {
        message: "invalid name format",
        violated: |v| !NAME_RE.is_match(v),
    },
    FieldRule {
        message: "name must not be empty",
        violated: str::is_empty,
    },
    FieldRule {
        message: "name is too long",
        violated: |v| char_len(v) > NAME_MAX_CHARS,
    },
];

const PHONE_RULES: &[FieldRule] = &[
    FieldRule {
        message: "invalid phone",
        violated: |v| phone_digit_count(v) < PHONE_MIN_DIGITS,
    },
    FieldRule {
        message: "phone must not be empty",
        violated: str::is_empty,
    },
];

const EMAIL_RULES: &[FieldRule] = &[FieldRule {
    message: "invalid email",
    violated: |v| !is_valid_email(v),
}];

const COMMENT_RULES: &[FieldRule] = &[
    FieldRule {
        message: "invalid comment",
        violated: |v| contains_markup(v) || needs_html_escaping(v),
    },
    FieldRule {
        message: "comment is too long",
        violated: |v| char_len(v) > COMMENT_MAX_CHARS,
    },
];

/// Look up the ordered rule chain for a field kind.
pub fn rules_for(kind: FieldKind) -> &'static [FieldRule] {
    match kind {
        FieldKind::Name => NAME_RULES,
        FieldKind::Phone => PHONE_RULES,
        FieldKind::Email => EMAIL_RULES,
        FieldKind::Comment => COMMENT_RULES,
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Count the digits left once phone separators are stripped.
///
/// Whitespace and any other non-digit characters do not count towards the
/// total, so `+38 (067) 123-45-67` yields 12.
pub fn phone_digit_count(value: &str) -> usize {
    value
        .chars()
        .filter(|c| !PHONE_SEPARATORS.contains(c))
        .filter(char::is_ascii_digit)
        .count()
}

/// Syntactic `local@domain.tld` check.
///
/// The `validator` crate accepts dotless domains (`foo@bar`), so the domain is
/// additionally required to end in a TLD (see [`is_valid_tld`]).
pub fn is_valid_email(value: &str) -> bool {
    if !value.validate_email() {
        return false;
    }

    let Some((_, domain)) = value.rsplit_once('@') else {
        return false;
    };

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && is_valid_tld(tld),
        None => false,
    }
}

/// A TLD is either a letter followed by letters or digits, or a punycode
/// `xn--` label. At least two characters either way.
fn is_valid_tld(tld: &str) -> bool {
    if tld.len() < 2 {
        return false;
    }

    if let Some(encoded) = tld.strip_prefix("xn--") {
        return !encoded.is_empty() && encoded.chars().all(|c| c.is_ascii_alphanumeric());
    }

    let mut chars = tld.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Whether stripping markup tags would change the value.
///
/// Tag stripping also removes NUL bytes, so those count as markup.
pub fn contains_markup(value: &str) -> bool {
    value.contains('\0') || TAG_RE.is_match(value)
}

/// Whether HTML-escaping would change the value.
pub fn needs_html_escaping(value: &str) -> bool {
    value.contains(HTML_SPECIAL_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_rules() {
        for kind in FieldKind::ALL {
            assert!(!rules_for(kind).is_empty(), "{kind} has no rules");
        }
    }

    #[test]
    fn phone_digits_ignore_separators_and_spaces() {
        assert_eq!(phone_digit_count("+38(067)123-45-67"), 12);
        assert_eq!(phone_digit_count("+38 (067) 123-45-67"), 12);
        assert_eq!(phone_digit_count("___-___"), 0);
    }

    #[test]
    fn phone_digits_ignore_letters() {
        assert_eq!(phone_digit_count("call 0671234567"), 10);
    }

    #[test]
    fn email_accepts_common_addresses() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("john.doe+news@mail.example.co.uk"));
    }

    #[test]
    fn email_rejects_missing_tld() {
        assert!(!is_valid_email("foo@bar"));
    }

    #[test]
    fn email_rejects_garbage() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email("john@example.c"));
        assert!(!is_valid_email("john@example.1com"));
    }

    #[test]
    fn email_accepts_punycode_tld() {
        assert!(is_valid_email("user@sub.xn--p1ai"));
        assert!(is_valid_email("info@xn--80ak6aa92e.xn--p1ai"));
    }

    #[test]
    fn email_accepts_alphanumeric_tld() {
        assert!(is_valid_email("a@b.cd"));
        assert!(is_valid_email("john@example.c0m"));
    }

    #[test]
    fn email_rejects_empty_punycode_label() {
        assert!(!is_valid_tld("xn--"));
    }

    #[test]
    fn markup_detection() {
        assert!(contains_markup("hello <b>world</b>"));
        assert!(contains_markup("<script src=x></script>"));
        assert!(contains_markup("<!-- note -->"));
        assert!(contains_markup("a\0b"));
        assert!(!contains_markup("2 < 3 and 5 > 4"));
        assert!(!contains_markup("plain text"));
    }

    #[test]
    fn escaping_detection() {
        assert!(needs_html_escaping("Tom & Jerry"));
        assert!(needs_html_escaping("say \"hi\""));
        assert!(needs_html_escaping("a < b"));
        assert!(!needs_html_escaping("it's fine"));
        assert!(!needs_html_escaping("Привет, мир!"));
    }
}
