use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Phone numbers need at least this many digits before they are masked.
const MIN_PHONE_DIGITS: usize = 7;

/// Registry for the PII regex patterns, one construction site per pattern.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Email pattern: matches standard email addresses
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Phone-like runs: digits with common separators, optional leading `+`
    pub fn phone() -> &'static Regex {
        static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\+?\(?\d[\d\s().-]{4,}\d").unwrap()
        });
        &PHONE_REGEX
    }
}

fn mask_email(caps: &Captures) -> String {
    let full_match = &caps[0];
    match full_match.find('@') {
        Some(0) | None => full_match.to_string(),
        Some(at_pos) => {
            let (local_part, domain) = full_match.split_at(at_pos);
            let first_char: String = local_part.chars().take(1).collect();
            format!("{first_char}***{domain}")
        }
    }
}

fn mask_phone(caps: &Captures) -> String {
    let full_match = &caps[0];
    let digits: Vec<char> = full_match.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < MIN_PHONE_DIGITS {
        return full_match.to_string();
    }
    let tail: String = digits[digits.len() - 2..].iter().collect();
    format!("***{tail}")
}

/// Redacts contact PII from a string.
///
/// - Emails: keep the first character of the local part and the full domain
/// - Phone numbers: keep only the last two digits
///
/// Emails go first so that digits inside an address are not read as a phone.
pub fn redact(input: &str) -> String {
    let email_redacted = PiiRegexRegistry::email().replace_all(input, mask_email);
    PiiRegexRegistry::phone()
        .replace_all(&email_redacted, mask_phone)
        .into_owned()
}

/// A wrapper that redacts its contents whenever it is formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
