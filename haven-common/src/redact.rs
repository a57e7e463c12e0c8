//! PII redaction for user-submitted check-in text
//!
//! Check-in text leaves the process (remote inference, persistence), so
//! emails and phone numbers are scrubbed before anything else sees it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder substituted for matched email addresses
pub const EMAIL_PLACEHOLDER: &str = "[REDACTED_EMAIL]";

/// Placeholder substituted for matched phone numbers
pub const PHONE_PLACEHOLDER: &str = "[REDACTED_PHONE]";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

// Loose on purpose: leading optional '+', then 8+ digits allowing
// separators (space, dash, parens), ending on a digit.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\- ()]{7,}\d").unwrap());

/// Strip emails and phone numbers from raw input text.
///
/// Emails are replaced first, then phone numbers, then surrounding
/// whitespace is trimmed. Pure and total; never fails.
pub fn redact_pii(text: &str) -> String {
    let cleaned = EMAIL_RE.replace_all(text, EMAIL_PLACEHOLDER);
    let cleaned = PHONE_RE.replace_all(&cleaned, PHONE_PLACEHOLDER);
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_email() {
        let out = redact_pii("write to me at alex.doe+1@example.co.uk please");
        assert!(!out.contains("example.co.uk"));
        assert!(out.contains(EMAIL_PLACEHOLDER));
    }

    #[test]
    fn redacts_phone_with_separators() {
        let out = redact_pii("call +91 98765-43210 tonight");
        assert!(out.contains(PHONE_PLACEHOLDER));
        assert!(!out.contains("98765"));
    }

    #[test]
    fn redacts_both_and_trims() {
        let out = redact_pii("  a@b.io / 022-1234-5678  ");
        assert_eq!(
            out,
            format!("{} / {}", EMAIL_PLACEHOLDER, PHONE_PLACEHOLDER)
        );
    }

    #[test]
    fn leaves_clean_text_alone() {
        assert_eq!(redact_pii("feeling ok today"), "feeling ok today");
    }

    #[test]
    fn short_digit_runs_survive() {
        // Fewer than ~9 digits should not be treated as a phone number
        assert_eq!(redact_pii("slept 8 hours, 3 naps"), "slept 8 hours, 3 naps");
    }

    #[test]
    fn empty_input() {
        assert_eq!(redact_pii(""), "");
    }
}
