//! Verdict types.
//!
//! The two classifiers use different label conventions: the URL model emits
//! -1 for phishing and 1 for legitimate, the email model 1 for spam and 0
//! for legitimate. Keeping separate verdict types makes a careless
//! unification of the two encodings impossible.

/// Verdict for the URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlVerdict {
    /// The URL is classified as phishing.
    Phishing,
    /// The URL is classified as legitimate.
    Legitimate,
}

impl UrlVerdict {
    /// Maps a raw URL-model label: -1 is phishing, anything else legitimate.
    pub fn from_label(label: i64) -> UrlVerdict {
        if label == -1 {
            UrlVerdict::Phishing
        } else {
            UrlVerdict::Legitimate
        }
    }
}

impl std::fmt::Display for UrlVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlVerdict::Phishing => f.write_str("Phishing"),
            UrlVerdict::Legitimate => f.write_str("Legitimate"),
        }
    }
}

/// Verdict for the email path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailVerdict {
    /// The message is classified as spam/phishing.
    Spam,
    /// The message is classified as legitimate.
    Legitimate,
}

impl EmailVerdict {
    /// Maps a raw email-model label: 1 is spam, anything else legitimate.
    pub fn from_label(label: i64) -> EmailVerdict {
        if label == 1 {
            EmailVerdict::Spam
        } else {
            EmailVerdict::Legitimate
        }
    }
}

impl std::fmt::Display for EmailVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailVerdict::Spam => f.write_str("Spam/Phishing"),
            EmailVerdict::Legitimate => f.write_str("Legitimate"),
        }
    }
}
