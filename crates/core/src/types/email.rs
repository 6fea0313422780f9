//! Email address type.

use core::fmt;

/// Characters allowed in the local part besides ASCII alphanumerics.
const LOCAL_PART_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";

/// Maximum length of a single domain label.
const MAX_LABEL_LENGTH: usize = 63;

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input does not contain an @ symbol.
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    /// The local part (before @) is empty.
    #[error("email local part cannot be empty")]
    EmptyLocalPart,
    /// The local part contains a character outside the allowed set.
    #[error("email local part contains invalid character {0:?}")]
    InvalidLocalPart(char),
    /// The domain part (after @) is empty.
    #[error("email domain cannot be empty")]
    EmptyDomain,
    /// A domain label is empty, too long, or badly formed.
    #[error("email domain label {0:?} is invalid")]
    InvalidDomainLabel(String),
}

/// An email address.
///
/// Validation follows the address grammar browsers apply to
/// `<input type="email">`.
///
/// ## Constraints
///
/// - No overall length limit
/// - Local part (before the first @): one or more of ASCII alphanumerics and
///   `.!#$%&'*+/=?^_`{|}~-`
/// - Domain (after the @): dot-separated labels of 1-63 ASCII alphanumerics
///   or hyphens, never starting or ending with a hyphen
///
/// ## Examples
///
/// ```
/// use bazaar_core::Email;
///
/// // Valid emails
/// assert!(Email::parse("user@example.com").is_ok());
/// assert!(Email::parse("user.name+tag@domain.co.uk").is_ok());
///
/// // Invalid emails
/// assert!(Email::parse("").is_err());             // empty
/// assert!(Email::parse("no-at-symbol").is_err()); // missing @
/// assert!(Email::parse("@domain.com").is_err());  // empty local part
/// assert!(Email::parse("user@").is_err());        // empty domain
/// assert!(Email::parse("a b@c.d").is_err());      // whitespace
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Does not contain an @ symbol
    /// - Has an empty or malformed local part
    /// - Has an empty or malformed domain
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        let (local, domain) = s.split_once('@').ok_or(EmailError::MissingAtSymbol)?;

        if local.is_empty() {
            return Err(EmailError::EmptyLocalPart);
        }

        if let Some(bad) = local
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !LOCAL_PART_SYMBOLS.contains(*c))
        {
            return Err(EmailError::InvalidLocalPart(bad));
        }

        if domain.is_empty() {
            return Err(EmailError::EmptyDomain);
        }

        if let Some(label) = domain.split('.').find(|label| !is_valid_label(label)) {
            return Err(EmailError::InvalidDomainLabel(label.to_owned()));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_emails() {
        assert!(Email::parse("user@example.com").is_ok());
        assert!(Email::parse("user.name@example.com").is_ok());
        assert!(Email::parse("user+tag@example.com").is_ok());
        assert!(Email::parse("user@subdomain.example.com").is_ok());
        assert!(Email::parse("o'brien@example.co.in").is_ok());
        assert!(Email::parse("a@b").is_ok());
        assert!(Email::parse("a@my-shop.in").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
    }

    #[test]
    fn test_parse_accepts_long_addresses() {
        let long = format!("{}@example.com", "a".repeat(250));
        let email = Email::parse(&long).unwrap();
        assert_eq!(email.as_str(), long);

        let many_labels = format!("user@{}com", "sub.".repeat(100));
        assert!(Email::parse(&many_labels).is_ok());
    }

    #[test]
    fn test_parse_missing_at() {
        assert_eq!(Email::parse("no-at-symbol"), Err(EmailError::MissingAtSymbol));
    }

    #[test]
    fn test_parse_empty_local_part() {
        assert_eq!(Email::parse("@domain.com"), Err(EmailError::EmptyLocalPart));
    }

    #[test]
    fn test_parse_empty_domain() {
        assert_eq!(Email::parse("user@"), Err(EmailError::EmptyDomain));
    }

    #[test]
    fn test_parse_rejects_whitespace_and_second_at() {
        assert_eq!(
            Email::parse("jane doe@example.com"),
            Err(EmailError::InvalidLocalPart(' '))
        );
        assert!(matches!(
            Email::parse("a@b@example.com"),
            Err(EmailError::InvalidDomainLabel(_))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_labels() {
        assert!(matches!(
            Email::parse("user@example..com"),
            Err(EmailError::InvalidDomainLabel(label)) if label.is_empty()
        ));
        assert!(matches!(
            Email::parse("user@-example.com"),
            Err(EmailError::InvalidDomainLabel(_))
        ));
        assert!(matches!(
            Email::parse("user@example.com."),
            Err(EmailError::InvalidDomainLabel(_))
        ));
        let long_label = format!("user@{}.com", "a".repeat(64));
        assert!(matches!(
            Email::parse(&long_label),
            Err(EmailError::InvalidDomainLabel(_))
        ));
    }

    #[test]
    fn test_display_matches_input() {
        let email = Email::parse("user@example.com").unwrap();
        assert_eq!(email.to_string(), "user@example.com");
    }
}
