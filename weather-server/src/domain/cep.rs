//! Postal code types.

use std::fmt;

/// Error returned when parsing an invalid CEP.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CEP: {reason}")]
pub struct InvalidCep {
    reason: &'static str,
}

/// A valid Brazilian postal code (CEP).
///
/// A CEP is 8 ASCII digits, written bare (`NNNNNNNN`) or with a hyphen
/// after the fifth digit (`NNNNN-NNN`). This type guarantees that any `Cep`
/// value holds exactly 8 digits by construction.
///
/// # Examples
///
/// ```
/// use weather_server::domain::Cep;
///
/// let cep = Cep::parse("01310-100").unwrap();
/// assert_eq!(cep.digits(), "01310100");
///
/// // The bare form is accepted too
/// assert_eq!(Cep::parse("01310100").unwrap(), cep);
///
/// // Letters are rejected
/// assert!(Cep::parse("abcdefgh").is_err());
///
/// // Wrong length is rejected
/// assert!(Cep::parse("123").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cep([u8; 8]);

impl Cep {
    /// Parse a CEP from a string.
    ///
    /// The input must be exactly 8 ASCII digits, with an optional hyphen
    /// between the fifth and sixth digit. Any other separator, length, or
    /// character is rejected.
    pub fn parse(s: &str) -> Result<Self, InvalidCep> {
        let bytes = s.as_bytes();

        let (head, tail): (&[u8], &[u8]) = match bytes.len() {
            8 => (&bytes[..5], &bytes[5..]),
            9 if bytes[5] == b'-' => (&bytes[..5], &bytes[6..]),
            9 => {
                return Err(InvalidCep {
                    reason: "separator must be a hyphen after the fifth digit",
                });
            }
            _ => {
                return Err(InvalidCep {
                    reason: "must be 8 digits, optionally hyphenated",
                });
            }
        };

        let mut digits = [0u8; 8];
        for (slot, &b) in digits.iter_mut().zip(head.iter().chain(tail)) {
            if !b.is_ascii_digit() {
                return Err(InvalidCep {
                    reason: "must contain only ASCII digits 0-9",
                });
            }
            *slot = b;
        }

        Ok(Cep(digits))
    }

    /// Returns the 8 digits without separator.
    ///
    /// This is the form the address lookup service expects in its URL path.
    pub fn digits(&self) -> &str {
        // SAFETY: We only store ASCII digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cep({self})")
    }
}

impl fmt::Display for Cep {
    /// Formats the canonical hyphenated form, `NNNNN-NNN`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.digits();
        write!(f, "{}-{}", &digits[..5], &digits[5..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_cep() {
        assert!(Cep::parse("01310-100").is_ok());
        assert!(Cep::parse("01310100").is_ok());
        assert!(Cep::parse("00000000").is_ok());
        assert!(Cep::parse("99999-999").is_ok());
    }

    #[test]
    fn hyphenated_and_bare_forms_are_equal() {
        let hyphenated = Cep::parse("01310-100").unwrap();
        let bare = Cep::parse("01310100").unwrap();
        assert_eq!(hyphenated, bare);
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Cep::parse("").is_err());
        assert!(Cep::parse("123").is_err());
        assert!(Cep::parse("0131010").is_err());
        assert!(Cep::parse("123456789").is_err());
        assert!(Cep::parse("1234567890").is_err());
    }

    #[test]
    fn reject_letters() {
        assert!(Cep::parse("abcdefgh").is_err());
        assert!(Cep::parse("01310-10a").is_err());
        assert!(Cep::parse("a1310-100").is_err());
    }

    #[test]
    fn reject_misplaced_hyphen() {
        assert!(Cep::parse("0131-0100").is_err());
        assert!(Cep::parse("013101-00").is_err());
        assert!(Cep::parse("-01310100").is_err());
        assert!(Cep::parse("01310100-").is_err());
    }

    #[test]
    fn reject_other_separators() {
        assert!(Cep::parse("01310 100").is_err());
        assert!(Cep::parse("01310.100").is_err());
        assert!(Cep::parse("01310/100").is_err());
    }

    #[test]
    fn reject_non_ascii_digits() {
        // Fullwidth digits and other Unicode digits are not ASCII
        assert!(Cep::parse("０１３１０１００").is_err());
        assert!(Cep::parse("0131０100").is_err());
    }

    #[test]
    fn digits_strips_hyphen() {
        let cep = Cep::parse("01310-100").unwrap();
        assert_eq!(cep.digits(), "01310100");
    }

    #[test]
    fn display_is_canonical_hyphenated_form() {
        let cep = Cep::parse("01310100").unwrap();
        assert_eq!(format!("{}", cep), "01310-100");
    }

    #[test]
    fn debug() {
        let cep = Cep::parse("01310100").unwrap();
        assert_eq!(format!("{:?}", cep), "Cep(01310-100)");
    }

    #[test]
    fn equality() {
        let a = Cep::parse("01310-100").unwrap();
        let b = Cep::parse("01310-100").unwrap();
        let c = Cep::parse("20040-020").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Cep::parse("01310-100").unwrap());
        assert!(set.contains(&Cep::parse("01310100").unwrap()));
        assert!(!set.contains(&Cep::parse("20040-020").unwrap()));
    }
}
