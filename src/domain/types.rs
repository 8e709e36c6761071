//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty text, a known
//! municipality, a dialable WhatsApp contact) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::cities::is_municipality;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// WhatsApp contact did not contain a plausible number of digits.
    #[error("invalid whatsapp number")]
    InvalidWhatsapp,
    /// City is not one of the known municipalities.
    #[error("unknown municipality: {0}")]
    UnknownCity(String),
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    ClientName,
    "Client display name wrapper enforcing non-empty values."
);

non_empty_string_newtype!(
    ServiceName,
    "Engagement description wrapper enforcing trimmed, non-empty values."
);

/// City name restricted to the known municipality list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CityName(String);

impl CityName {
    /// Trims the input and checks it against the municipality list.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = NonEmptyString::new(value)?.into_inner();
        if !is_municipality(&trimmed) {
            return Err(TypeConstraintError::UnknownCity(trimmed));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CityName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CityName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CityName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// WhatsApp contact normalized to bare digits, ready for a `wa.me` link.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WhatsappNumber(String);

impl WhatsappNumber {
    /// Strips every non-digit character and checks the remaining length.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let digits: String = value
            .into()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        // DDD plus an 8 or 9 digit subscriber number; tolerate a few extras
        // for numbers typed with the country code already in front.
        if !(8..=13).contains(&digits.len()) {
            return Err(TypeConstraintError::InvalidWhatsapp);
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for WhatsappNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WhatsappNumber {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for WhatsappNumber {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Opaque unique identifier assigned to a client record at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Generate a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for ClientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClientId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            Uuid::parse_str(s).map_err(|_| TypeConstraintError::InvalidUuid)?,
        ))
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_number_keeps_digits_only() {
        let number = WhatsappNumber::new("(83) 99123-4567").unwrap();
        assert_eq!(number.as_str(), "83991234567");
    }

    #[test]
    fn whatsapp_number_rejects_too_short_input() {
        assert_eq!(
            WhatsappNumber::new("12-34"),
            Err(TypeConstraintError::InvalidWhatsapp)
        );
    }

    #[test]
    fn city_name_rejects_unknown_municipality() {
        assert!(CityName::new("João Pessoa").is_ok());
        assert_eq!(
            CityName::new("Gotham"),
            Err(TypeConstraintError::UnknownCity("Gotham".into()))
        );
    }

    #[test]
    fn client_name_trims_and_rejects_empty() {
        assert_eq!(ClientName::new("  Maria  ").unwrap().as_str(), "Maria");
        assert_eq!(ClientName::new("   "), Err(TypeConstraintError::EmptyString));
    }
}
