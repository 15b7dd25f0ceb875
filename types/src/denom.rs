//! Denomination identifiers.

use crate::address::{invalid_reason, Address};
use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a distinct fungible asset type tracked by the ledger.
///
/// Factory denominations have the shape `factory/{creator}/{subdenom}` and
/// carry a ledger-side admin; any other denomination is a native coin.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Denom(String);

impl Denom {
    /// Prefix shared by every factory denomination.
    pub const FACTORY_PREFIX: &'static str = "factory/";

    /// Parse and validate a denomination.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TypesError> {
        let s = raw.into();
        if let Some(reason) = invalid_reason(&s) {
            return Err(TypesError::InvalidDenom { denom: s, reason });
        }
        Ok(Self(s))
    }

    /// Create a denomination from a string known to be valid.
    ///
    /// # Panics
    /// Panics if the string is not a valid denomination.
    pub fn new(raw: impl Into<String>) -> Self {
        match Self::parse(raw) {
            Ok(denom) => denom,
            Err(e) => panic!("{e}"),
        }
    }

    /// Build the factory denomination `factory/{creator}/{subdenom}`.
    pub fn factory(creator: &Address, subdenom: &str) -> Result<Self, TypesError> {
        if subdenom.is_empty() || subdenom.contains('/') {
            return Err(TypesError::InvalidDenom {
                denom: subdenom.to_string(),
                reason: "subdenom must be non-empty and contain no '/'",
            });
        }
        Self::parse(format!("{}{}/{}", Self::FACTORY_PREFIX, creator, subdenom))
    }

    /// Whether this is a factory denomination.
    pub fn is_factory(&self) -> bool {
        self.0.starts_with(Self::FACTORY_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Denom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Denom {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Denom {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Denom> for String {
    fn from(denom: Denom) -> Self {
        denom.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_denom_shape() {
        let creator = Address::new("juno1creator");
        let denom = Denom::factory(&creator, "testdenom").unwrap();
        assert_eq!(denom.as_str(), "factory/juno1creator/testdenom");
        assert!(denom.is_factory());
    }

    #[test]
    fn native_denoms_are_not_factory() {
        let denom = Denom::new("ujuno");
        assert!(!denom.is_factory());
    }

    #[test]
    fn subdenom_with_slash_is_rejected() {
        let creator = Address::new("juno1creator");
        assert!(Denom::factory(&creator, "a/b").is_err());
        assert!(Denom::factory(&creator, "").is_err());
    }
}
