//! Principal address type.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An account or contract identity capable of issuing requests.
///
/// Addresses are opaque strings. They must be non-empty printable ASCII
/// without whitespace and at most [`Address::MAX_LEN`] bytes long.
/// Deserialization runs the same validation as [`Address::parse`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub const MAX_LEN: usize = 128;

    /// Parse and validate an address.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TypesError> {
        let s = raw.into();
        if let Some(reason) = invalid_reason(&s) {
            return Err(TypesError::InvalidAddress { address: s, reason });
        }
        Ok(Self(s))
    }

    /// Create an address from a string known to be valid.
    ///
    /// # Panics
    /// Panics if the string is not a valid address.
    pub fn new(raw: impl Into<String>) -> Self {
        match Self::parse(raw) {
            Ok(addr) => addr,
            Err(e) => panic!("{e}"),
        }
    }

    /// Address of the `seq`-th contract instantiated on a host.
    pub fn contract(seq: u64) -> Self {
        Self(format!("contract{seq}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Shared shape check for addresses and denominations.
pub(crate) fn invalid_reason(s: &str) -> Option<&'static str> {
    if s.is_empty() {
        Some("must not be empty")
    } else if s.len() > Address::MAX_LEN {
        Some("too long")
    } else if !s.chars().all(|c| c.is_ascii_graphic()) {
        Some("must be printable ASCII without whitespace")
    } else {
        None
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.0
    }
}
