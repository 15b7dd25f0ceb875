use std::fmt;

use mintgate_types::{Address, Denom};
use serde::{Deserialize, Serialize};

use crate::ConversionError;

/// Where convertible value comes from. Exactly one per unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum Source {
    /// A token contract that delivers deposits through its `send` hook.
    Tracked { token: Address },
    /// A ledger coin attached as call value.
    Native { denom: Denom },
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tracked { token } => write!(f, "token {token}"),
            Self::Native { denom } => write!(f, "native {denom}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    pub source: Source,
    pub target_denom: Denom,
    /// The registry trusted to mint `target_denom`.
    pub registry: Address,
}

impl ConversionConfig {
    pub fn validate(&self) -> Result<(), ConversionError> {
        if !self.target_denom.is_factory() {
            return Err(ConversionError::InvalidDenom {
                denom: self.target_denom.clone(),
                reason: format!("target must start with '{}'", Denom::FACTORY_PREFIX),
            });
        }
        if let Source::Native { denom } = &self.source {
            if denom == &self.target_denom {
                return Err(ConversionError::InvalidDenom {
                    denom: denom.clone(),
                    reason: "source and target denom are identical".into(),
                });
            }
        }
        Ok(())
    }
}
