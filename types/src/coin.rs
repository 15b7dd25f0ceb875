//! A denomination paired with an amount.

use crate::amount::Amount;
use crate::denom::Denom;
use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: Denom,
    pub amount: Amount,
}

impl Coin {
    pub fn new(amount: impl Into<Amount>, denom: Denom) -> Self {
        Self {
            denom,
            amount: amount.into(),
        }
    }
}

/// Formats as `{amount}{denom}`, e.g. `7ujuno`.
impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| TypesError::InvalidCoin(s.to_string()))?;
        if split == 0 {
            return Err(TypesError::InvalidCoin(s.to_string()));
        }
        let (amount, denom) = s.split_at(split);
        Ok(Self {
            denom: denom.parse()?,
            amount: amount.parse()?,
        })
    }
}

/// Render a coin list as `100:factory/x/a, 5:ujuno`.
pub fn pretty_coins(coins: &[Coin]) -> String {
    coins
        .iter()
        .map(|c| format!("{}:{}", c.amount, c.denom))
        .collect::<Vec<_>>()
        .join(", ")
}
