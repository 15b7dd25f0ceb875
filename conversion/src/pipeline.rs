//! The staged burn-then-mint pipeline.
//!
//! A deposit moves through [`Stage::Received`], [`Stage::Validated`],
//! [`Stage::AssetNeutralized`] and [`Stage::MintRequested`] inside the unit.
//! Each step consumes the pipeline, so stages cannot be skipped or repeated.
//! Whether the request completes or rolls back is decided by the host when
//! it applies the emitted actions.

use std::fmt;

use mintgate_messages::{Action, BankAction, Response};
use mintgate_registry::ExecuteMsg as RegistryExecuteMsg;
use mintgate_token::ExecuteMsg as TokenExecuteMsg;
use mintgate_types::{Address, Amount, Coin, Denom};

use crate::config::{ConversionConfig, Source};
use crate::ConversionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Received,
    Validated,
    AssetNeutralized,
    MintRequested,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Received => "received",
            Self::Validated => "validated",
            Self::AssetNeutralized => "asset_neutralized",
            Self::MintRequested => "mint_requested",
        })
    }
}

/// What arrived, and through which door.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Arrival {
    /// A coin attached as call value; already in the unit's ledger balance.
    Native { denom: Denom },
    /// A token `send` hook invoked by `token`; already in the unit's token balance.
    Tracked { token: Address },
}

impl fmt::Display for Arrival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native { denom } => write!(f, "native {denom}"),
            Self::Tracked { token } => write!(f, "token {token}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deposit {
    /// Who gets credited with the target denom.
    pub depositor: Address,
    pub amount: Amount,
    pub arrival: Arrival,
}

impl Deposit {
    /// A native deposit must be exactly one attached coin.
    pub fn from_funds(depositor: Address, funds: &[Coin]) -> Result<Self, ConversionError> {
        match funds {
            [] => Err(ConversionError::InvalidAmount),
            [coin] => Ok(Self {
                depositor,
                amount: coin.amount,
                arrival: Arrival::Native {
                    denom: coin.denom.clone(),
                },
            }),
            many => Err(ConversionError::WrongAsset {
                expected: "a single coin".into(),
                received: format!("{} coins", many.len()),
            }),
        }
    }

    pub fn from_hook(token: Address, depositor: Address, amount: Amount) -> Self {
        Self {
            depositor,
            amount,
            arrival: Arrival::Tracked { token },
        }
    }
}

pub struct Pipeline<'a> {
    config: &'a ConversionConfig,
    unit: &'a Address,
    deposit: Deposit,
    stage: Stage,
    response: Response,
}

impl<'a> Pipeline<'a> {
    pub fn receive(config: &'a ConversionConfig, unit: &'a Address, deposit: Deposit) -> Self {
        tracing::debug!(
            %unit,
            depositor = %deposit.depositor,
            amount = %deposit.amount,
            arrival = %deposit.arrival,
            stage = %Stage::Received,
            "conversion stage"
        );
        Self {
            config,
            unit,
            deposit,
            stage: Stage::Received,
            response: Response::new(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The asset must match the configured source, be non-zero and not be
    /// credited back to the unit itself.
    pub fn validate(self) -> Result<Self, ConversionError> {
        let matches = match (&self.config.source, &self.deposit.arrival) {
            (Source::Native { denom }, Arrival::Native { denom: got }) => denom == got,
            (Source::Tracked { token }, Arrival::Tracked { token: got }) => token == got,
            _ => false,
        };
        if !matches {
            return Err(ConversionError::WrongAsset {
                expected: self.config.source.to_string(),
                received: self.deposit.arrival.to_string(),
            });
        }
        if self.deposit.amount.is_zero() {
            return Err(ConversionError::InvalidAmount);
        }
        if &self.deposit.depositor == self.unit {
            return Err(ConversionError::SelfCredit);
        }
        Ok(self.advance(Stage::Validated))
    }

    /// Destroy the deposited asset. Native coins are burned from the unit's
    /// ledger balance, tracked tokens through the token's own `burn`.
    pub fn neutralize(mut self) -> Result<Self, ConversionError> {
        let amount = self.deposit.amount;
        let action = match &self.deposit.arrival {
            Arrival::Native { denom } => Action::Bank(BankAction::Burn {
                denom: denom.clone(),
                holder: self.unit.clone(),
                amount,
            }),
            Arrival::Tracked { token } => Action::Execute {
                contract: token.clone(),
                msg: to_value(&TokenExecuteMsg::Burn { amount })?,
                funds: Vec::new(),
            },
        };
        self.response.actions.push(action);
        Ok(self.advance(Stage::AssetNeutralized))
    }

    /// Ask the registry to mint the same amount of the target to the depositor.
    pub fn request_mint(mut self) -> Result<Self, ConversionError> {
        let mint = RegistryExecuteMsg::Mint {
            recipient: self.deposit.depositor.clone(),
            denom: self.config.target_denom.clone(),
            amount: self.deposit.amount,
        };
        let msg = to_value(&mint)?;
        self.response = self.response.add_execute(self.config.registry.clone(), msg);
        Ok(self.advance(Stage::MintRequested))
    }

    pub fn into_response(self) -> Response {
        let converted = Coin::new(self.deposit.amount, self.config.target_denom.clone());
        self.response
            .add_attribute("method", "convert")
            .add_attribute("source", self.deposit.arrival)
            .add_attribute("recipient", self.deposit.depositor)
            .add_attribute("amount", converted)
            .add_attribute("stage", self.stage)
    }

    fn advance(mut self, next: Stage) -> Self {
        tracing::debug!(unit = %self.unit, from = %self.stage, to = %next, "conversion stage");
        self.stage = next;
        self
    }
}

fn to_value<T: serde::Serialize>(msg: &T) -> Result<serde_json::Value, ConversionError> {
    serde_json::to_value(msg).map_err(|e| ConversionError::Serialization(e.to_string()))
}
