use std::collections::BTreeMap;

use mintgate_messages::{Env, MessageInfo, Response};
use mintgate_types::{Address, Amount};
use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::msg::{BalanceResponse, ExecuteMsg, InstantiateMsg, QueryMsg, ReceiveMsg};

const MAX_DECIMALS: u8 = 18;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedToken {
    info: TokenInfo,
    minter: Option<Address>,
    balances: BTreeMap<Address, Amount>,
}

impl TrackedToken {
    pub fn instantiate(msg: InstantiateMsg) -> Result<(Self, Response), TokenError> {
        validate_info(&msg)?;

        let mut token = Self {
            info: TokenInfo {
                name: msg.name,
                symbol: msg.symbol,
                decimals: msg.decimals,
                total_supply: Amount::ZERO,
            },
            minter: msg.minter,
            balances: BTreeMap::new(),
        };
        for initial in msg.initial_balances {
            if initial.amount.is_zero() {
                continue;
            }
            token.credit(&initial.address, initial.amount)?;
            token.info.total_supply = token
                .info
                .total_supply
                .checked_add(initial.amount)
                .ok_or(TokenError::Overflow)?;
        }
        tracing::info!(
            symbol = %token.info.symbol,
            supply = %token.info.total_supply,
            "token instantiated"
        );

        let response = Response::new()
            .add_attribute("method", "instantiate")
            .add_attribute("symbol", &token.info.symbol);
        Ok((token, response))
    }

    pub fn token_info(&self) -> &TokenInfo {
        &self.info
    }

    pub fn balance(&self, address: &Address) -> Amount {
        self.balances.get(address).copied().unwrap_or(Amount::ZERO)
    }

    pub fn execute(&mut self, env: &Env, info: &MessageInfo, msg: ExecuteMsg) -> Result<Response, TokenError> {
        tracing::debug!(token = %env.contract, method = msg.name(), sender = %info.sender, "token execute");
        if info.funds.iter().any(|c| !c.amount.is_zero()) {
            return Err(TokenError::UnexpectedFunds);
        }
        let sender = &info.sender;
        match msg {
            ExecuteMsg::Transfer { recipient, amount } => {
                non_zero(amount)?;
                self.debit(sender, amount)?;
                self.credit(&recipient, amount)?;
                Ok(Response::new()
                    .add_attribute("method", "transfer")
                    .add_attribute("from", sender)
                    .add_attribute("to", &recipient)
                    .add_attribute("amount", amount))
            }
            ExecuteMsg::Send {
                contract,
                amount,
                msg,
            } => {
                non_zero(amount)?;
                self.debit(sender, amount)?;
                self.credit(&contract, amount)?;
                let hook = ReceiveMsg {
                    sender: sender.clone(),
                    amount,
                    msg,
                }
                .into_execute_msg()
                .map_err(|e| TokenError::Serialization(e.to_string()))?;
                Ok(Response::new()
                    .add_attribute("method", "send")
                    .add_attribute("from", sender)
                    .add_attribute("to", &contract)
                    .add_attribute("amount", amount)
                    .add_execute(contract, hook))
            }
            ExecuteMsg::Burn { amount } => {
                non_zero(amount)?;
                self.debit(sender, amount)?;
                self.info.total_supply = self.info.total_supply.saturating_sub(amount);
                Ok(Response::new()
                    .add_attribute("method", "burn")
                    .add_attribute("from", sender)
                    .add_attribute("amount", amount))
            }
            ExecuteMsg::Mint { recipient, amount } => {
                non_zero(amount)?;
                if self.minter.as_ref() != Some(sender) {
                    return Err(TokenError::Unauthorized {
                        caller: sender.clone(),
                    });
                }
                self.info.total_supply = self
                    .info
                    .total_supply
                    .checked_add(amount)
                    .ok_or(TokenError::Overflow)?;
                self.credit(&recipient, amount)?;
                Ok(Response::new()
                    .add_attribute("method", "mint")
                    .add_attribute("to", &recipient)
                    .add_attribute("amount", amount))
            }
        }
    }

    pub fn query(&self, msg: QueryMsg) -> Result<serde_json::Value, TokenError> {
        let value = match msg {
            QueryMsg::Balance { address } => serde_json::to_value(BalanceResponse {
                balance: self.balance(&address),
            }),
            QueryMsg::TokenInfo {} => serde_json::to_value(&self.info),
        };
        value.map_err(|e| TokenError::Serialization(e.to_string()))
    }

    fn credit(&mut self, holder: &Address, amount: Amount) -> Result<(), TokenError> {
        let slot = self.balances.entry(holder.clone()).or_insert(Amount::ZERO);
        *slot = slot.checked_add(amount).ok_or(TokenError::Overflow)?;
        Ok(())
    }

    fn debit(&mut self, holder: &Address, amount: Amount) -> Result<(), TokenError> {
        let available = self.balance(holder);
        let remaining = available
            .checked_sub(amount)
            .ok_or_else(|| TokenError::InsufficientBalance {
                holder: holder.clone(),
                needed: amount,
                available,
            })?;
        if remaining.is_zero() {
            self.balances.remove(holder);
        } else {
            self.balances.insert(holder.clone(), remaining);
        }
        Ok(())
    }
}

fn non_zero(amount: Amount) -> Result<(), TokenError> {
    if amount.is_zero() {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

fn validate_info(msg: &InstantiateMsg) -> Result<(), TokenError> {
    if !(3..=50).contains(&msg.name.chars().count()) {
        return Err(TokenError::InvalidTokenInfo(
            "name must be 3 to 50 characters".into(),
        ));
    }
    let symbol_ok = (3..=12).contains(&msg.symbol.len())
        && msg.symbol.chars().all(|c| c.is_ascii_alphabetic() || c == '-');
    if !symbol_ok {
        return Err(TokenError::InvalidTokenInfo(
            "symbol must be 3 to 12 letters or '-'".into(),
        ));
    }
    if msg.decimals > MAX_DECIMALS {
        return Err(TokenError::InvalidTokenInfo(format!(
            "decimals must not exceed {MAX_DECIMALS}"
        )));
    }
    Ok(())
}
