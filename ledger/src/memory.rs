//! In-memory reference bank.

use std::collections::BTreeMap;

use mintgate_types::{Address, Amount, Coin, Denom};
use serde::{Deserialize, Serialize};

use crate::{Ledger, LedgerError, LedgerQuery};

/// Ledger-side record of a denomination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomInfo {
    /// `None` for native coins, which nobody can mint.
    pub admin: Option<Address>,
    pub supply: Amount,
}

/// A complete bank held in memory.
///
/// Cloning it yields an independent checkpoint, which is what the host
/// relies on for all-or-nothing execution.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryLedger {
    balances: BTreeMap<Address, BTreeMap<Denom, Amount>>,
    denoms: BTreeMap<Denom, DenomInfo>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a native coin (no admin). Idempotent.
    pub fn register_native(&mut self, denom: Denom) {
        self.denoms.entry(denom).or_insert(DenomInfo {
            admin: None,
            supply: Amount::ZERO,
        });
    }

    /// Credit genesis funds. Unknown denoms are registered as native coins.
    pub fn fund(&mut self, holder: &Address, coin: &Coin) -> Result<(), LedgerError> {
        if !self.denoms.contains_key(&coin.denom) {
            self.register_native(coin.denom.clone());
        }
        self.increase_supply(&coin.denom, coin.amount)?;
        self.credit(holder, &coin.denom, coin.amount)
    }

    fn info(&self, denom: &Denom) -> Result<&DenomInfo, LedgerError> {
        self.denoms
            .get(denom)
            .ok_or_else(|| LedgerError::UnknownDenom(denom.clone()))
    }

    fn ensure_admin(&self, authority: &Address, denom: &Denom) -> Result<(), LedgerError> {
        let info = self.info(denom)?;
        if info.admin.as_ref() != Some(authority) {
            return Err(LedgerError::NotDenomAdmin {
                denom: denom.clone(),
                caller: authority.clone(),
                admin: info.admin.clone(),
            });
        }
        Ok(())
    }

    fn credit(&mut self, holder: &Address, denom: &Denom, amount: Amount) -> Result<(), LedgerError> {
        let slot = self
            .balances
            .entry(holder.clone())
            .or_default()
            .entry(denom.clone())
            .or_insert(Amount::ZERO);
        *slot = slot
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow(denom.clone()))?;
        Ok(())
    }

    fn debit(&mut self, holder: &Address, denom: &Denom, amount: Amount) -> Result<(), LedgerError> {
        let available = self.balance_of(holder, denom);
        let remaining = available
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::InsufficientBalance {
                holder: holder.clone(),
                denom: denom.clone(),
                needed: amount,
                available,
            })?;
        if let Some(account) = self.balances.get_mut(holder) {
            if remaining.is_zero() {
                account.remove(denom);
            } else {
                account.insert(denom.clone(), remaining);
            }
            if account.is_empty() {
                self.balances.remove(holder);
            }
        }
        Ok(())
    }

    fn increase_supply(&mut self, denom: &Denom, amount: Amount) -> Result<(), LedgerError> {
        let info = self
            .denoms
            .get_mut(denom)
            .ok_or_else(|| LedgerError::UnknownDenom(denom.clone()))?;
        info.supply = info
            .supply
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow(denom.clone()))?;
        Ok(())
    }

    fn decrease_supply(&mut self, denom: &Denom, amount: Amount) {
        if let Some(info) = self.denoms.get_mut(denom) {
            info.supply = info.supply.saturating_sub(amount);
        }
    }
}

impl LedgerQuery for MemoryLedger {
    fn balance_of(&self, holder: &Address, denom: &Denom) -> Amount {
        self.balances
            .get(holder)
            .and_then(|account| account.get(denom))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn all_balances(&self, holder: &Address) -> Vec<Coin> {
        self.balances
            .get(holder)
            .map(|account| {
                account
                    .iter()
                    .map(|(denom, amount)| Coin::new(*amount, denom.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn total_supply(&self, denom: &Denom) -> Amount {
        self.denoms
            .get(denom)
            .map(|info| info.supply)
            .unwrap_or(Amount::ZERO)
    }

    fn denom_admin(&self, denom: &Denom) -> Option<Address> {
        self.denoms.get(denom).and_then(|info| info.admin.clone())
    }

    fn denom_exists(&self, denom: &Denom) -> bool {
        self.denoms.contains_key(denom)
    }
}

impl Ledger for MemoryLedger {
    fn transfer(&mut self, from: &Address, to: &Address, coin: &Coin) -> Result<(), LedgerError> {
        if coin.amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        self.debit(from, &coin.denom, coin.amount)?;
        self.credit(to, &coin.denom, coin.amount)?;
        tracing::trace!(%from, %to, %coin, "transfer");
        Ok(())
    }

    fn mint(
        &mut self,
        authority: &Address,
        denom: &Denom,
        recipient: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        self.ensure_admin(authority, denom)?;
        self.increase_supply(denom, amount)?;
        self.credit(recipient, denom, amount)?;
        tracing::debug!(%authority, %denom, %recipient, %amount, "mint");
        Ok(())
    }

    fn burn(
        &mut self,
        authority: &Address,
        denom: &Denom,
        holder: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        if authority != holder {
            self.ensure_admin(authority, denom)?;
        } else {
            self.info(denom)?;
        }
        self.debit(holder, denom, amount)?;
        self.decrease_supply(denom, amount);
        tracing::debug!(%authority, %denom, %holder, %amount, "burn");
        Ok(())
    }

    fn force_transfer(
        &mut self,
        authority: &Address,
        denom: &Denom,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        self.ensure_admin(authority, denom)?;
        self.debit(from, denom, amount)?;
        self.credit(to, denom, amount)?;
        tracing::debug!(%authority, %denom, %from, %to, %amount, "force transfer");
        Ok(())
    }

    fn create_denom(&mut self, creator: &Address, subdenom: &str) -> Result<Denom, LedgerError> {
        let denom = Denom::factory(creator, subdenom)?;
        if self.denoms.contains_key(&denom) {
            return Err(LedgerError::DenomExists(denom));
        }
        self.denoms.insert(
            denom.clone(),
            DenomInfo {
                admin: Some(creator.clone()),
                supply: Amount::ZERO,
            },
        );
        tracing::debug!(%denom, admin = %creator, "denom created");
        Ok(denom)
    }

    fn set_denom_admin(
        &mut self,
        authority: &Address,
        denom: &Denom,
        new_admin: &Address,
    ) -> Result<(), LedgerError> {
        self.ensure_admin(authority, denom)?;
        if let Some(info) = self.denoms.get_mut(denom) {
            info.admin = Some(new_admin.clone());
        }
        tracing::debug!(%denom, from = %authority, to = %new_admin, "denom admin changed");
        Ok(())
    }
}
