//! Nullable ledger: a [`MemoryLedger`] with scripted failures.

use std::collections::BTreeSet;

use mintgate_ledger::{Ledger, LedgerError, LedgerQuery, MemoryLedger};
use mintgate_types::{Address, Amount, Coin, Denom};

/// The mutating ledger primitives that can be made to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Primitive {
    Transfer,
    Mint,
    Burn,
    ForceTransfer,
    CreateDenom,
    SetDenomAdmin,
}

/// A test ledger that fails chosen primitives with [`LedgerError::Injected`].
///
/// Failures stay armed until [`NullLedger::heal`] is called. A failing
/// primitive leaves the inner ledger untouched.
#[derive(Clone, Debug, Default)]
pub struct NullLedger {
    inner: MemoryLedger,
    failing: BTreeSet<Primitive>,
    calls: Vec<Primitive>,
}

impl NullLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every future call of `primitive` fail.
    pub fn fail(&mut self, primitive: Primitive) {
        self.failing.insert(primitive);
    }

    /// Disarm every scripted failure.
    pub fn heal(&mut self) {
        self.failing.clear();
    }

    /// Mutating primitives attempted so far, failed ones included.
    pub fn calls(&self) -> &[Primitive] {
        &self.calls
    }

    /// Direct access for test setup, e.g. genesis funding.
    pub fn inner_mut(&mut self) -> &mut MemoryLedger {
        &mut self.inner
    }

    fn check(&mut self, primitive: Primitive) -> Result<(), LedgerError> {
        self.calls.push(primitive);
        if self.failing.contains(&primitive) {
            return Err(LedgerError::Injected(format!("{primitive:?} disabled")));
        }
        Ok(())
    }
}

impl LedgerQuery for NullLedger {
    fn balance_of(&self, holder: &Address, denom: &Denom) -> Amount {
        self.inner.balance_of(holder, denom)
    }

    fn all_balances(&self, holder: &Address) -> Vec<Coin> {
        self.inner.all_balances(holder)
    }

    fn total_supply(&self, denom: &Denom) -> Amount {
        self.inner.total_supply(denom)
    }

    fn denom_admin(&self, denom: &Denom) -> Option<Address> {
        self.inner.denom_admin(denom)
    }

    fn denom_exists(&self, denom: &Denom) -> bool {
        self.inner.denom_exists(denom)
    }
}

impl Ledger for NullLedger {
    fn transfer(&mut self, from: &Address, to: &Address, coin: &Coin) -> Result<(), LedgerError> {
        self.check(Primitive::Transfer)?;
        self.inner.transfer(from, to, coin)
    }

    fn mint(
        &mut self,
        authority: &Address,
        denom: &Denom,
        recipient: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.check(Primitive::Mint)?;
        self.inner.mint(authority, denom, recipient, amount)
    }

    fn burn(
        &mut self,
        authority: &Address,
        denom: &Denom,
        holder: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.check(Primitive::Burn)?;
        self.inner.burn(authority, denom, holder, amount)
    }

    fn force_transfer(
        &mut self,
        authority: &Address,
        denom: &Denom,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.check(Primitive::ForceTransfer)?;
        self.inner.force_transfer(authority, denom, from, to, amount)
    }

    fn create_denom(&mut self, creator: &Address, subdenom: &str) -> Result<Denom, LedgerError> {
        self.check(Primitive::CreateDenom)?;
        self.inner.create_denom(creator, subdenom)
    }

    fn set_denom_admin(
        &mut self,
        authority: &Address,
        denom: &Denom,
        new_admin: &Address,
    ) -> Result<(), LedgerError> {
        self.check(Primitive::SetDenomAdmin)?;
        self.inner.set_denom_admin(authority, denom, new_admin)
    }
}
