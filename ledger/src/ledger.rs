//! Bank ledger traits: the primitives every backend exposes.
//!
//! Reads are split from writes so contracts can be handed a read-only view
//! ([`LedgerQuery`]) while only the host holds the writable [`Ledger`].

use crate::LedgerError;
use mintgate_types::{Address, Amount, Coin, Denom};

/// Read-only ledger view.
pub trait LedgerQuery {
    /// Balance of `denom` held by `holder` (zero if none).
    fn balance_of(&self, holder: &Address, denom: &Denom) -> Amount;

    /// All non-zero balances held by `holder`, ordered by denom.
    fn all_balances(&self, holder: &Address) -> Vec<Coin>;

    /// Circulating supply of `denom`.
    fn total_supply(&self, denom: &Denom) -> Amount;

    /// The principal allowed to mint/burn `denom`, if it is a factory denom.
    fn denom_admin(&self, denom: &Denom) -> Option<Address>;

    /// Whether the ledger knows `denom` at all.
    fn denom_exists(&self, denom: &Denom) -> bool;

    /// Whether `principal` currently administers `denom`.
    fn is_denom_admin(&self, denom: &Denom, principal: &Address) -> bool {
        self.denom_admin(denom).as_ref() == Some(principal)
    }
}

/// Mutating ledger primitives.
///
/// `authority` is the principal on whose behalf the primitive runs. The
/// ledger enforces admin rights itself; callers never get to skip that check.
pub trait Ledger: LedgerQuery {
    /// Ordinary send from `from` to `to`.
    fn transfer(&mut self, from: &Address, to: &Address, coin: &Coin) -> Result<(), LedgerError>;

    /// Create `amount` of `denom` in `recipient`'s balance. Admin only.
    fn mint(
        &mut self,
        authority: &Address,
        denom: &Denom,
        recipient: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Destroy `amount` of `denom` from `holder`'s balance.
    ///
    /// Allowed for the denom admin, or for a holder burning its own funds.
    fn burn(
        &mut self,
        authority: &Address,
        denom: &Denom,
        holder: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Administrative move that bypasses the `from` account's consent. Admin only.
    fn force_transfer(
        &mut self,
        authority: &Address,
        denom: &Denom,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Create `factory/{creator}/{subdenom}` with `creator` as its admin.
    fn create_denom(&mut self, creator: &Address, subdenom: &str) -> Result<Denom, LedgerError>;

    /// Hand administration of `denom` to `new_admin`. Current admin only.
    fn set_denom_admin(
        &mut self,
        authority: &Address,
        denom: &Denom,
        new_admin: &Address,
    ) -> Result<(), LedgerError>;
}
