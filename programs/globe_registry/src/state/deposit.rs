use anchor_lang::prelude::*;

use crate::errors::RegistryError;

/// Prepaid balance of one owner, PDA seeded by the owner
#[account]
#[derive(InitSpace, Debug, Default, PartialEq)]
pub struct Deposit {
    pub owner: Pubkey,
    /// Token base units, 4 implied decimals
    pub balance: u64,
    pub bump: u8,
}

impl Deposit {
    pub const SEED: &'static [u8] = b"deposit";

    pub fn is_open(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Start a zero balance for `owner`. Returns false if already open.
    pub fn open(&mut self, owner: Pubkey, bump: u8) -> bool {
        if self.is_open() {
            return false;
        }
        self.owner = owner;
        self.balance = 0;
        self.bump = bump;
        true
    }

    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        self.balance = self.balance.checked_add(amount).ok_or(RegistryError::Overflow)?;
        Ok(self.balance)
    }

    /// Fails without touching the balance unless `amount` can be debited
    pub fn require_balance(&self, amount: u64) -> Result<()> {
        require!(self.balance >= amount, RegistryError::InsufficientBalance);
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<u64> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(RegistryError::InsufficientBalance)?;
        Ok(self.balance)
    }
}

/// The open deposit of `owner`, `NoDeposit` when the account was not passed
/// or belongs to someone else
pub fn deposit_of<'a>(deposit: Option<&'a mut Deposit>, owner: &Pubkey) -> Result<&'a mut Deposit> {
    match deposit {
        Some(deposit) if deposit.is_open() && deposit.owner == *owner => Ok(deposit),
        _ => err!(RegistryError::NoDeposit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_error;

    #[test]
    fn test_open_is_idempotent() {
        let owner = Pubkey::new_unique();
        let mut deposit = Deposit::default();

        assert!(deposit.open(owner, 254));
        deposit.credit(500).unwrap();
        assert!(!deposit.open(owner, 254));

        assert_eq!(deposit.owner, owner);
        assert_eq!(deposit.balance, 500);
    }

    #[test]
    fn test_missing_deposit() {
        let owner = Pubkey::new_unique();
        let mut unopened = Deposit::default();
        let mut someone_elses = Deposit::default();
        someone_elses.open(Pubkey::new_unique(), 255);

        assert_error(deposit_of(None, &owner), RegistryError::NoDeposit);
        assert_error(deposit_of(Some(&mut unopened), &owner), RegistryError::NoDeposit);
        assert_error(deposit_of(Some(&mut someone_elses), &owner), RegistryError::NoDeposit);

        let mut own = Deposit::default();
        own.open(owner, 255);
        assert_eq!(deposit_of(Some(&mut own), &owner).unwrap().owner, owner);
    }

    #[test]
    fn test_debit_requires_sufficient_balance() {
        let mut deposit = Deposit::default();
        deposit.open(Pubkey::new_unique(), 255);
        deposit.credit(100).unwrap();

        assert_error(deposit.require_balance(101), RegistryError::InsufficientBalance);
        assert_error(deposit.debit(101), RegistryError::InsufficientBalance);
        assert_eq!(deposit.balance, 100);

        assert_eq!(deposit.debit(100).unwrap(), 0);
    }

    #[test]
    fn test_credit_overflow() {
        let mut deposit = Deposit::default();
        deposit.open(Pubkey::new_unique(), 255);
        deposit.credit(u64::MAX).unwrap();

        assert_error(deposit.credit(1), RegistryError::Overflow);
        assert_eq!(deposit.balance, u64::MAX);
    }
}
