//! Host services the registry core relies on: proving that the caller
//! controls a principal, and moving tokens out of the registry vault.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

use crate::errors::RegistryError;

pub trait Authorizer {
    /// Fails with `Unauthorized` unless the caller controls `principal`
    fn require_auth(&self, principal: &Pubkey) -> Result<()>;
}

pub trait TokenTransfer {
    fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64, memo: &str) -> Result<()>;
}

/// The signers of the current instruction
#[derive(Clone, Debug, Default)]
pub struct Signers {
    keys: Vec<Pubkey>,
}

impl Signers {
    pub fn new(keys: impl IntoIterator<Item = Pubkey>) -> Self {
        Self { keys: keys.into_iter().collect() }
    }

    /// The primary signer plus every signer passed in `remaining_accounts`
    pub fn from_accounts(primary: Pubkey, remaining: &[AccountInfo]) -> Self {
        let extra = remaining.iter().filter(|info| info.is_signer).map(|info| *info.key);
        Self::new(std::iter::once(primary).chain(extra))
    }
}

impl Authorizer for Signers {
    fn require_auth(&self, principal: &Pubkey) -> Result<()> {
        require!(self.keys.contains(principal), RegistryError::Unauthorized);
        Ok(())
    }
}

/// Token interface transfer out of the registry vault, signed by the
/// registry PDA. Only the destination account supplied to the instruction
/// can receive funds.
pub struct VaultTransfer<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub vault_authority: AccountInfo<'info>,
    pub destination: AccountInfo<'info>,
    pub destination_owner: Pubkey,
    pub decimals: u8,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl TokenTransfer for VaultTransfer<'_, '_> {
    fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64, memo: &str) -> Result<()> {
        require_keys_eq!(from, *self.vault_authority.key, RegistryError::Unauthorized);
        require_keys_eq!(to, self.destination_owner, RegistryError::InvalidDestination);

        let cpi_accounts = TransferChecked {
            from: self.vault.clone(),
            mint: self.mint.clone(),
            to: self.destination.clone(),
            authority: self.vault_authority.clone(),
        };
        transfer_checked(
            CpiContext::new_with_signer(self.token_program.clone(), cpi_accounts, self.signer_seeds),
            amount,
            self.decimals,
        )?;

        if !memo.is_empty() {
            msg!("Transferred {} to {}: {}", amount, to, memo);
        }
        Ok(())
    }
}
