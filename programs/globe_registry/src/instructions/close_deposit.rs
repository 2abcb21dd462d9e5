use anchor_lang::prelude::*;
use anchor_spl::{
    token_interface::{Mint as InterfaceMint, TokenAccount as InterfaceTokenAccount, TokenInterface},
    associated_token::AssociatedToken,
};
use crate::collaborators::{Signers, VaultTransfer};
use crate::errors::RegistryError;
use crate::state::{Deposit, Registry, VAULT_SEED};

#[derive(Accounts)]
pub struct CloseDeposit<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [Registry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Closed to the owner once refunded
    #[account(
        mut,
        seeds = [Deposit::SEED, owner.key().as_ref()],
        bump,
    )]
    pub deposit: Option<Account<'info, Deposit>>,

    #[account(
        constraint = token_mint.key() == registry.token_mint @ RegistryError::WrongMint
    )]
    pub token_mint: InterfaceAccount<'info, InterfaceMint>,

    #[account(
        mut,
        seeds = [VAULT_SEED, registry.key().as_ref()],
        bump = registry.vault_bump,
    )]
    pub vault: InterfaceAccount<'info, InterfaceTokenAccount>,

    /// Owner's token account receiving the refund
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, InterfaceTokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(ctx: Context<CloseDeposit>) -> Result<()> {
    let owner = ctx.accounts.owner.key();

    // Get the registry bump for PDA signing
    let bump = ctx.accounts.registry.bump;
    let seeds: &[&[u8]] = &[Registry::SEED, &[bump]];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    let mut transfer = VaultTransfer {
        token_program: ctx.accounts.token_program.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        vault: ctx.accounts.vault.to_account_info(),
        vault_authority: ctx.accounts.registry.to_account_info(),
        destination: ctx.accounts.owner_token_account.to_account_info(),
        destination_owner: owner,
        decimals: ctx.accounts.token_mint.decimals,
        signer_seeds,
    };

    let refunded = ctx.accounts.registry.close_deposit(
        &Signers::new([owner]),
        &mut transfer,
        ctx.accounts.deposit.as_deref_mut(),
        owner,
    )?;
    if let Some(deposit) = &ctx.accounts.deposit {
        deposit.close(ctx.accounts.owner.to_account_info())?;
    }

    msg!("Deposit of {} closed, refunded {}", owner, refunded);
    Ok(())
}
