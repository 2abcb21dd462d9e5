use anchor_lang::prelude::*;
use anchor_spl::{
    token_interface::{
        transfer_checked, Mint as InterfaceMint, TokenAccount as InterfaceTokenAccount,
        TokenInterface, TransferChecked,
    },
    associated_token::AssociatedToken,
};
use crate::state::{Deposit, Registry, VAULT_SEED};

/// Move tokens from the depositor's wallet into the registry vault and
/// report the inbound transfer to the ledger
#[derive(Accounts)]
pub struct DepositTokens<'info> {
    pub depositor: Signer<'info>,

    #[account(
        seeds = [Registry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [Deposit::SEED, depositor.key().as_ref()],
        bump,
    )]
    pub deposit: Option<Account<'info, Deposit>>,

    pub token_mint: InterfaceAccount<'info, InterfaceMint>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = depositor,
        associated_token::token_program = token_program,
    )]
    pub depositor_token_account: InterfaceAccount<'info, InterfaceTokenAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, registry.key().as_ref()],
        bump = registry.vault_bump,
    )]
    pub vault: InterfaceAccount<'info, InterfaceTokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(ctx: Context<DepositTokens>, amount: u64, memo: String) -> Result<()> {
    let depositor = ctx.accounts.depositor.key();
    let registry_key = ctx.accounts.registry.key();
    let mint = ctx.accounts.token_mint.key();

    let cpi_accounts = TransferChecked {
        from: ctx.accounts.depositor_token_account.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.depositor.to_account_info(),
    };
    transfer_checked(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        amount,
        ctx.accounts.token_mint.decimals,
    )?;

    // The vault's authority is the registry PDA, so the registry is the recipient
    ctx.accounts.registry.notify_incoming_transfer(
        ctx.accounts.deposit.as_deref_mut(),
        depositor,
        registry_key,
        mint,
        amount,
        &memo,
    )?;

    Ok(())
}
