use anchor_lang::prelude::*;
use crate::collaborators::Signers;
use crate::state::{Deposit, Registry};

#[derive(Accounts)]
pub struct OpenDeposit<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [Registry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Deposit::INIT_SPACE,
        seeds = [Deposit::SEED, owner.key().as_ref()],
        bump
    )]
    pub deposit: Account<'info, Deposit>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<OpenDeposit>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let bump = ctx.bumps.deposit;
    let opened = ctx.accounts.registry.open_deposit(
        &Signers::new([owner]),
        &mut ctx.accounts.deposit,
        owner,
        bump,
    )?;
    if opened {
        msg!("Deposit opened for {}", owner);
    }
    Ok(())
}
