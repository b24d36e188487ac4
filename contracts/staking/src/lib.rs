#![no_std]

#[cfg(test)]
extern crate std;


mod errors;
mod events;

pub use errors::Error;
pub use events::{StakeChangedEvent, StakeInitializedEvent};

use soroban_sdk::{contract, contractimpl, contractmeta, contracttype, token, Address, Env};

contractmeta!(
    key = "Description",
    val = "Stake ledger: lock tokens and reclaim them at will"
);

// ==================== Storage Keys ====================

#[contracttype]
pub enum DataKey {
    // Singleton, instance storage
    Totals, // StakeTotals

    // Per-account, persistent
    Stake(Address), // i128, absent means 0
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StakeTotals {
    pub token: Address,
    pub total_staked: i128,
}

// ==================== Storage Helpers ====================

fn load_totals(env: &Env) -> Result<StakeTotals, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Totals)
        .ok_or(Error::NotInitialized)
}

fn save_totals(env: &Env, totals: &StakeTotals) {
    env.storage().instance().set(&DataKey::Totals, totals);
}

fn load_stake(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Stake(account.clone()))
        .unwrap_or(0)
}

fn save_stake(env: &Env, account: &Address, stake: i128) {
    let key = DataKey::Stake(account.clone());
    if stake == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &stake);
    }
}

fn require_positive(amount: i128) -> Result<(), Error> {
    match amount {
        0 => Err(Error::ZeroAmount),
        a if a < 0 => Err(Error::InvalidAmount),
        _ => Ok(()),
    }
}

// ==================== Contract ====================

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    /// Bind the staked token. Exactly once, signed by `deployer`.
    pub fn initialize(env: Env, deployer: Address, token: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Totals) {
            return Err(Error::AlreadyInitialized);
        }
        deployer.require_auth();
        save_totals(
            &env,
            &StakeTotals {
                token: token.clone(),
                total_staked: 0,
            },
        );
        events::emit_initialized(&env, token);
        Ok(())
    }

    /// Lock `amount` tokens. The account must have approved this contract as
    /// spender for at least `amount` beforehand.
    pub fn stake_tokens(env: Env, account: Address, amount: i128) -> Result<(), Error> {
        account.require_auth();
        require_positive(amount)?;
        let mut totals = load_totals(&env)?;

        let stake = load_stake(&env, &account)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        totals.total_staked = totals
            .total_staked
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        save_stake(&env, &account, stake);
        save_totals(&env, &totals);

        let contract = env.current_contract_address();
        let client = token::Client::new(&env, &totals.token);
        match client.try_transfer_from(&contract, &account, &contract, &amount) {
            Ok(Ok(())) => {}
            _ => return Err(Error::TransferFailed),
        }

        events::emit_staked(&env, account, amount, stake);
        Ok(())
    }

    /// Release up to the account's whole stake. No lock period applies.
    pub fn unstake_tokens(env: Env, account: Address, amount: i128) -> Result<(), Error> {
        account.require_auth();
        require_positive(amount)?;
        let mut totals = load_totals(&env)?;

        let current = load_stake(&env, &account);
        if amount > current {
            return Err(Error::InsufficientStake);
        }
        let stake = current - amount;
        totals.total_staked = totals
            .total_staked
            .checked_sub(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        save_stake(&env, &account, stake);
        save_totals(&env, &totals);

        let contract = env.current_contract_address();
        let client = token::Client::new(&env, &totals.token);
        match client.try_transfer(&contract, &account, &amount) {
            Ok(Ok(())) => {}
            _ => return Err(Error::TransferFailed),
        }

        events::emit_unstaked(&env, account, amount, stake);
        Ok(())
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        Ok(load_totals(&env)?.token)
    }

    pub fn get_stake(env: Env, account: Address) -> i128 {
        load_stake(&env, &account)
    }

    pub fn get_total_staked(env: Env) -> Result<i128, Error> {
        Ok(load_totals(&env)?.total_staked)
    }
}
