//! Owner-driven batch of `transfer_from` calls against one token and one
//! source account. A batch is applied entirely or not at all.
#![no_std]


mod errors;

pub use errors::Error;

use access_control::Permission;
use soroban_sdk::{
    contract, contractimpl, contractmeta, contracttype, log, symbol_short, token, Address, Env,
    Vec,
};

contractmeta!(
    key = "Description",
    val = "Atomic batch transfers from a single approving source"
);

#[contracttype]
pub enum DataKey {
    Config,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BatchConfig {
    pub token: Address,
    pub source: Address,
}

#[derive(Clone)]
#[contracttype]
pub struct BatchCompletedEvent {
    pub count: u32,
    pub timestamp: u64,
}

fn load_config(env: &Env) -> Result<BatchConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

#[contract]
pub struct TokenBatchContract;

#[contractimpl]
impl TokenBatchContract {
    /// `source` must approve this contract as spender before any batch runs.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        source: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        if source == env.current_contract_address() {
            return Err(Error::InvalidAddress);
        }

        access_control::set_owner(&env, &owner);
        env.storage()
            .instance()
            .set(&DataKey::Config, &BatchConfig { token, source });
        Ok(())
    }

    /// Moves `amounts[i]` from the source to `beneficiaries[i]` for every `i`,
    /// in order. Returns the number of transfers applied.
    pub fn transfer_from_batch(
        env: Env,
        caller: Address,
        beneficiaries: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<u32, Error> {
        let config = load_config(&env)?;
        access_control::authorize(&env, &caller, Permission::Owner)?;

        if beneficiaries.is_empty() {
            return Err(Error::EmptyBatch);
        }
        if beneficiaries.len() != amounts.len() {
            return Err(Error::LengthMismatch);
        }
        if amounts.iter().any(|amount| amount < 0) {
            return Err(Error::InvalidAmount);
        }

        let contract = env.current_contract_address();
        let client = token::Client::new(&env, &config.token);
        for (beneficiary, amount) in beneficiaries.iter().zip(amounts.iter()) {
            if !matches!(
                client.try_transfer_from(&contract, &config.source, &beneficiary, &amount),
                Ok(Ok(()))
            ) {
                log!(&env, "batch rejected at beneficiary", beneficiary, amount);
                return Err(Error::TransferFailed);
            }
        }

        let count = beneficiaries.len();
        env.events().publish(
            ("BATCH", symbol_short!("BATCH_OK")),
            BatchCompletedEvent {
                count,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(count)
    }

    pub fn propose_owner(env: Env, caller: Address, proposed: Address) -> Result<(), Error> {
        load_config(&env)?;
        Ok(access_control::propose_owner(&env, &caller, &proposed)?)
    }

    pub fn cancel_ownership_transfer(env: Env, caller: Address) -> Result<(), Error> {
        load_config(&env)?;
        Ok(access_control::cancel_ownership_transfer(&env, &caller)?)
    }

    pub fn accept_ownership(env: Env, caller: Address) -> Result<(), Error> {
        load_config(&env)?;
        Ok(access_control::accept_ownership(&env, &caller)?)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        Ok(load_config(&env)?.token)
    }

    pub fn get_source(env: Env) -> Result<Address, Error> {
        Ok(load_config(&env)?.source)
    }

    pub fn get_owner(env: Env) -> Option<Address> {
        access_control::owner(&env)
    }

    pub fn get_proposed_owner(env: Env) -> Option<Address> {
        access_control::proposed_owner(&env)
    }
}
