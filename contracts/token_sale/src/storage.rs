use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn has_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Sale)
}

pub fn get_state(env: &Env) -> Result<SaleState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Sale)
        .ok_or(Error::NotDeployed)
}

pub fn set_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&DataKey::Sale, state);
}

pub fn get_whitelist_tier(env: &Env, account: &Address) -> WhitelistTier {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelist(account.clone()))
        .unwrap_or(WhitelistTier::NotListed)
}

pub fn set_whitelist_tier(env: &Env, account: &Address, tier: WhitelistTier) {
    let key = DataKey::Whitelist(account.clone());
    if tier == WhitelistTier::NotListed {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &tier);
    }
}
