use crate::types::{ConfigPolicy, WhitelistTier};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ==================== Event Payload Structs ====================
// Indexers subscribe via topic pattern ("SALE", symbol_short!("…")).

#[derive(Clone)]
#[contracttype]
pub struct DeployedEvent {
    pub owner: Address,
    pub wallet: Address,
    pub payment_token: Address,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct InitializedEvent {
    pub token: Address,
    pub token_conversion_factor: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct WindowUpdatedEvent {
    pub start_time: u64,
    pub end_time: u64,
    pub timestamp: u64,
}

/// Shared payload for the scalar setters (price, bonus, cap).
#[derive(Clone)]
#[contracttype]
pub struct ValueUpdatedEvent {
    pub value: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct PolicyUpdatedEvent {
    pub policy: ConfigPolicy,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct WhitelistUpdatedEvent {
    pub account: Address,
    pub tier: WhitelistTier,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct TokensPurchasedEvent {
    pub sender: Address,
    pub beneficiary: Address,
    pub cost: i128,
    pub tokens: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct TokensReclaimedEvent {
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct SaleStatusEvent {
    pub caller: Address,
    pub timestamp: u64,
}

// ==================== Emit Functions ====================

const NAMESPACE: &str = "SALE";

fn topics(name: Symbol) -> (&'static str, Symbol) {
    (NAMESPACE, name)
}

pub fn emit_deployed(env: &Env, owner: Address, wallet: Address, payment_token: Address) {
    env.events().publish(
        topics(symbol_short!("DEPLOYED")),
        DeployedEvent {
            owner,
            wallet,
            payment_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_initialized(env: &Env, token: Address, token_conversion_factor: i128) {
    env.events().publish(
        topics(symbol_short!("INIT")),
        InitializedEvent {
            token,
            token_conversion_factor,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_window_updated(env: &Env, start_time: u64, end_time: u64) {
    env.events().publish(
        topics(symbol_short!("WINDOW")),
        WindowUpdatedEvent {
            start_time,
            end_time,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_value_updated(env: &Env, name: Symbol, value: i128) {
    env.events().publish(
        topics(name),
        ValueUpdatedEvent {
            value,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_policy_updated(env: &Env, policy: ConfigPolicy) {
    env.events().publish(
        topics(symbol_short!("POLICY")),
        PolicyUpdatedEvent {
            policy,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_whitelist_updated(env: &Env, account: Address, tier: WhitelistTier) {
    env.events().publish(
        topics(symbol_short!("WL_UPD")),
        WhitelistUpdatedEvent {
            account,
            tier,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_tokens_purchased(
    env: &Env,
    sender: Address,
    beneficiary: Address,
    cost: i128,
    tokens: i128,
) {
    env.events().publish(
        topics(symbol_short!("PURCHASE")),
        TokensPurchasedEvent {
            sender,
            beneficiary,
            cost,
            tokens,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_tokens_reclaimed(env: &Env, owner: Address, amount: i128) {
    env.events().publish(
        topics(symbol_short!("RECLAIM")),
        TokensReclaimedEvent {
            owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_status(env: &Env, name: Symbol, caller: Address) {
    env.events().publish(
        topics(name),
        SaleStatusEvent {
            caller,
            timestamp: env.ledger().timestamp(),
        },
    );
}
