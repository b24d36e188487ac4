use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone)]
#[contracttype]
pub struct StakeInitializedEvent {
    pub token: Address,
    pub timestamp: u64,
}

/// Payload for both `STAKED` and `UNSTAKED`.
#[derive(Clone)]
#[contracttype]
pub struct StakeChangedEvent {
    pub account: Address,
    pub amount: i128,
    pub stake: i128,
    pub timestamp: u64,
}

pub fn emit_initialized(env: &Env, token: Address) {
    env.events().publish(
        ("STAKE", symbol_short!("INIT")),
        StakeInitializedEvent {
            token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_staked(env: &Env, account: Address, amount: i128, stake: i128) {
    env.events().publish(
        ("STAKE", symbol_short!("STAKED")),
        StakeChangedEvent {
            account,
            amount,
            stake,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_unstaked(env: &Env, account: Address, amount: i128, stake: i128) {
    env.events().publish(
        ("STAKE", symbol_short!("UNSTAKED")),
        StakeChangedEvent {
            account,
            amount,
            stake,
            timestamp: env.ledger().timestamp(),
        },
    );
}
