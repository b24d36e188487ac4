use soroban_sdk::{contracttype, Address, Env};

/// Whitelist classification. Higher tiers are admitted to every stage a lower
/// tier is admitted to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[contracttype]
#[repr(u32)]
pub enum WhitelistTier {
    NotListed = 0,
    Stage1 = 1,
    Stage2 = 2,
}

/// Lowest tier that may take part in a purchase, as sender or beneficiary.
pub const PURCHASE_TIER: WhitelistTier = WhitelistTier::Stage1;

/// Sale lifecycle, derived from the flags and the window on every read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum SalePhase {
    Uninitialized = 0,
    NotStarted = 1,
    Open = 2,
    Suspended = 3,
    Ended = 4,
    Finalized = 5,
}

/// When the owner may still change pricing, bonus, cap and window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum ConfigPolicy {
    /// Any time until `finalize`.
    UntilFinalized = 0,
    /// Until `finalize`, but never while the window is open.
    OutsideWindow = 1,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleState {
    pub wallet: Address,
    pub payment_token: Address,
    pub token: Option<Address>,
    pub token_conversion_factor: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub tokens_per_k_unit: i128,
    pub bonus_bps: u32,
    pub max_tokens_per_account: i128,
    pub contribution_min: i128,
    pub config_policy: ConfigPolicy,
    pub total_tokens_sold: i128,
    pub total_value_collected: i128,
    pub suspended: bool,
    pub finalized: bool,
}

impl SaleState {
    pub fn phase(&self, now: u64) -> SalePhase {
        if self.finalized {
            SalePhase::Finalized
        } else if self.token.is_none() {
            SalePhase::Uninitialized
        } else if self.suspended {
            SalePhase::Suspended
        } else if now < self.start_time {
            SalePhase::NotStarted
        } else if now > self.end_time {
            SalePhase::Ended
        } else {
            SalePhase::Open
        }
    }
}

#[contracttype]
pub enum DataKey {
    Sale,
    Whitelist(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
