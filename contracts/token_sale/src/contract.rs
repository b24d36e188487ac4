use crate::errors::Error;
use crate::events;
use crate::math;
use crate::storage::*;
use crate::types::*;
use access_control::Permission;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, symbol_short, token, Address, Env, Vec,
};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Phased, whitelisted token sale with per-account caps"
);

/// Tokens per 1000 whole payment units until the owner sets a price.
pub const DEFAULT_TOKENS_PER_K_UNIT: i128 = 4_000_000;
/// Per-account cap, in whole tokens, applied when the token is bound.
pub const DEFAULT_MAX_TOKENS_PER_ACCOUNT: i128 = 400_000;

#[contract]
pub struct TokenSaleContract;

#[contractimpl]
impl TokenSaleContract {
    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Create the sale with zeroed aggregates. The sold token is bound later
    /// by `initialize`.
    pub fn deploy(
        env: Env,
        owner: Address,
        wallet: Address,
        payment_token: Address,
        start_time: u64,
        end_time: u64,
        contribution_min: i128,
    ) -> Result<(), Error> {
        if has_state(&env) {
            return Err(Error::AlreadyDeployed);
        }
        owner.require_auth();

        if wallet == env.current_contract_address() || wallet == owner {
            return Err(Error::InvalidAddress);
        }
        if contribution_min < 0 {
            return Err(Error::InvalidAmount);
        }

        let state = SaleState {
            wallet: wallet.clone(),
            payment_token: payment_token.clone(),
            token: None,
            token_conversion_factor: 0,
            start_time,
            end_time,
            tokens_per_k_unit: DEFAULT_TOKENS_PER_K_UNIT,
            bonus_bps: 0,
            max_tokens_per_account: 0,
            contribution_min,
            config_policy: ConfigPolicy::UntilFinalized,
            total_tokens_sold: 0,
            total_value_collected: 0,
            suspended: false,
            finalized: false,
        };

        access_control::set_owner(&env, &owner);
        set_state(&env, &state);

        events::emit_deployed(&env, owner, wallet, payment_token);
        Ok(())
    }

    /// Bind the sold token and fix the conversion factor. Exactly once.
    pub fn initialize(env: Env, caller: Address, token: Address) -> Result<(), Error> {
        let mut state = get_state(&env)?;
        access_control::authorize(&env, &caller, Permission::Owner)?;

        if state.token.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        if state.finalized {
            return Err(Error::AlreadyFinalized);
        }
        if token == env.current_contract_address() || token == state.wallet {
            return Err(Error::InvalidAddress);
        }

        let token_decimals = token::Client::new(&env, &token).decimals();
        let payment_decimals = token::Client::new(&env, &state.payment_token).decimals();
        let factor = math::conversion_factor(payment_decimals, token_decimals)?;

        state.token = Some(token.clone());
        state.token_conversion_factor = factor;
        state.max_tokens_per_account =
            math::whole_tokens(DEFAULT_MAX_TOKENS_PER_ACCOUNT, token_decimals)?;
        set_state(&env, &state);

        events::emit_initialized(&env, token, factor);
        Ok(())
    }

    /// Terminal. Rejects every later configuration change and purchase.
    pub fn finalize(env: Env, caller: Address) -> Result<(), Error> {
        let mut state = get_state(&env)?;
        access_control::authorize(&env, &caller, Permission::Owner)?;

        if state.finalized {
            return Err(Error::AlreadyFinalized);
        }
        state.finalized = true;
        set_state(&env, &state);

        events::emit_status(&env, symbol_short!("FINAL"), caller);
        Ok(())
    }

    pub fn suspend(env: Env, caller: Address) -> Result<(), Error> {
        let mut state = get_state(&env)?;
        access_control::authorize(&env, &caller, Permission::OwnerOrOperator)?;

        if state.finalized {
            return Err(Error::AlreadyFinalized);
        }
        if state.suspended {
            return Err(Error::AlreadySuspended);
        }
        state.suspended = true;
        set_state(&env, &state);

        events::emit_status(&env, symbol_short!("SUSPEND"), caller);
        Ok(())
    }

    pub fn resume(env: Env, caller: Address) -> Result<(), Error> {
        let mut state = get_state(&env)?;
        access_control::authorize(&env, &caller, Permission::OwnerOrOperator)?;

        if state.finalized {
            return Err(Error::AlreadyFinalized);
        }
        if !state.suspended {
            return Err(Error::NotSuspended);
        }
        state.suspended = false;
        set_state(&env, &state);

        events::emit_status(&env, symbol_short!("RESUME"), caller);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Configuration (owner)
    // ------------------------------------------------------------------

    pub fn set_sale_window(
        env: Env,
        caller: Address,
        start_time: u64,
        end_time: u64,
    ) -> Result<(), Error> {
        let mut state = Self::load_for_config(&env, &caller)?;
        state.start_time = start_time;
        state.end_time = end_time;
        set_state(&env, &state);

        events::emit_window_updated(&env, start_time, end_time);
        Ok(())
    }

    pub fn set_bonus(env: Env, caller: Address, bonus_bps: u32) -> Result<(), Error> {
        let mut state = Self::load_for_config(&env, &caller)?;
        if bonus_bps > math::MAX_BONUS_BPS {
            return Err(Error::InvalidBonus);
        }
        state.bonus_bps = bonus_bps;
        set_state(&env, &state);

        events::emit_value_updated(&env, symbol_short!("BONUS"), bonus_bps as i128);
        Ok(())
    }

    pub fn set_tokens_per_k_unit(
        env: Env,
        caller: Address,
        tokens_per_k_unit: i128,
    ) -> Result<(), Error> {
        let mut state = Self::load_for_config(&env, &caller)?;
        if tokens_per_k_unit < 0 {
            return Err(Error::InvalidAmount);
        }
        if tokens_per_k_unit == 0 {
            return Err(Error::ZeroAmount);
        }
        state.tokens_per_k_unit = tokens_per_k_unit;
        set_state(&env, &state);

        events::emit_value_updated(&env, symbol_short!("PRICE"), tokens_per_k_unit);
        Ok(())
    }

    /// `0` removes the cap.
    pub fn set_max_tokens_per_account(
        env: Env,
        caller: Address,
        max_tokens: i128,
    ) -> Result<(), Error> {
        let mut state = Self::load_for_config(&env, &caller)?;
        if max_tokens < 0 {
            return Err(Error::InvalidAmount);
        }
        state.max_tokens_per_account = max_tokens;
        set_state(&env, &state);

        events::emit_value_updated(&env, symbol_short!("MAX_ACCT"), max_tokens);
        Ok(())
    }

    pub fn set_config_policy(
        env: Env,
        caller: Address,
        policy: ConfigPolicy,
    ) -> Result<(), Error> {
        let mut state = get_state(&env)?;
        access_control::authorize(&env, &caller, Permission::Owner)?;
        Self::require_configurable(&state)?;

        state.config_policy = policy;
        set_state(&env, &state);

        events::emit_policy_updated(&env, policy);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Whitelist (owner or operator)
    // ------------------------------------------------------------------

    pub fn update_whitelist(
        env: Env,
        caller: Address,
        account: Address,
        tier: WhitelistTier,
    ) -> Result<(), Error> {
        let state = get_state(&env)?;
        access_control::authorize(&env, &caller, Permission::OwnerOrOperator)?;
        if state.finalized {
            return Err(Error::AlreadyFinalized);
        }
        Self::require_listable(&env, &state, &account)?;

        set_whitelist_tier(&env, &account, tier);
        events::emit_whitelist_updated(&env, account, tier);
        Ok(())
    }

    /// Applies `tier` to every account, in order. Nothing is written unless
    /// every account is acceptable.
    pub fn update_whitelist_batch(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
        tier: WhitelistTier,
    ) -> Result<(), Error> {
        let state = get_state(&env)?;
        access_control::authorize(&env, &caller, Permission::OwnerOrOperator)?;
        if state.finalized {
            return Err(Error::AlreadyFinalized);
        }
        if accounts.is_empty() {
            return Err(Error::EmptyBatch);
        }
        for account in accounts.iter() {
            Self::require_listable(&env, &state, &account)?;
        }

        for account in accounts.iter() {
            set_whitelist_tier(&env, &account, tier);
            events::emit_whitelist_updated(&env, account, tier);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Purchase
    // ------------------------------------------------------------------

    /// Buy tokens for `beneficiary` with up to `value` of the payment token.
    ///
    /// The grant is trimmed to the remaining sale supply and to the
    /// beneficiary's remaining quota (cap minus live balance). When trimmed,
    /// only the cost of the granted tokens is pulled from `sender`.
    /// Returns the number of tokens granted.
    pub fn buy_tokens(
        env: Env,
        sender: Address,
        beneficiary: Address,
        value: i128,
    ) -> Result<i128, Error> {
        sender.require_auth();

        let mut state = get_state(&env)?;
        let token_address = Self::require_open(&env, &state)?;

        if get_whitelist_tier(&env, &sender) < PURCHASE_TIER
            || get_whitelist_tier(&env, &beneficiary) < PURCHASE_TIER
        {
            return Err(Error::NotWhitelisted);
        }

        if value < 0 {
            return Err(Error::InvalidAmount);
        }
        if value == 0 {
            return Err(Error::ZeroAmount);
        }
        if value < state.contribution_min {
            return Err(Error::BelowMinimumContribution);
        }

        let requested = math::tokens_from_value(
            state.token_conversion_factor,
            state.tokens_per_k_unit,
            value,
            state.bonus_bps,
        )?;
        if requested == 0 {
            return Err(Error::ZeroAmount);
        }

        let sale_token = token::Client::new(&env, &token_address);
        let contract = env.current_contract_address();

        let mut max_allowed = sale_token.balance(&contract);
        if state.max_tokens_per_account > 0 {
            let held = sale_token.balance(&beneficiary);
            let quota = state
                .max_tokens_per_account
                .checked_sub(held)
                .ok_or(Error::ArithmeticOverflow)?
                .max(0);
            max_allowed = max_allowed.min(quota);
        }

        let granted = requested.min(max_allowed);
        if granted <= 0 {
            return Err(Error::InsufficientQuota);
        }

        let cost = if granted < requested {
            let cost = math::value_from_tokens(
                state.token_conversion_factor,
                state.tokens_per_k_unit,
                granted,
                state.bonus_bps,
            )?;
            log!(&env, "purchase trimmed", requested, granted, cost);
            cost
        } else {
            value
        };

        state.total_tokens_sold = state
            .total_tokens_sold
            .checked_add(granted)
            .ok_or(Error::ArithmeticOverflow)?;
        state.total_value_collected = state
            .total_value_collected
            .checked_add(cost)
            .ok_or(Error::ArithmeticOverflow)?;
        set_state(&env, &state);

        if cost > 0 {
            let payment = token::Client::new(&env, &state.payment_token);
            if !matches!(payment.try_transfer(&sender, &state.wallet, &cost), Ok(Ok(()))) {
                return Err(Error::TransferFailed);
            }
        }
        if !matches!(
            sale_token.try_transfer(&contract, &beneficiary, &granted),
            Ok(Ok(()))
        ) {
            return Err(Error::TransferFailed);
        }

        events::emit_tokens_purchased(&env, sender, beneficiary, cost, granted);
        Ok(granted)
    }

    // ------------------------------------------------------------------
    // Treasury (owner)
    // ------------------------------------------------------------------

    /// Sweep the whole remaining token balance to the owner. Returns the
    /// amount moved, which is 0 once the balance is exhausted.
    pub fn reclaim_tokens(env: Env, caller: Address) -> Result<i128, Error> {
        let state = get_state(&env)?;
        access_control::authorize(&env, &caller, Permission::Owner)?;
        let token_address = state.token.ok_or(Error::NotInitialized)?;

        let sale_token = token::Client::new(&env, &token_address);
        let contract = env.current_contract_address();
        let amount = sale_token.balance(&contract);

        if amount > 0 {
            if !matches!(sale_token.try_transfer(&contract, &caller, &amount), Ok(Ok(()))) {
                return Err(Error::TransferFailed);
            }
        } else {
            log!(&env, "reclaim found an empty balance");
        }

        events::emit_tokens_reclaimed(&env, caller, amount);
        Ok(amount)
    }

    // ------------------------------------------------------------------
    // Roles
    // ------------------------------------------------------------------

    pub fn propose_owner(env: Env, caller: Address, proposed: Address) -> Result<(), Error> {
        get_state(&env)?;
        Ok(access_control::propose_owner(&env, &caller, &proposed)?)
    }

    pub fn cancel_ownership_transfer(env: Env, caller: Address) -> Result<(), Error> {
        get_state(&env)?;
        Ok(access_control::cancel_ownership_transfer(&env, &caller)?)
    }

    pub fn accept_ownership(env: Env, caller: Address) -> Result<(), Error> {
        let state = get_state(&env)?;
        if caller == state.wallet {
            return Err(Error::InvalidAddress);
        }
        Ok(access_control::accept_ownership(&env, &caller)?)
    }

    pub fn set_operator(env: Env, caller: Address, operator: Address) -> Result<(), Error> {
        let state = get_state(&env)?;
        if operator == state.wallet {
            return Err(Error::InvalidAddress);
        }
        Ok(access_control::set_operator(&env, &caller, &operator)?)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn get_state(env: Env) -> Result<SaleState, Error> {
        get_state(&env)
    }

    pub fn get_phase(env: Env) -> Result<SalePhase, Error> {
        Ok(get_state(&env)?.phase(get_ledger_timestamp(&env)))
    }

    pub fn get_whitelist_tier(env: Env, account: Address) -> WhitelistTier {
        get_whitelist_tier(&env, &account)
    }

    pub fn get_owner(env: Env) -> Option<Address> {
        access_control::owner(&env)
    }

    pub fn get_proposed_owner(env: Env) -> Option<Address> {
        access_control::proposed_owner(&env)
    }

    pub fn get_operator(env: Env) -> Option<Address> {
        access_control::operator(&env)
    }

    pub fn get_token(env: Env) -> Result<Option<Address>, Error> {
        Ok(get_state(&env)?.token)
    }

    pub fn get_wallet(env: Env) -> Result<Address, Error> {
        Ok(get_state(&env)?.wallet)
    }

    pub fn get_payment_token(env: Env) -> Result<Address, Error> {
        Ok(get_state(&env)?.payment_token)
    }

    pub fn get_token_conversion_factor(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.token_conversion_factor)
    }

    pub fn get_start_time(env: Env) -> Result<u64, Error> {
        Ok(get_state(&env)?.start_time)
    }

    pub fn get_end_time(env: Env) -> Result<u64, Error> {
        Ok(get_state(&env)?.end_time)
    }

    pub fn get_tokens_per_k_unit(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.tokens_per_k_unit)
    }

    pub fn get_bonus(env: Env) -> Result<u32, Error> {
        Ok(get_state(&env)?.bonus_bps)
    }

    pub fn get_max_tokens_per_account(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.max_tokens_per_account)
    }

    pub fn get_contribution_min(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.contribution_min)
    }

    pub fn get_config_policy(env: Env) -> Result<ConfigPolicy, Error> {
        Ok(get_state(&env)?.config_policy)
    }

    pub fn get_total_tokens_sold(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.total_tokens_sold)
    }

    pub fn get_total_value_collected(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.total_value_collected)
    }

    pub fn is_suspended(env: Env) -> Result<bool, Error> {
        Ok(get_state(&env)?.suspended)
    }

    pub fn is_finalized(env: Env) -> Result<bool, Error> {
        Ok(get_state(&env)?.finalized)
    }
}

impl TokenSaleContract {
    fn load_for_config(env: &Env, caller: &Address) -> Result<SaleState, Error> {
        let state = get_state(env)?;
        access_control::authorize(env, caller, Permission::Owner)?;
        Self::require_configurable(&state)?;
        if state.config_policy == ConfigPolicy::OutsideWindow
            && state.phase(get_ledger_timestamp(env)) == SalePhase::Open
        {
            return Err(Error::SaleInProgress);
        }
        Ok(state)
    }

    fn require_configurable(state: &SaleState) -> Result<(), Error> {
        if state.finalized {
            return Err(Error::AlreadyFinalized);
        }
        if state.token.is_none() {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_listable(env: &Env, state: &SaleState, account: &Address) -> Result<(), Error> {
        if *account == env.current_contract_address() || *account == state.wallet {
            return Err(Error::InvalidAddress);
        }
        Ok(())
    }

    /// Returns the bound token when the sale accepts purchases right now.
    fn require_open(env: &Env, state: &SaleState) -> Result<Address, Error> {
        match state.phase(get_ledger_timestamp(env)) {
            SalePhase::Open => state.token.clone().ok_or(Error::NotInitialized),
            SalePhase::Uninitialized => Err(Error::NotInitialized),
            SalePhase::Finalized => Err(Error::AlreadyFinalized),
            SalePhase::Suspended => Err(Error::SaleSuspended),
            SalePhase::NotStarted | SalePhase::Ended => Err(Error::NotInWindow),
        }
    }
}
