//! Owner / Operator access control shared by the sale and batch contracts.
//!
//! Role entries live in the calling contract's instance storage. Every gated
//! entry point calls [`authorize`] first and maps [`AccessError`] into its own
//! contract error with `?`.
#![no_std]


use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Owner,
    Operator,
}

/// Minimal role an operation requires.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Permission {
    Owner,
    OwnerOrOperator,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessError {
    Unauthorized,
    InvalidAddress,
    NoPendingTransfer,
}

#[contracttype]
enum AccessKey {
    Owner,
    ProposedOwner,
    Operator,
}

#[derive(Clone)]
#[contracttype]
pub struct OwnershipEvent {
    pub owner: Address,
    pub counterpart: Option<Address>,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct OperatorEvent {
    pub operator: Address,
    pub timestamp: u64,
}

// ==================== Reads ====================

pub fn owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&AccessKey::Owner)
}

pub fn proposed_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&AccessKey::ProposedOwner)
}

pub fn operator(env: &Env) -> Option<Address> {
    env.storage().instance().get(&AccessKey::Operator)
}

/// Role `account` holds right now, without requiring its signature.
pub fn role_of(env: &Env, account: &Address) -> Option<Role> {
    if owner(env).as_ref() == Some(account) {
        return Some(Role::Owner);
    }
    if operator(env).as_ref() == Some(account) {
        return Some(Role::Operator);
    }
    None
}

// ==================== Authorization ====================

/// Bootstrap the owner. Only called from a contract's deployment entry point.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&AccessKey::Owner, owner);
}

/// Requires `caller`'s signature and admits it if its role satisfies `permission`.
pub fn authorize(env: &Env, caller: &Address, permission: Permission) -> Result<Role, AccessError> {
    caller.require_auth();
    match (role_of(env, caller), permission) {
        (Some(Role::Owner), _) => Ok(Role::Owner),
        (Some(Role::Operator), Permission::OwnerOrOperator) => Ok(Role::Operator),
        _ => Err(AccessError::Unauthorized),
    }
}

// ==================== Role management ====================

pub fn propose_owner(env: &Env, caller: &Address, proposed: &Address) -> Result<(), AccessError> {
    authorize(env, caller, Permission::Owner)?;
    if proposed == caller || *proposed == env.current_contract_address() {
        return Err(AccessError::InvalidAddress);
    }

    env.storage()
        .instance()
        .set(&AccessKey::ProposedOwner, proposed);

    emit_ownership(env, symbol_short!("OWN_PROP"), caller, Some(proposed.clone()));
    Ok(())
}

pub fn cancel_ownership_transfer(env: &Env, caller: &Address) -> Result<(), AccessError> {
    authorize(env, caller, Permission::Owner)?;
    let proposed = proposed_owner(env).ok_or(AccessError::NoPendingTransfer)?;

    env.storage().instance().remove(&AccessKey::ProposedOwner);

    emit_ownership(env, symbol_short!("OWN_CNCL"), caller, Some(proposed));
    Ok(())
}

/// Completes a hand-over. Only the proposed owner may call this.
pub fn accept_ownership(env: &Env, caller: &Address) -> Result<(), AccessError> {
    caller.require_auth();
    let proposed = proposed_owner(env).ok_or(AccessError::NoPendingTransfer)?;
    if proposed != *caller {
        return Err(AccessError::Unauthorized);
    }
    let previous = owner(env);

    env.storage().instance().set(&AccessKey::Owner, caller);
    env.storage().instance().remove(&AccessKey::ProposedOwner);
    // the new owner cannot keep a second role
    if operator(env).as_ref() == Some(caller) {
        env.storage().instance().remove(&AccessKey::Operator);
    }

    emit_ownership(env, symbol_short!("OWN_DONE"), caller, previous);
    Ok(())
}

pub fn set_operator(env: &Env, caller: &Address, new_operator: &Address) -> Result<(), AccessError> {
    authorize(env, caller, Permission::Owner)?;
    if new_operator == caller || *new_operator == env.current_contract_address() {
        return Err(AccessError::InvalidAddress);
    }

    env.storage()
        .instance()
        .set(&AccessKey::Operator, new_operator);

    env.events().publish(
        ("ACCESS", symbol_short!("OPS_SET")),
        OperatorEvent {
            operator: new_operator.clone(),
            timestamp: env.ledger().timestamp(),
        },
    );
    Ok(())
}

fn emit_ownership(env: &Env, name: soroban_sdk::Symbol, owner: &Address, counterpart: Option<Address>) {
    env.events().publish(
        ("ACCESS", name),
        OwnershipEvent {
            owner: owner.clone(),
            counterpart,
            timestamp: env.ledger().timestamp(),
        },
    );
}
