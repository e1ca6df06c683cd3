#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, BytesN, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub reward_token: Address,
    pub timestamp: u64,
}

/// Fired exactly once per successful deposit.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub user: Address,
    pub token: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a user takes tokens back out of the pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub user: Address,
    pub token: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a token enters or leaves the whitelist.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistChangedEvent {
    pub token: Address,
    pub admin: Address,
    pub timestamp: u64,
}

/// Fired when a role is granted to or revoked from an account.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub role: BytesN<32>,
    pub account: Address,
    pub sender: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    start_time: u64,
    end_time: u64,
    reward_token: Address,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            start_time,
            end_time,
            reward_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, user: Address, token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("STAKED"), user.clone(), token.clone()),
        StakedEvent {
            user,
            token,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, user: Address, token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), user.clone(), token.clone()),
        WithdrawnEvent {
            user,
            token,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_token_whitelisted(env: &Env, token: Address, admin: Address) {
    env.events().publish(
        (symbol_short!("WL_ADD"), token.clone()),
        WhitelistChangedEvent {
            token,
            admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_token_removed(env: &Env, token: Address, admin: Address) {
    env.events().publish(
        (symbol_short!("WL_REM"), token.clone()),
        WhitelistChangedEvent {
            token,
            admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_granted(env: &Env, role: BytesN<32>, account: Address, sender: Address) {
    env.events().publish(
        (symbol_short!("ROLE_GRNT"), role.clone(), account.clone()),
        RoleChangedEvent {
            role,
            account,
            sender,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_revoked(env: &Env, role: BytesN<32>, account: Address, sender: Address) {
    env.events().publish(
        (symbol_short!("ROLE_RVK"), role.clone(), account.clone()),
        RoleChangedEvent {
            role,
            account,
            sender,
            timestamp: env.ledger().timestamp(),
        },
    );
}
