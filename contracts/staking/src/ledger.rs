//! Balance-of-record for staked tokens.
//!
//! Per-user positions use tuple keys `(prefix, user, token)`; per-token
//! totals use `(prefix, token)`. Both default to zero when absent.
//! The total for a token always equals the sum of every user's position in
//! that token.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::ContractError;

const USER_STAKE: Symbol = symbol_short!("STK");
const TOKEN_TOTAL: Symbol = symbol_short!("TOT_STK");
const STAKER: Symbol = symbol_short!("STAKER");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn position_key(user: &Address, token: &Address) -> (Symbol, Address, Address) {
    (USER_STAKE, user.clone(), token.clone())
}

fn total_key(token: &Address) -> (Symbol, Address) {
    (TOKEN_TOTAL, token.clone())
}

fn staker_key(user: &Address) -> (Symbol, Address) {
    (STAKER, user.clone())
}

pub fn balance(env: &Env, user: &Address, token: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&position_key(user, token))
        .unwrap_or(0)
}

pub fn total(env: &Env, token: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&total_key(token))
        .unwrap_or(0)
}

fn write(env: &Env, user: &Address, token: &Address, balance: i128, total: i128) {
    let position = position_key(user, token);
    if balance == 0 {
        env.storage().persistent().remove(&position);
    } else {
        env.storage().persistent().set(&position, &balance);
        env.storage()
            .persistent()
            .extend_ttl(&position, TTL_THRESHOLD, TTL_EXTEND_TO);
    }

    let total_key = total_key(token);
    env.storage().persistent().set(&total_key, &total);
    env.storage()
        .persistent()
        .extend_ttl(&total_key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Adds `amount` to the user's position and the token total.
/// Returns the user's new balance.
pub fn credit(
    env: &Env,
    user: &Address,
    token: &Address,
    amount: i128,
) -> Result<i128, ContractError> {
    let new_balance = balance(env, user, token)
        .checked_add(amount)
        .ok_or(ContractError::InvalidAmount)?;
    let new_total = total(env, token)
        .checked_add(amount)
        .ok_or(ContractError::InvalidAmount)?;
    write(env, user, token, new_balance, new_total);
    Ok(new_balance)
}

/// Removes `amount` from the user's position and the token total.
/// Returns the user's new balance.
pub fn debit(
    env: &Env,
    user: &Address,
    token: &Address,
    amount: i128,
) -> Result<i128, ContractError> {
    let current = balance(env, user, token);
    if current < amount {
        return Err(ContractError::InsufficientBalance);
    }
    let new_balance = current - amount;
    let new_total = total(env, token).saturating_sub(amount);
    write(env, user, token, new_balance, new_total);
    Ok(new_balance)
}

// ── Staker flag ──────────────────────────────────────────────────────────────

/// Set on a user's first successful stake and never cleared.
pub fn mark_staker(env: &Env, user: &Address) {
    let key = staker_key(user);
    if !env.storage().persistent().has(&key) {
        env.storage().persistent().set(&key, &true);
    }
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_staker(env: &Env, user: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&staker_key(user))
        .unwrap_or(false)
}
