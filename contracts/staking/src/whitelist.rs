//! Registry of token contracts approved for staking.
//!
//! Entries live in persistent storage keyed by token address; an absent
//! entry reads as "not whitelisted". Authorization is the caller's job.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

const WL_TOKEN: Symbol = symbol_short!("WL_TOK");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn token_key(token: &Address) -> (Symbol, Address) {
    (WL_TOKEN, token.clone())
}

pub fn is_whitelisted(env: &Env, token: &Address) -> bool {
    let key = token_key(token);
    let listed: bool = env.storage().persistent().get(&key).unwrap_or(false);
    if listed {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    listed
}

/// Marks `token` as stakeable. Returns `false` if it already was.
pub fn add(env: &Env, token: &Address) -> bool {
    if is_whitelisted(env, token) {
        return false;
    }
    let key = token_key(token);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    true
}

/// Clears the whitelist flag. Returns `false` if the token was not listed.
pub fn remove(env: &Env, token: &Address) -> bool {
    if !is_whitelisted(env, token) {
        return false;
    }
    env.storage().persistent().remove(&token_key(token));
    true
}
