//! Instance-storage lock held across outbound token calls.
//!
//! A balance-mutating entry point calls [`enter`] before talking to a token
//! contract and [`exit`] once the call has returned. Any nested attempt to
//! enter while the lock is held fails with [`CommonError::ReentrantCall`].

use soroban_sdk::{symbol_short, Env, Symbol};

use crate::CommonError;

const REENTRANCY_LOCK: Symbol = symbol_short!("RE_LOCK");

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&REENTRANCY_LOCK)
        .unwrap_or(false)
}

pub fn enter(env: &Env) -> Result<(), CommonError> {
    if is_locked(env) {
        return Err(CommonError::ReentrantCall);
    }
    env.storage().instance().set(&REENTRANCY_LOCK, &true);
    Ok(())
}

pub fn exit(env: &Env) {
    env.storage().instance().remove(&REENTRANCY_LOCK);
}
