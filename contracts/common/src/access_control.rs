use soroban_sdk::{log, symbol_short, Address, BytesN, Env, Symbol, Vec};

use crate::CommonError;

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ROLE_PREFIX: Symbol = symbol_short!("ROLE");
const ROLE_MEMBERS: Symbol = symbol_short!("ROLE_MBR");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// Identifier of the role that administers every other role, including
/// itself. Encoded as 32 zero bytes.
pub fn default_admin_role(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

// ── Gate seam ────────────────────────────────────────────────────────────────

/// Answers "does `account` hold `role`?" for privileged entry points.
///
/// Contracts call [`require_role`] with a concrete gate type, so a different
/// policy (multisig, time-locked rotation) can be swapped in without touching
/// the calling contract's business logic.
pub trait AccessGate {
    fn has_role(env: &Env, role: &BytesN<32>, account: &Address) -> bool;
}

/// Capability table persisted in the calling contract's storage.
pub struct RoleTable;

impl AccessGate for RoleTable {
    fn has_role(env: &Env, role: &BytesN<32>, account: &Address) -> bool {
        has_role(env, role, account)
    }
}

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn role_key(role: &BytesN<32>, account: &Address) -> (Symbol, BytesN<32>, Address) {
    (ROLE_PREFIX, role.clone(), account.clone())
}

fn members_key(role: &BytesN<32>) -> (Symbol, BytesN<32>) {
    (ROLE_MEMBERS, role.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, BytesN<32>, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Returns `true` if `account` currently holds `role`.
pub fn has_role(env: &Env, role: &BytesN<32>, account: &Address) -> bool {
    let key = role_key(role, account);
    let held: bool = env.storage().persistent().get(&key).unwrap_or(false);
    if held {
        extend_ttl(env, &key);
    }
    held
}

/// Every role is administered by the default admin role.
pub fn role_admin(env: &Env, _role: &BytesN<32>) -> BytesN<32> {
    default_admin_role(env)
}

/// Guard: fails with [`CommonError::AccessDenied`] unless `G` reports that
/// `account` holds `role`. The denial reason naming both is written to the
/// diagnostic log.
pub fn require_role<G: AccessGate>(
    env: &Env,
    role: &BytesN<32>,
    account: &Address,
) -> Result<(), CommonError> {
    if G::has_role(env, role, account) {
        return Ok(());
    }
    log!(
        env,
        "AccessControl: account {} is missing role {}",
        account.clone(),
        role.clone()
    );
    Err(CommonError::AccessDenied)
}

/// Assigns `role` to `account`.
/// Only callable internally; callers must verify authorization beforehand.
///
/// Returns `true` if the account did not already hold the role.
pub fn grant_role(env: &Env, role: &BytesN<32>, account: &Address) -> bool {
    if has_role(env, role, account) {
        return false;
    }
    let key = role_key(role, account);
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);
    track_member(env, role, account);
    true
}

/// Removes `role` from `account`.
/// Only callable internally; callers must verify authorization beforehand.
///
/// Returns `true` if the account held the role.
pub fn revoke_role(env: &Env, role: &BytesN<32>, account: &Address) -> bool {
    if !has_role(env, role, account) {
        return false;
    }
    env.storage().persistent().remove(&role_key(role, account));
    untrack_member(env, role, account);
    true
}

// ── Membership listing ───────────────────────────────────────────────────────

/// Returns every address currently holding `role`.
pub fn role_members(env: &Env, role: &BytesN<32>) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&members_key(role))
        .unwrap_or(Vec::new(env))
}

fn track_member(env: &Env, role: &BytesN<32>, account: &Address) {
    let mut members = role_members(env, role);
    if !members.contains(account) {
        members.push_back(account.clone());
        env.storage().persistent().set(&members_key(role), &members);
    }
}

fn untrack_member(env: &Env, role: &BytesN<32>, account: &Address) {
    let members = role_members(env, role);
    let mut remaining = Vec::new(env);
    for member in members.iter() {
        if member != *account {
            remaining.push_back(member);
        }
    }
    env.storage().persistent().set(&members_key(role), &remaining);
}
