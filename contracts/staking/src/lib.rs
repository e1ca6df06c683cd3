#![no_std]

pub mod events;
pub mod ledger;
pub mod whitelist;
pub mod window;

use common::{access_control, reentrancy, CommonError, RoleTable};
use soroban_sdk::{
    contract, contractimpl, log, symbol_short, token, Address, BytesN, Env, Symbol, Vec,
};

pub use window::RewardWindow;

/// Role policy consulted by every privileged entry point.
type Gate = RoleTable;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    AccessDenied = 3,
    InvalidAmount = 4,
    InvalidWindow = 5,
    NotWhitelisted = 6,
    InsufficientBalance = 7,
    TransferFailed = 8,
    ReentrantCall = 9,
}

/// Coarse classification used by off-chain clients to decide how to react.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    /// Caller lacks the required role.
    Authorization,
    /// Caller-supplied input or a state precondition is wrong.
    Validation,
    /// Ledger or collaborator state cannot satisfy the request.
    Resource,
    /// One-time setup or call-nesting guard tripped.
    Lifecycle,
}

impl ContractError {
    /// Stable, human-readable revert reason for this error.
    pub fn reason(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract is not initialized",
            ContractError::AlreadyInitialized => "Initializable: contract is already initialized",
            ContractError::AccessDenied => "AccessControl: account is missing role",
            ContractError::InvalidAmount => "Amount must be greater than zero",
            ContractError::InvalidWindow => "Start time must be before end time",
            ContractError::NotWhitelisted => "Token is not whitelisted",
            ContractError::InsufficientBalance => "Insufficient balance",
            ContractError::TransferFailed => "Token transfer failed",
            ContractError::ReentrantCall => "ReentrancyGuard: reentrant call",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::AccessDenied => ErrorCategory::Authorization,
            ContractError::InvalidAmount
            | ContractError::InvalidWindow
            | ContractError::NotWhitelisted => ErrorCategory::Validation,
            ContractError::InsufficientBalance | ContractError::TransferFailed => {
                ErrorCategory::Resource
            }
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::ReentrantCall => ErrorCategory::Lifecycle,
        }
    }
}

impl From<CommonError> for ContractError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::NotInitialized => ContractError::NotInitialized,
            CommonError::AlreadyInitialized => ContractError::AlreadyInitialized,
            CommonError::AccessDenied => ContractError::AccessDenied,
            CommonError::ReentrantCall => ContractError::ReentrantCall,
        }
    }
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingPool;

#[contractimpl]
impl StakingPool {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `admin`        – receives the default admin role.
    /// * `start_time`   – first second of the reward period.
    /// * `end_time`     – end of the reward period, strictly after `start_time`.
    /// * `reward_token` – token that funds the reward period.
    pub fn initialize(
        env: Env,
        admin: Address,
        start_time: u64,
        end_time: u64,
        reward_token: Address,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        let reward_window = RewardWindow::new(start_time, end_time, reward_token.clone())?;
        admin.require_auth();

        window::store(&env, &reward_window);
        access_control::grant_role(&env, &common::default_admin_role(&env), &admin);
        env.storage().instance().set(&INITIALIZED, &true);

        log!(
            &env,
            "StakingPool: initialized admin={}, window={}..{}",
            admin,
            start_time,
            end_time
        );
        events::publish_initialized(&env, admin, start_time, end_time, reward_token);

        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_reward_window(env: Env) -> Result<RewardWindow, ContractError> {
        window::load(&env).ok_or(ContractError::NotInitialized)
    }

    /// `true` while the ledger clock is inside the configured reward window.
    pub fn is_reward_active(env: Env) -> bool {
        match window::load(&env) {
            Some(w) => w.is_active(env.ledger().timestamp()),
            None => false,
        }
    }

    // ── Whitelist management ────────────────────────────────────────────────

    /// Approve `token` for staking. Idempotent. Requires the default admin role.
    pub fn add_whitelist_token(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        access_control::require_role::<Gate>(&env, &common::default_admin_role(&env), &caller)?;

        if whitelist::add(&env, &token) {
            log!(&env, "Whitelist: added token={}", token);
            events::publish_token_whitelisted(&env, token, caller);
        }
        Ok(())
    }

    /// Revoke `token`'s approval. Idempotent. Requires the default admin role.
    ///
    /// Existing positions in the token stay on the ledger but cannot be
    /// withdrawn until the token is whitelisted again.
    pub fn remove_whitelist_token(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        access_control::require_role::<Gate>(&env, &common::default_admin_role(&env), &caller)?;

        if whitelist::remove(&env, &token) {
            log!(&env, "Whitelist: removed token={}", token);
            events::publish_token_removed(&env, token, caller);
        }
        Ok(())
    }

    pub fn is_whitelisted_token(env: Env, token: Address) -> bool {
        whitelist::is_whitelisted(&env, &token)
    }

    /// `true` once `user` has staked successfully at least once.
    pub fn is_whitelisted_user(env: Env, user: Address) -> bool {
        ledger::is_staker(&env, &user)
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of a whitelisted `token`.
    ///
    /// The pool pulls the tokens with `transfer_from`, so `caller` must have
    /// approved the pool beforehand. The ledger is only credited after the
    /// transfer has gone through.
    pub fn stake(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        if !whitelist::is_whitelisted(&env, &token) {
            return Err(ContractError::NotWhitelisted);
        }

        reentrancy::enter(&env)?;

        // 1. Pull tokens into the pool.
        let pool = env.current_contract_address();
        let pulled =
            token::Client::new(&env, &token).try_transfer_from(&pool, &caller, &pool, &amount);
        if !matches!(pulled, Ok(Ok(()))) {
            reentrancy::exit(&env);
            log!(
                &env,
                "Stake: transfer_from failed user={}, token={}, amount={}",
                caller,
                token,
                amount
            );
            return Err(ContractError::TransferFailed);
        }

        // 2. Credit the position and flag the staker.
        let credited = ledger::credit(&env, &caller, &token, amount);
        reentrancy::exit(&env);
        let new_balance = credited?;
        ledger::mark_staker(&env, &caller);

        log!(
            &env,
            "Staked: user={}, token={}, amount={}, balance={}",
            caller,
            token,
            amount,
            new_balance
        );
        events::publish_staked(&env, caller, token, amount);

        Ok(())
    }

    /// Return `amount` of `token` to `caller`.
    ///
    /// The position is debited before the outbound transfer; if the transfer
    /// fails the debit is restored and the call fails as a whole.
    pub fn withdraw(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        if !whitelist::is_whitelisted(&env, &token) {
            return Err(ContractError::NotWhitelisted);
        }
        if amount <= 0 {
            log!(&env, "amount must be greater than zero");
            return Err(ContractError::InvalidAmount);
        }
        if ledger::balance(&env, &caller, &token) < amount {
            return Err(ContractError::InsufficientBalance);
        }

        reentrancy::enter(&env)?;

        // 1. Debit first (checks-effects-interactions).
        let new_balance = match ledger::debit(&env, &caller, &token, amount) {
            Ok(balance) => balance,
            Err(e) => {
                reentrancy::exit(&env);
                return Err(e);
            }
        };

        // 2. Send tokens back; undo the debit if the token refuses.
        let pool = env.current_contract_address();
        let sent = token::Client::new(&env, &token).try_transfer(&pool, &caller, &amount);
        if !matches!(sent, Ok(Ok(()))) {
            let restored = ledger::credit(&env, &caller, &token, amount);
            reentrancy::exit(&env);
            restored?;
            log!(
                &env,
                "Withdraw: transfer failed user={}, token={}, amount={}",
                caller,
                token,
                amount
            );
            return Err(ContractError::TransferFailed);
        }
        reentrancy::exit(&env);

        log!(
            &env,
            "Withdrawn: user={}, token={}, amount={}, balance={}",
            caller,
            token,
            amount,
            new_balance
        );
        events::publish_withdrawn(&env, caller, token, amount);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return `user`'s staked balance of `token`.
    pub fn balance_of(env: Env, user: Address, token: Address) -> i128 {
        ledger::balance(&env, &user, &token)
    }

    /// Return the sum of every user's staked balance of `token`.
    pub fn total_staked(env: Env, token: Address) -> i128 {
        ledger::total(&env, &token)
    }

    // ── Role management ──────────────────────────────────────────────────────

    pub fn has_role(env: Env, role: BytesN<32>, account: Address) -> bool {
        access_control::has_role(&env, &role, &account)
    }

    pub fn get_role_admin(env: Env, role: BytesN<32>) -> BytesN<32> {
        access_control::role_admin(&env, &role)
    }

    pub fn get_role_members(env: Env, role: BytesN<32>) -> Vec<Address> {
        access_control::role_members(&env, &role)
    }

    /// Grant `role` to `account`. The caller must hold the role's admin role.
    pub fn grant_role(
        env: Env,
        caller: Address,
        role: BytesN<32>,
        account: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let admin_role = access_control::role_admin(&env, &role);
        access_control::require_role::<Gate>(&env, &admin_role, &caller)?;

        if access_control::grant_role(&env, &role, &account) {
            events::publish_role_granted(&env, role, account, caller);
        }
        Ok(())
    }

    /// Revoke `role` from `account`. The caller must hold the role's admin role.
    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: BytesN<32>,
        account: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let admin_role = access_control::role_admin(&env, &role);
        access_control::require_role::<Gate>(&env, &admin_role, &caller)?;

        if access_control::revoke_role(&env, &role, &account) {
            events::publish_role_revoked(&env, role, account, caller);
        }
        Ok(())
    }

    /// Drop `role` from the caller's own account.
    pub fn renounce_role(env: Env, caller: Address, role: BytesN<32>) {
        caller.require_auth();
        if access_control::revoke_role(&env, &role, &caller) {
            events::publish_role_revoked(&env, role, caller.clone(), caller);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_access;
