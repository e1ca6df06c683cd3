#![no_std]


use soroban_sdk::{
    contract, contractimpl, contracttype, log, symbol_short, Address, Env, String, Symbol,
};

// ── Storage keys ────────────────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const BALANCE: Symbol = symbol_short!("BAL");
const CLAIMED: Symbol = symbol_short!("CLAIMED");

const TOKEN_NAME: &str = "AirdropRewardToken";
const TOKEN_SYMBOL: &str = "MTK";

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Types ──────────────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AirdropConfig {
    /// Receives the whole supply at initialization and funds every claim.
    pub owner: Address,
    /// Staking pool this distribution is earmarked for.
    pub staking_pool: Address,
    /// Fixed supply minted once.
    pub total_supply: i128,
    /// Amount handed out per claim.
    pub per_claim: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub claimant: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
    AlreadyClaimed = 5,
    SupplyExhausted = 6,
}

// ── Helpers ────────────────────────────────────────────────────────────────────

fn load_config(env: &Env) -> Result<AirdropConfig, ContractError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(ContractError::NotInitialized)
}

fn balance_key(id: &Address) -> (Symbol, Address) {
    (BALANCE, id.clone())
}

fn claimed_key(id: &Address) -> (Symbol, Address) {
    (CLAIMED, id.clone())
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&balance_key(id))
        .unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = balance_key(id);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let from_balance = read_balance(env, from);
    if from_balance < amount {
        return Err(ContractError::InsufficientBalance);
    }
    write_balance(env, from, from_balance - amount);
    let to_balance = read_balance(env, to);
    write_balance(env, to, to_balance + amount);
    Ok(())
}

#[allow(deprecated)]
fn publish_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("TRANSFER"), from.clone(), to.clone()),
        TransferEvent { from, to, amount },
    );
}

#[allow(deprecated)]
fn publish_claimed(env: &Env, claimant: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), claimant.clone()),
        ClaimedEvent {
            claimant,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

// ── Contract ───────────────────────────────────────────────────────────────────

#[contract]
pub struct AirdropContract;

#[contractimpl]
impl AirdropContract {
    // ── Configuration ─────────────────────────────────────────────────────────

    /// Mint the fixed supply to `owner` and record the staking pool it serves.
    ///
    /// The supply is later handed out in `per_claim` units through `claim`.
    pub fn initialize(
        env: Env,
        owner: Address,
        staking_pool: Address,
        total_supply: i128,
        per_claim: i128,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&CONFIG) {
            return Err(ContractError::AlreadyInitialized);
        }
        if total_supply <= 0 || per_claim <= 0 || per_claim > total_supply {
            return Err(ContractError::InvalidAmount);
        }
        owner.require_auth();

        let cfg = AirdropConfig {
            owner: owner.clone(),
            staking_pool,
            total_supply,
            per_claim,
        };
        env.storage().instance().set(&CONFIG, &cfg);
        write_balance(&env, &owner, total_supply);

        log!(&env, "Airdrop: minted {} to {}", total_supply, owner);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<AirdropConfig, ContractError> {
        load_config(&env)
    }

    pub fn staking_pool(env: Env) -> Result<Address, ContractError> {
        Ok(load_config(&env)?.staking_pool)
    }

    pub fn per_claim(env: Env) -> Result<i128, ContractError> {
        Ok(load_config(&env)?.per_claim)
    }

    // ── Token metadata / reads ────────────────────────────────────────────────

    pub fn name(env: Env) -> String {
        String::from_str(&env, TOKEN_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, TOKEN_SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        0
    }

    pub fn total_supply(env: Env) -> i128 {
        load_config(&env).map(|cfg| cfg.total_supply).unwrap_or(0)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    // ── Transfers ─────────────────────────────────────────────────────────────

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        from.require_auth();
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        move_balance(&env, &from, &to, amount)?;
        publish_transfer(&env, from, to, amount);
        Ok(())
    }

    // ── Distribution ──────────────────────────────────────────────────────────

    /// Move one `per_claim` unit from the owner's holding to `claimant`.
    /// Each address may claim once.
    pub fn claim(env: Env, claimant: Address) -> Result<i128, ContractError> {
        claimant.require_auth();
        let cfg = load_config(&env)?;

        let key = claimed_key(&claimant);
        if env.storage().persistent().has(&key) {
            return Err(ContractError::AlreadyClaimed);
        }
        if read_balance(&env, &cfg.owner) < cfg.per_claim {
            return Err(ContractError::SupplyExhausted);
        }

        move_balance(&env, &cfg.owner, &claimant, cfg.per_claim)?;
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

        log!(&env, "Airdrop: {} claimed {}", claimant, cfg.per_claim);
        publish_claimed(&env, claimant, cfg.per_claim);
        Ok(cfg.per_claim)
    }

    pub fn has_claimed(env: Env, id: Address) -> bool {
        env.storage().persistent().has(&claimed_key(&id))
    }

    /// Number of whole claims the owner's remaining holding can still fund.
    pub fn claims_remaining(env: Env) -> Result<i128, ContractError> {
        let cfg = load_config(&env)?;
        Ok(read_balance(&env, &cfg.owner) / cfg.per_claim)
    }
}
