use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::ContractError;

const REWARD_WINDOW: Symbol = symbol_short!("RWD_WIN");

/// Reward period and the token that funds it. Written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardWindow {
    pub start_time: u64,
    pub end_time: u64,
    pub reward_token: Address,
}

impl RewardWindow {
    pub fn new(
        start_time: u64,
        end_time: u64,
        reward_token: Address,
    ) -> Result<Self, ContractError> {
        if start_time >= end_time {
            return Err(ContractError::InvalidWindow);
        }
        Ok(Self {
            start_time,
            end_time,
            reward_token,
        })
    }

    /// Half-open: active from `start_time` up to, not including, `end_time`.
    pub fn is_active(&self, now: u64) -> bool {
        self.start_time <= now && now < self.end_time
    }
}

pub fn store(env: &Env, window: &RewardWindow) {
    env.storage().instance().set(&REWARD_WINDOW, window);
}

pub fn load(env: &Env) -> Option<RewardWindow> {
    env.storage().instance().get(&REWARD_WINDOW)
}
