use fundme::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Operator,
    Decimals,
    LatestRound,
}

/// Bookkeeping for the latest answer, mirroring an aggregator round.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u32,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u32,
}

pub fn save_operator(env: &Env, operator: &Address) {
    env.storage().instance().set(&DataKey::Operator, operator);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_operator(env: &Env) -> Address {
    let operator = env
        .storage()
        .instance()
        .get(&DataKey::Operator)
        .expect("Operator not set");
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    operator
}

pub fn save_decimals(env: &Env, decimals: u32) {
    env.storage().instance().set(&DataKey::Decimals, &decimals);
}

pub fn get_decimals(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Decimals)
        .expect("Decimals not set")
}

pub fn save_latest_round(env: &Env, round: &RoundData) {
    env.storage().instance().set(&DataKey::LatestRound, round);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_latest_round(env: &Env) -> RoundData {
    let round = env
        .storage()
        .instance()
        .get(&DataKey::LatestRound)
        .expect("Round not set");
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    round
}

pub fn find_latest_round(env: &Env) -> Option<RoundData> {
    env.storage().instance().get(&DataKey::LatestRound)
}
