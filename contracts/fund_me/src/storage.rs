use fundme::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Funders,
    AmountFunded(Address),
    TotalFunded,
}

// ################################################################
//                             Config
// ################################################################

/// Whether a returning contributor is appended to the funder list again.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FunderPolicy {
    /// one entry per successful `fund` call, duplicates included
    AppendEveryFund,
    /// one entry per contributor until the next withdrawal
    AppendFirstFund,
}

/// Written once by the constructor and never updated.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub owner: Address,
    pub price_feed: Address,
    pub native_token: Address,
    /// minimum contribution in the reference currency, scaled by the native token decimals
    pub minimum_contribution: i128,
    pub funder_policy: FunderPolicy,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Config not set");
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    config
}

// ################################################################
//                             Funders
// ################################################################

pub fn get_funders(env: &Env) -> Vec<Address> {
    let funders = env
        .storage()
        .persistent()
        .get(&DataKey::Funders)
        .unwrap_or(Vec::new(env));
    env.storage()
        .persistent()
        .has(&DataKey::Funders)
        .then(|| {
            env.storage().persistent().extend_ttl(
                &DataKey::Funders,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
        });

    funders
}

pub fn save_funders(env: &Env, funders: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::Funders, funders);
    env.storage().persistent().extend_ttl(
        &DataKey::Funders,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn remove_funders(env: &Env) {
    env.storage().persistent().remove(&DataKey::Funders);
}

// ################################################################
//                          Amount funded
// ################################################################

pub fn has_amount_funded(env: &Env, funder: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::AmountFunded(funder.clone()))
}

pub fn get_amount_funded(env: &Env, funder: &Address) -> i128 {
    let key = DataKey::AmountFunded(funder.clone());
    let amount = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage()
        .persistent()
        .has(&key)
        .then(|| {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
        });

    amount
}

pub fn save_amount_funded(env: &Env, funder: &Address, amount: i128) {
    let key = DataKey::AmountFunded(funder.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn remove_amount_funded(env: &Env, funder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::AmountFunded(funder.clone()));
}

// ################################################################
//                          Total funded
// ################################################################

pub fn get_total_funded(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalFunded)
        .unwrap_or(0)
}

pub fn save_total_funded(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalFunded, &total);
}
