use fundme::{
    constants::{MAX_DECIMALS, MINIMUM_CONTRIBUTION_REFERENCE_UNITS},
    error::ErrorCode,
    math::safe_math::SafeMath,
    oracle::{get_conversion_rate, get_oracle_version},
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env,
};

use crate::{
    controller::{
        ledger,
        withdrawal::{self, FunderIteration},
    },
    events::FundMeEvents,
    fund_me::FundMeTrait,
    storage::{
        get_amount_funded, get_config, get_funders, get_total_funded, save_config, Config,
        FunderPolicy,
    },
};

contractmeta!(
    key = "Description",
    val = "Crowdfunding ledger with an oracle-enforced minimum contribution"
);

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    pub fn __constructor(
        env: Env,
        owner: Address,
        price_feed: Address,
        native_token: Address,
        funder_policy: FunderPolicy,
    ) {
        owner.require_auth();

        let decimals = token::Client::new(&env, &native_token).decimals();
        if decimals > MAX_DECIMALS {
            log!(&env, "FundMe: Initialize: native token has too many decimals", decimals);
            panic_with_error!(&env, ErrorCode::InvalidDecimals);
        }

        let minimum_contribution = 10_i128
            .safe_pow(decimals, &env)
            .and_then(|precision| MINIMUM_CONTRIBUTION_REFERENCE_UNITS.safe_mul(precision, &env))
            .unwrap_or_else(|error_code| panic_with_error!(&env, error_code));

        save_config(
            &env,
            &Config {
                owner: owner.clone(),
                price_feed: price_feed.clone(),
                native_token: native_token.clone(),
                minimum_contribution,
                funder_policy,
            },
        );

        FundMeEvents::initialize(&env, owner, price_feed, native_token, minimum_contribution);
    }
}

#[contractimpl]
impl FundMeTrait for FundMe {
    fn fund(env: Env, contributor: Address, amount: i128) -> Result<(), ErrorCode> {
        contributor.require_auth();

        ledger::fund(&env, &contributor, amount)
    }

    fn withdraw(env: Env, caller: Address) -> Result<i128, ErrorCode> {
        withdrawal::withdraw(&env, &caller, FunderIteration::Refetch)
    }

    fn cheaper_withdraw(env: Env, caller: Address) -> Result<i128, ErrorCode> {
        withdrawal::withdraw(&env, &caller, FunderIteration::Cached)
    }

    fn get_funder(env: Env, index: u32) -> Result<Address, ErrorCode> {
        ledger::get_funder(&env, index)
    }

    fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        get_amount_funded(&env, &funder)
    }

    fn get_funders_count(env: Env) -> u32 {
        get_funders(&env).len()
    }

    fn get_total_funded(env: Env) -> i128 {
        get_total_funded(&env)
    }

    fn get_owner(env: Env) -> Address {
        get_config(&env).owner
    }

    fn get_price_feed(env: Env) -> Address {
        get_config(&env).price_feed
    }

    fn get_native_token(env: Env) -> Address {
        get_config(&env).native_token
    }

    fn get_minimum_contribution(env: Env) -> i128 {
        get_config(&env).minimum_contribution
    }

    fn get_funder_policy(env: Env) -> FunderPolicy {
        get_config(&env).funder_policy
    }

    fn get_version(env: Env) -> u32 {
        get_oracle_version(&env, &get_config(&env).price_feed)
    }

    fn get_conversion_rate(env: Env, amount: i128) -> Result<i128, ErrorCode> {
        get_conversion_rate(&env, &get_config(&env).price_feed, amount)
    }
}
