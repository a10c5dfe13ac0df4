use fundme::{
    constants::MAX_DECIMALS,
    error::ErrorCode,
    oracle::{PriceData, PriceFeed},
};
use soroban_sdk::{contract, contractimpl, contractmeta, log, panic_with_error, Address, Env};

use crate::{
    events::PriceFeedEvents,
    storage::{
        find_latest_round, get_decimals, get_latest_round, get_operator, save_decimals,
        save_latest_round, save_operator, RoundData,
    },
};

const VERSION: u32 = 4;

contractmeta!(key = "Description", val = "Mock price feed with an operator-settable answer");

#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn __constructor(env: Env, operator: Address, decimals: u32, initial_answer: i128) {
        if decimals > MAX_DECIMALS {
            log!(&env, "Mock Price Feed: Initialize: decimals must not be greater than 18");
            panic_with_error!(&env, ErrorCode::InvalidDecimals);
        }

        save_operator(&env, &operator);
        save_decimals(&env, decimals);
        write_answer(&env, initial_answer);
    }

    pub fn update_answer(env: Env, answer: i128) {
        let operator = get_operator(&env);
        operator.require_auth();

        write_answer(&env, answer);
    }

    pub fn decimals(env: Env) -> u32 {
        get_decimals(&env)
    }

    pub fn latest_round(env: Env) -> RoundData {
        get_latest_round(&env)
    }

    pub fn get_operator(env: Env) -> Address {
        get_operator(&env)
    }
}

#[contractimpl]
impl PriceFeed for MockPriceFeed {
    fn latest_price(env: Env) -> PriceData {
        PriceData {
            price: get_latest_round(&env).answer,
            decimals: get_decimals(&env),
        }
    }

    fn version(_env: Env) -> u32 {
        VERSION
    }
}

fn write_answer(env: &Env, answer: i128) {
    let now = env.ledger().timestamp();
    let round_id = find_latest_round(env).map_or(1, |round| round.round_id + 1);

    save_latest_round(
        env,
        &RoundData {
            round_id,
            answer,
            started_at: now,
            updated_at: now,
            answered_in_round: round_id,
        },
    );

    PriceFeedEvents::answer_updated(env, answer, round_id, now);
}
