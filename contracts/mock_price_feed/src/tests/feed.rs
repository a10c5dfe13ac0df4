extern crate std;

use fundme::oracle::PriceData;
use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Ledger},
    Address, Env, IntoVal, Symbol,
};

use super::setup::{deploy_mock_price_feed, DECIMALS, INITIAL_ANSWER};
use crate::storage::RoundData;

#[test]
fn constructor_stores_initial_answer() {
    let env = Env::default();
    let operator = Address::generate(&env);

    let feed = deploy_mock_price_feed(&env, &operator, DECIMALS, INITIAL_ANSWER);

    assert_eq!(feed.get_operator(), operator);
    assert_eq!(feed.decimals(), DECIMALS);
    assert_eq!(feed.version(), 4);
    assert_eq!(
        feed.latest_price(),
        PriceData {
            price: INITIAL_ANSWER,
            decimals: DECIMALS,
        }
    );
    assert_eq!(feed.latest_round().round_id, 1);
}

#[test]
#[should_panic(expected = "Error(Contract, #7)")]
fn constructor_rejects_too_many_decimals() {
    let env = Env::default();
    let operator = Address::generate(&env);

    deploy_mock_price_feed(&env, &operator, 19, INITIAL_ANSWER);
}

#[test]
fn operator_updates_answer() {
    let env = Env::default();
    env.mock_all_auths();
    let operator = Address::generate(&env);

    let feed = deploy_mock_price_feed(&env, &operator, DECIMALS, INITIAL_ANSWER);

    env.ledger().with_mut(|li| {
        li.timestamp = 1_000;
    });
    feed.update_answer(&3_000_00000000);

    assert_eq!(
        env.auths(),
        [(
            operator.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    feed.address.clone(),
                    Symbol::new(&env, "update_answer"),
                    (3_000_00000000i128,).into_val(&env),
                )),
                sub_invocations: std::vec![],
            },
        )]
    );

    assert_eq!(
        feed.latest_round(),
        RoundData {
            round_id: 2,
            answer: 3_000_00000000,
            started_at: 1_000,
            updated_at: 1_000,
            answered_in_round: 2,
        }
    );
    assert_eq!(feed.latest_price().price, 3_000_00000000);
}

#[test]
#[should_panic]
fn update_answer_requires_operator_auth() {
    let env = Env::default();
    let operator = Address::generate(&env);

    let feed = deploy_mock_price_feed(&env, &operator, DECIMALS, INITIAL_ANSWER);

    feed.update_answer(&1);
}
