use fundme::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::Env;

use super::setup::{setup, MINIMUM_AMOUNT, ONE_UNIT};
use crate::storage::FunderPolicy;

#[test]
fn constructor_sets_config() {
    let env = Env::default();
    let test = setup(&env, FunderPolicy::AppendEveryFund);

    assert_eq!(test.fund_me.get_owner(), test.owner);
    assert_eq!(test.fund_me.get_price_feed(), test.price_feed.address);
    assert_eq!(test.fund_me.get_native_token(), test.token.address);
    assert_eq!(test.fund_me.get_funder_policy(), FunderPolicy::AppendEveryFund);
    // $50 with the 7 decimals of a Stellar asset
    assert_eq!(test.fund_me.get_minimum_contribution(), 500_000_000);
}

#[test]
fn ledger_starts_empty() {
    let env = Env::default();
    let test = setup(&env, FunderPolicy::AppendEveryFund);

    assert_eq!(test.fund_me.get_funders_count(), 0);
    assert_eq!(test.fund_me.get_total_funded(), 0);
    assert_eq!(test.fund_me.get_address_to_amount_funded(&test.owner), 0);
    assert_eq!(
        test.fund_me.try_get_funder(&0),
        Err(Ok(ErrorCode::IndexOutOfRange))
    );
}

#[test]
fn get_funder_fails_past_the_end() {
    let env = Env::default();
    let test = setup(&env, FunderPolicy::AppendEveryFund);
    let funder = test.fund_from_new_funder(&env, ONE_UNIT);

    assert_eq!(test.fund_me.get_funder(&0), funder);
    assert_eq!(
        test.fund_me.try_get_funder(&1),
        Err(Ok(ErrorCode::IndexOutOfRange))
    );
    assert_eq!(
        test.fund_me.try_get_funder(&u32::MAX),
        Err(Ok(ErrorCode::IndexOutOfRange))
    );
}

#[test]
fn version_is_forwarded_from_price_feed() {
    let env = Env::default();
    let test = setup(&env, FunderPolicy::AppendEveryFund);

    assert_eq!(test.fund_me.get_version(), test.price_feed.version());
}

#[test]
fn conversion_rate_uses_latest_price() {
    let env = Env::default();
    let test = setup(&env, FunderPolicy::AppendEveryFund);

    // one unit at $2000, scaled by 7 decimals
    assert_eq!(test.fund_me.get_conversion_rate(&ONE_UNIT), 20_000_000_000);
    assert_eq!(test.fund_me.get_conversion_rate(&MINIMUM_AMOUNT), 500_000_000);

    test.price_feed.update_answer(&-1);
    assert_eq!(
        test.fund_me.try_get_conversion_rate(&ONE_UNIT),
        Err(Ok(ErrorCode::InvalidPrice))
    );
}

#[test]
fn owner_is_unchanged_by_withdraw() {
    let env = Env::default();
    let test = setup(&env, FunderPolicy::AppendEveryFund);
    test.fund_from_new_funder(&env, ONE_UNIT);

    test.fund_me.cheaper_withdraw(&test.owner);

    assert_eq!(test.fund_me.get_owner(), test.owner);
}
