use fundme::{
    error::{ErrorCode, FundMeResult},
    oracle::get_conversion_rate,
    safe_increment, validate,
};
use soroban_sdk::{token, Address, Env};

use crate::{
    events::FundMeEvents,
    storage::{
        get_amount_funded, get_config, get_funders, get_total_funded, has_amount_funded,
        save_amount_funded, save_funders, save_total_funded, Config, FunderPolicy,
    },
};

pub fn fund(env: &Env, contributor: &Address, amount: i128) -> FundMeResult {
    let config = get_config(env);

    let converted = get_conversion_rate(env, &config.price_feed, amount)?;
    validate!(
        env,
        converted >= config.minimum_contribution,
        ErrorCode::InsufficientContribution,
        "FundMe: Fund: You need to spend more!",
        converted,
        config.minimum_contribution
    )?;

    token::Client::new(env, &config.native_token).transfer(
        contributor,
        &env.current_contract_address(),
        &amount,
    );

    record_contribution(env, &config, contributor, amount)
}

fn record_contribution(
    env: &Env,
    config: &Config,
    contributor: &Address,
    amount: i128,
) -> FundMeResult {
    let returning = has_amount_funded(env, contributor);

    let mut amount_funded = get_amount_funded(env, contributor);
    safe_increment!(env, amount_funded, amount);

    let mut total_funded = get_total_funded(env);
    safe_increment!(env, total_funded, amount);

    if !(returning && config.funder_policy == FunderPolicy::AppendFirstFund) {
        let mut funders = get_funders(env);
        funders.push_back(contributor.clone());
        save_funders(env, &funders);
    }

    save_amount_funded(env, contributor, amount_funded);
    save_total_funded(env, total_funded);

    FundMeEvents::fund(env, contributor.clone(), amount, amount_funded);

    Ok(())
}

pub fn get_funder(env: &Env, index: u32) -> FundMeResult<Address> {
    let funders = get_funders(env);

    validate!(
        env,
        index < funders.len(),
        ErrorCode::IndexOutOfRange,
        "FundMe: Get funder: index out of range",
        index,
        funders.len()
    )?;

    Ok(funders.get_unchecked(index))
}
