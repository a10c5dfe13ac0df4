use soroban_sdk::{contractclient, contracttype, log, Address, Env};

use crate::{
    constants::MAX_DECIMALS,
    error::{ErrorCode, FundMeResult},
    math::safe_math::SafeMath,
    validate,
};

/// Latest answer reported by a price feed.
///
/// `price` is the value of one whole unit of the native asset in the
/// reference currency, scaled by `10^decimals`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub decimals: u32,
}

/// Read-only oracle interface consumed by FundMe.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn latest_price(env: Env) -> PriceData;

    fn version(env: Env) -> u32;
}

pub fn get_oracle_price(env: &Env, price_feed: &Address) -> FundMeResult<PriceData> {
    let price_data = PriceFeedClient::new(env, price_feed).latest_price();

    validate!(
        env,
        price_data.price > 0,
        ErrorCode::InvalidPrice,
        "Oracle: price must be positive",
        price_data.price
    )?;
    validate!(
        env,
        price_data.decimals <= MAX_DECIMALS,
        ErrorCode::InvalidDecimals,
        "Oracle: too many decimals",
        price_data.decimals
    )?;

    Ok(price_data)
}

pub fn get_oracle_version(env: &Env, price_feed: &Address) -> u32 {
    PriceFeedClient::new(env, price_feed).version()
}

/// Converts `amount` of the native asset into the reference currency:
/// `amount * price / 10^decimals`, truncated toward zero.
///
/// The result keeps the native asset's own decimal scale, so it is compared
/// against a minimum expressed as `units * 10^token_decimals`.
pub fn convert_to_reference(env: &Env, amount: i128, price_data: &PriceData) -> FundMeResult<i128> {
    let precision = 10_i128.safe_pow(price_data.decimals, env)?;

    amount
        .safe_mul(price_data.price, env)?
        .safe_div(precision, env)
}

pub fn get_conversion_rate(env: &Env, price_feed: &Address, amount: i128) -> FundMeResult<i128> {
    let price_data = get_oracle_price(env, price_feed)?;
    let converted = convert_to_reference(env, amount, &price_data)?;

    log!(env, "Oracle: converted amount", amount, converted);

    Ok(converted)
}
