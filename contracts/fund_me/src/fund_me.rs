use fundme::error::ErrorCode;
use soroban_sdk::{Address, Env};

use crate::storage::FunderPolicy;

pub trait FundMeTrait {
    // ################################################################
    //                             FUNDERS
    // ################################################################

    /// Pulls `amount` of the native token from `contributor` and records it.
    /// Fails with `InsufficientContribution` when the amount is worth less
    /// than the minimum in the reference currency. If the token itself rejects
    /// the pull (for example a balance below `amount`) its host error
    /// propagates unchanged and nothing is recorded.
    fn fund(env: Env, contributor: Address, amount: i128) -> Result<(), ErrorCode>;

    // ################################################################
    //                              OWNER
    // ################################################################

    /// Sends the whole balance to the owner and clears the ledger.
    fn withdraw(env: Env, caller: Address) -> Result<i128, ErrorCode>;

    /// Same outcome as `withdraw`, walking a single loaded copy of the funder list.
    fn cheaper_withdraw(env: Env, caller: Address) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn get_funder(env: Env, index: u32) -> Result<Address, ErrorCode>;

    fn get_address_to_amount_funded(env: Env, funder: Address) -> i128;

    fn get_funders_count(env: Env) -> u32;

    fn get_total_funded(env: Env) -> i128;

    fn get_owner(env: Env) -> Address;

    fn get_price_feed(env: Env) -> Address;

    fn get_native_token(env: Env) -> Address;

    fn get_minimum_contribution(env: Env) -> i128;

    fn get_funder_policy(env: Env) -> FunderPolicy;

    fn get_version(env: Env) -> u32;

    fn get_conversion_rate(env: Env, amount: i128) -> Result<i128, ErrorCode>;
}
