use fundme::{
    error::{ErrorCode, FundMeResult},
    validate,
};
use soroban_sdk::{log, token, Address, Env};

use crate::{
    events::FundMeEvents,
    storage::{get_config, get_funders, remove_amount_funded, remove_funders, save_total_funded},
};

/// How the funder list is walked while clearing the ledger.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FunderIteration {
    /// reload the stored list on every step
    Refetch,
    /// load the stored list once and walk the local copy
    Cached,
}

impl FunderIteration {
    /// Calls `f` for every entry of the stored funder list and returns the number visited.
    pub fn for_each_funder(self, env: &Env, mut f: impl FnMut(&Address)) -> u32 {
        match self {
            FunderIteration::Refetch => {
                let mut index = 0;
                while index < get_funders(env).len() {
                    let funder = get_funders(env).get_unchecked(index);
                    f(&funder);
                    index += 1;
                }
                index
            }
            FunderIteration::Cached => {
                let funders = get_funders(env);
                for funder in funders.iter() {
                    f(&funder);
                }
                funders.len()
            }
        }
    }
}

/// Sends the whole contract balance to the owner, then clears the ledger.
///
/// The transfer is the only fallible external step and runs before any ledger
/// write, so a failed transfer leaves records, funder list and total intact.
pub fn withdraw(env: &Env, caller: &Address, iteration: FunderIteration) -> FundMeResult<i128> {
    caller.require_auth();

    let config = get_config(env);
    validate!(
        env,
        *caller == config.owner,
        ErrorCode::NotOwner,
        "FundMe: Withdraw: You are not the owner!",
        caller.clone()
    )?;

    let token_client = token::Client::new(env, &config.native_token);
    let contract = env.current_contract_address();
    let balance = token_client.balance(&contract);

    if balance > 0 {
        match token_client.try_transfer(&contract, &config.owner, &balance) {
            Ok(Ok(())) => {}
            _ => {
                log!(env, "FundMe: Withdraw: transfer to owner failed", balance);
                return Err(ErrorCode::TransferFailed);
            }
        }
    }

    let funders_cleared = reset_ledger(env, iteration);

    FundMeEvents::withdraw(env, config.owner, balance, funders_cleared);

    Ok(balance)
}

fn reset_ledger(env: &Env, iteration: FunderIteration) -> u32 {
    let funders_cleared = iteration.for_each_funder(env, |funder| remove_amount_funded(env, funder));

    remove_funders(env);
    save_total_funded(env, 0);

    funders_cleared
}
