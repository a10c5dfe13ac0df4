use soroban_sdk::{Address, Env, Symbol};

pub struct FundMeEvents {}

impl FundMeEvents {
    /// Emitted when the contract is constructed
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[price_feed: Address, native_token: Address, minimum_contribution: i128]`
    pub fn initialize(
        env: &Env,
        owner: Address,
        price_feed: Address,
        native_token: Address,
        minimum_contribution: i128,
    ) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events()
            .publish(topics, (price_feed, native_token, minimum_contribution));
    }

    /// Emitted when a contribution is accepted
    ///
    /// - topics - `["fund", contributor: Address]`
    /// - data - `[amount: i128, amount_funded: i128]`
    pub fn fund(env: &Env, contributor: Address, amount: i128, amount_funded: i128) {
        let topics = (Symbol::new(env, "fund"), contributor);
        env.events().publish(topics, (amount, amount_funded));
    }

    /// Emitted when the owner drains the contract
    ///
    /// - topics - `["withdraw", owner: Address]`
    /// - data - `[amount: i128, funders_cleared: u32]`
    pub fn withdraw(env: &Env, owner: Address, amount: i128, funders_cleared: u32) {
        let topics = (Symbol::new(env, "withdraw"), owner);
        env.events().publish(topics, (amount, funders_cleared));
    }
}
