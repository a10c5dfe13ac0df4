use soroban_sdk::{Env, Symbol};

pub struct PriceFeedEvents {}

impl PriceFeedEvents {
    /// Emitted when the operator pushes a new answer
    ///
    /// - topics - `["answer_updated", answer: i128, round_id: u32]`
    /// - data - `updated_at: u64`
    pub fn answer_updated(env: &Env, answer: i128, round_id: u32, updated_at: u64) {
        let topics = (Symbol::new(env, "answer_updated"), answer, round_id);
        env.events().publish(topics, updated_at);
    }
}
