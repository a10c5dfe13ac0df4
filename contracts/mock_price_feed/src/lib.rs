#![no_std]

mod contract;
mod events;
mod storage;

pub use crate::contract::{MockPriceFeed, MockPriceFeedClient};
pub use crate::storage::RoundData;
