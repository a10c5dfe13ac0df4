#![no_std]

mod contract;
mod controller;
mod events;
mod fund_me;
mod storage;

pub use crate::contract::{FundMe, FundMeClient};
pub use crate::controller::withdrawal::FunderIteration;
pub use crate::storage::{Config, FunderPolicy};

#[cfg(test)]
mod tests;
