pub mod ledger;
pub mod withdrawal;
