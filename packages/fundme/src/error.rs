use soroban_sdk::contracterror;

pub type FundMeResult<T = ()> = core::result::Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    #[doc = "Converted contribution is below the minimum"]
    InsufficientContribution = 1,
    #[doc = "Caller is not the contract owner"]
    NotOwner = 2,
    #[doc = "Funder index is past the end of the funder list"]
    IndexOutOfRange = 3,
    #[doc = "Transferring the balance to the owner failed"]
    TransferFailed = 4,
    #[doc = "Price feed returned a non-positive price"]
    InvalidPrice = 5,
    MathError = 6,
    InvalidDecimals = 7,
}
