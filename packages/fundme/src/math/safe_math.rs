use soroban_sdk::{log, Env};

use crate::error::{ErrorCode, FundMeResult};

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> FundMeResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> FundMeResult<Self>;
    fn safe_div(self, rhs: Self, env: &Env) -> FundMeResult<Self>;
    fn safe_pow(self, exp: u32, env: &Env) -> FundMeResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> FundMeResult<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line", line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t, env: &Env) -> FundMeResult<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line", line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t, env: &Env) -> FundMeResult<$t> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line", line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_pow(self, exp: u32, env: &Env) -> FundMeResult<$t> {
                match self.checked_pow(exp) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line", line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }
        }
    };
}

checked_impl!(i128);
