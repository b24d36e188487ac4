//! Integer price arithmetic. Every division truncates toward zero.
//!
//! The price is quoted in tokens per 1000 whole payment units and the bonus in
//! basis points, so the conversion factor carries `10^3 · 10^4` on top of the
//! decimal difference between the payment asset and the sold token.

use crate::errors::Error;

pub const BONUS_BASE: i128 = 10_000;
pub const MAX_BONUS_BPS: u32 = 10_000;

const PRICE_EXPONENT: u32 = 3;
const BONUS_EXPONENT: u32 = 4;

/// `10^(payment_decimals + 3 + 4 − token_decimals)`.
pub fn conversion_factor(payment_decimals: u32, token_decimals: u32) -> Result<i128, Error> {
    let exponent = (payment_decimals + PRICE_EXPONENT + BONUS_EXPONENT)
        .checked_sub(token_decimals)
        .ok_or(Error::UnsupportedDecimals)?;
    10i128
        .checked_pow(exponent)
        .ok_or(Error::UnsupportedDecimals)
}

/// Scales a whole-token amount to base units of a token with `decimals`.
pub fn whole_tokens(amount: i128, decimals: u32) -> Result<i128, Error> {
    10i128
        .checked_pow(decimals)
        .and_then(|unit| unit.checked_mul(amount))
        .ok_or(Error::ArithmeticOverflow)
}

fn rate(tokens_per_k_unit: i128, bonus_bps: u32) -> Result<i128, Error> {
    tokens_per_k_unit
        .checked_mul(BONUS_BASE + bonus_bps as i128)
        .ok_or(Error::ArithmeticOverflow)
}

/// Tokens bought by `value`, rounded down.
pub fn tokens_from_value(
    factor: i128,
    tokens_per_k_unit: i128,
    value: i128,
    bonus_bps: u32,
) -> Result<i128, Error> {
    value
        .checked_mul(rate(tokens_per_k_unit, bonus_bps)?)
        .ok_or(Error::ArithmeticOverflow)?
        .checked_div(factor)
        .ok_or(Error::ArithmeticOverflow)
}

/// Value charged for `tokens`, rounded down.
pub fn value_from_tokens(
    factor: i128,
    tokens_per_k_unit: i128,
    tokens: i128,
    bonus_bps: u32,
) -> Result<i128, Error> {
    tokens
        .checked_mul(factor)
        .ok_or(Error::ArithmeticOverflow)?
        .checked_div(rate(tokens_per_k_unit, bonus_bps)?)
        .ok_or(Error::ArithmeticOverflow)
}
