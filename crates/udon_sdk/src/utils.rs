use crate::Error;
use ethnum::U256;
use num_bigint::{BigInt, BigUint, Sign};

pub fn u256_to_bigint(value: U256) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes())
}

pub fn biguint_to_u256(value: &BigUint) -> Result<U256, Error> {
    let bytes = value.to_bytes_be();
    if bytes.len() > 32 {
        return Err(Error::AmountOverflow);
    }
    let mut padded = [0u8; 32];
    padded[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(U256::from_be_bytes(padded))
}

pub fn max_uint256() -> BigInt {
    u256_to_bigint(U256::MAX)
}

/// Parses a decimal string like `"12.5"` into smallest units.
///
/// Fails if the value has more fractional digits than `decimals` allows.
pub fn parse_units(value: &str, decimals: u8) -> Result<U256, Error> {
    let value = value.trim();
    let (whole_part, fractional_part) = value.split_once('.').unwrap_or((value, ""));

    if whole_part.is_empty() && fractional_part.is_empty() {
        return Err(Error::InvalidAmount(value.to_string()));
    }
    if !whole_part.bytes().all(|b| b.is_ascii_digit())
        || !fractional_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(Error::InvalidAmount(value.to_string()));
    }
    if fractional_part.len() > decimals as usize {
        return Err(Error::TooManyDecimals {
            got: fractional_part.len(),
            max: decimals,
        });
    }

    // Pad the fractional part to the token precision
    let digits = format!(
        "{whole_part}{fractional_part:0<width$}",
        width = decimals as usize
    );

    digits
        .parse::<U256>()
        .map_err(|_| Error::AmountOverflow)
}

/// Cuts a decimal string down to at most `decimals` fractional digits, without rounding.
pub fn truncate_decimals(value: &str, decimals: u8) -> &str {
    let Some((whole_part, fractional_part)) = value.split_once('.') else {
        return value;
    };

    // count characters, not bytes, so the cut never lands inside a code point
    match fractional_part.char_indices().nth(decimals as usize) {
        Some(_) if decimals == 0 => whole_part,
        Some((cut, _)) => &value[..whole_part.len() + 1 + cut],
        None => value,
    }
}

pub fn format_units(amount: U256, decimals: u8) -> String {
    let factor = U256::from(10u8).pow(decimals as u32);

    let integer_part = amount / factor;
    let fractional_part = amount % factor;

    if decimals == 0 {
        return integer_part.to_string();
    }

    let fractional_str = format!(
        "{:0>width$}",
        fractional_part.to_string(),
        width = decimals as usize
    );

    // Trim trailing zeros for a cleaner display
    let trimmed_fractional = fractional_str.trim_end_matches('0');

    if trimmed_fractional.is_empty() {
        integer_part.to_string()
    } else {
        format!("{}.{}", integer_part, trimmed_fractional)
    }
}
