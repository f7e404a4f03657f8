use crate::prelude::*;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use num_bigint::BigUint;
use num_traits::Num;

const BASE64_PADDING_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(&URL_SAFE, BASE64_PADDING_CONFIG);

/// Convert the input into the base64 encoding
pub fn b64enc<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    BASE64_ENGINE.encode(input)
}

/// Reconstruct from the base64 encoding
pub fn b64dec<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>> {
    BASE64_ENGINE
        .decode(input)
        .map_err(|_| AlgebraError::DeserializationError)
}

/// Parse a canonical decimal string into an integer strictly below `modulus`.
///
/// Signs, blanks and leading zeroes (other than the single digit `0`) are rejected.
pub fn parse_decimal_below(s: &str, modulus: &BigUint) -> Result<BigUint> {
    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'));
    if !canonical {
        return Err(AlgebraError::DeserializationError);
    }
    let value =
        BigUint::from_str_radix(s, 10).map_err(|_| AlgebraError::DeserializationError)?;
    if &value >= modulus {
        return Err(AlgebraError::DeserializationError);
    }
    Ok(value)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_b64_round_trip() {
        let bytes = vec![0u8, 1, 2, 250, 251, 252];
        assert_eq!(b64dec(&b64enc(&bytes)).unwrap(), bytes);
        assert!(b64dec("not base64!").is_err());
    }

    #[test]
    fn test_parse_decimal_below() {
        let modulus = BigUint::from(1000u32);
        assert_eq!(parse_decimal_below("0", &modulus).unwrap(), BigUint::from(0u32));
        assert_eq!(parse_decimal_below("999", &modulus).unwrap(), BigUint::from(999u32));
        assert!(parse_decimal_below("1000", &modulus).is_err());
        assert!(parse_decimal_below("", &modulus).is_err());
        assert!(parse_decimal_below("-1", &modulus).is_err());
        assert!(parse_decimal_below("012", &modulus).is_err());
        assert!(parse_decimal_below("1e3", &modulus).is_err());
    }
}
