//! Check digit arithmetic shared across document types.
//!
//! Every algorithm in the registry reduces to a weighted sum of decimal
//! digit values modulo a fixed base, plus a per-type remainder mapping.
//! The mappings differ in small, load-bearing ways (remainder < 2 maps to
//! 0 for CPF/PIS/CNPJ, remainder 10 collapses to 0 for CNH/CTPS), so each
//! variant is its own function rather than a parameter.

/// Numeric values of an all-digit string.
///
/// Returns `None` if any character is not an ASCII digit, so callers can
/// rely on the slice covering the whole input.
pub fn digit_values(value: &str) -> Option<Vec<u32>> {
    value.chars().map(|c| c.to_digit(10)).collect()
}

/// Sum of digit × weight over paired slices.
pub fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights.iter()).map(|(d, w)| d * w).sum()
}

/// Mod-11 check digit where remainders below 2 map to 0.
///
/// Used by CPF, PIS/PASEP, and CNPJ.
pub fn mod11_low_to_zero(sum: u32) -> u32 {
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

/// Mod-11 remainder used directly as the check digit, with 10 collapsing
/// to 0.
///
/// Used by CNH and CTPS.
pub fn mod11_ten_to_zero(sum: u32) -> u32 {
    let remainder = sum % 11;
    if remainder == 10 { 0 } else { remainder }
}

/// True when every digit in the slice is the same.
///
/// Several schemes reject uniform strings outright (CPF, RG, CNPJ) even
/// where the arithmetic would hold.
pub fn uniform_digits(digits: &[u32]) -> bool {
    digits.first().is_some_and(|first| digits.iter().all(|d| d == first))
}

/// Luhn mod-10 check: double every second digit from the left, folding
/// two-digit results, and require the total to be divisible by 10.
pub fn luhn_mod10(digits: &[u32]) -> bool {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            if (i + 1) % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled % 10 + doubled / 10 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_values_strict() {
        assert_eq!(digit_values("012"), Some(vec![0, 1, 2]));
        assert_eq!(digit_values("01a"), None);
        assert_eq!(digit_values(""), Some(vec![]));
    }

    #[test]
    fn test_weighted_sum() {
        // 1*10 + 2*9 + 3*8 = 52
        assert_eq!(weighted_sum(&[1, 2, 3], &[10, 9, 8]), 52);
    }

    #[test]
    fn test_mod11_low_to_zero() {
        assert_eq!(mod11_low_to_zero(11), 0); // remainder 0
        assert_eq!(mod11_low_to_zero(12), 0); // remainder 1
        assert_eq!(mod11_low_to_zero(13), 9); // remainder 2
        assert_eq!(mod11_low_to_zero(21), 1); // remainder 10
    }

    #[test]
    fn test_mod11_ten_to_zero() {
        assert_eq!(mod11_ten_to_zero(21), 0); // remainder 10
        assert_eq!(mod11_ten_to_zero(13), 2);
        assert_eq!(mod11_ten_to_zero(22), 0);
    }

    #[test]
    fn test_uniform_digits() {
        assert!(uniform_digits(&[0, 0, 0]));
        assert!(uniform_digits(&[7]));
        assert!(!uniform_digits(&[1, 1, 2]));
        assert!(!uniform_digits(&[]));
    }

    #[test]
    fn test_luhn_known_vectors() {
        // 130692544: doubled positions fold to 1+6+0+3+9+4+5+8+4 = 40
        assert!(luhn_mod10(&[1, 3, 0, 6, 9, 2, 5, 4, 4]));
        assert!(!luhn_mod10(&[1, 3, 0, 6, 9, 2, 5, 4, 5]));
        // The canonical test SIN 046454286
        assert!(luhn_mod10(&[0, 4, 6, 4, 5, 4, 2, 8, 6]));
    }
}
