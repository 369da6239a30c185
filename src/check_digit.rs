//! Check digit algorithms used when assembling and validating IBANs and BBANs.
//!
//! Every function is pure. Input characters outside the alphabet an algorithm
//! expects are reported with [InvalidCharacterError] rather than silently skipped.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unexpected character '{character}' in check digit input")]
pub struct InvalidCharacterError {
    pub character: char,
}

impl InvalidCharacterError {
    fn new(character: char) -> Self {
        Self { character }
    }
}

/// The two IBAN check digits for a BBAN in the given country.
pub fn iban(country_code: &str, bban: &str) -> Result<String, InvalidCharacterError> {
    mod_97_10(&format!("{bban}{country_code}"))
}

/// ISO 7064 MOD 97-10. Letters are expanded to two digits (A = 10 ... Z = 35)
/// and "00" is appended before reducing.
///
/// The remainder is computed incrementally so arbitrarily long payloads never
/// overflow.
pub fn mod_97_10(input: &str) -> Result<String, InvalidCharacterError> {
    let mut remainder: u32 = 0;
    for c in input.chars().chain("00".chars()) {
        let value = alphanumeric_value(c)?;
        remainder = if value >= 10 {
            (remainder * 100 + value) % 97
        } else {
            (remainder * 10 + value) % 97
        };
    }
    Ok(format!("{:02}", 98 - remainder))
}

fn alphanumeric_value(c: char) -> Result<u32, InvalidCharacterError> {
    match c {
        '0'..='9' => Ok(c as u32 - '0' as u32),
        'A'..='Z' => Ok(c as u32 - 55),
        _ => Err(InvalidCharacterError::new(c)),
    }
}

fn digits(input: &str) -> Result<Vec<u32>, InvalidCharacterError> {
    input
        .chars()
        .map(|c| c.to_digit(10).ok_or(InvalidCharacterError::new(c)))
        .collect()
}

/// Collapses a "11 minus remainder" result into a single digit: 11 becomes 0 and 10 becomes 1.
fn fold_mod_11(weighted_sum: u32) -> String {
    let result = 11 - weighted_sum % 11;
    if result >= 10 {
        (11 - result).to_string()
    } else {
        result.to_string()
    }
}

/// Spanish mod-11 check digit (used twice per BBAN). The input is left-padded to
/// 10 digits and position `i` carries the weight `2^i mod 11`.
pub fn spanish(input: &str) -> Result<String, InvalidCharacterError> {
    let padded = format!("{input:0>10}");
    let mut weight = 1;
    let mut sum = 0;
    for digit in digits(&padded)? {
        sum += digit * weight;
        weight = weight * 2 % 11;
    }
    Ok(fold_mod_11(sum))
}

/// Values for characters in the even (0-indexed) positions of an Italian CIN payload.
const ITALIAN_ODD_VALUES: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

/// Italian / Sammarinese CIN: a single check letter over bank, branch and account.
pub fn italian(input: &str) -> Result<String, InvalidCharacterError> {
    let mut sum = 0;
    for (index, c) in input.chars().enumerate() {
        let value = match c {
            // Digits share the table with the first ten letters.
            '0'..='9' if index % 2 == 0 => ITALIAN_ODD_VALUES[(c as u8 - b'0') as usize],
            'A'..='Z' if index % 2 == 0 => ITALIAN_ODD_VALUES[(c as u8 - b'A') as usize],
            '0'..='9' => c as u32 - '0' as u32,
            'A'..='Z' => c as u32 - 'A' as u32,
            _ => return Err(InvalidCharacterError::new(c)),
        };
        sum += value;
    }
    Ok(((b'A' + (sum % 26) as u8) as char).to_string())
}

/// Belgian check digits: the number modulo 97, with 0 written as 97.
pub fn belgian(input: &str) -> Result<String, InvalidCharacterError> {
    let remainder = digits(input)?
        .into_iter()
        .fold(0u32, |acc, digit| (acc * 10 + digit) % 97);
    if remainder == 0 {
        Ok("97".to_string())
    } else {
        Ok(format!("{remainder:02}"))
    }
}

/// Estonian 7-3-1 check digit, weights applied from the rightmost digit.
pub fn estonian(input: &str) -> Result<String, InvalidCharacterError> {
    const WEIGHTS: [u32; 3] = [7, 3, 1];
    let sum: u32 = digits(input)?
        .iter()
        .rev()
        .enumerate()
        .map(|(index, digit)| digit * WEIGHTS[index % WEIGHTS.len()])
        .sum();
    Ok(((10 - sum % 10) % 10).to_string())
}

/// Dutch eleven-test check digit: weights 2, 3, 4, ... from the rightmost digit.
pub fn dutch(input: &str) -> Result<String, InvalidCharacterError> {
    let sum: u32 = digits(input)?
        .iter()
        .rev()
        .enumerate()
        .map(|(index, digit)| digit * (index as u32 + 2))
        .sum();
    Ok(fold_mod_11(sum))
}

fn slovakian(input: &str, weights: &[u32]) -> Result<String, InvalidCharacterError> {
    let padded = format!("{input:0>width$}", width = weights.len());
    let sum: u32 = digits(&padded)?
        .iter()
        .zip(weights)
        .map(|(digit, weight)| digit * weight)
        .sum();
    Ok(fold_mod_11(sum))
}

/// Check digit of the 6-digit Slovak account prefix (computed over its first 5 digits).
pub fn slovakian_prefix(input: &str) -> Result<String, InvalidCharacterError> {
    slovakian(input, &[10, 5, 8, 4, 2])
}

/// Check digit of the 10-digit Slovak basic account number (computed over its first 9 digits).
pub fn slovakian_basic(input: &str) -> Result<String, InvalidCharacterError> {
    slovakian(input, &[6, 3, 7, 9, 10, 5, 8, 4, 2])
}

/// Finnish account check digit (Luhn, weights 2-1 from the right).
pub fn lund(input: &str) -> Result<String, InvalidCharacterError> {
    let sum: u32 = digits(input)?
        .iter()
        .rev()
        .enumerate()
        .map(|(index, digit)| {
            let scaled = if index % 2 == 0 { digit * 2 } else { *digit };
            if scaled < 10 {
                scaled
            } else {
                scaled % 10 + 1
            }
        })
        .sum();
    Ok(((10 - sum % 10) % 10).to_string())
}

/// French / Monégasque RIB key over the bank code, branch code and account number.
pub fn rib(
    bank_code: &str,
    branch_code: &str,
    account_number: &str,
) -> Result<String, InvalidCharacterError> {
    let bank = rib_value_mod_97(bank_code)?;
    let branch = rib_value_mod_97(branch_code)?;
    let account = rib_value_mod_97(account_number)?;
    let remainder = (89 * bank + 15 * branch + 3 * account) % 97;
    Ok(format!("{:02}", 97 - remainder))
}

fn rib_digit(c: char) -> Result<u32, InvalidCharacterError> {
    match c {
        '0'..='9' => Ok(c as u32 - '0' as u32),
        'A'..='I' => Ok(c as u32 - 'A' as u32 + 1),
        'J'..='R' => Ok(c as u32 - 'J' as u32 + 1),
        // S starts at 2, so the last group ends on Z = 9
        'S'..='Z' => Ok(c as u32 - 'S' as u32 + 2),
        _ => Err(InvalidCharacterError::new(c)),
    }
}

fn rib_value_mod_97(input: &str) -> Result<u32, InvalidCharacterError> {
    input
        .chars()
        .try_fold(0u32, |acc, c| {
            Ok::<u32, InvalidCharacterError>((acc * 10 + rib_digit(c)?) % 97)
        })
}
