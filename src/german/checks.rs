//! Bundesbank check digit methods some rules use to pick between two
//! candidate account numbers.

fn digits(padded: &str) -> Option<Vec<u32>> {
    if padded.len() != 10 {
        return None;
    }
    padded.chars().map(|c| c.to_digit(10)).collect()
}

/// Method 63: the first digit must be 0, digits 2-7 are weighted 1,2,1,2,1,2
/// and the cross sums of the products are added; digit 8 is the check digit.
pub fn check63(account_number: &str) -> bool {
    let Some(digits) = digits(&format!("{account_number:0>10}")) else {
        return false;
    };
    if digits[0] != 0 {
        return false;
    }
    let sum: u32 = digits[1..7]
        .iter()
        .zip([1, 2, 1, 2, 1, 2])
        .map(|(digit, weight)| {
            let product = digit * weight;
            product / 10 + product % 10
        })
        .sum();
    (10 - sum % 10) % 10 == digits[7]
}

/// Method 76: the first digit is an account type (0, 4, 6, 7, 8 or 9),
/// digits 2-7 form the master number weighted 7 down to 2, and digit 8 is
/// the sum modulo 11. A remainder of 10 never validates.
pub fn check76(account_number: &str) -> bool {
    let Some(digits) = digits(&format!("{account_number:0>10}")) else {
        return false;
    };
    if ![0, 4, 6, 7, 8, 9].contains(&digits[0]) {
        return false;
    }
    let sum: u32 = digits[1..7]
        .iter()
        .zip([7, 6, 5, 4, 3, 2])
        .map(|(digit, weight)| digit * weight)
        .sum();
    let remainder = sum % 11;
    remainder != 10 && remainder == digits[7]
}
