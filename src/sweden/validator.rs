//! Consistency checks between Swedish details and the bank lookup. Checks
//! returning `Option` give `None` when the lookup finds nothing to check against.

use super::SwedishBankLookup;

pub fn bank_code_exists_for_clearing_code(lookup: &SwedishBankLookup, clearing_code: &str) -> bool {
    lookup.for_clearing_code(clearing_code).is_some()
}

pub fn valid_clearing_code_length(lookup: &SwedishBankLookup, clearing_code: &str) -> Option<bool> {
    let bank = lookup.for_clearing_code(clearing_code)?;
    Some(bank.clearing_code_length == clearing_code.len())
}

pub fn valid_serial_number_length(
    lookup: &SwedishBankLookup,
    clearing_code: &str,
    serial_number: &str,
) -> Option<bool> {
    let bank = lookup.for_clearing_code(clearing_code)?;
    let length = if bank.zerofill_serial_number {
        serial_number.len().max(bank.serial_number_length)
    } else {
        serial_number.len()
    };
    Some(length == bank.serial_number_length)
}

pub fn bank_code_exists(lookup: &SwedishBankLookup, bank_code: &str) -> bool {
    !lookup.for_bank_code(bank_code).is_empty()
}

/// Whether the clearing code at the start of `account_number` belongs to `bank_code`.
pub fn bank_code_matches_account_number(
    lookup: &SwedishBankLookup,
    bank_code: &str,
    account_number: &str,
) -> Option<bool> {
    let banks = lookup.for_bank_code(bank_code);
    if banks.is_empty() {
        return None;
    }
    let account_number = account_number.trim_start_matches('0');
    let clearing_code = account_number
        .get(..4)
        .and_then(|code| code.parse::<u32>().ok());
    Some(clearing_code.is_some_and(|code| {
        banks
            .iter()
            .any(|bank| bank.clearing_code_range.contains(&code))
    }))
}

/// Whether a SWIFT account number has the length some range of `bank_code` expects.
pub fn account_number_length_valid_for_bank_code(
    lookup: &SwedishBankLookup,
    bank_code: &str,
    account_number: &str,
) -> Option<bool> {
    let banks = lookup.for_bank_code(bank_code);
    if banks.is_empty() {
        return None;
    }
    let unpadded = account_number.trim_start_matches('0');
    Some(banks.iter().any(|bank| {
        let mut expected = bank.serial_number_length;
        if bank.include_clearing_code {
            expected += bank.clearing_code_length;
        }
        let length = if bank.zerofill_serial_number && !bank.include_clearing_code {
            unpadded.len().max(bank.serial_number_length)
        } else {
            unpadded.len()
        };
        length == expected
    }))
}
