use super::SwedishBankLookup;

/// Swedish details split into clearing code and serial number, alongside
/// their SWIFT form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwedishDetails {
    pub branch_code: Option<String>,
    pub account_number: String,
    /// `None` when no bank matched the clearing code.
    pub swift_bank_code: Option<String>,
    pub swift_account_number: String,
}

const SWIFT_ACCOUNT_NUMBER_LENGTH: usize = 17;

fn remove_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '-' | '.') && !c.is_whitespace())
        .collect()
}

/// Converts a clearing code (`branch_code`) and account number into SWIFT
/// form. Without a clearing code, the account number is expected to start
/// with one.
pub fn convert(
    lookup: &SwedishBankLookup,
    branch_code: Option<&str>,
    account_number: &str,
) -> SwedishDetails {
    let cleaned_account_number = match branch_code {
        Some(branch_code) => remove_separators(branch_code) + &remove_separators(account_number),
        None => remove_separators(account_number)
            .trim_start_matches('0')
            .to_owned(),
    };

    let bank_info = lookup
        .for_clearing_code(&cleaned_account_number)
        .and_then(|bank| {
            let clearing_code = cleaned_account_number.get(..bank.clearing_code_length)?;
            lookup.for_clearing_code(clearing_code)
        });

    let Some(bank_info) = bank_info else {
        return SwedishDetails {
            branch_code: branch_code.map(str::to_owned),
            account_number: account_number.to_owned(),
            swift_bank_code: None,
            swift_account_number: format!(
                "{cleaned_account_number:0>SWIFT_ACCOUNT_NUMBER_LENGTH$}"
            ),
        };
    };

    let (clearing_code, serial_number) =
        cleaned_account_number.split_at(bank_info.clearing_code_length);
    let serial_number = if bank_info.zerofill_serial_number {
        format!("{serial_number:0>width$}", width = bank_info.serial_number_length)
    } else {
        serial_number.to_owned()
    };
    let swift_account_number = if bank_info.include_clearing_code {
        format!("{clearing_code}{serial_number}")
    } else {
        serial_number.clone()
    };

    SwedishDetails {
        branch_code: Some(clearing_code.to_owned()),
        account_number: serial_number,
        swift_bank_code: Some(bank_info.bank_code.to_string()),
        swift_account_number: format!(
            "{swift_account_number:0>SWIFT_ACCOUNT_NUMBER_LENGTH$}"
        ),
    }
}
