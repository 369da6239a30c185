//! Pseudo-IBANs: fixed-format stand-ins for national details that have no
//! real IBAN form. Only Sweden uses them.

use crate::local_details::{Field, LocalDetails};
use crate::structure::{CountryStructure, StructureRegistry};

pub const PSEUDO_IBAN_CHECK_DIGITS: &str = "ZZ";
pub const PADDING_CHARACTER: char = 'X';

const FIELDS: [Field; 3] = [Field::BankCode, Field::BranchCode, Field::AccountNumber];

/// Builds the pseudo-IBAN for `details`. Fields the country's pseudo-IBAN
/// doesn't carry must be absent and the others present and short enough.
pub fn assemble(registry: &StructureRegistry, details: &LocalDetails) -> Option<String> {
    let structure = pseudo_iban_structure(registry, &details.country_code)?;

    let mut pseudo_iban = format!("{}{PSEUDO_IBAN_CHECK_DIGITS}", details.country_code);
    for field in FIELDS {
        let length = structure.pseudo_iban_field_length(field);
        match details.get(field) {
            None if length == 0 => {}
            Some(value) if length > 0 && value.chars().count() <= length => {
                pseudo_iban.push_str(&pad(value, length));
            }
            _ => return None,
        }
    }
    Some(pseudo_iban)
}

/// Recovers the local details from a pseudo-IBAN, `None` if it isn't one.
pub fn split(registry: &StructureRegistry, pseudo_iban: &str) -> Option<LocalDetails> {
    let country_code = pseudo_iban.get(..2)?;
    if pseudo_iban.get(2..4)? != PSEUDO_IBAN_CHECK_DIGITS {
        return None;
    }
    let structure = pseudo_iban_structure(registry, country_code)?;
    let expected_length: usize = FIELDS
        .iter()
        .map(|field| structure.pseudo_iban_field_length(*field))
        .sum();
    let mut remaining = pseudo_iban.get(4..)?;
    if remaining.len() != expected_length || !remaining.is_ascii() {
        return None;
    }

    let mut details = LocalDetails::new(country_code);
    for field in FIELDS {
        let (value, rest) = remaining.split_at(structure.pseudo_iban_field_length(field));
        remaining = rest;
        let value = value.trim_start_matches(PADDING_CHARACTER);
        if value.is_empty() {
            continue;
        }
        let value = Some(value.to_owned());
        match field {
            Field::BankCode => details.bank_code = value,
            Field::BranchCode => details.branch_code = value,
            _ => details.account_number = value,
        }
    }
    Some(details)
}

pub fn is_pseudo_iban(input: &str) -> bool {
    input.get(2..4) == Some(PSEUDO_IBAN_CHECK_DIGITS)
}

fn pseudo_iban_structure<'a>(
    registry: &'a StructureRegistry,
    country_code: &str,
) -> Option<&'a CountryStructure> {
    registry
        .get(country_code)
        .filter(|structure| structure.supports_pseudo_iban())
}

fn pad(value: &str, length: usize) -> String {
    let padding = length - value.chars().count();
    std::iter::repeat(PADDING_CHARACTER)
        .take(padding)
        .chain(value.chars())
        .collect()
}
