use std::collections::BTreeMap;
use std::fmt;

use crate::check_digit;
use crate::engine::IbanEngine;
use crate::local_details::{Field, LocalDetails};
use crate::pseudo_iban;
use crate::structure::CountryStructure;
use crate::sweden::validator;
use serde::Serialize;
use strum::{Display, IntoStaticStr};

/// Keys of [Iban::errors], one per thing a check can find wrong.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKey {
    CountryCode,
    Characters,
    CheckDigits,
    Length,
    Format,
    BankCode,
    BranchCode,
    AccountNumber,
}

impl From<Field> for ErrorKey {
    fn from(field: Field) -> Self {
        match field {
            Field::CountryCode => ErrorKey::CountryCode,
            Field::BankCode => ErrorKey::BankCode,
            Field::BranchCode => ErrorKey::BranchCode,
            Field::AccountNumber | Field::AccountNumberPrefix => ErrorKey::AccountNumber,
        }
    }
}

const IS_REQUIRED: &str = "is required";
const IS_INVALID: &str = "is invalid";

fn wrong_length(expected: usize) -> String {
    format!("is the wrong length (should be {expected} characters)")
}

/// An IBAN together with the local details it was built from, if any.
///
/// Checks never fail. Each one returns whether it passed, or `None` when a
/// check it depends on didn't pass, and keeps [Iban::errors] in sync.
#[derive(Clone, Debug)]
pub struct Iban {
    iban: String,
    pseudo_iban: Option<String>,
    local_details: Option<LocalDetails>,
    errors: BTreeMap<ErrorKey, String>,
    engine: IbanEngine,
}

impl Iban {
    /// Parses an IBAN or a pseudo-IBAN with the default engine. Whitespace is
    /// ignored and letters are upper-cased.
    pub fn new(input: &str) -> Iban {
        IbanEngine::shared_default().parse(input)
    }

    pub(crate) fn parse(engine: &IbanEngine, input: &str) -> Iban {
        let input: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        if pseudo_iban::is_pseudo_iban(&input) {
            if let Some(details) = pseudo_iban::split(&engine.structures, &input) {
                let mut iban = Iban::from_local_details(engine, &details);
                iban.pseudo_iban = Some(input);
                return iban;
            }
        }
        Iban {
            iban: input,
            pseudo_iban: None,
            local_details: None,
            errors: BTreeMap::new(),
            engine: engine.clone(),
        }
    }

    pub(crate) fn from_local_details(engine: &IbanEngine, details: &LocalDetails) -> Iban {
        let cleaned = engine.clean_local_details(details);
        let iban = engine.assemble_cleaned(&cleaned).unwrap_or_default();
        Iban::from_cleaned(engine, iban, cleaned)
    }

    pub(crate) fn from_cleaned(engine: &IbanEngine, iban: String, cleaned: LocalDetails) -> Iban {
        let pseudo_iban = pseudo_iban::assemble(&engine.structures, &cleaned);
        Iban {
            iban,
            pseudo_iban,
            local_details: Some(cleaned),
            errors: BTreeMap::new(),
            engine: engine.clone(),
        }
    }

    /// The IBAN, empty when it couldn't be assembled from local details.
    pub fn iban(&self) -> &str {
        &self.iban
    }

    pub fn pseudo_iban(&self) -> Option<&str> {
        self.pseudo_iban.as_deref()
    }

    pub fn local_details(&self) -> Option<&LocalDetails> {
        self.local_details.as_ref()
    }

    pub fn errors(&self) -> &BTreeMap<ErrorKey, String> {
        &self.errors
    }

    pub fn country_code(&self) -> &str {
        char_range(&self.iban, 0, Some(2))
            .or_else(|| self.local_details.as_ref().map(|d| d.country_code.as_str()))
            .unwrap_or_default()
    }

    pub fn check_digits(&self) -> Option<&str> {
        char_range(&self.iban, 2, Some(4))
    }

    pub fn bban(&self) -> Option<&str> {
        char_range(&self.iban, 4, None).filter(|bban| !bban.is_empty())
    }

    pub fn bank_code(&self) -> Option<&str> {
        self.local_field(Field::BankCode)
    }

    pub fn branch_code(&self) -> Option<&str> {
        self.local_field(Field::BranchCode)
    }

    pub fn account_number(&self) -> Option<&str> {
        self.local_field(Field::AccountNumber)
    }

    pub fn swift_bank_code(&self) -> Option<&str> {
        self.swift_field(Field::BankCode)
    }

    pub fn swift_branch_code(&self) -> Option<&str> {
        self.swift_field(Field::BranchCode)
    }

    pub fn swift_account_number(&self) -> Option<&str> {
        self.swift_field(Field::AccountNumber)
    }

    /// The SWIFT bank and branch codes, cut to the country's national id length.
    pub fn national_id(&self) -> Option<String> {
        let structure = self.structure()?;
        let bank_code = self.swift_bank_code();
        let branch_code = self.swift_branch_code();
        if bank_code.is_none() && branch_code.is_none() {
            return None;
        }
        let national_id: String = bank_code
            .unwrap_or_default()
            .chars()
            .chain(branch_code.unwrap_or_default().chars())
            .take(structure.national_id_length)
            .collect();
        Some(national_id)
    }

    /// The IBAN in groups of four characters.
    pub fn to_formatted_string(&self) -> String {
        let chars: Vec<char> = self.iban.chars().collect();
        chars
            .chunks(4)
            .map(|chunk| chunk.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether the country code, characters, check digits, length and format
    /// are all valid.
    pub fn valid(&mut self) -> bool {
        let results = [
            Some(self.valid_country_code()),
            Some(self.valid_characters()),
            self.valid_check_digits(),
            self.valid_length(),
            self.valid_format(),
        ];
        results.iter().all(|result| *result == Some(true))
    }

    pub fn valid_country_code(&mut self) -> bool {
        let valid = self.structure().is_some();
        let message = format!(
            "'{}' is not a valid ISO 3166-1 IBAN country code",
            self.country_code()
        );
        self.record(ErrorKey::CountryCode, valid, || message)
    }

    pub fn valid_characters(&mut self) -> bool {
        let invalid: Vec<String> = self
            .iban
            .chars()
            .filter(|c| !is_iban_character(*c))
            .map(String::from)
            .collect();
        self.record(ErrorKey::Characters, invalid.is_empty(), || {
            format!("Non-alphanumeric characters found: {}", invalid.join(" "))
        })
    }

    pub fn valid_check_digits(&mut self) -> Option<bool> {
        if !self.valid_characters() {
            return None;
        }
        let check_digits = self.check_digits()?.to_owned();
        let bban = self.bban()?;
        let expected = check_digit::iban(self.country_code(), bban).ok()?;
        let valid = expected == check_digits;
        Some(self.record(ErrorKey::CheckDigits, valid, || {
            format!(
                "Check digits failed modulus check. Expected '{expected}', received \
                 '{check_digits}'."
            )
        }))
    }

    pub fn valid_length(&mut self) -> Option<bool> {
        if !self.valid_country_code() {
            return None;
        }
        let expected = self.structure()?.total_length;
        let length = self.iban.chars().count();
        Some(self.record(ErrorKey::Length, length == expected, || {
            format!(
                "Length doesn't match SWIFT specification (expected {expected} characters, \
                 received {length})"
            )
        }))
    }

    pub fn valid_format(&mut self) -> Option<bool> {
        if !self.valid_country_code() {
            return None;
        }
        let valid = self
            .engine
            .structures
            .matches_bban(self.country_code(), self.bban().unwrap_or_default())?;
        let message = format!("Unexpected format for a {} IBAN.", self.country_code());
        Some(self.record(ErrorKey::Format, valid, || message))
    }

    pub fn valid_bank_code_length(&mut self) -> Option<bool> {
        self.valid_field_length(Field::BankCode)
    }

    pub fn valid_branch_code_length(&mut self) -> Option<bool> {
        self.valid_field_length(Field::BranchCode)
    }

    pub fn valid_account_number_length(&mut self) -> Option<bool> {
        self.valid_field_length(Field::AccountNumber)
    }

    pub fn valid_bank_code_format(&mut self) -> Option<bool> {
        self.valid_field_format(Field::BankCode)
    }

    pub fn valid_branch_code_format(&mut self) -> Option<bool> {
        self.valid_field_format(Field::BranchCode)
    }

    pub fn valid_account_number_format(&mut self) -> Option<bool> {
        self.valid_field_format(Field::AccountNumber)
    }

    /// Whether the German bank code rules allow payments to this account.
    /// Always true outside Germany.
    pub fn supports_iban_determination(&mut self) -> Option<bool> {
        if self.valid_format() != Some(true) {
            return None;
        }
        if self.country_code() != "DE" {
            return Some(true);
        }
        let converted = self.engine.german_rules.convert(
            self.swift_bank_code().unwrap_or_default(),
            self.swift_account_number().unwrap_or_default(),
        );
        Some(self.record(ErrorKey::AccountNumber, converted.is_ok(), || {
            "does not support payments".to_string()
        }))
    }

    /// Whether Swedish details agree with the clearing code table. Always true
    /// outside Sweden.
    pub fn valid_swedish_details(&mut self) -> bool {
        if self.country_code() != "SE" {
            return true;
        }
        match self.branch_code().map(str::to_owned) {
            Some(clearing_code) => self.valid_swedish_local_details(&clearing_code),
            None => self.valid_swedish_swift_details(),
        }
    }

    /// All the field-level checks.
    pub fn valid_local_details(&mut self) -> bool {
        let results = [
            self.valid_bank_code_length(),
            self.valid_branch_code_length(),
            self.valid_account_number_length(),
            self.valid_bank_code_format(),
            self.valid_branch_code_format(),
            self.valid_account_number_format(),
            self.supports_iban_determination(),
            Some(self.valid_swedish_details()),
        ];
        results.iter().all(|result| *result == Some(true))
    }

    fn valid_swedish_local_details(&mut self, clearing_code: &str) -> bool {
        let banks = self.engine.swedish_banks.clone();
        if validator::valid_clearing_code_length(&banks, clearing_code) != Some(true) {
            let message = match banks.for_clearing_code(clearing_code) {
                Some(bank) => wrong_length(bank.clearing_code_length),
                None => IS_INVALID.to_string(),
            };
            return self.record(ErrorKey::BranchCode, false, || message);
        }
        self.errors.remove(&ErrorKey::BranchCode);

        let serial_number = self.account_number().unwrap_or_default();
        let valid = validator::valid_serial_number_length(&banks, clearing_code, serial_number)
            == Some(true);
        self.record(ErrorKey::AccountNumber, valid, || IS_INVALID.to_string())
    }

    fn valid_swedish_swift_details(&mut self) -> bool {
        let banks = self.engine.swedish_banks.clone();
        let bank_code = self.swift_bank_code().unwrap_or_default().to_owned();
        if !validator::bank_code_exists(&banks, &bank_code) {
            return self.record(ErrorKey::BankCode, false, || {
                "bank code does not exist".to_string()
            });
        }
        self.errors.remove(&ErrorKey::BankCode);

        let account_number = self.swift_account_number().unwrap_or_default();
        let valid = validator::account_number_length_valid_for_bank_code(
            &banks,
            &bank_code,
            account_number,
        ) == Some(true);
        self.record(ErrorKey::AccountNumber, valid, || IS_INVALID.to_string())
    }

    fn valid_field_length(&mut self, field: Field) -> Option<bool> {
        if !self.valid_country_code() {
            return None;
        }
        let expected = self.structure()?.field_length(field);
        let message = match (expected, self.swift_field(field)) {
            (0, None) => None,
            (0, Some(_)) => Some(format!("is not used in {}", self.country_code())),
            (_, None) => Some(IS_REQUIRED.to_string()),
            (expected, Some(value)) if value.chars().count() != expected => {
                Some(wrong_length(expected))
            }
            _ => None,
        };
        let valid = message.is_none();
        Some(self.record(field.into(), valid, || message.unwrap_or_default()))
    }

    fn valid_field_format(&mut self, field: Field) -> Option<bool> {
        if self.valid_field_length(field) != Some(true) {
            return None;
        }
        let value = self.swift_field(field).unwrap_or_default();
        let valid = self
            .engine
            .structures
            .matches_field(self.country_code(), field, value)?;
        Some(self.record(field.into(), valid, || IS_INVALID.to_string()))
    }

    /// Keeps the error for `key` in sync with a check's outcome.
    fn record(&mut self, key: ErrorKey, valid: bool, message: impl FnOnce() -> String) -> bool {
        if valid {
            self.errors.remove(&key);
        } else {
            self.errors.insert(key, message());
        }
        valid
    }

    fn structure(&self) -> Option<&CountryStructure> {
        self.engine.structures.get(self.country_code())
    }

    fn local_field(&self, field: Field) -> Option<&str> {
        match &self.local_details {
            Some(details) => details.get(field),
            None => self.slice(field),
        }
    }

    fn swift_field(&self, field: Field) -> Option<&str> {
        match &self.local_details {
            Some(details) => details.swift_field(field),
            None => self.slice(field),
        }
    }

    fn slice(&self, field: Field) -> Option<&str> {
        let (position, length) = self.structure()?.field_range(field)?;
        self.iban
            .get(position - 1..position - 1 + length)
            .filter(|value| !value.is_empty())
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iban)
    }
}

/// The characters of `input` from `start` up to `end`, counted in chars.
fn char_range(input: &str, start: usize, end: Option<usize>) -> Option<&str> {
    let offset = |n: usize| {
        input
            .char_indices()
            .map(|(index, _)| index)
            .chain([input.len()])
            .nth(n)
    };
    let from = offset(start)?;
    let to = match end {
        Some(end) => offset(end)?,
        None => input.len(),
    };
    input.get(from..to)
}

fn is_iban_character(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_german_iban() {
        let mut iban = Iban::new("DE89 3704 0044 0532 0130 00");
        assert!(iban.valid());
        assert!(iban.errors().is_empty());
        assert_eq!(iban.iban(), "DE89370400440532013000");
        assert_eq!(iban.country_code(), "DE");
        assert_eq!(iban.check_digits(), Some("89"));
        assert_eq!(iban.bban(), Some("370400440532013000"));
        assert_eq!(iban.bank_code(), Some("37040044"));
        assert_eq!(iban.branch_code(), None);
        assert_eq!(iban.account_number(), Some("0532013000"));
        assert_eq!(iban.national_id().as_deref(), Some("37040044"));
        assert_eq!(iban.to_formatted_string(), "DE89 3704 0044 0532 0130 00");
        assert_eq!(iban.to_string(), "DE89370400440532013000");
    }

    #[test]
    fn lower_case_input_is_normalised() {
        let mut iban = Iban::new("gb82 west 1234 5698 7654 32");
        assert!(iban.valid());
        assert_eq!(iban.bank_code(), Some("WEST"));
        assert_eq!(iban.branch_code(), Some("123456"));
        assert_eq!(iban.account_number(), Some("98765432"));
        assert_eq!(iban.national_id().as_deref(), Some("WEST123456"));
    }

    #[test]
    fn unknown_country_code() {
        let mut iban = Iban::new("AA123456789123456");
        assert!(!iban.valid_country_code());
        assert_eq!(
            iban.errors().get(&ErrorKey::CountryCode).map(String::as_str),
            Some("'AA' is not a valid ISO 3166-1 IBAN country code")
        );
        assert_eq!(iban.valid_length(), None);
        assert_eq!(iban.valid_format(), None);
        assert!(!iban.valid());
        assert_eq!(iban.bank_code(), None);
    }

    #[test]
    fn invalid_characters() {
        let mut iban = Iban::new("DE89370400440532013-00");
        assert!(!iban.valid_characters());
        assert_eq!(iban.valid_check_digits(), None);
        assert_eq!(
            iban.errors().get(&ErrorKey::Characters).map(String::as_str),
            Some("Non-alphanumeric characters found: -")
        );
    }

    #[test]
    fn check_digits_record_invalid_characters() {
        let mut iban = Iban::new("DE89370400440532013-00");
        assert_eq!(iban.valid_check_digits(), None);
        assert_eq!(
            iban.errors().keys().copied().collect::<Vec<_>>(),
            vec![ErrorKey::Characters]
        );
    }

    #[test]
    fn multi_byte_country_code() {
        let mut iban = Iban::new("ÄÄ89370400440532013000");
        assert_eq!(iban.country_code(), "ÄÄ");
        assert_eq!(iban.check_digits(), Some("89"));
        assert_eq!(iban.bban(), Some("370400440532013000"));
        assert!(!iban.valid_country_code());
        assert_eq!(
            iban.errors().get(&ErrorKey::CountryCode).map(String::as_str),
            Some("'ÄÄ' is not a valid ISO 3166-1 IBAN country code")
        );
    }

    #[test]
    fn wrong_check_digits() {
        let mut iban = Iban::new("DE12370400440532013000");
        assert_eq!(iban.valid_check_digits(), Some(false));
        assert_eq!(
            iban.errors().get(&ErrorKey::CheckDigits).map(String::as_str),
            Some("Check digits failed modulus check. Expected '89', received '12'.")
        );
        assert!(!iban.valid());
    }

    #[test]
    fn wrong_length_and_format() {
        let mut iban = Iban::new("DE8937040044053201300");
        assert_eq!(iban.valid_length(), Some(false));
        assert_eq!(
            iban.errors().get(&ErrorKey::Length).map(String::as_str),
            Some("Length doesn't match SWIFT specification (expected 22 characters, received 21)")
        );
        assert_eq!(iban.valid_format(), Some(false));
        assert_eq!(
            iban.errors().get(&ErrorKey::Format).map(String::as_str),
            Some("Unexpected format for a DE IBAN.")
        );
    }

    #[test]
    fn passing_checks_clear_stale_errors() {
        let mut iban = Iban::new("AA123456789123456");
        assert!(!iban.valid_country_code());
        iban.iban = "DE89370400440532013000".to_string();
        assert!(iban.valid_country_code());
        assert!(iban.errors().is_empty());
    }

    #[test]
    fn too_short_for_check_digits() {
        let mut iban = Iban::new("DE");
        assert_eq!(iban.check_digits(), None);
        assert_eq!(iban.bban(), None);
        assert_eq!(iban.valid_check_digits(), None);
        assert_eq!(iban.valid_length(), Some(false));
    }

    #[test]
    fn empty_input() {
        let mut iban = Iban::new("");
        assert_eq!(iban.country_code(), "");
        assert!(!iban.valid());
        assert!(iban.errors().contains_key(&ErrorKey::CountryCode));
        assert_eq!(iban.to_formatted_string(), "");
    }

    #[test]
    fn field_level_checks() {
        let mut iban = Iban::new("GB82WEST12345698765432");
        assert!(iban.valid_local_details());
        assert!(iban.errors().is_empty());
    }

    #[test]
    fn local_details_are_checked_in_swift_form() {
        let engine = IbanEngine::shared_default();
        let details = LocalDetails::new("DE")
            .bank_code("3704004")
            .account_number("0532013000");
        let mut iban = engine.from_local_details(&details);
        assert_eq!(iban.valid_bank_code_length(), Some(false));
        assert_eq!(
            iban.errors().get(&ErrorKey::BankCode).map(String::as_str),
            Some("is the wrong length (should be 8 characters)")
        );
        assert_eq!(iban.valid_bank_code_format(), None);
    }

    #[test]
    fn unused_and_missing_fields() {
        let engine = IbanEngine::shared_default();
        let details = LocalDetails::new("DE")
            .bank_code("37040044")
            .branch_code("123")
            .account_number("0532013000");
        let mut iban = engine.from_local_details(&details);
        assert_eq!(iban.valid_branch_code_length(), Some(false));
        assert_eq!(
            iban.errors().get(&ErrorKey::BranchCode).map(String::as_str),
            Some("is not used in DE")
        );

        let details = LocalDetails::new("GB")
            .bank_code("WEST")
            .account_number("98765432");
        let mut iban = engine.from_local_details(&details);
        assert_eq!(iban.valid_branch_code_length(), Some(false));
        assert_eq!(
            iban.errors().get(&ErrorKey::BranchCode).map(String::as_str),
            Some("is required")
        );
    }

    #[test]
    fn german_accounts_without_payments() {
        let mut iban = Iban::new("DE89370400440532013000");
        assert_eq!(iban.supports_iban_determination(), Some(true));

        let bban = "100000000012345678";
        let check_digits = check_digit::iban("DE", bban).unwrap();
        let mut iban = Iban::new(&format!("DE{check_digits}{bban}"));
        assert!(iban.valid());
        assert_eq!(iban.supports_iban_determination(), Some(false));
        assert_eq!(
            iban.errors().get(&ErrorKey::AccountNumber).map(String::as_str),
            Some("does not support payments")
        );
        assert!(!iban.valid_local_details());
    }

    #[test]
    fn swedish_pseudo_iban() {
        let mut iban = Iban::new("SEZZX1281XXX0105723");
        assert_eq!(iban.iban(), "SE5412000000012810105723");
        assert_eq!(iban.pseudo_iban(), Some("SEZZX1281XXX0105723"));
        assert_eq!(iban.branch_code(), Some("1281"));
        assert_eq!(iban.account_number(), Some("0105723"));
        assert_eq!(iban.bank_code(), None);
        assert_eq!(iban.swift_bank_code(), Some("120"));
        assert_eq!(iban.swift_branch_code(), None);
        assert_eq!(iban.swift_account_number(), Some("00000012810105723"));
        assert!(iban.valid());
        assert!(iban.valid_swedish_details());
    }

    #[test]
    fn swedish_details_checked_against_bank_table() {
        let mut iban = Iban::new("SE5412000000012810105723");
        assert!(iban.valid_swedish_details());

        let bban = "99900000000012345678";
        let check_digits = check_digit::iban("SE", bban).unwrap();
        let mut iban = Iban::new(&format!("SE{check_digits}{bban}"));
        assert!(iban.valid());
        assert!(!iban.valid_swedish_details());
        assert_eq!(
            iban.errors().get(&ErrorKey::BankCode).map(String::as_str),
            Some("bank code does not exist")
        );
    }

    #[test]
    fn error_keys_are_snake_case() {
        assert_eq!(ErrorKey::CheckDigits.to_string(), "check_digits");
        assert_eq!(ErrorKey::from(Field::AccountNumberPrefix), ErrorKey::AccountNumber);
    }
}
