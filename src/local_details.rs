use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// A named piece of national bank details.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    CountryCode,
    BankCode,
    BranchCode,
    AccountNumber,
    AccountNumberPrefix,
}

/// National bank details, as entered by a user or as produced by the cleaner.
///
/// `check_digit` carries national check digits where a country lets them be
/// supplied instead of computed (the Italian CIN and the French RIB key).
/// The `swift_*` fields hold the details in the form SWIFT uses inside the
/// IBAN, which only differs from the local form for Sweden.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalDetails {
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_digit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_branch_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_account_number: Option<String>,
}

impl LocalDetails {
    pub fn new(country_code: &str) -> Self {
        Self {
            country_code: country_code.to_owned(),
            ..Self::default()
        }
    }

    pub fn bank_code(&self, bank_code: &str) -> Self {
        self.mutate_clone(|x| x.bank_code = Some(bank_code.to_owned()))
    }

    pub fn branch_code(&self, branch_code: &str) -> Self {
        self.mutate_clone(|x| x.branch_code = Some(branch_code.to_owned()))
    }

    pub fn account_number(&self, account_number: &str) -> Self {
        self.mutate_clone(|x| x.account_number = Some(account_number.to_owned()))
    }

    pub fn account_number_prefix(&self, prefix: &str) -> Self {
        self.mutate_clone(|x| x.account_number_prefix = Some(prefix.to_owned()))
    }

    pub fn check_digit(&self, check_digit: &str) -> Self {
        self.mutate_clone(|x| x.check_digit = Some(check_digit.to_owned()))
    }

    /// The value of a field, treating empty strings as absent.
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::CountryCode => Some(self.country_code.as_str()),
            Field::BankCode => self.bank_code.as_deref(),
            Field::BranchCode => self.branch_code.as_deref(),
            Field::AccountNumber => self.account_number.as_deref(),
            Field::AccountNumberPrefix => self.account_number_prefix.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// The first of `fields` that is absent, if any.
    pub fn first_missing(&self, fields: &[Field]) -> Option<Field> {
        fields.iter().copied().find(|field| !self.has(*field))
    }

    pub fn has_swift_details(&self) -> bool {
        self.swift_bank_code.is_some()
            || self.swift_branch_code.is_some()
            || self.swift_account_number.is_some()
    }

    /// A field as it appears inside the IBAN. Once any `swift_*` value is set
    /// the SWIFT form is used exclusively, otherwise the local fields are.
    pub fn swift_field(&self, field: Field) -> Option<&str> {
        if !self.has_swift_details() {
            return match field {
                Field::AccountNumberPrefix => None,
                _ => self.get(field),
            };
        }
        let value = match field {
            Field::CountryCode => Some(self.country_code.as_str()),
            Field::BankCode => self.swift_bank_code.as_deref(),
            Field::BranchCode => self.swift_branch_code.as_deref(),
            Field::AccountNumber => self.swift_account_number.as_deref(),
            Field::AccountNumberPrefix => None,
        };
        value.filter(|v| !v.is_empty())
    }

    /// The details in the form [LocalDetails::swift_field] describes.
    pub fn swift_details(&self) -> LocalDetails {
        let field = |field| self.swift_field(field).map(str::to_owned);
        LocalDetails {
            country_code: self.country_code.clone(),
            bank_code: field(Field::BankCode),
            branch_code: field(Field::BranchCode),
            account_number: field(Field::AccountNumber),
            account_number_prefix: None,
            check_digit: self.check_digit.clone(),
            swift_bank_code: None,
            swift_branch_code: None,
            swift_account_number: None,
        }
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builder_methods_set_fields() {
        let details = LocalDetails::new("DE")
            .bank_code("37040044")
            .account_number("0532013000");
        assert_eq!(details.country_code, "DE");
        assert_eq!(details.get(Field::BankCode), Some("37040044"));
        assert_eq!(details.get(Field::AccountNumber), Some("0532013000"));
        assert_eq!(details.get(Field::BranchCode), None);
    }

    #[test]
    fn empty_values_count_as_missing() {
        let details = LocalDetails::new("GB").branch_code("").account_number("12345678");
        assert!(!details.has(Field::BranchCode));
        assert_eq!(
            details.first_missing(&[Field::BranchCode, Field::AccountNumber]),
            Some(Field::BranchCode)
        );
        assert_eq!(details.first_missing(&[Field::AccountNumber]), None);
    }

    #[test]
    fn swift_details_prefer_swift_fields() {
        let mut details = LocalDetails::new("SE")
            .branch_code("1281")
            .account_number("0105723");
        details.swift_bank_code = Some("120".to_string());
        details.swift_account_number = Some("00000012810105723".to_string());

        let swift = details.swift_details();
        assert_eq!(swift.bank_code.as_deref(), Some("120"));
        assert_eq!(swift.branch_code, None);
        assert_eq!(swift.account_number.as_deref(), Some("00000012810105723"));
    }

    #[test]
    fn swift_details_fall_back_to_local_fields() {
        let details = LocalDetails::new("GB")
            .bank_code("WEST")
            .branch_code("123456")
            .account_number("98765432");
        assert_eq!(details.swift_details(), details);
    }

    #[test]
    fn field_names_are_snake_case() {
        assert_eq!(Field::AccountNumberPrefix.to_string(), "account_number_prefix");
        let name: &'static str = Field::BankCode.into();
        assert_eq!(name, "bank_code");
    }

    #[test]
    fn deserializes_partial_details() {
        let details: LocalDetails = serde_json::from_str(
            r#"{"country_code": "ES", "bank_code": "2310", "account_number": "0000012345"}"#,
        )
        .unwrap();
        assert_eq!(details, LocalDetails::new("ES").bank_code("2310").account_number("0000012345"));
    }
}
