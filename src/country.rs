//! Per-country rules for turning local details into a BBAN.

use crate::check_digit::{self, InvalidCharacterError};
use crate::cleaner::{self, CleanFn};
use crate::local_details::{Field, LocalDetails};
use strum::Display;

use Field::{AccountNumber as A, AccountNumberPrefix as P, BankCode as K, BranchCode as B};

/// How the canonical fields combine into a BBAN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum BbanFormula {
    /// The assembly fields joined in order.
    Concatenated,
    /// The account number already holds the whole BBAN.
    AccountOnly,
    /// CIN letter, then bank, branch and account.
    ItalianCin,
    /// Bank, branch, two mod-11 check digits, account.
    SpanishCheckDigits,
    /// Bank, branch, account, then the RIB key.
    RibKey,
    /// Bank, branch, account, then MOD 97-10 over them.
    Mod97Suffix,
}

impl BbanFormula {
    fn apply(
        self,
        details: &LocalDetails,
        fields: &[Field],
    ) -> Result<String, InvalidCharacterError> {
        let value = |field| details.get(field).unwrap_or_default();
        let joined: String = fields.iter().map(|field| value(*field)).collect();
        let (bank_code, branch_code, account_number) = (value(K), value(B), value(A));

        let bban = match self {
            BbanFormula::Concatenated => joined,
            BbanFormula::AccountOnly => account_number.to_owned(),
            BbanFormula::ItalianCin => {
                let cin = match details.check_digit.as_deref() {
                    Some(cin) if !cin.is_empty() => cin.to_owned(),
                    _ => check_digit::italian(&joined)?,
                };
                format!("{cin}{joined}")
            }
            BbanFormula::SpanishCheckDigits => format!(
                "{bank_code}{branch_code}{}{}{account_number}",
                check_digit::spanish(&format!("00{bank_code}{branch_code}"))?,
                check_digit::spanish(account_number)?,
            ),
            BbanFormula::RibKey => {
                let key = match details.check_digit.as_deref() {
                    Some(key) if !key.is_empty() => key.to_owned(),
                    _ => check_digit::rib(bank_code, branch_code, account_number)?,
                };
                format!("{joined}{key}")
            }
            BbanFormula::Mod97Suffix => format!("{joined}{}", check_digit::mod_97_10(&joined)?),
        };
        Ok(bban)
    }
}

/// What one supported country needs to build an IBAN.
#[derive(Clone, Copy)]
pub struct CountryRules {
    pub country_code: &'static str,
    /// Fields a caller must supply.
    pub input_fields: &'static [Field],
    /// The bank code may be omitted when a BIC finder can supply it.
    pub bank_code_from_bic: bool,
    /// Cleaned fields that make up the BBAN, in order.
    pub assembly_fields: &'static [Field],
    pub bban_formula: BbanFormula,
    pub(crate) clean: CleanFn,
}

impl CountryRules {
    /// The fields that must be present before cleaning.
    pub fn required_fields(&self, has_bic_finder: bool) -> Vec<Field> {
        let mut fields = self.input_fields.to_vec();
        if self.bank_code_from_bic && !has_bic_finder {
            fields.insert(0, K);
        }
        fields
    }

    pub fn bban(&self, details: &LocalDetails) -> Result<String, InvalidCharacterError> {
        self.bban_formula.apply(details, self.assembly_fields)
    }
}

impl std::fmt::Debug for CountryRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryRules")
            .field("country_code", &self.country_code)
            .field("input_fields", &self.input_fields)
            .field("bank_code_from_bic", &self.bank_code_from_bic)
            .field("assembly_fields", &self.assembly_fields)
            .field("bban_formula", &self.bban_formula)
            .finish()
    }
}

const fn rules(
    country_code: &'static str,
    input_fields: &'static [Field],
    assembly_fields: &'static [Field],
    bban_formula: BbanFormula,
    clean: CleanFn,
) -> CountryRules {
    CountryRules {
        country_code,
        input_fields,
        bank_code_from_bic: false,
        assembly_fields,
        bban_formula,
        clean,
    }
}

const fn with_bic_finder(mut rules: CountryRules) -> CountryRules {
    rules.bank_code_from_bic = true;
    rules
}

const ACCOUNT: &[Field] = &[A];
const BANK_ACCOUNT: &[Field] = &[K, A];
const BANK_PREFIX_ACCOUNT: &[Field] = &[K, P, A];
const BANK_BRANCH_ACCOUNT: &[Field] = &[K, B, A];
const BRANCH_ACCOUNT: &[Field] = &[B, A];

use BbanFormula::*;

// sorted by country code
static COUNTRY_RULES: &[CountryRules] = &[
    rules("AT", BANK_ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_at),
    rules("BE", ACCOUNT, ACCOUNT, AccountOnly, cleaner::clean_be),
    rules("BG", BANK_BRANCH_ACCOUNT, BANK_BRANCH_ACCOUNT, Concatenated, cleaner::clean_unchanged),
    rules("CY", BANK_ACCOUNT, BANK_BRANCH_ACCOUNT, Concatenated, cleaner::clean_cy),
    rules("CZ", BANK_ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_cz),
    rules("DE", BANK_ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_de),
    rules("DK", ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_dk),
    rules("EE", ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_ee),
    rules("ES", ACCOUNT, BANK_BRANCH_ACCOUNT, SpanishCheckDigits, cleaner::clean_es),
    rules("FI", ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_fi),
    rules("FR", BANK_BRANCH_ACCOUNT, BANK_BRANCH_ACCOUNT, RibKey, cleaner::clean_fr),
    with_bic_finder(rules(
        "GB",
        BRANCH_ACCOUNT,
        BANK_BRANCH_ACCOUNT,
        Concatenated,
        cleaner::clean_gb,
    )),
    rules("GR", BANK_BRANCH_ACCOUNT, BANK_BRANCH_ACCOUNT, Concatenated, cleaner::clean_unchanged),
    rules("HR", ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_hr),
    rules("HU", ACCOUNT, BANK_BRANCH_ACCOUNT, Concatenated, cleaner::clean_hu),
    with_bic_finder(rules(
        "IE",
        BRANCH_ACCOUNT,
        BANK_BRANCH_ACCOUNT,
        Concatenated,
        cleaner::clean_gb,
    )),
    rules("IS", ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_is),
    rules("IT", BANK_BRANCH_ACCOUNT, BANK_BRANCH_ACCOUNT, ItalianCin, cleaner::clean_it),
    rules("LT", BANK_ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_unchanged),
    rules("LU", BANK_ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_unchanged),
    rules("LV", BANK_ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_unchanged),
    rules("MC", BANK_BRANCH_ACCOUNT, BANK_BRANCH_ACCOUNT, RibKey, cleaner::clean_fr),
    with_bic_finder(rules(
        "MT",
        BRANCH_ACCOUNT,
        BANK_BRANCH_ACCOUNT,
        Concatenated,
        cleaner::clean_gb,
    )),
    rules("NL", BANK_ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_nl),
    rules("NO", ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_no),
    rules("PL", ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_pl),
    rules("PT", BANK_BRANCH_ACCOUNT, BANK_BRANCH_ACCOUNT, Mod97Suffix, cleaner::clean_unchanged),
    rules("RO", BANK_ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_unchanged),
    rules("SE", ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_se),
    rules("SI", BANK_ACCOUNT, BANK_ACCOUNT, Mod97Suffix, cleaner::clean_si),
    rules("SK", BANK_PREFIX_ACCOUNT, BANK_ACCOUNT, Concatenated, cleaner::clean_sk),
    rules("SM", BANK_BRANCH_ACCOUNT, BANK_BRANCH_ACCOUNT, ItalianCin, cleaner::clean_it),
];

/// The rules for a country, `None` if IBANs can't be built for it.
pub fn country_rules(country_code: &str) -> Option<&'static CountryRules> {
    COUNTRY_RULES
        .binary_search_by_key(&country_code, |rules| rules.country_code)
        .ok()
        .map(|index| &COUNTRY_RULES[index])
}

/// Countries IBANs can be built for.
pub fn supported_country_codes() -> impl Iterator<Item = &'static str> {
    COUNTRY_RULES.iter().map(|rules| rules.country_code)
}
