//! Conversion of German bank codes and account numbers into the form used
//! inside IBANs.
//!
//! Each bank code is assigned a rule id. Most rules leave the details
//! unchanged, some replace the bank code or swap pseudo account numbers for
//! real ones, and some reject accounts that can't be reached by IBAN at all.

mod bank_codes;
mod checks;
mod rules;
mod tables;

use ahash::AHashMap;
use lazy_static::lazy_static;
use std::sync::Arc;
use thiserror::Error;

pub use checks::{check63, check76};

pub const IDENTITY_RULE_ID: &str = "000000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertedDetails {
    pub bank_code: String,
    pub account_number: String,
}

impl ConvertedDetails {
    pub fn new(bank_code: &str, account_number: &str) -> Self {
        Self {
            bank_code: bank_code.to_owned(),
            account_number: account_number.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("account number {account_number} at bank code {bank_code} does not support payments")]
pub struct UnsupportedAccountDetails {
    pub bank_code: String,
    pub account_number: String,
}

/// Maps bank codes to rules and applies them.
#[derive(Clone, Debug)]
pub struct GermanRuleEngine {
    bank_code_rules: AHashMap<String, String>,
}

lazy_static! {
    static ref DEFAULT_ENGINE: Arc<GermanRuleEngine> = Arc::new(GermanRuleEngine::default());
}

impl GermanRuleEngine {
    /// An engine using the given (bank code, rule id) assignments.
    pub fn new(bank_code_rules: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            bank_code_rules: bank_code_rules.into_iter().collect(),
        }
    }

    pub fn shared_default() -> Arc<GermanRuleEngine> {
        DEFAULT_ENGINE.clone()
    }

    pub fn rule_id_for(&self, bank_code: &str) -> &str {
        self.bank_code_rules
            .get(bank_code)
            .map_or(IDENTITY_RULE_ID, String::as_str)
    }

    /// Every rule id with an implementation.
    pub fn known_rule_ids() -> impl Iterator<Item = &'static str> {
        rules::rule_ids()
    }

    pub fn convert(
        &self,
        bank_code: &str,
        account_number: &str,
    ) -> Result<ConvertedDetails, UnsupportedAccountDetails> {
        Self::convert_with_rule(self.rule_id_for(bank_code), bank_code, account_number)
    }

    /// Runs one rule directly. Unknown rule ids behave like the identity rule,
    /// and details that aren't numeric are returned unchanged.
    pub fn convert_with_rule(
        rule_id: &str,
        bank_code: &str,
        account_number: &str,
    ) -> Result<ConvertedDetails, UnsupportedAccountDetails> {
        if !is_numeric(bank_code) || !is_numeric(account_number) || account_number.len() > 10 {
            return Ok(ConvertedDetails::new(bank_code, account_number));
        }
        let Some(rule) = rules::rule(rule_id) else {
            return Ok(ConvertedDetails::new(bank_code, account_number));
        };
        rule.apply(bank_code, account_number)
            .ok_or_else(|| UnsupportedAccountDetails {
                bank_code: bank_code.to_owned(),
                account_number: account_number.to_owned(),
            })
    }
}

impl Default for GermanRuleEngine {
    fn default() -> Self {
        Self::new(
            bank_codes::DEFAULT_BANK_CODE_RULES
                .iter()
                .map(|(bank_code, rule_id)| (bank_code.to_string(), rule_id.to_string())),
        )
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
