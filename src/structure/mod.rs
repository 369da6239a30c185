mod countries;

use crate::local_details::Field;
use ahash::AHashMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use countries::default_structures;

/// The layout of one country's IBANs.
///
/// Positions are 1-based indices into the full IBAN (so the BBAN starts at 5).
/// A length of 0 means the country has no such field. Formats are regex
/// patterns matched against the whole value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CountryStructure {
    pub country_code: String,
    pub bank_code_position: usize,
    pub bank_code_length: usize,
    #[serde(default)]
    pub branch_code_position: usize,
    #[serde(default)]
    pub branch_code_length: usize,
    pub account_number_position: usize,
    pub account_number_length: usize,
    pub total_length: usize,
    pub national_id_length: usize,
    pub bban_format: String,
    pub bank_code_format: String,
    #[serde(default)]
    pub branch_code_format: String,
    pub account_number_format: String,
    #[serde(default)]
    pub pseudo_iban_bank_code_length: usize,
    #[serde(default)]
    pub pseudo_iban_branch_code_length: usize,
    #[serde(default)]
    pub pseudo_iban_account_number_length: usize,
}

impl CountryStructure {
    /// The (1-based position, length) of a field, or `None` if the country doesn't have it.
    pub fn field_range(&self, field: Field) -> Option<(usize, usize)> {
        let (position, length) = match field {
            Field::BankCode => (self.bank_code_position, self.bank_code_length),
            Field::BranchCode => (self.branch_code_position, self.branch_code_length),
            Field::AccountNumber => (self.account_number_position, self.account_number_length),
            Field::CountryCode | Field::AccountNumberPrefix => return None,
        };
        (length > 0).then_some((position, length))
    }

    pub fn field_length(&self, field: Field) -> usize {
        self.field_range(field).map_or(0, |(_, length)| length)
    }

    pub fn pseudo_iban_field_length(&self, field: Field) -> usize {
        match field {
            Field::BankCode => self.pseudo_iban_bank_code_length,
            Field::BranchCode => self.pseudo_iban_branch_code_length,
            Field::AccountNumber => self.pseudo_iban_account_number_length,
            Field::CountryCode | Field::AccountNumberPrefix => 0,
        }
    }

    pub fn supports_pseudo_iban(&self) -> bool {
        self.pseudo_iban_bank_code_length
            + self.pseudo_iban_branch_code_length
            + self.pseudo_iban_account_number_length
            > 0
    }

    fn field_format(&self, field: Field) -> &str {
        match field {
            Field::BankCode => &self.bank_code_format,
            Field::BranchCode => &self.branch_code_format,
            Field::AccountNumber => &self.account_number_format,
            Field::CountryCode | Field::AccountNumberPrefix => "",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("{country_code} structure: {field} does not fit within {total_length} characters")]
    FieldOutOfRange {
        country_code: String,
        field: Field,
        total_length: usize,
    },

    #[error("{country_code} structure: invalid {name} pattern")]
    InvalidFormat {
        country_code: String,
        name: &'static str,
    },

    #[error("{0} structure is defined more than once")]
    Duplicate(String),
}

#[derive(Debug)]
struct CompiledStructure {
    structure: CountryStructure,
    bban_format: Regex,
    bank_code_format: Option<Regex>,
    branch_code_format: Option<Regex>,
    account_number_format: Option<Regex>,
}

impl CompiledStructure {
    fn new(structure: CountryStructure) -> Result<Self, StructureError> {
        for field in [Field::BankCode, Field::BranchCode, Field::AccountNumber] {
            if let Some((position, length)) = structure.field_range(field) {
                if position < 5 || position - 1 + length > structure.total_length {
                    return Err(StructureError::FieldOutOfRange {
                        country_code: structure.country_code.clone(),
                        field,
                        total_length: structure.total_length,
                    });
                }
            }
        }

        let bban_format = anchored(&structure.country_code, "bban", &structure.bban_format)?;
        let field_format = |field: Field, name: &'static str| {
            let pattern = structure.field_format(field);
            if structure.field_length(field) == 0 || pattern.is_empty() {
                Ok(None)
            } else {
                anchored(&structure.country_code, name, pattern).map(Some)
            }
        };
        let bank_code_format = field_format(Field::BankCode, "bank code")?;
        let branch_code_format = field_format(Field::BranchCode, "branch code")?;
        let account_number_format = field_format(Field::AccountNumber, "account number")?;

        Ok(Self {
            structure,
            bban_format,
            bank_code_format,
            branch_code_format,
            account_number_format,
        })
    }
}

fn anchored(
    country_code: &str,
    name: &'static str,
    pattern: &str,
) -> Result<Regex, StructureError> {
    Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|_| StructureError::InvalidFormat {
        country_code: country_code.to_owned(),
        name,
    })
}

/// Immutable lookup of [CountryStructure]s by country code. All format patterns
/// are compiled when the registry is built.
#[derive(Debug)]
pub struct StructureRegistry {
    structures: AHashMap<String, CompiledStructure>,
}

lazy_static! {
    static ref DEFAULT_REGISTRY: std::sync::Arc<StructureRegistry> = std::sync::Arc::new(
        StructureRegistry::new(default_structures())
            .expect("built-in structure table is consistent")
    );
}

impl StructureRegistry {
    pub fn new(
        structures: impl IntoIterator<Item = CountryStructure>,
    ) -> Result<Self, StructureError> {
        let mut compiled = AHashMap::new();
        for structure in structures {
            let country_code = structure.country_code.clone();
            if compiled
                .insert(country_code.clone(), CompiledStructure::new(structure)?)
                .is_some()
            {
                return Err(StructureError::Duplicate(country_code));
            }
        }
        Ok(Self {
            structures: compiled,
        })
    }

    /// The shared registry built from the embedded table.
    pub fn shared_default() -> std::sync::Arc<StructureRegistry> {
        DEFAULT_REGISTRY.clone()
    }

    pub fn get(&self, country_code: &str) -> Option<&CountryStructure> {
        self.structures.get(country_code).map(|c| &c.structure)
    }

    pub fn contains(&self, country_code: &str) -> bool {
        self.structures.contains_key(country_code)
    }

    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.structures.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Whether `bban` matches the country's BBAN format, `None` for unknown countries.
    pub fn matches_bban(&self, country_code: &str, bban: &str) -> Option<bool> {
        self.structures
            .get(country_code)
            .map(|c| c.bban_format.is_match(bban))
    }

    /// Whether `value` matches the country's format for `field`. Fields the
    /// country doesn't have always match.
    pub fn matches_field(&self, country_code: &str, field: Field, value: &str) -> Option<bool> {
        let compiled = self.structures.get(country_code)?;
        let format = match field {
            Field::BankCode => &compiled.bank_code_format,
            Field::BranchCode => &compiled.branch_code_format,
            Field::AccountNumber => &compiled.account_number_format,
            Field::CountryCode | Field::AccountNumberPrefix => &None,
        };
        Some(format.as_ref().map_or(true, |regex| regex.is_match(value)))
    }
}

impl Default for StructureRegistry {
    fn default() -> Self {
        StructureRegistry::new(default_structures())
            .expect("built-in structure table is consistent")
    }
}
