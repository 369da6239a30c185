use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::assembler;
use crate::bic_finder::BicFinder;
use crate::builder;
use crate::cleaner::LocalDetailsCleaner;
use crate::country::country_rules;
use crate::error::BuildError;
use crate::german::GermanRuleEngine;
use crate::iban::{ErrorKey, Iban};
use crate::local_details::LocalDetails;
use crate::observability::labels::Labels;
use crate::stats::Stats;
use crate::structure::StructureRegistry;
use crate::sweden::SwedishBankLookup;
use lazy_static::lazy_static;
use serde::Serialize;

lazy_static! {
    static ref DEFAULT_ENGINE: IbanEngine = IbanEngine::builder().build();
}

/// The outcome of [IbanEngine::validate].
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: BTreeMap<ErrorKey, String>,
}

/// The parts of an IBAN. Fields that can't be determined are empty.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DecomposedIban {
    pub country_code: String,
    pub check_digits: String,
    pub bank_code: String,
    pub branch_code: String,
    pub account_number: String,
}

/// Validates, decomposes and assembles IBANs against one set of tables.
/// Cloning is cheap; the tables are shared.
#[derive(Clone)]
pub struct IbanEngine {
    pub(crate) structures: Arc<StructureRegistry>,
    pub(crate) german_rules: Arc<GermanRuleEngine>,
    pub(crate) swedish_banks: Arc<SwedishBankLookup>,
    pub(crate) bic_finder: Option<Arc<dyn BicFinder>>,
    pub(crate) stats: Arc<Stats>,
}

impl IbanEngine {
    pub fn builder() -> IbanEngineBuilder {
        IbanEngineBuilder::new()
    }

    /// The engine built from the embedded tables, without a BIC finder.
    pub fn shared_default() -> IbanEngine {
        DEFAULT_ENGINE.clone()
    }

    pub fn structures(&self) -> &StructureRegistry {
        &self.structures
    }

    pub fn german_rules(&self) -> &GermanRuleEngine {
        &self.german_rules
    }

    pub fn swedish_banks(&self) -> &SwedishBankLookup {
        &self.swedish_banks
    }

    pub fn has_bic_finder(&self) -> bool {
        self.bic_finder.is_some()
    }

    /// Parses an IBAN or pseudo-IBAN.
    pub fn parse(&self, input: &str) -> Iban {
        Iban::parse(self, input)
    }

    /// Cleans and assembles local details. The result carries an empty IBAN
    /// when the details can't be assembled.
    pub fn from_local_details(&self, details: &LocalDetails) -> Iban {
        Iban::from_local_details(self, details)
    }

    pub fn validate(&self, input: &str) -> ValidationResult {
        let mut iban = self.parse(input);
        let valid = iban.valid();
        self.stats.validations.increment(1);
        for key in iban.errors().keys() {
            self.stats.record_invalid(*key);
        }
        ValidationResult {
            valid,
            errors: iban.errors().clone(),
        }
    }

    pub fn decompose(&self, input: &str) -> DecomposedIban {
        let iban = self.parse(input);
        let field = |value: Option<&str>| value.unwrap_or_default().to_owned();
        DecomposedIban {
            country_code: iban.country_code().to_owned(),
            check_digits: field(iban.check_digits()),
            bank_code: field(iban.bank_code()),
            branch_code: field(iban.branch_code()),
            account_number: field(iban.account_number()),
        }
    }

    /// Cleans `details` and assembles the IBAN, `None` if that isn't possible.
    pub fn assemble(&self, details: &LocalDetails) -> Option<String> {
        self.assemble_cleaned(&self.clean_local_details(details)).ok()
    }

    /// Builds an IBAN, reporting why it can't be.
    pub fn build(&self, details: &LocalDetails) -> Result<Iban, BuildError> {
        builder::build(self, details)
    }

    pub fn clean_local_details(&self, details: &LocalDetails) -> LocalDetails {
        self.cleaner().clean(details)
    }

    pub(crate) fn cleaner(&self) -> LocalDetailsCleaner<'_> {
        LocalDetailsCleaner::new(
            &self.german_rules,
            &self.swedish_banks,
            self.bic_finder.as_deref(),
            &self.stats,
        )
    }

    pub(crate) fn assemble_cleaned(&self, cleaned: &LocalDetails) -> Result<String, BuildError> {
        let rules = country_rules(&cleaned.country_code)
            .ok_or_else(|| BuildError::UnsupportedCountry(cleaned.country_code.clone()))?;
        let iban = assembler::try_assemble(rules, cleaned)?;
        self.stats.assembled.increment(1);
        Ok(iban)
    }
}

impl fmt::Debug for IbanEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IbanEngine")
            .field("countries", &self.structures.len())
            .field("german_rules", &self.german_rules)
            .field("swedish_banks", &self.swedish_banks.banks().len())
            .field("bic_finder", &self.bic_finder.is_some())
            .finish()
    }
}

impl Default for IbanEngine {
    fn default() -> Self {
        IbanEngine::shared_default()
    }
}

/// Configures an [IbanEngine]. Tables that aren't set use the embedded defaults.
pub struct IbanEngineBuilder {
    structures: Option<Arc<StructureRegistry>>,
    german_rules: Option<Arc<GermanRuleEngine>>,
    swedish_banks: Option<Arc<SwedishBankLookup>>,
    bic_finder: Option<Arc<dyn BicFinder>>,
    labels: Labels,
}

impl IbanEngineBuilder {
    pub fn new() -> IbanEngineBuilder {
        IbanEngineBuilder {
            structures: None,
            german_rules: None,
            swedish_banks: None,
            bic_finder: None,
            labels: Labels::default(),
        }
    }

    pub fn structures(mut self, structures: StructureRegistry) -> Self {
        self.structures = Some(Arc::new(structures));
        self
    }

    pub fn german_rules(mut self, german_rules: GermanRuleEngine) -> Self {
        self.german_rules = Some(Arc::new(german_rules));
        self
    }

    pub fn swedish_banks(mut self, swedish_banks: SwedishBankLookup) -> Self {
        self.swedish_banks = Some(Arc::new(swedish_banks));
        self
    }

    pub fn bic_finder(mut self, bic_finder: impl BicFinder + 'static) -> Self {
        self.bic_finder = Some(Arc::new(bic_finder));
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Counters are registered with the recorder installed at this point.
    pub fn build(self) -> IbanEngine {
        IbanEngine {
            structures: self
                .structures
                .unwrap_or_else(StructureRegistry::shared_default),
            german_rules: self
                .german_rules
                .unwrap_or_else(GermanRuleEngine::shared_default),
            swedish_banks: self
                .swedish_banks
                .unwrap_or_else(SwedishBankLookup::shared_default),
            bic_finder: self.bic_finder,
            stats: Arc::new(Stats::new(&self.labels)),
        }
    }
}

impl Default for IbanEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
