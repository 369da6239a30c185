// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod assembler;
mod bic_finder;
mod builder;
mod cleaner;
mod country;
mod engine;
mod error;
mod iban;
mod local_details;
mod observability;
mod stats;

pub mod check_digit;
pub mod german;
pub mod pseudo_iban;
pub mod structure;
pub mod sweden;

// This is the public API of the ibandit core library
pub use bic_finder::BicFinder;
pub use country::{country_rules, supported_country_codes, BbanFormula, CountryRules};
pub use engine::{DecomposedIban, IbanEngine, IbanEngineBuilder, ValidationResult};
pub use error::BuildError;
pub use iban::{ErrorKey, Iban};
pub use local_details::{Field, LocalDetails};
pub use observability::labels::Labels;

#[cfg(any(test, feature = "testing"))]
pub use crate::{cleaner::LocalDetailsCleaner, stats::Stats};

/// Validates an IBAN with the default engine.
pub fn validate(iban: &str) -> ValidationResult {
    IbanEngine::shared_default().validate(iban)
}

/// Splits an IBAN into its parts with the default engine.
pub fn decompose(iban: &str) -> DecomposedIban {
    IbanEngine::shared_default().decompose(iban)
}

/// Cleans local details and assembles their IBAN with the default engine.
pub fn assemble(details: &LocalDetails) -> Option<String> {
    IbanEngine::shared_default().assemble(details)
}

/// Builds an IBAN from local details with the default engine.
pub fn build(details: &LocalDetails) -> Result<Iban, BuildError> {
    IbanEngine::shared_default().build(details)
}

/// Normalises local details with the default engine. Never fails; details it can't
/// clean come back unchanged apart from their SWIFT fields.
pub fn clean_local_details(details: &LocalDetails) -> LocalDetails {
    IbanEngine::shared_default().clean_local_details(details)
}
