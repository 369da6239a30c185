use crate::country::country_rules;
use crate::engine::IbanEngine;
use crate::error::BuildError;
use crate::iban::Iban;
use crate::local_details::{Field, LocalDetails};

/// Builds an IBAN from local details, failing on anything that stops a
/// complete IBAN from being produced.
pub(crate) fn build(engine: &IbanEngine, details: &LocalDetails) -> Result<Iban, BuildError> {
    let result = try_build(engine, details);
    match &result {
        Ok(_) => engine.stats.built.increment(1),
        Err(err) => engine.stats.record_build_failure(err),
    }
    result
}

fn try_build(engine: &IbanEngine, details: &LocalDetails) -> Result<Iban, BuildError> {
    if details.country_code.is_empty() {
        return Err(BuildError::MissingField(Field::CountryCode));
    }
    let rules = country_rules(&details.country_code)
        .ok_or_else(|| BuildError::UnsupportedCountry(details.country_code.clone()))?;
    if let Some(field) = details.first_missing(&rules.required_fields(engine.has_bic_finder())) {
        return Err(BuildError::MissingField(field));
    }

    let cleaned = engine.cleaner().try_clean(details)?;
    if rules.bank_code_from_bic && !cleaned.has(Field::BankCode) {
        return Err(BuildError::BicNotFound {
            country_code: details.country_code.clone(),
            national_id: cleaned.get(Field::BranchCode).unwrap_or_default().to_owned(),
        });
    }

    let iban = engine.assemble_cleaned(&cleaned)?;
    Ok(Iban::from_cleaned(engine, iban, cleaned))
}
