use crate::check_digit;
use crate::country::CountryRules;
use crate::error::BuildError;
use crate::local_details::LocalDetails;

/// Assembles an IBAN from cleaned local details, using their SWIFT form
/// whenever one is present.
pub(crate) fn try_assemble(
    rules: &CountryRules,
    details: &LocalDetails,
) -> Result<String, BuildError> {
    let swift_details = details.swift_details();
    if let Some(field) = swift_details.first_missing(rules.assembly_fields) {
        return Err(BuildError::MissingField(field));
    }
    let bban = rules.bban(&swift_details)?;
    let check_digits = check_digit::iban(rules.country_code, &bban)?;
    Ok(format!("{}{check_digits}{bban}", rules.country_code))
}
