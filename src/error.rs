use std::convert::From;

use crate::check_digit::InvalidCharacterError;
use crate::german::UnsupportedAccountDetails;
use crate::local_details::Field;
use strum::IntoStaticStr;
use thiserror::Error;

impl From<BuildError> for i64 {
    fn from(value: BuildError) -> i64 {
        match value {
            BuildError::MissingField(_) => -2,
            BuildError::UnsupportedCountry(_) => -3,
            BuildError::BicNotFound { .. } => -4,
            BuildError::UnsupportedAccountDetails(_) => -5,
            BuildError::InvalidCharacter(_) => -6,
        }
    }
}

/// Why an IBAN couldn't be built from local details.
#[derive(Debug, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum BuildError {
    /// A field the country needs was not supplied
    #[error("{0} is a required field")]
    MissingField(Field),

    #[error("{0} is not a supported country code")]
    UnsupportedCountry(String),

    /// The bank code had to come from the BIC finder, which had nothing for the branch
    #[error("no BIC found for {country_code} bank identifier {national_id}")]
    BicNotFound {
        country_code: String,
        national_id: String,
    },

    /// The German rules reject the account
    #[error(transparent)]
    UnsupportedAccountDetails(UnsupportedAccountDetails),

    #[error(transparent)]
    InvalidCharacter(InvalidCharacterError),
}

impl From<UnsupportedAccountDetails> for BuildError {
    fn from(err: UnsupportedAccountDetails) -> Self {
        BuildError::UnsupportedAccountDetails(err)
    }
}

impl From<InvalidCharacterError> for BuildError {
    fn from(err: InvalidCharacterError) -> Self {
        BuildError::InvalidCharacter(err)
    }
}
