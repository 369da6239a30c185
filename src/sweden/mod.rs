//! Swedish clearing codes and the conversion between local and SWIFT account numbers.

mod bank_lookup;
mod converter;
pub mod validator;

pub use bank_lookup::{SwedishBankInfo, SwedishBankLookup};
pub use converter::{convert, SwedishDetails};
