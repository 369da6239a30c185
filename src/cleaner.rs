//! Normalises raw local details into the canonical fields each country's
//! BBAN is assembled from.

use crate::bic_finder::BicFinder;
use crate::country::country_rules;
use crate::german::{GermanRuleEngine, UnsupportedAccountDetails};
use crate::local_details::{Field, LocalDetails};
use crate::stats::Stats;
use crate::sweden::{self, SwedishBankLookup};
use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) type CleanFn =
    fn(&LocalDetailsCleaner<'_>, &LocalDetails) -> Result<LocalDetails, UnsupportedAccountDetails>;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-.\s]").unwrap());
static SPACES_AND_HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]").unwrap());

pub struct LocalDetailsCleaner<'a> {
    german_rules: &'a GermanRuleEngine,
    swedish_banks: &'a SwedishBankLookup,
    bic_finder: Option<&'a dyn BicFinder>,
    stats: &'a Stats,
}

impl<'a> LocalDetailsCleaner<'a> {
    pub fn new(
        german_rules: &'a GermanRuleEngine,
        swedish_banks: &'a SwedishBankLookup,
        bic_finder: Option<&'a dyn BicFinder>,
        stats: &'a Stats,
    ) -> Self {
        Self {
            german_rules,
            swedish_banks,
            bic_finder,
            stats,
        }
    }

    /// Cleans `details`, never failing. Unsupported countries and incomplete
    /// details come back unchanged apart from the echoed `swift_*` fields.
    pub fn clean(&self, details: &LocalDetails) -> LocalDetails {
        match self.try_clean(details) {
            Ok(cleaned) => cleaned,
            // only German details are ever rejected
            Err(_) => {
                let mut fallback = details.clone();
                fallback.account_number = details
                    .account_number
                    .as_deref()
                    .map(|account_number| zero_pad(account_number, 10));
                with_swift_details(fallback)
            }
        }
    }

    /// Like [LocalDetailsCleaner::clean], but reports accounts the German
    /// rules reject.
    pub fn try_clean(
        &self,
        details: &LocalDetails,
    ) -> Result<LocalDetails, UnsupportedAccountDetails> {
        let Some(rules) = country_rules(&details.country_code) else {
            return Ok(with_swift_details(details.clone()));
        };
        let required_fields = rules.required_fields(self.bic_finder.is_some());
        if details.first_missing(&required_fields).is_some() {
            return Ok(with_swift_details(details.clone()));
        }

        let cleaned = (rules.clean)(self, details)?;
        if rules.country_code == "SE" {
            Ok(cleaned)
        } else {
            Ok(with_swift_details(cleaned))
        }
    }

    fn find_bank_code(&self, country_code: &str, branch_code: Option<&str>) -> Option<String> {
        let finder = self.bic_finder?;
        let branch_code = branch_code?;
        self.stats.bic_lookups.increment(1);
        match finder.find_bic(country_code, branch_code) {
            Some(bic) => bic.get(..4).map(str::to_uppercase),
            None => {
                self.stats.bic_misses.increment(1);
                None
            }
        }
    }
}

fn with_swift_details(mut details: LocalDetails) -> LocalDetails {
    details.swift_bank_code = details.bank_code.clone();
    details.swift_branch_code = details.branch_code.clone();
    details.swift_account_number = details.account_number.clone();
    details
}

fn remove_separators(value: &str) -> String {
    SEPARATORS.replace_all(value, "").into_owned()
}

fn zero_pad(value: &str, width: usize) -> String {
    format!("{value:0>width$}")
}

fn split_at(value: &str, mid: usize) -> Option<(&str, &str)> {
    Some((value.get(..mid)?, value.get(mid..)?))
}

fn account_number(details: &LocalDetails) -> &str {
    details.get(Field::AccountNumber).unwrap_or_default()
}

pub(crate) fn clean_unchanged(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    Ok(details.clone())
}

pub(crate) fn clean_at(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = account_number(details);
    let mut cleaned = details.clone();
    if account_number.len() >= 4 {
        cleaned.account_number = Some(zero_pad(account_number, 11));
    }
    Ok(cleaned)
}

pub(crate) fn clean_be(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = remove_separators(account_number(details));
    let mut cleaned = details.clone();
    cleaned.bank_code = account_number.get(..3).map(str::to_owned);
    cleaned.account_number = Some(account_number);
    Ok(cleaned)
}

pub(crate) fn clean_cy(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let mut cleaned = details.clone();
    if let Some((bank_code, branch_code)) = details
        .get(Field::BankCode)
        .filter(|bank_code| bank_code.len() > 3)
        .and_then(|bank_code| split_at(bank_code, 3))
    {
        cleaned.bank_code = Some(bank_code.to_owned());
        cleaned.branch_code = Some(branch_code.to_owned());
    }
    let account_number = remove_separators(account_number(details));
    cleaned.account_number = Some(if account_number.len() >= 7 {
        zero_pad(&account_number, 16)
    } else {
        account_number
    });
    Ok(cleaned)
}

pub(crate) fn clean_cz(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = account_number(details).replace(' ', "");
    let (prefix, number) = match account_number.split_once('-') {
        Some((prefix, number)) => (prefix, number),
        None => (
            details.get(Field::AccountNumberPrefix).unwrap_or_default(),
            account_number.as_str(),
        ),
    };
    let mut cleaned = details.clone();
    cleaned.account_number = Some(format!("{}{}", zero_pad(prefix, 6), zero_pad(number, 10)));
    cleaned.account_number_prefix = None;
    Ok(cleaned)
}

pub(crate) fn clean_de(
    cleaner: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let bank_code = details.get(Field::BankCode).unwrap_or_default();
    let converted = cleaner
        .german_rules
        .convert(bank_code, account_number(details))
        .inspect_err(|_| {
            let rule_id = cleaner.german_rules.rule_id_for(bank_code);
            cleaner.stats.record_unsupported_account(rule_id);
        })?;
    let mut cleaned = details.clone();
    cleaned.bank_code = Some(converted.bank_code);
    cleaned.account_number = Some(zero_pad(&converted.account_number, 10));
    Ok(cleaned)
}

pub(crate) fn clean_dk(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = account_number(details).replace([' ', '.'], "");
    let (bank_code, account_number) = match details.get(Field::BankCode) {
        Some(bank_code) => (bank_code, account_number.as_str()),
        None => match account_number.split_once('-') {
            Some(parts) => parts,
            None if account_number.len() == 14 => match split_at(&account_number, 4) {
                Some(parts) => parts,
                None => return Ok(details.clone()),
            },
            None => return Ok(details.clone()),
        },
    };
    let mut cleaned = details.clone();
    cleaned.bank_code = Some(zero_pad(bank_code, 4));
    cleaned.account_number = Some(zero_pad(&account_number.replace('-', ""), 10));
    Ok(cleaned)
}

pub(crate) fn clean_ee(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = remove_separators(account_number(details));
    let account_number = account_number.trim_start_matches('0');
    let bank_code = match account_number.get(..2) {
        Some("11") => Some("22"),
        Some("93") => Some("00"),
        domestic_bank_code => domestic_bank_code,
    };
    let mut cleaned = details.clone();
    cleaned.bank_code = bank_code.map(str::to_owned);
    cleaned.account_number = Some(zero_pad(account_number, 14));
    Ok(cleaned)
}

pub(crate) fn clean_es(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = remove_separators(account_number(details));
    let mut cleaned = details.clone();
    if details.has(Field::BankCode) && details.has(Field::BranchCode) {
        cleaned.account_number = Some(account_number);
        return Ok(cleaned);
    }
    // bank (4) + branch (4) + check digits (2) + account (10)
    if account_number.len() == 20 {
        cleaned.bank_code = account_number.get(..4).map(str::to_owned);
        cleaned.branch_code = account_number.get(4..8).map(str::to_owned);
        cleaned.account_number = account_number.get(10..).map(str::to_owned);
    }
    Ok(cleaned)
}

pub(crate) fn clean_fi(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = account_number(details).replace(' ', "");
    let Some((branch_code, number)) = account_number
        .split_once('-')
        .or_else(|| split_at(&account_number, 6))
    else {
        return Ok(details.clone());
    };
    // savings and co-operative banks pad after the first digit
    let number = match (branch_code.chars().next(), split_at(number, 1)) {
        (Some('4' | '5'), Some((first, rest))) => format!("{first}{}", zero_pad(rest, 7)),
        _ => zero_pad(number, 8),
    };
    let electronic = format!("{branch_code}{number}");
    let Some((bank_code, account_number)) = split_at(&electronic, 3) else {
        return Ok(details.clone());
    };
    let mut cleaned = details.clone();
    cleaned.bank_code = Some(bank_code.to_owned());
    cleaned.account_number = Some(account_number.to_owned());
    Ok(cleaned)
}

pub(crate) fn clean_fr(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = SPACES_AND_HYPHENS
        .replace_all(account_number(details), "")
        .into_owned();
    let mut cleaned = details.clone();
    match split_at(&account_number, 11) {
        Some((number, rib_key)) if account_number.len() == 13 && details.check_digit.is_none() => {
            cleaned.account_number = Some(number.to_owned());
            cleaned.check_digit = Some(rib_key.to_owned());
        }
        _ => cleaned.account_number = Some(account_number),
    }
    Ok(cleaned)
}

pub(crate) fn clean_gb(
    cleaner: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let branch_code = details
        .get(Field::BranchCode)
        .map(|branch_code| SPACES_AND_HYPHENS.replace_all(branch_code, "").into_owned());
    let bank_code = match details.get(Field::BankCode) {
        Some(bank_code) => Some(bank_code.to_uppercase()),
        None => cleaner.find_bank_code(&details.country_code, branch_code.as_deref()),
    };
    let account_number = SPACES_AND_HYPHENS
        .replace_all(account_number(details), "")
        .into_owned();
    let account_number = if details.country_code == "MT" {
        zero_pad(&account_number, 18)
    } else if account_number.len() >= 6 {
        zero_pad(&account_number, 8)
    } else {
        account_number
    };

    let mut cleaned = details.clone();
    cleaned.bank_code = bank_code;
    cleaned.branch_code = branch_code;
    cleaned.account_number = Some(account_number);
    Ok(cleaned)
}

pub(crate) fn clean_hr(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = account_number(details).replace(' ', "");
    let (bank_code, account_number) = match account_number.split_once('-') {
        Some((bank_code, account_number)) => (Some(bank_code), account_number),
        None => (details.get(Field::BankCode), account_number.as_str()),
    };
    let mut cleaned = details.clone();
    cleaned.bank_code = bank_code.map(str::to_owned);
    cleaned.account_number = Some(zero_pad(account_number, 10));
    Ok(cleaned)
}

pub(crate) fn clean_hu(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = remove_separators(account_number(details));
    if !matches!(account_number.len(), 16 | 24)
        || !account_number.bytes().all(|b| b.is_ascii_digit())
    {
        return Ok(details.clone());
    }
    let mut cleaned = details.clone();
    cleaned.bank_code = Some(account_number[..3].to_owned());
    cleaned.branch_code = Some(account_number[3..7].to_owned());
    cleaned.account_number = Some(format!("{:0<17}", &account_number[7..]));
    Ok(cleaned)
}

pub(crate) fn clean_is(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = account_number(details).replace(' ', "");
    let mut parts: Vec<&str> = account_number.split('-').collect();
    let bank_code = match details.get(Field::BankCode) {
        Some(bank_code) => bank_code,
        None if parts.len() > 1 => parts.remove(0),
        None => return Ok(details.clone()),
    };
    // ledger (2) + account (6) + kennitala (10)
    let account_number = match parts.as_slice() {
        [ledger, number, kennitala] => {
            format!("{ledger:0>2}{number:0>6}{kennitala:0>10}")
        }
        [ledger_and_number, kennitala] => match split_at(ledger_and_number, 2) {
            Some((ledger, number)) => format!("{ledger}{number:0>6}{kennitala:0>10}"),
            None => return Ok(details.clone()),
        },
        [account_number] => zero_pad(account_number, 18),
        _ => return Ok(details.clone()),
    };
    let mut cleaned = details.clone();
    cleaned.bank_code = Some(zero_pad(bank_code, 4));
    cleaned.account_number = Some(account_number);
    Ok(cleaned)
}

pub(crate) fn clean_it(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let mut cleaned = details.clone();
    cleaned.account_number = Some(zero_pad(&remove_separators(account_number(details)), 12));
    Ok(cleaned)
}

pub(crate) fn clean_nl(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let mut cleaned = details.clone();
    cleaned.bank_code = details.get(Field::BankCode).map(str::to_uppercase);
    cleaned.account_number = Some(zero_pad(&remove_separators(account_number(details)), 10));
    Ok(cleaned)
}

pub(crate) fn clean_no(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = remove_separators(account_number(details));
    let mut cleaned = details.clone();
    if details.has(Field::BankCode) {
        cleaned.account_number = Some(account_number);
    } else if let Some((bank_code, number)) =
        split_at(&account_number, 4).filter(|_| account_number.len() == 11)
    {
        cleaned.bank_code = Some(bank_code.to_owned());
        cleaned.account_number = Some(number.to_owned());
    }
    Ok(cleaned)
}

pub(crate) fn clean_pl(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let account_number = remove_separators(account_number(details));
    // a full NRB carries the two IBAN check digits first
    let bban = match account_number.len() {
        26 => account_number.get(2..),
        24 => Some(account_number.as_str()),
        _ => None,
    };
    let Some((bank_code, number)) = bban.and_then(|bban| split_at(bban, 8)) else {
        return Ok(details.clone());
    };
    let mut cleaned = details.clone();
    cleaned.bank_code = Some(bank_code.to_owned());
    cleaned.account_number = Some(number.to_owned());
    Ok(cleaned)
}

pub(crate) fn clean_se(
    cleaner: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let mut cleaned = details.clone();
    if let Some(bank_code) = details.get(Field::BankCode) {
        // already in SWIFT form
        let account_number = zero_pad(&remove_separators(account_number(details)), 17);
        cleaned.account_number = Some(account_number.clone());
        cleaned.swift_bank_code = Some(bank_code.to_owned());
        cleaned.swift_branch_code = None;
        cleaned.swift_account_number = Some(account_number);
        return Ok(cleaned);
    }

    let converted = sweden::convert(
        cleaner.swedish_banks,
        details.get(Field::BranchCode),
        account_number(details),
    );
    cleaned.branch_code = converted.branch_code;
    cleaned.account_number = Some(converted.account_number);
    cleaned.swift_bank_code = converted.swift_bank_code;
    cleaned.swift_branch_code = None;
    cleaned.swift_account_number = Some(converted.swift_account_number);
    Ok(cleaned)
}

pub(crate) fn clean_si(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let mut cleaned = details.clone();
    cleaned.account_number = Some(zero_pad(&remove_separators(account_number(details)), 8));
    Ok(cleaned)
}

pub(crate) fn clean_sk(
    _: &LocalDetailsCleaner<'_>,
    details: &LocalDetails,
) -> Result<LocalDetails, UnsupportedAccountDetails> {
    let prefix = details.get(Field::AccountNumberPrefix).unwrap_or_default();
    let mut cleaned = details.clone();
    cleaned.account_number = Some(format!(
        "{}{}",
        zero_pad(prefix, 6),
        zero_pad(account_number(details), 10)
    ));
    cleaned.account_number_prefix = None;
    Ok(cleaned)
}

#[cfg(test)]
mod test {
    use super::*;

    fn clean_with(details: &LocalDetails, bic_finder: Option<&dyn BicFinder>) -> LocalDetails {
        let stats = Stats::default();
        LocalDetailsCleaner::new(
            &GermanRuleEngine::shared_default(),
            &SwedishBankLookup::shared_default(),
            bic_finder,
            &stats,
        )
        .clean(details)
    }

    fn clean(details: &LocalDetails) -> LocalDetails {
        clean_with(details, None)
    }

    fn fields(details: &LocalDetails) -> (Option<&str>, Option<&str>, Option<&str>) {
        (
            details.get(Field::BankCode),
            details.get(Field::BranchCode),
            details.get(Field::AccountNumber),
        )
    }

    #[test]
    fn unsupported_country_is_echoed() {
        let details = LocalDetails::new("US").bank_code("021000021").account_number("123");
        let cleaned = clean(&details);
        assert_eq!(cleaned.swift_bank_code.as_deref(), Some("021000021"));
        assert_eq!(cleaned.swift_account_number.as_deref(), Some("123"));
        assert_eq!(fields(&cleaned), fields(&details));
    }

    #[test]
    fn missing_fields_are_echoed() {
        let details = LocalDetails::new("DE").account_number("532013000");
        let cleaned = clean(&details);
        assert_eq!(cleaned.account_number.as_deref(), Some("532013000"));
        assert_eq!(cleaned.swift_account_number.as_deref(), Some("532013000"));
    }

    #[test]
    fn austria() {
        let cleaned = clean(
            &LocalDetails::new("AT")
                .bank_code("19043")
                .account_number("234573201"),
        );
        assert_eq!(fields(&cleaned), (Some("19043"), None, Some("00234573201")));
        let cleaned = clean(&LocalDetails::new("AT").bank_code("19043").account_number("123"));
        assert_eq!(cleaned.account_number.as_deref(), Some("123"));
    }

    #[test]
    fn belgium() {
        let cleaned = clean(&LocalDetails::new("BE").account_number("510-0075470-61"));
        assert_eq!(fields(&cleaned), (Some("510"), None, Some("510007547061")));
    }

    #[test]
    fn cyprus_splits_bank_and_branch() {
        let cleaned = clean(
            &LocalDetails::new("CY")
                .bank_code("00200128")
                .account_number("1200527600"),
        );
        assert_eq!(fields(&cleaned), (Some("002"), Some("00128"), Some("0000001200527600")));
    }

    #[test]
    fn czech_prefix() {
        let cleaned = clean(
            &LocalDetails::new("CZ")
                .bank_code("0800")
                .account_number("19-2000145399"),
        );
        assert_eq!(cleaned.account_number.as_deref(), Some("0000192000145399"));
        let cleaned = clean(
            &LocalDetails::new("CZ")
                .bank_code("0800")
                .account_number("2000145399"),
        );
        assert_eq!(cleaned.account_number.as_deref(), Some("0000002000145399"));
    }

    #[test]
    fn germany_applies_bank_code_rules() {
        let cleaned = clean(
            &LocalDetails::new("DE")
                .bank_code("37040044")
                .account_number("532013000"),
        );
        assert_eq!(fields(&cleaned), (Some("37040044"), None, Some("0532013000")));

        let cleaned = clean(&LocalDetails::new("DE").bank_code("10050000").account_number("135"));
        assert_eq!(cleaned.account_number.as_deref(), Some("0990021440"));
        assert_eq!(cleaned.swift_account_number.as_deref(), Some("0990021440"));
    }

    #[test]
    fn germany_rejection_falls_back_to_padded_details() {
        let details = LocalDetails::new("DE").bank_code("10000000").account_number("12345678");
        let stats = Stats::default();
        let german_rules = GermanRuleEngine::shared_default();
        let swedish_banks = SwedishBankLookup::shared_default();
        let cleaner = LocalDetailsCleaner::new(&german_rules, &swedish_banks, None, &stats);

        assert!(cleaner.try_clean(&details).is_err());
        let cleaned = cleaner.clean(&details);
        assert_eq!(cleaned.account_number.as_deref(), Some("0012345678"));
        assert_eq!(cleaned.swift_bank_code.as_deref(), Some("10000000"));
    }

    #[test]
    fn denmark() {
        let expected = (Some("1199"), None, Some("0003179680"));
        let cleaned = clean(&LocalDetails::new("DK").account_number("1199-0003179680"));
        assert_eq!(fields(&cleaned), expected);
        let cleaned = clean(&LocalDetails::new("DK").account_number("11990003179680"));
        assert_eq!(fields(&cleaned), expected);
        let cleaned = clean(&LocalDetails::new("DK").bank_code("1199").account_number("3179680"));
        assert_eq!(fields(&cleaned), expected);
    }

    #[test]
    fn denmark_leaves_ambiguous_accounts_alone() {
        let cleaned = clean(&LocalDetails::new("DK").account_number("123456"));
        assert_eq!(fields(&cleaned), (None, None, Some("123456")));
        let cleaned = clean(&LocalDetails::new("DK").account_number("119900031796801"));
        assert_eq!(fields(&cleaned), (None, None, Some("119900031796801")));
    }

    #[test]
    fn estonia_derives_bank_code() {
        let cleaned = clean(&LocalDetails::new("EE").account_number("0221020145685"));
        assert_eq!(fields(&cleaned), (Some("22"), None, Some("00221020145685")));
        let cleaned = clean(&LocalDetails::new("EE").account_number("111020145685"));
        assert_eq!(cleaned.bank_code.as_deref(), Some("22"));
        let cleaned = clean(&LocalDetails::new("EE").account_number("93123"));
        assert_eq!(cleaned.bank_code.as_deref(), Some("00"));
    }

    #[test]
    fn spain_splits_twenty_digit_accounts() {
        let cleaned = clean(&LocalDetails::new("ES").account_number("2310 0001 18 0000012345"));
        assert_eq!(fields(&cleaned), (Some("2310"), Some("0001"), Some("0000012345")));
        let cleaned = clean(
            &LocalDetails::new("ES")
                .bank_code("2310")
                .branch_code("0001")
                .account_number("0000012345"),
        );
        assert_eq!(fields(&cleaned), (Some("2310"), Some("0001"), Some("0000012345")));
    }

    #[test]
    fn finland_expands_to_electronic_format() {
        let cleaned = clean(&LocalDetails::new("FI").account_number("123456-785"));
        assert_eq!(fields(&cleaned), (Some("123"), None, Some("45600000785")));
        let cleaned = clean(&LocalDetails::new("FI").account_number("423456-781"));
        assert_eq!(fields(&cleaned), (Some("423"), None, Some("45670000081")));
    }

    #[test]
    fn france_splits_rib_key() {
        let cleaned = clean(
            &LocalDetails::new("FR")
                .bank_code("20041")
                .branch_code("01005")
                .account_number("0500013M026 06"),
        );
        assert_eq!(cleaned.account_number.as_deref(), Some("0500013M026"));
        assert_eq!(cleaned.check_digit.as_deref(), Some("06"));
    }

    #[test]
    fn united_kingdom_with_bic_finder() {
        let finder = |_: &str, branch_code: &str| {
            (branch_code == "123456").then(|| "WESTGB2L".to_string())
        };
        let details = LocalDetails::new("GB")
            .branch_code("12-34-56")
            .account_number("98765432");
        let cleaned = clean_with(&details, Some(&finder));
        assert_eq!(fields(&cleaned), (Some("WEST"), Some("123456"), Some("98765432")));

        let details = LocalDetails::new("GB")
            .branch_code("65-43-21")
            .account_number("98765432");
        let cleaned = clean_with(&details, Some(&finder));
        assert_eq!(cleaned.bank_code, None);
    }

    #[test]
    fn united_kingdom_without_bic_finder_needs_bank_code() {
        let details = LocalDetails::new("GB")
            .branch_code("12-34-56")
            .account_number("98765432");
        assert_eq!(clean(&details).branch_code.as_deref(), Some("12-34-56"));

        let cleaned = clean(&details.bank_code("west").account_number("1234567"));
        assert_eq!(fields(&cleaned), (Some("WEST"), Some("123456"), Some("01234567")));
    }

    #[test]
    fn malta_pads_account_number() {
        let cleaned = clean(
            &LocalDetails::new("MT")
                .bank_code("MALT")
                .branch_code("01100")
                .account_number("12345MTLCAST001S"),
        );
        assert_eq!(cleaned.account_number.as_deref(), Some("0012345MTLCAST001S"));
    }

    #[test]
    fn croatia() {
        let cleaned = clean(&LocalDetails::new("HR").account_number("1001005-1863000160"));
        assert_eq!(fields(&cleaned), (Some("1001005"), None, Some("1863000160")));
    }

    #[test]
    fn hungary() {
        let expected = (Some("117"), Some("7301"), Some("61111101800000000"));
        let cleaned = clean(&LocalDetails::new("HU").account_number("11773016-11111018"));
        assert_eq!(fields(&cleaned), expected);
        let cleaned = clean(&LocalDetails::new("HU").account_number("11773016-11111018-00000000"));
        assert_eq!(fields(&cleaned), expected);
    }

    #[test]
    fn iceland() {
        let expected = (Some("0159"), None, Some("260076545510730339"));
        let cleaned = clean(&LocalDetails::new("IS").account_number("0159-26-007654-5510730339"));
        assert_eq!(fields(&cleaned), expected);
        let cleaned = clean(
            &LocalDetails::new("IS")
                .bank_code("159")
                .account_number("26007654-5510730339"),
        );
        assert_eq!(fields(&cleaned), expected);
    }

    #[test]
    fn italy_pads_account_number() {
        let cleaned = clean(
            &LocalDetails::new("IT")
                .bank_code("05428")
                .branch_code("11101")
                .account_number("123456"),
        );
        assert_eq!(cleaned.account_number.as_deref(), Some("000000123456"));
    }

    #[test]
    fn norway() {
        let cleaned = clean(&LocalDetails::new("NO").account_number("8601.11.17947"));
        assert_eq!(fields(&cleaned), (Some("8601"), None, Some("1117947")));
    }

    #[test]
    fn poland() {
        let cleaned =
            clean(&LocalDetails::new("PL").account_number("61 1090 1014 0000 0712 1981 2874"));
        assert_eq!(fields(&cleaned), (Some("10901014"), None, Some("0000071219812874")));
    }

    #[test]
    fn sweden_local_details() {
        let cleaned = clean(&LocalDetails::new("SE").account_number("12810105723"));
        assert_eq!(fields(&cleaned), (None, Some("1281"), Some("0105723")));
        assert_eq!(cleaned.swift_bank_code.as_deref(), Some("120"));
        assert_eq!(cleaned.swift_branch_code, None);
        assert_eq!(cleaned.swift_account_number.as_deref(), Some("00000012810105723"));
    }

    #[test]
    fn sweden_swift_details() {
        let cleaned = clean(&LocalDetails::new("SE").bank_code("500").account_number("5839825746"));
        assert_eq!(cleaned.swift_bank_code.as_deref(), Some("500"));
        assert_eq!(cleaned.swift_account_number.as_deref(), Some("00000005839825746"));
    }

    #[test]
    fn slovakia_joins_prefix() {
        let cleaned = clean(
            &LocalDetails::new("SK")
                .bank_code("1200")
                .account_number_prefix("19")
                .account_number("8742637541"),
        );
        assert_eq!(cleaned.account_number.as_deref(), Some("0000198742637541"));
        assert_eq!(cleaned.account_number_prefix, None);
    }
}
