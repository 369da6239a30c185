use super::checks::{check63, check76};
use super::tables;
use super::ConvertedDetails;
use ahash::AHashMap;
use lazy_static::lazy_static;

/// A rule either converts the details or rejects them (`None`).
pub(super) type RuleFn = fn(&str, &str) -> Option<ConvertedDetails>;

pub(super) enum RuleKind {
    Identity,
    Reject,
    ReplaceBankCode(&'static str),
    PseudoAccounts(&'static [(&'static str, &'static str)]),
    Custom(RuleFn),
}

impl RuleKind {
    pub(super) fn apply(&self, bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
        match self {
            RuleKind::Identity => Some(ConvertedDetails::new(bank_code, account_number)),
            RuleKind::Reject => None,
            RuleKind::ReplaceBankCode(replacement) => {
                Some(ConvertedDetails::new(replacement, account_number))
            }
            RuleKind::PseudoAccounts(table) => Some(ConvertedDetails::new(
                bank_code,
                &pseudo_account_number(table, account_number),
            )),
            RuleKind::Custom(rule) => rule(bank_code, account_number),
        }
    }
}

use RuleKind::*;

/// Rule ids are the four-digit rule number followed by a two-digit version.
/// Superseded versions behave like the current one.
#[rustfmt::skip]
const RULES: &[(&str, RuleKind)] = &[
    ("000000", Identity),
    ("000100", Reject),
    ("000200", Custom(rule_0002)),
    ("000300", Custom(rule_0003)),
    ("000400", PseudoAccounts(tables::RULE_0004)),
    ("000500", Custom(rule_0005)),
    ("000501", Custom(rule_0005)),
    ("000502", Custom(rule_0005)),
    ("000503", Custom(rule_0005)),
    ("000600", PseudoAccounts(tables::RULE_0006)),
    ("000700", PseudoAccounts(tables::RULE_0007)),
    ("000800", ReplaceBankCode("50020200")),
    ("000900", Custom(rule_0009)),
    ("001000", Custom(rule_0010)),
    ("001001", Custom(rule_0010)),
    ("001100", PseudoAccounts(tables::RULE_0011)),
    ("001200", ReplaceBankCode("50050000")),
    ("001201", ReplaceBankCode("50050000")),
    ("001300", Custom(rule_0013)),
    ("001301", Custom(rule_0013)),
    ("001400", ReplaceBankCode("30060601")),
    ("001500", Custom(rule_0015)),
    ("001501", Custom(rule_0015)),
    ("001600", PseudoAccounts(tables::RULE_0016)),
    ("001700", PseudoAccounts(tables::RULE_0017)),
    ("001800", PseudoAccounts(tables::RULE_0018)),
    ("001900", ReplaceBankCode("50120383")),
    ("002000", Custom(rule_0020)),
    ("002001", Custom(rule_0020)),
    ("002002", Custom(rule_0020)),
    ("002100", ReplaceBankCode("36020030")),
    ("002101", ReplaceBankCode("36020030")),
    ("002200", PseudoAccounts(tables::RULE_0022)),
    ("002300", PseudoAccounts(tables::RULE_0023)),
    ("002400", PseudoAccounts(tables::RULE_0024)),
    ("002500", ReplaceBankCode("60050101")),
    ("002501", ReplaceBankCode("60050101")),
    ("002600", Custom(rule_0026)),
    ("002700", Custom(rule_0027)),
    ("002800", ReplaceBankCode("25050180")),
    ("002900", Custom(rule_0029)),
    ("003000", Custom(rule_0030)),
    ("003100", Custom(rule_0031)),
    ("003101", Custom(rule_0031)),
    ("003200", Custom(rule_0032)),
    ("003300", Custom(rule_0033)),
    ("003301", Custom(rule_0033)),
    ("003400", Custom(rule_0034)),
    ("003500", Custom(rule_0035)),
    ("003501", Custom(rule_0035)),
    ("003600", Custom(rule_0036)),
    ("003700", ReplaceBankCode("30010700")),
    ("003800", ReplaceBankCode("28590075")),
    ("003900", ReplaceBankCode("28020050")),
    ("004000", Custom(rule_0040)),
    ("004001", Custom(rule_0040)),
    ("004100", Custom(rule_0041)),
    ("004200", Custom(rule_0042)),
    ("004300", Custom(rule_0043)),
    ("004301", Custom(rule_0043)),
    ("004400", PseudoAccounts(tables::RULE_0044)),
    ("004500", Identity),
    ("004501", Identity),
    ("004600", ReplaceBankCode("31010833")),
    ("004700", Custom(rule_0047)),
    ("004800", ReplaceBankCode("36010200")),
    ("004900", Custom(rule_0049)),
    ("005000", ReplaceBankCode("28550000")),
    ("005100", PseudoAccounts(tables::RULE_0051)),
    ("005200", Custom(rule_0052)),
    ("005300", Custom(rule_0053)),
    ("005400", PseudoAccounts(tables::RULE_0054)),
    ("005500", ReplaceBankCode("25410200")),
    ("005600", Custom(rule_0056)),
    ("005700", ReplaceBankCode("66010200")),
];

lazy_static! {
    static ref RULES_BY_ID: AHashMap<&'static str, &'static RuleKind> =
        RULES.iter().map(|(id, kind)| (*id, kind)).collect();
}

pub(super) fn rule(rule_id: &str) -> Option<&'static RuleKind> {
    RULES_BY_ID.get(rule_id).copied()
}

pub(super) fn rule_ids() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|(id, _)| *id)
}

fn padded(account_number: &str) -> String {
    format!("{account_number:0>10}")
}

fn unpadded(account_number: &str) -> &str {
    account_number.trim_start_matches('0')
}

fn numeric(account_number: &str) -> u64 {
    unpadded(account_number).parse().unwrap_or(0)
}

fn lookup<V: Copy>(table: &[(&str, V)], key: &str) -> Option<V> {
    table
        .binary_search_by_key(&key, |(k, _)| *k)
        .ok()
        .map(|index| table[index].1)
}

/// The replacement for `account_number` in `table`, or the account number unchanged.
pub(super) fn pseudo_account_number(table: &[(&str, &str)], account_number: &str) -> String {
    lookup(table, &padded(account_number))
        .map_or_else(|| account_number.to_owned(), str::to_owned)
}

fn hvb_bank_code<'a>(bank_code: &'a str, account_number: &str) -> &'a str {
    let padded = padded(account_number);
    match padded
        .get(..3)
        .and_then(|prefix| lookup(tables::HVB_BANK_CODES, prefix))
    {
        Some(mapped) => mapped,
        None => bank_code,
    }
}

fn rule_0002(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    let padded = padded(account_number);
    if padded.get(7..8) == Some("6") || padded.get(7..9) == Some("86") {
        return None;
    }
    Some(ConvertedDetails::new(bank_code, account_number))
}

fn rule_0003(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    if padded(account_number) == "6161604670" {
        return None;
    }
    Some(ConvertedDetails::new(bank_code, account_number))
}

/// Commerzbank branches accepting account numbers shorter than five digits.
const COMMERZBANK_SHORT_ACCOUNT_BANK_CODES: &[&str] = &[
    "10080900", "25780022", "42080082", "44080055", "44080057", "44580070", "50080055", "50080057",
    "50080082", "50080086", "50089400", "51080085", "51080086", "86080055", "86080057", "86080085",
];

fn rule_0005(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    let key = format!("{bank_code}_{}", padded(account_number));
    if let Some(replacement) = lookup(tables::COMMERZBANK, &key) {
        return Some(ConvertedDetails::new(bank_code, replacement));
    }
    if (998_000_000..=999_499_999).contains(&numeric(account_number)) {
        return None;
    }
    if unpadded(account_number).len() < 5
        && !COMMERZBANK_SHORT_ACCOUNT_BANK_CODES.contains(&bank_code)
    {
        return None;
    }
    Some(ConvertedDetails::new(bank_code, account_number))
}

fn rule_0009(_bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    let padded = padded(account_number);
    let account_number = match padded.strip_prefix("1116") {
        Some(rest) => format!("3047{rest}"),
        None => account_number.to_owned(),
    };
    Some(ConvertedDetails::new("68351865", &account_number))
}

fn rule_0010(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    let bank_code = if bank_code == "50050222" {
        "50050201"
    } else {
        bank_code
    };
    Some(ConvertedDetails::new(
        bank_code,
        &pseudo_account_number(tables::RULE_0010, account_number),
    ))
}

fn rule_0013(_bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    let unpadded = unpadded(account_number);
    let account_number = if matches!(unpadded.len(), 6 | 7) {
        format!("{unpadded}00")
    } else {
        account_number.to_owned()
    };
    Some(ConvertedDetails::new("30050000", &account_number))
}

fn rule_0015(_bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    Some(ConvertedDetails::new(
        "37060193",
        &pseudo_account_number(tables::RULE_0015, account_number),
    ))
}

fn rule_0020(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    if bank_code == "50070010" && numeric(account_number) == 9_999_999 {
        return Some(ConvertedDetails::new(bank_code, "0092777202"));
    }
    let unpadded = unpadded(account_number);
    let account_number = match unpadded.len() {
        5..=7 => {
            let extended = format!("{unpadded}00");
            if check63(&extended) {
                extended
            } else if check63(unpadded) {
                unpadded.to_owned()
            } else {
                return None;
            }
        }
        8 | 9 if check63(unpadded) => unpadded.to_owned(),
        _ => return None,
    };
    Some(ConvertedDetails::new(bank_code, &padded(&account_number)))
}

fn rule_0026(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    if numeric(account_number) < 100 {
        return None;
    }
    Some(ConvertedDetails::new(bank_code, account_number))
}

fn rule_0027(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    if numeric(account_number) <= 999 {
        return None;
    }
    Some(ConvertedDetails::new(bank_code, account_number))
}

fn rule_0029(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    if account_number.len() == 10 && account_number.get(3..4) == Some("0") {
        let converted = format!("0{}{}", &account_number[..3], &account_number[4..]);
        return Some(ConvertedDetails::new(bank_code, &converted));
    }
    Some(ConvertedDetails::new(bank_code, account_number))
}

fn rule_0030(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    let unpadded = unpadded(account_number);
    let extended = format!("{unpadded}00");
    let account_number = if check76(&extended) {
        extended
    } else if check76(unpadded) {
        unpadded.to_owned()
    } else {
        return None;
    };
    Some(ConvertedDetails::new(bank_code, &padded(&account_number)))
}

fn rule_0031(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    Some(ConvertedDetails::new(
        hvb_bank_code(bank_code, account_number),
        account_number,
    ))
}

fn rule_0032(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    if (800_000_000..=899_999_999).contains(&numeric(account_number)) {
        return None;
    }
    rule_0031(bank_code, account_number)
}

fn hvb_with_pseudo_accounts(
    table: &[(&str, &str)],
    bank_code: &str,
    account_number: &str,
) -> Option<ConvertedDetails> {
    let converted_account = pseudo_account_number(table, account_number);
    let converted_bank = hvb_bank_code(bank_code, account_number);
    Some(ConvertedDetails::new(converted_bank, &converted_account))
}

fn rule_0033(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    hvb_with_pseudo_accounts(tables::RULE_0033, bank_code, account_number)
}

fn rule_0034(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    hvb_with_pseudo_accounts(tables::RULE_0034, bank_code, account_number)
}

fn rule_0035(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    hvb_with_pseudo_accounts(tables::RULE_0035, bank_code, account_number)
}

fn rule_0036(_bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    let account_number = match numeric(account_number) {
        n @ 100_000..=899_999 => format!("{n}000"),
        30_000_000..=59_999_999 | 100_000_000..=999_999_999 => account_number.to_owned(),
        _ => return None,
    };
    Some(ConvertedDetails::new("21050000", &account_number))
}

fn rule_0040(_bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    Some(ConvertedDetails::new(
        "68052328",
        &pseudo_account_number(tables::RULE_0040, account_number),
    ))
}

fn rule_0041(_bank_code: &str, _account_number: &str) -> Option<ConvertedDetails> {
    Some(ConvertedDetails::new("50060400", "0000011404"))
}

fn rule_0042(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    let unpadded = unpadded(account_number);
    if unpadded.len() != 8 {
        return None;
    }
    let number = numeric(account_number);
    let protected =
        (50_462_000..=50_463_999).contains(&number) || (50_469_000..=50_469_999).contains(&number);
    if !protected && unpadded.get(3..4) != Some("0") {
        return None;
    }
    Some(ConvertedDetails::new(bank_code, account_number))
}

fn rule_0043(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    let bank_code = if bank_code == "60651070" {
        "66650085"
    } else {
        bank_code
    };
    Some(ConvertedDetails::new(bank_code, account_number))
}

fn rule_0047(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    let unpadded = unpadded(account_number);
    let account_number = if unpadded.len() == 8 {
        format!("{unpadded}00")
    } else {
        account_number.to_owned()
    };
    Some(ConvertedDetails::new(bank_code, &account_number))
}

fn rule_0049(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    let account_number = pseudo_account_number(tables::RULE_0049, account_number);
    let padded = padded(&account_number);
    let account_number = match (padded.get(..4), padded.get(4..)) {
        (Some(head), Some(tail)) if tail.starts_with('9') => format!("{tail}{head}"),
        _ => account_number,
    };
    Some(ConvertedDetails::new(bank_code, &account_number))
}

fn compound_lookup(
    table: &[(&str, (&'static str, &'static str))],
    bank_code: &str,
    account_number: &str,
) -> Option<ConvertedDetails> {
    let key = format!("{bank_code}_{}", padded(account_number));
    lookup(table, &key).map(|(bank_code, account_number)| {
        ConvertedDetails::new(bank_code, account_number)
    })
}

fn rule_0052(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    compound_lookup(tables::RULE_0052, bank_code, account_number)
}

fn rule_0053(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    compound_lookup(tables::RULE_0053, bank_code, account_number)
}

fn rule_0056(bank_code: &str, account_number: &str) -> Option<ConvertedDetails> {
    if let Some(replacement) = lookup(tables::RULE_0056, &padded(account_number)) {
        return Some(ConvertedDetails::new(bank_code, replacement));
    }
    if unpadded(account_number).len() < 10 {
        return None;
    }
    Some(ConvertedDetails::new(bank_code, account_number))
}
