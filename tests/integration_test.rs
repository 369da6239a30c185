use ibandit::german::GermanRuleEngine;
use ibandit::structure::{CountryStructure, StructureRegistry};
use ibandit::sweden::SwedishBankLookup;
use ibandit::{
    build, clean_local_details, decompose, supported_country_codes, validate, BuildError,
    ErrorKey, Field, IbanEngine, Labels, LocalDetails, LocalDetailsCleaner, Stats,
};
use metrics::{Key, Label};
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use metrics_util::CompositeKey;
use metrics_util::MetricKind::Counter;

fn details(
    country_code: &str,
    bank_code: Option<&str>,
    branch_code: Option<&str>,
    account_number: &str,
) -> LocalDetails {
    let mut details = LocalDetails::new(country_code).account_number(account_number);
    if let Some(bank_code) = bank_code {
        details = details.bank_code(bank_code);
    }
    if let Some(branch_code) = branch_code {
        details = details.branch_code(branch_code);
    }
    details
}

fn examples() -> Vec<(LocalDetails, &'static str)> {
    vec![
        (details("AT", Some("19043"), None, "234573201"), "AT611904300234573201"),
        (details("BE", None, None, "539-0075470-34"), "BE68539007547034"),
        (details("BG", Some("BNBG"), Some("9661"), "1020345678"), "BG80BNBG96611020345678"),
        (details("CY", Some("00200128"), None, "1200527600"), "CY17002001280000001200527600"),
        (details("CZ", Some("0800"), None, "19-2000145399"), "CZ6508000000192000145399"),
        (details("DE", Some("37040044"), None, "532013000"), "DE89370400440532013000"),
        (details("DK", Some("0040"), None, "0440116243"), "DK5000400440116243"),
        (details("EE", None, None, "221020145685"), "EE382200221020145685"),
        (details("ES", Some("2310"), Some("0001"), "0000012345"), "ES8023100001180000012345"),
        (details("FI", None, None, "123456-785"), "FI2112345600000785"),
        (details("FR", Some("20041"), Some("01005"), "0500013M026"), "FR1420041010050500013M02606"),
        (details("GB", Some("WEST"), Some("12-34-56"), "98765432"), "GB82WEST12345698765432"),
        (
            details("GR", Some("011"), Some("0125"), "0000000012300695"),
            "GR1601101250000000012300695",
        ),
        (details("HR", None, None, "1001005-1863000160"), "HR1210010051863000160"),
        (details("HU", None, None, "11773016-11111018-00000000"), "HU42117730161111101800000000"),
        (details("IE", Some("AIBK"), Some("931152"), "12345678"), "IE29AIBK93115212345678"),
        (details("IS", None, None, "0159-26-007654-5510730339"), "IS140159260076545510730339"),
        (details("IT", Some("05428"), Some("11101"), "123456"), "IT60X0542811101000000123456"),
        (details("LT", Some("10000"), None, "11101001000"), "LT121000011101001000"),
        (details("LU", Some("001"), None, "9400644750000"), "LU280019400644750000"),
        (details("LV", Some("BANK"), None, "0000435195001"), "LV80BANK0000435195001"),
        (details("MC", Some("11222"), Some("00001"), "01234567890"), "MC5811222000010123456789030"),
        (
            details("MT", Some("MALT"), Some("01100"), "12345MTLCAST001S"),
            "MT84MALT011000012345MTLCAST001S",
        ),
        (details("NL", Some("ABNA"), None, "417164300"), "NL91ABNA0417164300"),
        (details("NO", None, None, "8601.11.17947"), "NO9386011117947"),
        (details("PL", None, None, "61109010140000071219812874"), "PL61109010140000071219812874"),
        (details("PT", Some("0002"), Some("0123"), "12345678901"), "PT50000201231234567890154"),
        (details("RO", Some("AAAA"), None, "1B31007593840000"), "RO49AAAA1B31007593840000"),
        (details("SE", None, None, "12810105723"), "SE5412000000012810105723"),
        (details("SI", Some("26330"), None, "120390"), "SI56263300012039086"),
        (
            details("SK", Some("1200"), None, "8742637541").account_number_prefix("19"),
            "SK3112000000198742637541",
        ),
        (details("SM", Some("03225"), Some("09800"), "270100"), "SM86U0322509800000000270100"),
    ]
}

#[test]
fn every_supported_country_has_an_example() {
    let covered: Vec<String> = examples()
        .into_iter()
        .map(|(details, _)| details.country_code)
        .collect();
    let supported: Vec<String> = supported_country_codes().map(str::to_owned).collect();
    assert_eq!(covered, supported);
}

#[test]
fn built_ibans_match_known_values() {
    for (details, expected) in examples() {
        let mut iban = build(&details)
            .unwrap_or_else(|err| panic!("{} failed to build: {err}", details.country_code));
        assert_eq!(iban.iban(), expected);
        assert!(iban.valid(), "{expected}: {:?}", iban.errors());
        assert!(iban.valid_local_details(), "{expected}: {:?}", iban.errors());
    }
}

#[test]
fn built_ibans_pass_an_independent_validator() {
    for (details, _) in examples() {
        let iban = build(&details).unwrap();
        assert!(
            iban.iban().parse::<iban::Iban>().is_ok(),
            "{} rejected by iban_validate",
            iban.iban()
        );
    }
}

#[test]
fn decomposition_round_trips_swift_details() {
    for (details, expected) in examples() {
        let built = build(&details).unwrap();
        let decomposed = decompose(expected);
        assert_eq!(decomposed.country_code, details.country_code);
        assert_eq!(decomposed.check_digits, expected[2..4]);
        assert_eq!(
            decomposed.bank_code,
            built.swift_bank_code().unwrap_or_default(),
            "{expected}"
        );
        assert_eq!(
            decomposed.branch_code,
            built.swift_branch_code().unwrap_or_default(),
            "{expected}"
        );
        assert_eq!(
            decomposed.account_number,
            built.swift_account_number().unwrap_or_default(),
            "{expected}"
        );
    }
}

#[test]
fn validation_scenarios() {
    assert!(validate("DE89 3704 0044 0532 0130 00").valid);

    let result = validate("AA123456789123456");
    assert!(!result.valid);
    assert!(result.errors.contains_key(&ErrorKey::CountryCode));

    let result = validate("GB82WEST1234569876543");
    assert_eq!(
        result.errors.keys().copied().collect::<Vec<_>>(),
        vec![ErrorKey::CheckDigits, ErrorKey::Length, ErrorKey::Format]
    );
}

#[test]
fn build_failures() {
    assert_eq!(
        build(&LocalDetails::new("XX").account_number("1")).unwrap_err(),
        BuildError::UnsupportedCountry("XX".to_string())
    );
    assert_eq!(
        build(&LocalDetails::new("FR").bank_code("20041").account_number("1")).unwrap_err(),
        BuildError::MissingField(Field::BranchCode)
    );
    let err = build(
        &LocalDetails::new("DE")
            .bank_code("10000000")
            .account_number("12345678"),
    )
    .unwrap_err();
    assert_eq!(i64::from(err), -5);
}

#[test]
fn cleaning_never_fails() {
    let cleaned = clean_local_details(
        &LocalDetails::new("DE")
            .bank_code("37040044")
            .account_number("532013000"),
    );
    assert_eq!(cleaned.account_number.as_deref(), Some("0532013000"));

    let cleaned = clean_local_details(&LocalDetails::new("DK").account_number("123456"));
    assert_eq!(cleaned.bank_code, None);
    assert_eq!(cleaned.account_number.as_deref(), Some("123456"));
    assert_eq!(ibandit::assemble(&cleaned), None);
}

#[test]
fn structures_load_from_json() {
    let structure: CountryStructure = serde_json::from_str(
        r#"{
            "country_code": "ZZ",
            "bank_code_position": 5,
            "bank_code_length": 4,
            "account_number_position": 9,
            "account_number_length": 8,
            "total_length": 16,
            "national_id_length": 4,
            "bban_format": "[A-Z]{4}\\d{8}",
            "bank_code_format": "[A-Z]{4}",
            "account_number_format": "\\d{8}"
        }"#,
    )
    .unwrap();
    let engine = IbanEngine::builder()
        .structures(StructureRegistry::new([structure]).unwrap())
        .build();

    let bban = "BANK12345678";
    let check_digits = ibandit::check_digit::iban("ZZ", bban).unwrap();
    let mut iban = engine.parse(&format!("ZZ{check_digits}{bban}"));
    assert!(iban.valid());
    assert_eq!(iban.bank_code(), Some("BANK"));
    assert!(!engine.validate("DE89370400440532013000").valid);
}

#[test]
fn engine_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let engine = IbanEngine::builder()
            .labels(Labels::new(&[("engine", "test")]))
            .build();
        engine.validate("DE89370400440532013000");
        engine.validate("DE12370400440532013000");
        engine.build(&examples()[5].0).unwrap();
        let _ = engine.build(
            &LocalDetails::new("DE")
                .bank_code("10000000")
                .account_number("12345678"),
        );
    });

    let mut snapshot = snapshotter.snapshot().into_hashmap();
    let mut counter = |name: &'static str, labels: &[(&'static str, &'static str)]| {
        let labels = labels
            .iter()
            .map(|(key, value)| Label::new(*key, *value))
            .collect::<Vec<_>>();
        snapshot
            .remove(&CompositeKey::new(Counter, Key::from_parts(name, labels)))
            .map(|(_, _, value)| value)
    };

    assert_eq!(
        counter("iban.validations", &[("engine", "test")]),
        Some(DebugValue::Counter(2))
    );
    assert_eq!(
        counter("iban.invalid", &[("engine", "test"), ("error", "check_digits")]),
        Some(DebugValue::Counter(1))
    );
    assert_eq!(
        counter("iban.built", &[("engine", "test")]),
        Some(DebugValue::Counter(1))
    );
    assert_eq!(
        counter("iban.assembled", &[("engine", "test")]),
        Some(DebugValue::Counter(1))
    );
    assert_eq!(
        counter(
            "iban.build_failures",
            &[("engine", "test"), ("kind", "unsupported_account_details")]
        ),
        Some(DebugValue::Counter(1))
    );
    assert_eq!(
        counter(
            "german_rules.unsupported_accounts",
            &[("engine", "test"), ("rule_id", "004200")]
        ),
        Some(DebugValue::Counter(1))
    );
}

#[test]
fn cleaner_counts_bic_lookups() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let finder = |_: &str, sort_code: &str| (sort_code == "931152").then(|| "AIBKIE2D".to_string());
    let german_rules = GermanRuleEngine::shared_default();
    let swedish_banks = SwedishBankLookup::shared_default();

    let (found, missing) = metrics::with_local_recorder(&recorder, || {
        let stats = Stats::new(&Labels::new(&[("engine", "cleaner")]));
        let cleaner =
            LocalDetailsCleaner::new(&german_rules, &swedish_banks, Some(&finder), &stats);
        let found = cleaner.clean(
            &LocalDetails::new("IE")
                .branch_code("93-11-52")
                .account_number("12345678"),
        );
        let missing = cleaner.clean(
            &LocalDetails::new("IE")
                .branch_code("00-00-00")
                .account_number("12345678"),
        );
        (found, missing)
    });

    assert_eq!(found.bank_code.as_deref(), Some("AIBK"));
    assert_eq!(found.swift_bank_code.as_deref(), Some("AIBK"));
    assert_eq!(missing.bank_code, None);

    let snapshot = snapshotter.snapshot().into_hashmap();
    let labels = vec![Label::new("engine", "cleaner")];
    assert_eq!(
        snapshot.get(&CompositeKey::new(
            Counter,
            Key::from_parts("bic_finder.lookups", labels.clone())
        )),
        Some(&(None, None, DebugValue::Counter(2)))
    );
    assert_eq!(
        snapshot.get(&CompositeKey::new(
            Counter,
            Key::from_parts("bic_finder.misses", labels)
        )),
        Some(&(None, None, DebugValue::Counter(1)))
    );
}
