use afl::fuzz;
use ibandit::{pseudo_iban, IbanEngine, LocalDetails};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

/// Input is `country_code,bank_code,branch_code,account_number`. Anything
/// that doesn't split that way is fed to the parser whole.
fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    let engine = IbanEngine::shared_default();

    let mut iban = engine.parse(input);
    iban.valid();
    iban.valid_local_details();
    let _ = iban.to_formatted_string();
    let _ = iban.national_id();
    let _ = pseudo_iban::split(engine.structures(), input);

    let (country_code, bytes) = split_bytes_once(bytes)?;
    let (bank_code, bytes) = split_bytes_once(bytes)?;
    let (branch_code, account_number) = split_bytes_once(bytes)?;
    let details = LocalDetails::new(std::str::from_utf8(country_code).ok()?)
        .bank_code(std::str::from_utf8(bank_code).ok()?)
        .branch_code(std::str::from_utf8(branch_code).ok()?)
        .account_number(std::str::from_utf8(account_number).ok()?);
    run_fuzz(&engine, &details);

    Some(())
}

fn run_fuzz(engine: &IbanEngine, details: &LocalDetails) {
    #[cfg(feature = "manual_test")]
    {
        println!("Details: {:?}", details);
    }

    let cleaned = engine.clean_local_details(details);
    let assembled = engine.assemble(details);
    match engine.build(details) {
        Ok(mut iban) => {
            // a built IBAN is always the assembled one
            assert_eq!(Some(iban.iban()), assembled.as_deref());
            assert_eq!(iban.local_details(), Some(&cleaned));
            iban.valid_local_details();
        }
        Err(err) => {
            let _ = i64::from(err);
        }
    }
}
