use super::CountryStructure;

/// (position, length, format) of one field. A zero length means the field is absent.
type FieldLayout = (usize, usize, &'static str);

/// country code, total length, national id length, BBAN format, then the bank code,
/// branch code and account number layouts
type Row = (&'static str, usize, usize, &'static str, FieldLayout, FieldLayout, FieldLayout);

#[rustfmt::skip]
const ROWS: &[Row] = &[
    ("AD", 24, 8, r"\d{8}[A-Z0-9]{12}", (5, 4, r"\d{4}"), (9, 4, r"\d{4}"), (13, 12, r"[A-Z0-9]{12}")),
    ("AE", 23, 3, r"\d{19}", (5, 3, r"\d{3}"), (0, 0, r""), (8, 16, r"\d{16}")),
    ("AL", 28, 8, r"\d{8}[A-Z0-9]{16}", (5, 3, r"\d{3}"), (8, 4, r"\d{4}"), (13, 16, r"[A-Z0-9]{16}")),
    ("AT", 20, 5, r"\d{16}", (5, 5, r"\d{5}"), (0, 0, r""), (10, 11, r"\d{11}")),
    ("AZ", 28, 4, r"[A-Z]{4}[A-Z0-9]{20}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 20, r"[A-Z0-9]{20}")),
    ("BA", 20, 6, r"\d{16}", (5, 3, r"\d{3}"), (8, 3, r"\d{3}"), (11, 10, r"\d{10}")),
    ("BE", 16, 3, r"\d{12}", (5, 3, r"\d{3}"), (0, 0, r""), (5, 12, r"\d{12}")),
    ("BG", 22, 8, r"[A-Z]{4}\d{6}[A-Z0-9]{8}", (5, 4, r"[A-Z]{4}"), (9, 4, r"\d{4}"), (13, 10, r"\d{2}[A-Z0-9]{8}")),
    ("BH", 22, 4, r"[A-Z]{4}[A-Z0-9]{14}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 14, r"[A-Z0-9]{14}")),
    ("BR", 29, 8, r"\d{23}[A-Z][A-Z0-9]", (5, 8, r"\d{8}"), (13, 5, r"\d{5}"), (18, 12, r"\d{10}[A-Z][A-Z0-9]")),
    ("CH", 21, 5, r"\d{5}[A-Z0-9]{12}", (5, 5, r"\d{5}"), (0, 0, r""), (10, 12, r"[A-Z0-9]{12}")),
    ("CR", 22, 4, r"0\d{17}", (6, 3, r"\d{3}"), (0, 0, r""), (9, 14, r"\d{14}")),
    ("CY", 28, 8, r"\d{8}[A-Z0-9]{16}", (5, 3, r"\d{3}"), (8, 5, r"\d{5}"), (13, 16, r"[A-Z0-9]{16}")),
    ("CZ", 24, 4, r"\d{20}", (5, 4, r"\d{4}"), (0, 0, r""), (9, 16, r"\d{16}")),
    ("DE", 22, 8, r"\d{18}", (5, 8, r"\d{8}"), (0, 0, r""), (13, 10, r"\d{10}")),
    ("DK", 18, 4, r"\d{14}", (5, 4, r"\d{4}"), (0, 0, r""), (9, 10, r"\d{10}")),
    ("DO", 28, 4, r"[A-Z0-9]{4}\d{20}", (5, 4, r"[A-Z0-9]{4}"), (0, 0, r""), (9, 20, r"\d{20}")),
    ("EE", 20, 2, r"\d{16}", (5, 2, r"\d{2}"), (0, 0, r""), (7, 14, r"\d{14}")),
    ("EG", 29, 8, r"\d{25}", (5, 4, r"\d{4}"), (9, 4, r"\d{4}"), (13, 17, r"\d{17}")),
    ("ES", 24, 8, r"\d{20}", (5, 4, r"\d{4}"), (9, 4, r"\d{4}"), (15, 10, r"\d{10}")),
    ("FI", 18, 3, r"\d{14}", (5, 3, r"\d{3}"), (0, 0, r""), (8, 11, r"\d{11}")),
    ("FO", 18, 4, r"\d{14}", (5, 4, r"\d{4}"), (0, 0, r""), (9, 10, r"\d{10}")),
    ("FR", 27, 10, r"\d{10}[A-Z0-9]{11}\d{2}", (5, 5, r"\d{5}"), (10, 5, r"\d{5}"), (15, 11, r"[A-Z0-9]{11}")),
    ("GB", 22, 10, r"[A-Z]{4}\d{14}", (5, 4, r"[A-Z]{4}"), (9, 6, r"\d{6}"), (15, 8, r"\d{8}")),
    ("GE", 22, 2, r"[A-Z]{2}\d{16}", (5, 2, r"[A-Z]{2}"), (0, 0, r""), (7, 16, r"\d{16}")),
    ("GI", 23, 4, r"[A-Z]{4}[A-Z0-9]{15}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 15, r"[A-Z0-9]{15}")),
    ("GL", 18, 4, r"\d{14}", (5, 4, r"\d{4}"), (0, 0, r""), (9, 10, r"\d{10}")),
    ("GR", 27, 7, r"\d{7}[A-Z0-9]{16}", (5, 3, r"\d{3}"), (8, 4, r"\d{4}"), (12, 16, r"[A-Z0-9]{16}")),
    ("GT", 28, 4, r"[A-Z0-9]{24}", (5, 4, r"[A-Z0-9]{4}"), (0, 0, r""), (9, 20, r"[A-Z0-9]{20}")),
    ("HR", 21, 7, r"\d{17}", (5, 7, r"\d{7}"), (0, 0, r""), (12, 10, r"\d{10}")),
    ("HU", 28, 7, r"\d{24}", (5, 3, r"\d{3}"), (8, 4, r"\d{4}"), (12, 17, r"\d{17}")),
    ("IE", 22, 10, r"[A-Z]{4}\d{14}", (5, 4, r"[A-Z]{4}"), (9, 6, r"\d{6}"), (15, 8, r"\d{8}")),
    ("IL", 23, 6, r"\d{19}", (5, 3, r"\d{3}"), (8, 3, r"\d{3}"), (11, 13, r"\d{13}")),
    ("IQ", 23, 7, r"[A-Z]{4}\d{15}", (5, 4, r"[A-Z]{4}"), (9, 3, r"\d{3}"), (12, 12, r"\d{12}")),
    ("IS", 26, 4, r"\d{22}", (5, 4, r"\d{4}"), (0, 0, r""), (9, 18, r"\d{18}")),
    ("IT", 27, 10, r"[A-Z]\d{10}[A-Z0-9]{12}", (6, 5, r"\d{5}"), (11, 5, r"\d{5}"), (16, 12, r"[A-Z0-9]{12}")),
    ("JO", 30, 8, r"[A-Z]{4}\d{4}[A-Z0-9]{18}", (5, 4, r"[A-Z]{4}"), (9, 4, r"\d{4}"), (13, 18, r"[A-Z0-9]{18}")),
    ("KW", 30, 4, r"[A-Z]{4}[A-Z0-9]{22}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 22, r"[A-Z0-9]{22}")),
    ("KZ", 20, 3, r"\d{3}[A-Z0-9]{13}", (5, 3, r"\d{3}"), (0, 0, r""), (8, 13, r"[A-Z0-9]{13}")),
    ("LB", 28, 4, r"\d{4}[A-Z0-9]{20}", (5, 4, r"\d{4}"), (0, 0, r""), (9, 20, r"[A-Z0-9]{20}")),
    ("LC", 32, 4, r"[A-Z]{4}[A-Z0-9]{24}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 24, r"[A-Z0-9]{24}")),
    ("LI", 21, 5, r"\d{5}[A-Z0-9]{12}", (5, 5, r"\d{5}"), (0, 0, r""), (10, 12, r"[A-Z0-9]{12}")),
    ("LT", 20, 5, r"\d{16}", (5, 5, r"\d{5}"), (0, 0, r""), (10, 11, r"\d{11}")),
    ("LU", 20, 3, r"\d{3}[A-Z0-9]{13}", (5, 3, r"\d{3}"), (0, 0, r""), (8, 13, r"[A-Z0-9]{13}")),
    ("LV", 21, 4, r"[A-Z]{4}[A-Z0-9]{13}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 13, r"[A-Z0-9]{13}")),
    ("MC", 27, 10, r"\d{10}[A-Z0-9]{11}\d{2}", (5, 5, r"\d{5}"), (10, 5, r"\d{5}"), (15, 11, r"[A-Z0-9]{11}")),
    ("MD", 24, 2, r"[A-Z0-9]{20}", (5, 2, r"[A-Z0-9]{2}"), (0, 0, r""), (7, 18, r"[A-Z0-9]{18}")),
    ("ME", 22, 3, r"\d{18}", (5, 3, r"\d{3}"), (0, 0, r""), (8, 15, r"\d{15}")),
    ("MK", 19, 3, r"\d{3}[A-Z0-9]{10}\d{2}", (5, 3, r"\d{3}"), (0, 0, r""), (8, 12, r"[A-Z0-9]{10}\d{2}")),
    ("MR", 27, 10, r"\d{23}", (5, 5, r"\d{5}"), (10, 5, r"\d{5}"), (15, 13, r"\d{13}")),
    ("MT", 31, 9, r"[A-Z]{4}\d{5}[A-Z0-9]{18}", (5, 4, r"[A-Z]{4}"), (9, 5, r"\d{5}"), (14, 18, r"[A-Z0-9]{18}")),
    ("MU", 30, 8, r"[A-Z]{4}\d{19}[A-Z]{3}", (5, 6, r"[A-Z]{4}\d{2}"), (11, 2, r"\d{2}"), (13, 18, r"\d{15}[A-Z]{3}")),
    ("NL", 18, 4, r"[A-Z]{4}\d{10}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 10, r"\d{10}")),
    ("NO", 15, 4, r"\d{11}", (5, 4, r"\d{4}"), (0, 0, r""), (9, 7, r"\d{7}")),
    ("PK", 24, 4, r"[A-Z]{4}[A-Z0-9]{16}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 16, r"[A-Z0-9]{16}")),
    ("PL", 28, 8, r"\d{24}", (5, 8, r"\d{8}"), (0, 0, r""), (13, 16, r"\d{16}")),
    ("PS", 29, 4, r"[A-Z]{4}[A-Z0-9]{21}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 21, r"[A-Z0-9]{21}")),
    ("PT", 25, 8, r"\d{21}", (5, 4, r"\d{4}"), (9, 4, r"\d{4}"), (13, 11, r"\d{11}")),
    ("QA", 29, 4, r"[A-Z]{4}[A-Z0-9]{21}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 21, r"[A-Z0-9]{21}")),
    ("RO", 24, 4, r"[A-Z]{4}[A-Z0-9]{16}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 16, r"[A-Z0-9]{16}")),
    ("RS", 22, 3, r"\d{18}", (5, 3, r"\d{3}"), (0, 0, r""), (8, 15, r"\d{15}")),
    ("SA", 24, 2, r"\d{2}[A-Z0-9]{18}", (5, 2, r"\d{2}"), (0, 0, r""), (7, 18, r"[A-Z0-9]{18}")),
    ("SC", 31, 6, r"[A-Z]{4}\d{20}[A-Z]{3}", (5, 6, r"[A-Z]{4}\d{2}"), (11, 2, r"\d{2}"), (13, 19, r"\d{16}[A-Z]{3}")),
    ("SE", 24, 3, r"\d{20}", (5, 3, r"\d{3}"), (0, 0, r""), (8, 17, r"\d{17}")),
    ("SI", 19, 5, r"\d{15}", (5, 5, r"\d{5}"), (0, 0, r""), (10, 8, r"\d{8}")),
    ("SK", 24, 4, r"\d{20}", (5, 4, r"\d{4}"), (0, 0, r""), (9, 16, r"\d{16}")),
    ("SM", 27, 10, r"[A-Z]\d{10}[A-Z0-9]{12}", (6, 5, r"\d{5}"), (11, 5, r"\d{5}"), (16, 12, r"[A-Z0-9]{12}")),
    ("ST", 25, 8, r"\d{21}", (5, 4, r"\d{4}"), (9, 4, r"\d{4}"), (13, 13, r"\d{13}")),
    ("SV", 28, 4, r"[A-Z]{4}\d{20}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 20, r"\d{20}")),
    ("TL", 23, 3, r"\d{19}", (5, 3, r"\d{3}"), (0, 0, r""), (8, 16, r"\d{16}")),
    ("TN", 24, 5, r"\d{20}", (5, 2, r"\d{2}"), (7, 3, r"\d{3}"), (10, 15, r"\d{15}")),
    ("TR", 26, 5, r"\d{5}0[A-Z0-9]{16}", (5, 5, r"\d{5}"), (0, 0, r""), (11, 16, r"[A-Z0-9]{16}")),
    ("UA", 29, 6, r"\d{6}[A-Z0-9]{19}", (5, 6, r"\d{6}"), (0, 0, r""), (11, 19, r"[A-Z0-9]{19}")),
    ("VA", 22, 3, r"\d{18}", (5, 3, r"\d{3}"), (0, 0, r""), (8, 15, r"\d{15}")),
    ("VG", 24, 4, r"[A-Z]{4}\d{16}", (5, 4, r"[A-Z]{4}"), (0, 0, r""), (9, 16, r"\d{16}")),
    ("XK", 20, 4, r"\d{16}", (5, 2, r"\d{2}"), (7, 2, r"\d{2}"), (9, 12, r"\d{12}")),
];

/// Sweden is the only country with pseudo-IBANs: (bank, branch, account) lengths.
const SWEDISH_PSEUDO_IBAN_LENGTHS: (usize, usize, usize) = (0, 5, 10);

/// The embedded structure table.
pub fn default_structures() -> Vec<CountryStructure> {
    ROWS.iter()
        .map(
            |&(country_code, total_length, national_id_length, bban_format, bank, branch, account)| {
                let mut structure = CountryStructure {
                    country_code: country_code.to_owned(),
                    bank_code_position: bank.0,
                    bank_code_length: bank.1,
                    branch_code_position: branch.0,
                    branch_code_length: branch.1,
                    account_number_position: account.0,
                    account_number_length: account.1,
                    total_length,
                    national_id_length,
                    bban_format: bban_format.to_owned(),
                    bank_code_format: bank.2.to_owned(),
                    branch_code_format: branch.2.to_owned(),
                    account_number_format: account.2.to_owned(),
                    pseudo_iban_bank_code_length: 0,
                    pseudo_iban_branch_code_length: 0,
                    pseudo_iban_account_number_length: 0,
                };
                if country_code == "SE" {
                    let (bank, branch, account) = SWEDISH_PSEUDO_IBAN_LENGTHS;
                    structure.pseudo_iban_bank_code_length = bank;
                    structure.pseudo_iban_branch_code_length = branch;
                    structure.pseudo_iban_account_number_length = account;
                }
                structure
            },
        )
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn country_codes_are_unique_and_sorted() {
        let codes: Vec<&str> = ROWS.iter().map(|row| row.0).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn known_bbans_match_their_format() {
        let registry = crate::structure::StructureRegistry::shared_default();
        for (country_code, bban) in [
            ("AT", "1904300234573201"),
            ("BE", "539007547034"),
            ("BR", "00360305000010009795493P1"),
            ("CH", "00762011623852957"),
            ("DE", "370400440532013000"),
            ("ES", "23100001180000012345"),
            ("FR", "20041010050500013M02606"),
            ("GB", "WEST12345698765432"),
            ("IT", "X0542811101000000123456"),
            ("MT", "MALT011000012345MTLCAST001S"),
            ("NL", "ABNA0417164300"),
            ("NO", "86011117947"),
            ("PL", "109010140000071219812874"),
            ("PT", "000201231234567890154"),
            ("SE", "50000000058398257466"),
            ("SI", "263300012039086"),
        ] {
            let structure = registry.get(country_code).unwrap();
            assert_eq!(bban.len() + 4, structure.total_length, "{country_code}");
            assert_eq!(registry.matches_bban(country_code, bban), Some(true), "{country_code}");
        }
    }
}
