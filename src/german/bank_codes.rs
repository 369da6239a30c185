/// Default bank code to rule id assignments. Bank codes not listed here use
/// the identity rule. Hosts with the full Bundesbank table pass it to
/// [super::GermanRuleEngine::new] instead.
#[rustfmt::skip]
pub(super) const DEFAULT_BANK_CODE_RULES: &[(&str, &str)] = &[
    // Landesbank Berlin
    ("10050000", "000400"),
    ("10050005", "000400"),
    ("10050006", "000400"),
    // Stuttgarter Volksbank
    ("60090100", "000600"),
    // Sparkasse KölnBonn
    ("37050198", "000700"),
    ("37050199", "000700"),
    // BHF-Bank
    ("10020200", "000800"),
    ("20120200", "000800"),
    ("25020200", "000800"),
    ("30020500", "000800"),
    ("50020200", "000800"),
    ("51020000", "000800"),
    ("55020000", "000800"),
    ("60120200", "000800"),
    ("70220200", "000800"),
    ("86020200", "000800"),
    // Commerzbank
    ("10040000", "000503"),
    ("10080000", "000503"),
    ("10080900", "000503"),
    ("15080000", "000503"),
    ("20040000", "000503"),
    ("20080000", "000503"),
    ("25040066", "000503"),
    ("26580070", "000503"),
    ("30040000", "000503"),
    ("36040039", "000503"),
    ("37040044", "000503"),
    ("37080040", "000503"),
    ("38040007", "000503"),
    ("39040013", "000503"),
    ("39080005", "000503"),
    ("43080083", "000503"),
    ("47840065", "000503"),
    ("47880031", "000503"),
    ("50040000", "000503"),
    ("50080000", "000503"),
    ("50640015", "000503"),
    ("51080060", "000503"),
    ("55040022", "000503"),
    ("57080070", "000503"),
    ("60040071", "000503"),
    ("60080000", "000503"),
    ("68080030", "000503"),
    ("69240075", "000503"),
    ("70040041", "000503"),
    ("70080000", "000503"),
    ("86040000", "000503"),
    ("86080000", "000503"),
    // Deutsche Bank
    ("10070000", "002002"),
    ("10070024", "002002"),
    ("20070000", "002002"),
    ("20070024", "002002"),
    ("37070060", "002002"),
    ("37070024", "002002"),
    ("50070010", "002002"),
    ("50070024", "002002"),
    ("70070010", "002002"),
    ("70070024", "002002"),
    // HypoVereinsbank
    ("10020890", "003101"),
    ("20030000", "003200"),
    ("30220190", "003301"),
    ("60020290", "003400"),
    ("70020270", "003501"),
    ("76020070", "003101"),
    // Deutsche Kreditbank
    ("12030000", "004700"),
    // Deutsche Bundesbank
    ("10000000", "004200"),
    ("20000000", "004200"),
    ("37000000", "004200"),
    ("50000000", "004200"),
    ("70000000", "004200"),
    // Kreissparkasse Ravensburg
    ("65050110", "001700"),
    // Sparkasse Freiburg
    ("68050101", "004400"),
    // Evangelische Bank
    ("52060410", "005400"),
    // SEB
    ("10010111", "005600"),
    ("25010111", "005600"),
    ("37010111", "005600"),
    ("50010111", "005600"),
    ("70010111", "005600"),
];
