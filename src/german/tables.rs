//! Pseudo account number tables. Each table is sorted by key so it can be
//! binary searched; keys are zero-padded 10-digit account numbers unless noted.

/// Landesbank Berlin
pub(super) const RULE_0004: &[(&str, &str)] = &[
    ("0000000135", "0990021440"),
    ("0000001111", "6600012020"),
    ("0000001900", "0920019005"),
    ("0000007878", "0780008006"),
    ("0000008888", "0250030005"),
    ("0000009595", "1653524703"),
    ("0000097097", "0013044150"),
    ("0000112233", "0630025819"),
    ("0000336666", "6604058903"),
    ("0000484848", "0920018963"),
];

/// Stuttgarter Volksbank
pub(super) const RULE_0006: &[(&str, &str)] = &[
    ("0000001111", "1015222224"),
    ("0000003030", "1015221330"),
    ("0000005000", "1015221000"),
    ("0000008888", "1015222299"),
    ("0000009999", "1015222232"),
];

/// Sparkasse KölnBonn
pub(super) const RULE_0007: &[(&str, &str)] = &[
    ("0000000111", "0000001115"),
    ("0000000221", "0023002157"),
    ("0000001888", "0018882068"),
    ("0000002006", "1900668508"),
    ("0000002626", "1900730100"),
    ("0000003004", "1900637016"),
    ("0000003636", "0023002447"),
    ("0000004000", "0000004028"),
    ("0000004444", "0000017368"),
    ("0000005050", "0000073999"),
    ("0000008888", "1901335750"),
    ("0000030000", "0009992959"),
    ("0000043430", "1901693331"),
    ("0000046664", "1900399856"),
    ("0000055555", "0034407379"),
    ("0000102030", "1900480466"),
    ("0000151515", "0057762957"),
    ("0000222222", "0002222222"),
    ("0000300000", "0009992959"),
    ("0000333333", "0000033217"),
    ("0000414141", "0000092817"),
    ("0000606060", "0000091025"),
    ("0000909090", "0000090944"),
    ("0002602024", "0005602024"),
    ("0003000000", "0009992959"),
    ("0007777777", "0002222222"),
    ("0008090100", "0000038901"),
    ("0014141414", "0043597665"),
    ("0015000023", "0015002223"),
    ("0015151515", "0057762957"),
    ("0022222222", "0002222222"),
    ("0200820082", "1901783868"),
    ("0222220022", "0002222222"),
];

/// DekaBank
pub(super) const RULE_0010: &[(&str, &str)] = &[
    ("0000002000", "0000222000"),
    ("0000800000", "0000180802"),
];

/// Sparkasse Krefeld
pub(super) const RULE_0011: &[(&str, &str)] = &[
    ("0000001000", "0008010001"),
    ("0000047800", "0000047803"),
];

/// Pax-Bank
pub(super) const RULE_0015: &[(&str, &str)] = &[
    ("0000000094", "3008888018"),
    ("0000000556", "0000101010"),
    ("0000000888", "0031870011"),
    ("0000004040", "4003600101"),
    ("0000005826", "1015826017"),
    ("0000025000", "0025000110"),
    ("0000393393", "0033013019"),
    ("0000444555", "0032230016"),
    ("0000603060", "6002919018"),
    ("0002120041", "0002130041"),
    ("0080868086", "4007375013"),
    ("0400569017", "4000569017"),
];

/// Volksbank Krefeld
pub(super) const RULE_0016: &[(&str, &str)] = &[
    ("0000003500", "0000005000"),
];

/// Kreissparkasse Ravensburg
pub(super) const RULE_0017: &[(&str, &str)] = &[
    ("0000000100", "2009090013"),
    ("0000000111", "2111111017"),
    ("0000000240", "2100240010"),
    ("0000004004", "2204004016"),
    ("0000004444", "2044444014"),
    ("0000006060", "2016060014"),
    ("0000102030", "1222020014"),
    ("0000333333", "2033333016"),
    ("0000909090", "2009090013"),
];

/// Landeskreditbank Baden-Württemberg
pub(super) const RULE_0018: &[(&str, &str)] = &[
    ("0000000556", "0120440110"),
    ("0000002157", "5609986500"),
    ("0000009800", "0002009800"),
    ("0000202050", "1222021029"),
    ("0005435435", "0013500000"),
];

/// GLS Gemeinschaftsbank
pub(super) const RULE_0022: &[(&str, &str)] = &[
    ("0001111111", "2222200000"),
];

/// Volksbank Osnabrück
pub(super) const RULE_0023: &[(&str, &str)] = &[
    ("0000000700", "1000700800"),
];

/// Volksbank Mittelhessen
pub(super) const RULE_0024: &[(&str, &str)] = &[
    ("0000000094", "0000001694"),
    ("0000000248", "0000017248"),
    ("0000000345", "0000017345"),
    ("0000000400", "0000014400"),
];

/// HVB Kundenkonten
pub(super) const RULE_0033: &[(&str, &str)] = &[
    ("0000000094", "0002711931"),
    ("0000022222", "5803435253"),
    ("0000055555", "5801800000"),
    ("0001111111", "0039908140"),
    ("0007777777", "5800522694"),
];

/// HVB Treasury
pub(super) const RULE_0034: &[(&str, &str)] = &[
    ("0500500500", "4340111112"),
    ("0502502502", "4340118001"),
];

/// HVB Firmenkunden
pub(super) const RULE_0035: &[(&str, &str)] = &[
    ("0000000880", "0202051200"),
    ("0000001111", "1000001111"),
    ("0000002020", "0002021000"),
];

/// Sparkasse Harburg-Buxtehude
pub(super) const RULE_0040: &[(&str, &str)] = &[
    ("0000000111", "0000001115"),
    ("0000002000", "0000002004"),
];

/// Sparkasse Freiburg
pub(super) const RULE_0044: &[(&str, &str)] = &[
    ("0000000202", "0002282022"),
    ("0000000404", "0004000030"),
    ("0000000550", "0000016005"),
    ("0000000600", "0000004801"),
    ("0000000855", "0000019500"),
];

/// WGZ Bank
pub(super) const RULE_0049: &[(&str, &str)] = &[
    ("0000000036", "0002310113"),
    ("0000000936", "0002310113"),
    ("0000000999", "0001310113"),
    ("0000006060", "0000160602"),
];

/// Investitionsbank Berlin
pub(super) const RULE_0051: &[(&str, &str)] = &[
    ("0000000333", "7832500881"),
    ("0000000502", "0001108884"),
    ("0500500500", "0005005000"),
    ("0502502502", "0001108884"),
];

/// Evangelische Bank
pub(super) const RULE_0054: &[(&str, &str)] = &[
    ("0000000500", "0000500500"),
    ("0000000502", "0000502502"),
    ("0000018067", "0000180670"),
    ("0000484848", "0000484849"),
    ("0000636306", "0000063606"),
    ("0000760440", "0000160440"),
    ("0001018413", "0010108413"),
    ("0002601577", "0026015776"),
    ("0005005000", "0000500500"),
    ("0010796740", "0010796743"),
    ("0011796743", "0010796743"),
    ("0012796740", "0010796743"),
    ("0016307000", "0163107000"),
    ("0016610700", "0166107000"),
    ("1761070000", "0176107000"),
    ("2210531180", "0201053180"),
];

/// SEB
pub(super) const RULE_0056: &[(&str, &str)] = &[
    ("0000000036", "1010240003"),
    ("0000000050", "1328506100"),
    ("0000000099", "1826063000"),
    ("0000000110", "1015597802"),
    ("0000000240", "1010240000"),
    ("0000000333", "1011296100"),
    ("0000000555", "1600220800"),
    ("0000000556", "1000556100"),
    ("0000000606", "1967153801"),
    ("0000000700", "1070088000"),
    ("0000000777", "1006015200"),
    ("0000000999", "1010111101"),
    ("0000001000", "1780014800"),
    ("0000004444", "1202427202"),
    ("0000005000", "1090123200"),
    ("0000007070", "1700031800"),
    ("0000008888", "1340179100"),
    ("0000009999", "1012345607"),
    ("0000100000", "1130003300"),
    ("0000111111", "1028501200"),
    ("0002333300", "1710077502"),
    ("0012345678", "1070088000"),
];

/// Commerzbank, keyed by `<bank code>_<account number>`.
pub(super) const COMMERZBANK: &[(&str, &str)] = &[
    ("10040000_0000007000", "0170000000"),
    ("10080000_0000001987", "0928127700"),
    ("15080000_0000007777", "0977788800"),
    ("20080000_0000002222", "0903927200"),
    ("25040066_0000001919", "0141919100"),
    ("26580070_0000000700", "0710000000"),
    ("30040000_0000000036", "0261103600"),
    ("30040000_0000000222", "0348010002"),
    ("30040000_0000000999", "0123799900"),
    ("36040039_0000000150", "0161620000"),
    ("37040044_0000001888", "0212129101"),
    ("37080040_0000000100", "0269100000"),
    ("37080040_0000000111", "0215022000"),
    ("37080040_0000004004", "0233533500"),
    ("37080040_0000004444", "0233000300"),
    ("38040007_0000000100", "0119160000"),
    ("38040007_0000000240", "0109024000"),
    ("38040007_0000003366", "0385333000"),
    ("39040013_0000000556", "0106555600"),
    ("39080005_0000000556", "0204655600"),
    ("43080083_0000004630", "0825110100"),
    ("47840065_0000000050", "0150103000"),
    ("47840065_0000000055", "0150103000"),
    ("47840065_0000000099", "0150103000"),
    ("47880031_0000000050", "0519899900"),
    ("50040000_0000002000", "0728400300"),
    ("50040000_0000009000", "0720030000"),
    ("50080000_0000006060", "0096736100"),
    ("50640015_0000000777", "0222222200"),
    ("51080060_0000000123", "0012299300"),
    ("55040022_0000000555", "0211050000"),
    ("57080070_0000000661", "0604101200"),
    ("60040071_0000000502", "0525950200"),
    ("60080000_0000000502", "0901581400"),
    ("68080030_0000000202", "0416520200"),
    ("69240075_0000000444", "0445888800"),
    ("70040041_0000000094", "0212808000"),
    ("70080000_0000000094", "0928553201"),
    ("86040000_0000008888", "0450888800"),
    ("86080000_0000001212", "0480375900"),
];

/// Landesbank Baden-Württemberg, keyed by `<bank code>_<account number>`. Accounts missing
/// here are not reachable by IBAN.
pub(super) const RULE_0052: &[(&str, (&str, &str))] = &[
    ("62030050_7002703200", ("60050101", "7406501175")),
    ("63020130_1112156300", ("60050101", "0001920642")),
    ("64020030_1408050100", ("60050101", "7469534505")),
    ("64120030_1201200100", ("60050101", "7477501214")),
    ("66620020_4840404000", ("60050101", "7498502663")),
    ("67020020_5203145700", ("60050101", "7496510994")),
    ("67220020_5308810000", ("60050101", "0002659600")),
    ("67220020_5308810004", ("60050101", "0002662604")),
    ("69220020_6402145400", ("60050101", "7485500252")),
    ("69421020_6208908100", ("60050101", "7481501341")),
];

/// Landesbank Rheinland-Pfalz, keyed like [RULE_0052].
pub(super) const RULE_0053: &[(&str, (&str, &str))] = &[
    ("55050000_0000035000", ("50050201", "0000035000")),
    ("55050000_0000119345", ("50050201", "0000119345")),
    ("55050000_0000901111", ("50050201", "0000901111")),
    ("55050000_0000908500", ("50050201", "0000908500")),
    ("55050000_0000920000", ("50050201", "0000920000")),
    ("55050000_0000920400", ("50050201", "0000920400")),
];

/// Legacy HypoVereinsbank bank codes, keyed by the first three digits of the account number.
pub(super) const HVB_BANK_CODES: &[(&str, &str)] = &[
    ("100", "76020070"),
    ("101", "10020890"),
    ("102", "78320076"),
    ("103", "79320075"),
    ("104", "76220073"),
    ("105", "79020076"),
    ("106", "79320075"),
    ("107", "79320075"),
    ("108", "77320072"),
    ("109", "79320075"),
    ("110", "76220073"),
    ("111", "76020070"),
    ("112", "79320075"),
    ("113", "76020070"),
    ("114", "76020070"),
    ("115", "76520071"),
    ("117", "77120073"),
    ("118", "76020070"),
    ("119", "75320075"),
    ("120", "72120078"),
    ("121", "76220073"),
    ("122", "76320072"),
    ("123", "76420080"),
    ("124", "76320072"),
    ("125", "79520070"),
    ("126", "77320072"),
    ("127", "78020070"),
    ("128", "78020070"),
    ("129", "77120073"),
    ("130", "78020070"),
    ("131", "78020070"),
    ("132", "60420186"),
    ("133", "76020070"),
    ("134", "78020070"),
    ("135", "77020070"),
    ("136", "79520070"),
    ("137", "79320075"),
    ("138", "61120286"),
    ("139", "66020286"),
    ("140", "79020076"),
    ("142", "64020186"),
    ("143", "60020290"),
    ("144", "79020076"),
    ("145", "66020286"),
    ("146", "72120078"),
    ("147", "72223182"),
    ("148", "76520071"),
    ("149", "79020076"),
    ("150", "76020070"),
    ("151", "76320072"),
    ("152", "78320076"),
    ("154", "70020270"),
    ("155", "76520071"),
    ("156", "76020070"),
    ("157", "10020890"),
    ("158", "70020270"),
    ("159", "54520194"),
    ("160", "70020270"),
    ("161", "54520194"),
    ("162", "70020270"),
    ("163", "70020270"),
    ("164", "70020270"),
    ("166", "71120078"),
    ("167", "74320073"),
    ("168", "70320090"),
    ("169", "79020076"),
    ("170", "70020270"),
    ("171", "79520070"),
    ("172", "71120077"),
    ("173", "70020270"),
    ("174", "70020270"),
    ("175", "72120078"),
    ("176", "74020074"),
    ("177", "74320073"),
    ("178", "70020270"),
    ("181", "77320072"),
    ("182", "79520070"),
    ("183", "70020270"),
    ("185", "70020270"),
    ("186", "79020076"),
    ("188", "70020270"),
    ("189", "70020270"),
    ("190", "76020070"),
    ("191", "77020070"),
    ("192", "70025175"),
    ("193", "85020086"),
    ("194", "76020070"),
    ("196", "72020070"),
    ("198", "76320072"),
    ("199", "70020270"),
    ("201", "76020070"),
    ("202", "76020070"),
    ("203", "76020070"),
    ("204", "76020070"),
    ("205", "76020070"),
    ("206", "76020070"),
    ("207", "71120078"),
    ("208", "73120075"),
    ("209", "18020086"),
    ("210", "10020890"),
    ("211", "60020290"),
    ("212", "51020186"),
    ("214", "75020073"),
    ("215", "63020086"),
    ("216", "75020073"),
    ("217", "79020076"),
    ("218", "59020090"),
    ("219", "79520070"),
    ("220", "73322380"),
    ("221", "73120075"),
    ("222", "73421478"),
    ("223", "74320073"),
    ("224", "73322380"),
    ("225", "74020074"),
    ("226", "72020070"),
    ("227", "75220070"),
    ("228", "71120078"),
    ("229", "80020086"),
];
