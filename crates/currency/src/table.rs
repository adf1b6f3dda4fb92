//! The ISO 4217 table: alpha code, name, minor-unit decimals, numeric code.
//!
//! Sorted by alpha code so lookups can binary-search.

pub(crate) struct Entry {
    pub code: &'static str,
    pub name: &'static str,
    pub decimals: u32,
    pub numeric: u16,
}

const fn entry(code: &'static str, name: &'static str, decimals: u32, numeric: u16) -> Entry {
    Entry { code, name, decimals, numeric }
}

pub(crate) static TABLE: [Entry; 169] = [
    entry("AED", "UAE Dirham", 2, 784),
    entry("AFN", "Afghani", 2, 971),
    entry("ALL", "Lek", 2, 8),
    entry("AMD", "Armenian Dram", 2, 51),
    entry("ANG", "Netherlands Antillean Guilder", 2, 532),
    entry("AOA", "Kwanza", 2, 973),
    entry("ARS", "Argentine Peso", 2, 32),
    entry("AUD", "Australian Dollar", 2, 36),
    entry("AWG", "Aruban Florin", 2, 533),
    entry("AZN", "Azerbaijan Manat", 2, 944),
    entry("BAM", "Convertible Mark", 2, 977),
    entry("BBD", "Barbados Dollar", 2, 52),
    entry("BDT", "Taka", 2, 50),
    entry("BGN", "Bulgarian Lev", 2, 975),
    entry("BHD", "Bahraini Dinar", 3, 48),
    entry("BIF", "Burundi Franc", 0, 108),
    entry("BMD", "Bermudian Dollar", 2, 60),
    entry("BND", "Brunei Dollar", 2, 96),
    entry("BOB", "Boliviano", 2, 68),
    entry("BOV", "Mvdol", 2, 984),
    entry("BRL", "Brazilian Real", 2, 986),
    entry("BSD", "Bahamian Dollar", 2, 44),
    entry("BTN", "Ngultrum", 2, 64),
    entry("BWP", "Pula", 2, 72),
    entry("BYN", "Belarusian Ruble", 2, 933),
    entry("BZD", "Belize Dollar", 2, 84),
    entry("CAD", "Canadian Dollar", 2, 124),
    entry("CDF", "Congolese Franc", 2, 976),
    entry("CHE", "WIR Euro", 2, 947),
    entry("CHF", "Swiss Franc", 2, 756),
    entry("CHW", "WIR Franc", 2, 948),
    entry("CLF", "Unidad de Fomento", 4, 990),
    entry("CLP", "Chilean Peso", 0, 152),
    entry("CNY", "Yuan Renminbi", 2, 156),
    entry("COP", "Colombian Peso", 2, 170),
    entry("COU", "Unidad de Valor Real", 2, 970),
    entry("CRC", "Costa Rican Colon", 2, 188),
    entry("CUC", "Peso Convertible", 2, 931),
    entry("CUP", "Cuban Peso", 2, 192),
    entry("CVE", "Cabo Verde Escudo", 2, 132),
    entry("CZK", "Czech Koruna", 2, 203),
    entry("DJF", "Djibouti Franc", 0, 262),
    entry("DKK", "Danish Krone", 2, 208),
    entry("DOP", "Dominican Peso", 2, 214),
    entry("DZD", "Algerian Dinar", 2, 12),
    entry("EGP", "Egyptian Pound", 2, 818),
    entry("ERN", "Nakfa", 2, 232),
    entry("ETB", "Ethiopian Birr", 2, 230),
    entry("EUR", "Euro", 2, 978),
    entry("FJD", "Fiji Dollar", 2, 242),
    entry("FKP", "Falkland Islands Pound", 2, 238),
    entry("GBP", "Pound Sterling", 2, 826),
    entry("GEL", "Lari", 2, 981),
    entry("GHS", "Ghana Cedi", 2, 936),
    entry("GIP", "Gibraltar Pound", 2, 292),
    entry("GMD", "Dalasi", 2, 270),
    entry("GNF", "Guinean Franc", 0, 324),
    entry("GTQ", "Quetzal", 2, 320),
    entry("GYD", "Guyana Dollar", 2, 328),
    entry("HKD", "Hong Kong Dollar", 2, 344),
    entry("HNL", "Lempira", 2, 340),
    entry("HRK", "Kuna", 2, 191),
    entry("HTG", "Gourde", 2, 332),
    entry("HUF", "Forint", 2, 348),
    entry("IDR", "Rupiah", 2, 360),
    entry("ILS", "New Israeli Sheqel", 2, 376),
    entry("INR", "Indian Rupee", 2, 356),
    entry("IQD", "Iraqi Dinar", 3, 368),
    entry("IRR", "Iranian Rial", 2, 364),
    entry("ISK", "Iceland Krona", 0, 352),
    entry("JMD", "Jamaican Dollar", 2, 388),
    entry("JOD", "Jordanian Dinar", 3, 400),
    entry("JPY", "Yen", 0, 392),
    entry("KES", "Kenyan Shilling", 2, 404),
    entry("KGS", "Som", 2, 417),
    entry("KHR", "Riel", 2, 116),
    entry("KMF", "Comorian Franc", 0, 174),
    entry("KPW", "North Korean Won", 2, 408),
    entry("KRW", "Won", 0, 410),
    entry("KWD", "Kuwaiti Dinar", 3, 414),
    entry("KYD", "Cayman Islands Dollar", 2, 136),
    entry("KZT", "Tenge", 2, 398),
    entry("LAK", "Lao Kip", 2, 418),
    entry("LBP", "Lebanese Pound", 2, 422),
    entry("LKR", "Sri Lanka Rupee", 2, 144),
    entry("LRD", "Liberian Dollar", 2, 430),
    entry("LSL", "Loti", 2, 426),
    entry("LYD", "Libyan Dinar", 3, 434),
    entry("MAD", "Moroccan Dirham", 2, 504),
    entry("MDL", "Moldovan Leu", 2, 498),
    entry("MGA", "Malagasy Ariary", 2, 969),
    entry("MKD", "Denar", 2, 807),
    entry("MMK", "Kyat", 2, 104),
    entry("MNT", "Tugrik", 2, 496),
    entry("MOP", "Pataca", 2, 446),
    entry("MRU", "Ouguiya", 2, 929),
    entry("MUR", "Mauritius Rupee", 2, 480),
    entry("MVR", "Rufiyaa", 2, 462),
    entry("MWK", "Malawi Kwacha", 2, 454),
    entry("MXN", "Mexican Peso", 2, 484),
    entry("MXV", "Mexican Unidad de Inversion (UDI)", 2, 979),
    entry("MYR", "Malaysian Ringgit", 2, 458),
    entry("MZN", "Mozambique Metical", 2, 943),
    entry("NAD", "Namibia Dollar", 2, 516),
    entry("NGN", "Naira", 2, 566),
    entry("NIO", "Cordoba Oro", 2, 558),
    entry("NOK", "Norwegian Krone", 2, 578),
    entry("NPR", "Nepalese Rupee", 2, 524),
    entry("NZD", "New Zealand Dollar", 2, 554),
    entry("OMR", "Rial Omani", 3, 512),
    entry("PAB", "Balboa", 2, 590),
    entry("PEN", "Sol", 2, 604),
    entry("PGK", "Kina", 2, 598),
    entry("PHP", "Philippine Peso", 2, 608),
    entry("PKR", "Pakistan Rupee", 2, 586),
    entry("PLN", "Zloty", 2, 985),
    entry("PYG", "Guarani", 0, 600),
    entry("QAR", "Qatari Rial", 2, 634),
    entry("RON", "Romanian Leu", 2, 946),
    entry("RSD", "Serbian Dinar", 2, 941),
    entry("RUB", "Russian Ruble", 2, 643),
    entry("RWF", "Rwanda Franc", 0, 646),
    entry("SAR", "Saudi Riyal", 2, 682),
    entry("SBD", "Solomon Islands Dollar", 2, 90),
    entry("SCR", "Seychelles Rupee", 2, 690),
    entry("SDG", "Sudanese Pound", 2, 938),
    entry("SEK", "Swedish Krona", 2, 752),
    entry("SGD", "Singapore Dollar", 2, 702),
    entry("SHP", "Saint Helena Pound", 2, 654),
    entry("SLL", "Leone", 2, 694),
    entry("SOS", "Somali Shilling", 2, 706),
    entry("SRD", "Surinam Dollar", 2, 968),
    entry("SSP", "South Sudanese Pound", 2, 728),
    entry("STN", "Dobra", 2, 930),
    entry("SVC", "El Salvador Colon", 2, 222),
    entry("SYP", "Syrian Pound", 2, 760),
    entry("SZL", "Lilangeni", 2, 748),
    entry("THB", "Baht", 2, 764),
    entry("TJS", "Somoni", 2, 972),
    entry("TMT", "Turkmenistan New Manat", 2, 934),
    entry("TND", "Tunisian Dinar", 3, 788),
    entry("TOP", "Pa’anga", 2, 776),
    entry("TRY", "Turkish Lira", 2, 949),
    entry("TTD", "Trinidad and Tobago Dollar", 2, 780),
    entry("TWD", "New Taiwan Dollar", 2, 901),
    entry("TZS", "Tanzanian Shilling", 2, 834),
    entry("UAH", "Hryvnia", 2, 980),
    entry("UGX", "Uganda Shilling", 0, 800),
    entry("USD", "US Dollar", 2, 840),
    entry("USN", "US Dollar (Next day)", 2, 997),
    entry("UYI", "Uruguay Peso en Unidades Indexadas (UI)", 0, 940),
    entry("UYU", "Peso Uruguayo", 2, 858),
    entry("UYW", "Unidad Previsional", 4, 927),
    entry("UZS", "Uzbekistan Sum", 2, 860),
    entry("VES", "Bolívar Soberano", 2, 928),
    entry("VND", "Dong", 0, 704),
    entry("VUV", "Vatu", 0, 548),
    entry("WST", "Tala", 2, 882),
    entry("XAF", "CFA Franc BEAC", 0, 950),
    entry("XCD", "East Caribbean Dollar", 2, 951),
    entry("XDR", "SDR (Special Drawing Right)", 0, 960),
    entry("XOF", "CFA Franc BCEAO", 0, 952),
    entry("XPF", "CFP Franc", 0, 953),
    entry("XSU", "Sucre", 0, 994),
    entry("XUA", "ADB Unit of Account", 0, 965),
    entry("YER", "Yemeni Rial", 2, 886),
    entry("ZAR", "Rand", 2, 710),
    entry("ZMW", "Zambian Kwacha", 2, 967),
    entry("ZWL", "Zimbabwe Dollar", 2, 932),
];
