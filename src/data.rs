//! Reference data for address standardization.
//!
//! Four immutable lookup tables drive normalization: state and province
//! names, compass directionals, street suffix synonyms and secondary unit
//! designators. The built-in USPS dataset is constructed once per process
//! and shared behind an [`Arc`]; callers with their own data can assemble a
//! [`ReferenceTables`] from plain name/abbreviation pairs.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, LazyLock};

static USPS_TABLES: LazyLock<Arc<ReferenceTables>> = LazyLock::new(|| {
    Arc::new(ReferenceTables::from_pairs(
        STATES,
        DIRECTIONALS,
        STREET_SUFFIXES,
        SECONDARY_UNITS,
    ))
});

/// A case-insensitive mapping from names/synonyms to canonical abbreviations.
///
/// Keys and abbreviations are stored upper-cased. Besides its keys, a table
/// also recognizes its own abbreviations, so looking up an already
/// abbreviated word returns it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")
)]
pub struct AbbreviationTable {
    entries: BTreeMap<String, String>,
    codes: BTreeSet<String>,
}

impl AbbreviationTable {
    /// Build a table from `(name, abbreviation)` pairs.
    ///
    /// Later pairs win when two names collide after upper-casing.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let entries: BTreeMap<String, String> = pairs
            .into_iter()
            .map(|(name, code)| (name.as_ref().to_uppercase(), code.as_ref().to_uppercase()))
            .collect();
        let codes = entries.values().cloned().collect();
        Self { entries, codes }
    }

    /// Abbreviate a word that is either a known name or a known abbreviation.
    pub fn abbreviate(&self, word: &str) -> Option<&str> {
        let word = word.to_uppercase();
        self.entries
            .get(&word)
            .or_else(|| self.codes.get(&word))
            .map(String::as_str)
    }

    /// Look up the abbreviation for a full name only.
    pub fn lookup_name(&self, name: &str) -> Option<&str> {
        self.entries.get(&name.to_uppercase()).map(String::as_str)
    }

    /// Check whether `code` is one of the table's abbreviations.
    pub fn contains_code(&self, code: &str) -> bool {
        self.codes.contains(&code.to_uppercase())
    }

    /// Check whether `word` is a known name or abbreviation.
    pub fn contains(&self, word: &str) -> bool {
        self.abbreviate(word).is_some()
    }

    /// Iterate over `(name, abbreviation)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of names in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no names.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, String>> for AbbreviationTable {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self::from_pairs(entries)
    }
}

impl From<AbbreviationTable> for BTreeMap<String, String> {
    fn from(table: AbbreviationTable) -> Self {
        table.entries
    }
}

/// The complete set of lookup tables used by the normalizers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceTables {
    states: AbbreviationTable,
    directionals: AbbreviationTable,
    street_suffixes: AbbreviationTable,
    secondary_units: AbbreviationTable,
}

impl ReferenceTables {
    /// The built-in USPS dataset, shared process-wide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use usps_address::ReferenceTables;
    ///
    /// let tables = ReferenceTables::usps();
    /// assert_eq!(tables.states().lookup_name("Illinois"), Some("IL"));
    /// assert_eq!(tables.street_suffixes().abbreviate("avenue"), Some("AVE"));
    /// ```
    pub fn usps() -> Arc<Self> {
        Arc::clone(&USPS_TABLES)
    }

    /// Assemble tables from pre-built parts.
    pub fn new(
        states: AbbreviationTable,
        directionals: AbbreviationTable,
        street_suffixes: AbbreviationTable,
        secondary_units: AbbreviationTable,
    ) -> Self {
        Self {
            states,
            directionals,
            street_suffixes,
            secondary_units,
        }
    }

    /// Assemble tables from `(name, abbreviation)` pair slices.
    pub fn from_pairs(
        states: &[(&str, &str)],
        directionals: &[(&str, &str)],
        street_suffixes: &[(&str, &str)],
        secondary_units: &[(&str, &str)],
    ) -> Self {
        Self::new(
            AbbreviationTable::from_pairs(states.iter().copied()),
            AbbreviationTable::from_pairs(directionals.iter().copied()),
            AbbreviationTable::from_pairs(street_suffixes.iter().copied()),
            AbbreviationTable::from_pairs(secondary_units.iter().copied()),
        )
    }

    /// State/province name to two-letter code.
    pub fn states(&self) -> &AbbreviationTable {
        &self.states
    }

    /// Directional word to abbreviation.
    pub fn directionals(&self) -> &AbbreviationTable {
        &self.directionals
    }

    /// Street suffix synonym to USPS standard abbreviation.
    pub fn street_suffixes(&self) -> &AbbreviationTable {
        &self.street_suffixes
    }

    /// Secondary unit designator name to abbreviation.
    pub fn secondary_units(&self) -> &AbbreviationTable {
        &self.secondary_units
    }
}

/// US states, territories, armed-forces regions and Canadian provinces.
static STATES: &[(&str, &str)] = &[
    ("ALABAMA", "AL"), ("ALASKA", "AK"), ("AMERICAN SAMOA", "AS"), ("ARIZONA", "AZ"),
    ("ARKANSAS", "AR"), ("ARMED FORCES AFRICA", "AE"), ("ARMED FORCES AMERICAS", "AA"),
    ("ARMED FORCES CANADA", "AE"), ("ARMED FORCES EUROPE", "AE"),
    ("ARMED FORCES MIDDLE EAST", "AE"), ("ARMED FORCES PACIFIC", "AP"), ("CALIFORNIA", "CA"),
    ("COLORADO", "CO"), ("CONNECTICUT", "CT"), ("DELAWARE", "DE"),
    ("DISTRICT OF COLUMBIA", "DC"), ("FEDERATED STATES OF MICRONESIA", "FM"), ("FLORIDA", "FL"),
    ("GEORGIA", "GA"), ("GUAM", "GU"), ("HAWAII", "HI"), ("IDAHO", "ID"), ("ILLINOIS", "IL"),
    ("INDIANA", "IN"), ("IOWA", "IA"), ("KANSAS", "KS"), ("KENTUCKY", "KY"),
    ("LOUISIANA", "LA"), ("MAINE", "ME"), ("MARSHALL ISLANDS", "MH"), ("MARYLAND", "MD"),
    ("MASSACHUSETTS", "MA"), ("MICHIGAN", "MI"), ("MINNESOTA", "MN"), ("MISSISSIPPI", "MS"),
    ("MISSOURI", "MO"), ("MONTANA", "MT"), ("NEBRASKA", "NE"), ("NEVADA", "NV"),
    ("NEW HAMPSHIRE", "NH"), ("NEW JERSEY", "NJ"), ("NEW MEXICO", "NM"), ("NEW YORK", "NY"),
    ("NORTH CAROLINA", "NC"), ("NORTH DAKOTA", "ND"), ("NORTHERN MARIANA ISLANDS", "MP"),
    ("OHIO", "OH"), ("OKLAHOMA", "OK"), ("OREGON", "OR"), ("PALAU", "PW"),
    ("PENNSYLVANIA", "PA"), ("PUERTO RICO", "PR"), ("RHODE ISLAND", "RI"),
    ("SOUTH CAROLINA", "SC"), ("SOUTH DAKOTA", "SD"), ("TENNESSEE", "TN"), ("TEXAS", "TX"),
    ("UTAH", "UT"), ("VERMONT", "VT"), ("VIRGIN ISLANDS", "VI"), ("VIRGINIA", "VA"),
    ("WASHINGTON", "WA"), ("WEST VIRGINIA", "WV"), ("WISCONSIN", "WI"), ("WYOMING", "WY"),
    ("ALBERTA", "AB"), ("BRITISH COLUMBIA", "BC"), ("MANITOBA", "MB"), ("NEW BRUNSWICK", "NB"),
    ("NEWFOUNDLAND", "NF"), ("NORTHWEST TERRITORIES", "NT"), ("NOVA SCOTIA", "NS"),
    ("ONTARIO", "ON"), ("PRINCE EDWARD ISLAND", "PE"), ("QUEBEC", "QC"), ("SASKATCHEWAN", "SK"),
    ("YUKON TERRITORY", "YT"), ("NEWFOUNDLAND AND LABRADOR", "NL"), ("NUNAVUT", "NU"),
    ("YUKON", "YT"),
];

/// Compass directions.
static DIRECTIONALS: &[(&str, &str)] = &[
    ("NORTH", "N"), ("NORTHEAST", "NE"), ("EAST", "E"), ("SOUTHEAST", "SE"), ("SOUTH", "S"),
    ("SOUTHWEST", "SW"), ("WEST", "W"), ("NORTHWEST", "NW"),
];

/// Street suffix synonyms mapped to the USPS standard abbreviation.
///
/// Source: USPS Publication 28, Appendix C1.
static STREET_SUFFIXES: &[(&str, &str)] = &[
    ("AVEN", "AVE"), ("AVNUE", "AVE"), ("AVENU", "AVE"), ("AVN", "AVE"), ("AV", "AVE"),
    ("AVE", "AVE"), ("AVENUE", "AVE"), ("BAYOU", "BYU"), ("BAYOO", "BYU"), ("BCH", "BCH"),
    ("BEACH", "BCH"), ("BEND", "BND"), ("BND", "BND"), ("BLUF", "BLF"), ("BLF", "BLF"),
    ("BLUFF", "BLF"), ("BLUFFS", "BLFS"), ("BTM", "BTM"), ("BOTTM", "BTM"), ("BOT", "BTM"),
    ("BOTTOM", "BTM"), ("BLVD", "BLVD"), ("BOULV", "BLVD"), ("BOUL", "BLVD"),
    ("BOULEVARD", "BLVD"), ("BRNCH", "BR"), ("BR", "BR"), ("BRANCH", "BR"), ("BRG", "BRG"),
    ("BRIDGE", "BRG"), ("BRDGE", "BRG"), ("BRK", "BRK"), ("BROOK", "BRK"), ("BROOKS", "BRKS"),
    ("BURG", "BG"), ("BURGS", "BGS"), ("BYPS", "BYP"), ("BYPA", "BYP"), ("BYPAS", "BYP"),
    ("BYP", "BYP"), ("BYPASS", "BYP"), ("CP", "CP"), ("CAMP", "CP"), ("CMP", "CP"),
    ("CANYON", "CYN"), ("CANYN", "CYN"), ("CNYN", "CYN"), ("CAPE", "CPE"), ("CPE", "CPE"),
    ("CSWY", "CSWY"), ("CAUSWA", "CSWY"), ("CAUSEWAY", "CSWY"), ("CNTER", "CTR"),
    ("CTR", "CTR"), ("CENTRE", "CTR"), ("CEN", "CTR"), ("CENT", "CTR"), ("CNTR", "CTR"),
    ("CENTR", "CTR"), ("CENTER", "CTR"), ("CENTERS", "CTRS"), ("CIRC", "CIR"), ("CRCLE", "CIR"),
    ("CIR", "CIR"), ("CIRCL", "CIR"), ("CIRCLE", "CIR"), ("CRCL", "CIR"), ("CIRCLES", "CIRS"),
    ("CLF", "CLF"), ("CLIFF", "CLF"), ("CLIFFS", "CLFS"), ("CLFS", "CLFS"), ("CLUB", "CLB"),
    ("CLB", "CLB"), ("COMMON", "CMN"), ("COMMONS", "CMNS"), ("CORNER", "COR"), ("COR", "COR"),
    ("CORNERS", "CORS"), ("CORS", "CORS"), ("COURSE", "CRSE"), ("CRSE", "CRSE"),
    ("COURT", "CT"), ("CT", "CT"), ("COURTS", "CTS"), ("CTS", "CTS"), ("COVE", "CV"),
    ("CV", "CV"), ("COVES", "CVS"), ("CRK", "CRK"), ("CREEK", "CRK"), ("CRSNT", "CRES"),
    ("CRES", "CRES"), ("CRESCENT", "CRES"), ("CRSENT", "CRES"), ("CREST", "CRST"),
    ("CROSSING", "XING"), ("CRSSNG", "XING"), ("XING", "XING"), ("CROSSROAD", "XRD"),
    ("CROSSROADS", "XRDS"), ("CURVE", "CURV"), ("DALE", "DL"), ("DL", "DL"), ("DAM", "DM"),
    ("DM", "DM"), ("DV", "DV"), ("DVD", "DV"), ("DIV", "DV"), ("DIVIDE", "DV"), ("DRIV", "DR"),
    ("DR", "DR"), ("DRIVE", "DR"), ("DRV", "DR"), ("DRIVES", "DRS"), ("EST", "EST"),
    ("ESTATE", "EST"), ("ESTATES", "ESTS"), ("ESTS", "ESTS"), ("EXPY", "EXPY"),
    ("EXPR", "EXPY"), ("EXPRESS", "EXPY"), ("EXPW", "EXPY"), ("EXP", "EXPY"),
    ("EXPRESSWAY", "EXPY"), ("EXTN", "EXT"), ("EXT", "EXT"), ("EXTNSN", "EXT"),
    ("EXTENSION", "EXT"), ("EXTS", "EXTS"), ("EXTENSIONS", "EXTS"), ("FALL", "FALL"),
    ("FLS", "FLS"), ("FALLS", "FLS"), ("FERRY", "FRY"), ("FRY", "FRY"), ("FRRY", "FRY"),
    ("FIELD", "FLD"), ("FLD", "FLD"), ("FIELDS", "FLDS"), ("FLDS", "FLDS"), ("FLAT", "FLT"),
    ("FLT", "FLT"), ("FLATS", "FLTS"), ("FLTS", "FLTS"), ("FRD", "FRD"), ("FORD", "FRD"),
    ("FORDS", "FRDS"), ("FRST", "FRST"), ("FOREST", "FRST"), ("FORESTS", "FRST"),
    ("FORGE", "FRG"), ("FRG", "FRG"), ("FORG", "FRG"), ("FORGES", "FRGS"), ("FORK", "FRK"),
    ("FRK", "FRK"), ("FORKS", "FRKS"), ("FRKS", "FRKS"), ("FRT", "FT"), ("FT", "FT"),
    ("FORT", "FT"), ("FREEWAY", "FWY"), ("FRWAY", "FWY"), ("FRWY", "FWY"), ("FREEWY", "FWY"),
    ("FWY", "FWY"), ("GARDN", "GDN"), ("GRDN", "GDN"), ("GARDEN", "GDN"), ("GRDEN", "GDN"),
    ("GDNS", "GDNS"), ("GRDNS", "GDNS"), ("GARDENS", "GDNS"), ("GTWAY", "GTWY"),
    ("GATWAY", "GTWY"), ("GTWY", "GTWY"), ("GATEWAY", "GTWY"), ("GATEWY", "GTWY"),
    ("GLEN", "GLN"), ("GLN", "GLN"), ("GLENS", "GLNS"), ("GRN", "GRN"), ("GREEN", "GRN"),
    ("GREENS", "GRNS"), ("GROVE", "GRV"), ("GRV", "GRV"), ("GROV", "GRV"), ("GROVES", "GRVS"),
    ("HARBOR", "HBR"), ("HARBR", "HBR"), ("HARB", "HBR"), ("HRBOR", "HBR"), ("HBR", "HBR"),
    ("HARBORS", "HBRS"), ("HAVEN", "HVN"), ("HVN", "HVN"), ("HTS", "HTS"), ("HT", "HTS"),
    ("HEIGHTS", "HTS"), ("HIWY", "HWY"), ("HIGHWAY", "HWY"), ("HWY", "HWY"), ("HWAY", "HWY"),
    ("HIWAY", "HWY"), ("HIGHWY", "HWY"), ("HILL", "HL"), ("HL", "HL"), ("HLS", "HLS"),
    ("HILLS", "HLS"), ("HOLW", "HOLW"), ("HOLWS", "HOLW"), ("HLLW", "HOLW"),
    ("HOLLOWS", "HOLW"), ("HOLLOW", "HOLW"), ("INLT", "INLT"), ("INLET", "INLT"),
    ("ISLAND", "IS"), ("IS", "IS"), ("ISLND", "IS"), ("ISS", "ISS"), ("ISLANDS", "ISS"),
    ("ISLNDS", "ISS"), ("ISLE", "ISLE"), ("ISLES", "ISLE"), ("JCT", "JCT"), ("JCTN", "JCT"),
    ("JUNCTION", "JCT"), ("JCTION", "JCT"), ("JUNCTN", "JCT"), ("JUNCTON", "JCT"),
    ("JCTNS", "JCTS"), ("JCTS", "JCTS"), ("JUNCTIONS", "JCTS"), ("KY", "KY"), ("KEY", "KY"),
    ("KEYS", "KYS"), ("KYS", "KYS"), ("KNL", "KNL"), ("KNOL", "KNL"), ("KNOLL", "KNL"),
    ("KNOLLS", "KNLS"), ("KNLS", "KNLS"), ("LAKE", "LK"), ("LK", "LK"), ("LAKES", "LKS"),
    ("LKS", "LKS"), ("LAND", "LAND"), ("LNDNG", "LNDG"), ("LNDG", "LNDG"), ("LANDING", "LNDG"),
    ("LN", "LN"), ("LANE", "LN"), ("LIGHT", "LGT"), ("LGT", "LGT"), ("LIGHTS", "LGTS"),
    ("LF", "LF"), ("LOAF", "LF"), ("LOCK", "LCK"), ("LCK", "LCK"), ("LOCKS", "LCKS"),
    ("LCKS", "LCKS"), ("LODGE", "LDG"), ("LDGE", "LDG"), ("LODG", "LDG"), ("LDG", "LDG"),
    ("LOOPS", "LOOP"), ("LOOP", "LOOP"), ("MALL", "MALL"), ("MNR", "MNR"), ("MANOR", "MNR"),
    ("MNRS", "MNRS"), ("MANORS", "MNRS"), ("MEADOW", "MDW"), ("MDWS", "MDWS"),
    ("MEADOWS", "MDWS"), ("MEDOWS", "MDWS"), ("MDW", "MDWS"), ("MEWS", "MEWS"), ("MILL", "ML"),
    ("MILLS", "MLS"), ("MISSN", "MSN"), ("MISSION", "MSN"), ("MSSN", "MSN"),
    ("MOTORWAY", "MTWY"), ("MT", "MT"), ("MOUNT", "MT"), ("MNT", "MT"), ("MOUNTAIN", "MTN"),
    ("MOUNTIN", "MTN"), ("MNTN", "MTN"), ("MNTAIN", "MTN"), ("MTN", "MTN"), ("MTIN", "MTN"),
    ("MOUNTAINS", "MTNS"), ("MNTNS", "MTNS"), ("NCK", "NCK"), ("NECK", "NCK"),
    ("ORCHRD", "ORCH"), ("ORCH", "ORCH"), ("ORCHARD", "ORCH"), ("OVAL", "OVAL"),
    ("OVL", "OVAL"), ("OVERPASS", "OPAS"), ("PARK", "PARK"), ("PRK", "PARK"), ("PARKS", "PARK"),
    ("PKY", "PKWY"), ("PARKWAY", "PKWY"), ("PKWY", "PKWY"), ("PARKWY", "PKWY"),
    ("PKWAY", "PKWY"), ("PARKWAYS", "PKWY"), ("PKWYS", "PKWY"), ("PASS", "PASS"),
    ("PASSAGE", "PSGE"), ("PATH", "PATH"), ("PATHS", "PATH"), ("PIKE", "PIKE"),
    ("PIKES", "PIKE"), ("PINE", "PNE"), ("PINES", "PNES"), ("PNES", "PNES"), ("PLACE", "PL"),
    ("PL", "PL"), ("PLAIN", "PLN"), ("PLN", "PLN"), ("PLAINS", "PLNS"), ("PLNS", "PLNS"),
    ("PLAZA", "PLZ"), ("PLZ", "PLZ"), ("PLZA", "PLZ"), ("PT", "PT"), ("POINT", "PT"),
    ("POINTS", "PTS"), ("PTS", "PTS"), ("PRT", "PRT"), ("PORT", "PRT"), ("PRTS", "PRTS"),
    ("PORTS", "PRTS"), ("PR", "PR"), ("PRAIRIE", "PR"), ("PRR", "PR"), ("RADL", "RADL"),
    ("RAD", "RADL"), ("RADIEL", "RADL"), ("RADIAL", "RADL"), ("RAMP", "RAMP"),
    ("RANCHES", "RNCH"), ("RANCH", "RNCH"), ("RNCH", "RNCH"), ("RNCHS", "RNCH"),
    ("RAPID", "RPD"), ("RPD", "RPD"), ("RPDS", "RPDS"), ("RAPIDS", "RPDS"), ("RST", "RST"),
    ("REST", "RST"), ("RDG", "RDG"), ("RIDGE", "RDG"), ("RDGE", "RDG"), ("RDGS", "RDGS"),
    ("RIDGES", "RDGS"), ("RIV", "RIV"), ("RVR", "RIV"), ("RIVER", "RIV"), ("RIVR", "RIV"),
    ("RD", "RD"), ("ROAD", "RD"), ("ROADS", "RDS"), ("RDS", "RDS"), ("ROUTE", "RTE"),
    ("ROW", "ROW"), ("RUE", "RUE"), ("RUN", "RUN"), ("SHL", "SHL"), ("SHOAL", "SHL"),
    ("SHLS", "SHLS"), ("SHOALS", "SHLS"), ("SHOAR", "SHR"), ("SHORE", "SHR"), ("SHR", "SHR"),
    ("SHORES", "SHRS"), ("SHOARS", "SHRS"), ("SHRS", "SHRS"), ("SKYWAY", "SKWY"),
    ("SPRING", "SPG"), ("SPNG", "SPG"), ("SPRNG", "SPG"), ("SPG", "SPG"), ("SPRINGS", "SPGS"),
    ("SPGS", "SPGS"), ("SPRNGS", "SPGS"), ("SPNGS", "SPGS"), ("SPUR", "SPUR"),
    ("SPURS", "SPUR"), ("SQR", "SQ"), ("SQ", "SQ"), ("SQUARE", "SQ"), ("SQU", "SQ"),
    ("SQRE", "SQ"), ("SQRS", "SQS"), ("SQUARES", "SQS"), ("STATN", "STA"), ("STN", "STA"),
    ("STATION", "STA"), ("STA", "STA"), ("STRAV", "STRA"), ("STRAVEN", "STRA"),
    ("STRAVN", "STRA"), ("STRVN", "STRA"), ("STRAVENUE", "STRA"), ("STRVNUE", "STRA"),
    ("STRA", "STRA"), ("STREME", "STRM"), ("STRM", "STRM"), ("STREAM", "STRM"),
    ("STREET", "ST"), ("ST", "ST"), ("STR", "ST"), ("STRT", "ST"), ("STREETS", "STS"),
    ("SMT", "SMT"), ("SUMMIT", "SMT"), ("SUMITT", "SMT"), ("SUMIT", "SMT"), ("TER", "TER"),
    ("TERRACE", "TER"), ("TERR", "TER"), ("THROUGHWAY", "TRWY"), ("TRCE", "TRCE"),
    ("TRACES", "TRCE"), ("TRACE", "TRCE"), ("TRACK", "TRAK"), ("TRACKS", "TRAK"),
    ("TRKS", "TRAK"), ("TRK", "TRAK"), ("TRAK", "TRAK"), ("TRAFFICWAY", "TRFY"),
    ("TRLS", "TRL"), ("TRAIL", "TRL"), ("TRL", "TRL"), ("TRAILS", "TRL"), ("TRLR", "TRLR"),
    ("TRLRS", "TRLR"), ("TRAILER", "TRLR"), ("TUNEL", "TUNL"), ("TUNNEL", "TUNL"),
    ("TUNLS", "TUNL"), ("TUNL", "TUNL"), ("TUNNL", "TUNL"), ("TUNNELS", "TUNL"),
    ("TURNPIKE", "TPKE"), ("TURNPK", "TPKE"), ("TRNPK", "TPKE"), ("UNDERPASS", "UPAS"),
    ("UNION", "UN"), ("UN", "UN"), ("UNIONS", "UNS"), ("VLY", "VLY"), ("VALLEY", "VLY"),
    ("VALLY", "VLY"), ("VLLY", "VLY"), ("VALLEYS", "VLYS"), ("VLYS", "VLYS"),
    ("VIADUCT", "VIA"), ("VDCT", "VIA"), ("VIA", "VIA"), ("VIADCT", "VIA"), ("VW", "VW"),
    ("VIEW", "VW"), ("VWS", "VWS"), ("VIEWS", "VWS"), ("VILLAG", "VLG"), ("VILLG", "VLG"),
    ("VILLIAGE", "VLG"), ("VLG", "VLG"), ("VILL", "VLG"), ("VILLAGE", "VLG"), ("VLGS", "VLGS"),
    ("VILLAGES", "VLGS"), ("VILLE", "VL"), ("VL", "VL"), ("VSTA", "VIS"), ("VIS", "VIS"),
    ("VISTA", "VIS"), ("VST", "VIS"), ("VIST", "VIS"), ("WALK", "WALK"), ("WALKS", "WALK"),
    ("WALL", "WALL"), ("WY", "WAY"), ("WAY", "WAY"), ("WAYS", "WAYS"), ("WELL", "WL"),
    ("WLS", "WLS"), ("WELLS", "WLS"),
];

/// Secondary unit designators.
///
/// Source: USPS Publication 28, Appendix C2.
static SECONDARY_UNITS: &[(&str, &str)] = &[
    ("APARTMENT", "APT"), ("BASEMENT", "BSMT"), ("BUILDING", "BLDG"), ("DEPARTMENT", "DEPT"),
    ("FLOOR", "FL"), ("FRONT", "FRNT"), ("HANGER", "HNGR"), ("KEY", "KEY"), ("LOBBY", "LBBY"),
    ("LOT", "LOT"), ("LOWER", "LOWR"), ("OFFICE", "OFC"), ("PENTHOUSE", "PH"), ("PIER", "PIER"),
    ("REAR", "REAR"), ("ROOM", "RM"), ("SIDE", "SIDE"), ("SLIP", "SLIP"), ("SPACE", "SPC"),
    ("STOP", "STOP"), ("SUITE", "STE"), ("TRAILER", "TRLR"), ("UNIT", "UNIT"),
    ("UPPER", "UPPR"),
];
