//! Species domain types
//!
//! The species record, conservation-status categories, and taxonomic class
//! groupings shared across the SDP workspace.

use serde::{Deserialize, Serialize};

/// A single species record from the regional dataset.
///
/// `scientific_name` is the unique key within a dataset. `class` and
/// `category` are opaque pass-through strings as far as the core logic is
/// concerned; the display helpers below interpret them for presentation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// Binomial scientific name, the primary key across all lookups
    pub scientific_name: String,

    /// Resolved common (vernacular) name, if any
    pub common_name: Option<String>,

    /// Taxonomic class as recorded (e.g. "MAMMALIA")
    pub class: String,

    /// Conservation-status code as recorded (e.g. "EN")
    pub category: String,

    /// Remaining dataset columns, preserved verbatim in input order
    pub extra: Vec<(String, String)>,
}

impl SpeciesRecord {
    /// Create a record with no common name and no passthrough columns.
    pub fn new(scientific_name: impl Into<String>) -> Self {
        Self {
            scientific_name: scientific_name.into(),
            common_name: None,
            class: String::new(),
            category: String::new(),
            extra: Vec::new(),
        }
    }

    /// Whether this record carries a usable common name, i.e. one that is
    /// set and differs from the scientific name (case-insensitively).
    pub fn has_common_name(&self) -> bool {
        match &self.common_name {
            Some(name) => {
                !name.trim().is_empty()
                    && !name.eq_ignore_ascii_case(&self.scientific_name)
            },
            None => false,
        }
    }

    /// Preferred display title: the common name when usable, otherwise the
    /// scientific name.
    pub fn display_title(&self) -> &str {
        if self.has_common_name() {
            self.common_name.as_deref().unwrap_or(&self.scientific_name)
        } else {
            &self.scientific_name
        }
    }
}

/// IUCN Red List conservation-status category.
///
/// Variant order is severity order (most threatened first) and drives the
/// default sort of search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Extinct
    Ex,
    /// Extinct in the Wild
    Ew,
    /// Critically Endangered
    Cr,
    /// Endangered
    En,
    /// Vulnerable
    Vu,
    /// Near Threatened
    Nt,
    /// Least Concern
    Lc,
    /// Data Deficient
    Dd,
    /// Not Evaluated
    Ne,
}

impl Category {
    /// Parse a Red List category code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "EX" => Some(Category::Ex),
            "EW" => Some(Category::Ew),
            "CR" => Some(Category::Cr),
            "EN" => Some(Category::En),
            "VU" => Some(Category::Vu),
            "NT" => Some(Category::Nt),
            "LC" => Some(Category::Lc),
            "DD" => Some(Category::Dd),
            "NE" => Some(Category::Ne),
            _ => None,
        }
    }

    /// The two-letter Red List code.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Ex => "EX",
            Category::Ew => "EW",
            Category::Cr => "CR",
            Category::En => "EN",
            Category::Vu => "VU",
            Category::Nt => "NT",
            Category::Lc => "LC",
            Category::Dd => "DD",
            Category::Ne => "NE",
        }
    }

    /// Human-readable status label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Ex => "Extinct",
            Category::Ew => "Extinct in the Wild",
            Category::Cr => "Critically Endangered",
            Category::En => "Endangered",
            Category::Vu => "Vulnerable",
            Category::Nt => "Near Threatened",
            Category::Lc => "Least Concern",
            Category::Dd => "Data Deficient",
            Category::Ne => "Not Evaluated",
        }
    }

    /// Display tier for status colouring.
    pub fn tier(&self) -> AlertTier {
        match self {
            Category::Ex | Category::Ew | Category::Cr => AlertTier::Critical,
            Category::En | Category::Vu => AlertTier::Elevated,
            _ => AlertTier::Stable,
        }
    }

    /// All categories in severity order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Ex,
            Category::Ew,
            Category::Cr,
            Category::En,
            Category::Vu,
            Category::Nt,
            Category::Lc,
            Category::Dd,
            Category::Ne,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Severity tier used to colour status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTier {
    /// Extinct or critically endangered
    Critical,
    /// Endangered or vulnerable
    Elevated,
    /// Everything else
    Stable,
}

/// Human-readable status for a raw category code.
///
/// Unknown codes are passed through unchanged, matching how the dataset
/// treats category as an opaque column.
pub fn status_label(code: &str) -> String {
    match Category::from_code(code) {
        Some(cat) => cat.label().to_string(),
        None => code.to_string(),
    }
}

/// Sort rank for a raw category code; unknown codes sort last.
pub fn status_rank(code: &str) -> usize {
    match Category::from_code(code) {
        Some(cat) => Category::all()
            .iter()
            .position(|c| *c == cat)
            .unwrap_or(Category::all().len()),
        None => Category::all().len(),
    }
}

/// Friendly group name for a taxonomic class.
///
/// Covers the classes that appear in regional extinction-risk datasets;
/// anything unrecognized falls back to capitalizing the raw class name.
pub fn class_group(class: &str) -> String {
    let friendly = match class.trim().to_ascii_uppercase().as_str() {
        // Animals - vertebrates
        "MAMMALIA" => "Mammals",
        "AVES" => "Birds",
        "REPTILIA" => "Reptiles",
        "AMPHIBIA" => "Amphibians",
        "ACTINOPTERYGII" => "Ray-finned Fishes",
        "SARCOPTERYGII" => "Lobe-finned Fishes (Lungfish)",
        "CHONDRICHTHYES" => "Sharks & Rays",

        // Animals - invertebrates
        "INSECTA" => "Insects",
        "ARACHNIDA" => "Arachnids (Spiders & Scorpions)",
        "MALACOSTRACA" => "Crustaceans (Crabs, Shrimp & Lobsters)",
        "GASTROPODA" => "Snails & Slugs",
        "CEPHALOPODA" => "Squids & Octopuses",
        "BIVALVIA" => "Clams & Bivalves",
        "ANTHOZOA" => "Corals & Anemones",
        "HOLOTHUROIDEA" => "Sea Cucumbers",

        // Plants & fungi
        "MAGNOLIOPSIDA" => "Flowering Plants (Dicots)",
        "LILIOPSIDA" => "Grasses & Monocots",
        "GNETOPSIDA" => "Gnetophytes",
        "PINOPSIDA" => "Conifers (Pines & Firs)",
        "CYCADOPSIDA" => "Cycads",
        "POLYPODIOPSIDA" => "Ferns",
        "LYCOPODIOPSIDA" => "Clubmosses",
        "AGARICOMYCETES" => "Mushrooms & Gilled Fungi",

        _ => "",
    };

    if friendly.is_empty() {
        capitalize(class.trim())
    } else {
        friendly.to_string()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        },
        None => String::new(),
    }
}
