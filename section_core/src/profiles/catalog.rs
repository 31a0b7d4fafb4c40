//! LNP Unequal Angle Catalog (EN 10056-1)
//!
//! Hot-rolled unequal-leg angles, designated "LNP h x b x t" with the long
//! leg h, the short leg b and a uniform wall thickness t, all in mm. Each
//! entry also carries the root radius r1 between the legs and the toe radius
//! r2 at the end of each leg.
//!
//! The table is built once on first access and never mutated, so lookups are
//! safe from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use section_core::profiles::catalog;
//!
//! let entry = catalog::lookup("LNP 100x50x6").unwrap();
//! assert_eq!(entry.height, 100.0);
//! assert_eq!(entry.root_radius, 9.0);
//!
//! // designations are matched case-insensitively, prefix optional
//! assert_eq!(catalog::lookup("lnp 100X50X6").unwrap(), entry);
//! assert_eq!(catalog::lookup("100x50x6").unwrap(), entry);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{SectionError, SectionResult};

/// Catalog family prefix
pub const LNP_PREFIX: &str = "LNP";

/// Dimensions of one catalog angle (mm)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Designation without the family prefix, e.g. "100x50x6"
    pub alias: String,
    /// Long leg (outer height)
    pub height: f64,
    /// Short leg (outer width)
    pub width: f64,
    /// Uniform wall thickness
    pub thickness: f64,
    /// Root radius r1
    pub root_radius: f64,
    /// Toe radius r2
    pub toe_radius: f64,
}

impl CatalogEntry {
    /// Full designation, e.g. "LNP 100x50x6"
    pub fn designation(&self) -> String {
        format!("{} {}", LNP_PREFIX, self.alias)
    }
}

impl std::fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (r1={} mm, r2={} mm)",
            self.designation(),
            self.root_radius,
            self.toe_radius
        )
    }
}

/// alias, h, b, t, r1, r2
const LNP_TABLE: [(&str, f64, f64, f64, f64, f64); 23] = [
    ("30x20x3", 30.0, 20.0, 3.0, 4.0, 2.0),
    ("30x20x4", 30.0, 20.0, 4.0, 4.0, 2.0),
    ("40x20x4", 40.0, 20.0, 4.0, 4.0, 2.0),
    ("40x25x4", 40.0, 25.0, 4.0, 4.0, 2.0),
    ("45x30x4", 45.0, 30.0, 4.0, 4.5, 2.25),
    ("50x30x5", 50.0, 30.0, 5.0, 5.0, 2.5),
    ("60x40x5", 60.0, 40.0, 5.0, 6.0, 3.0),
    ("60x40x6", 60.0, 40.0, 6.0, 6.0, 3.0),
    ("65x50x5", 65.0, 50.0, 5.0, 6.0, 3.0),
    ("70x50x6", 70.0, 50.0, 6.0, 7.0, 3.5),
    ("75x50x6", 75.0, 50.0, 6.0, 7.0, 3.5),
    ("75x50x8", 75.0, 50.0, 8.0, 7.0, 3.5),
    ("80x40x6", 80.0, 40.0, 6.0, 7.0, 3.5),
    ("80x40x8", 80.0, 40.0, 8.0, 7.0, 3.5),
    ("80x60x7", 80.0, 60.0, 7.0, 8.0, 4.0),
    ("100x50x6", 100.0, 50.0, 6.0, 9.0, 4.5),
    ("100x50x8", 100.0, 50.0, 8.0, 9.0, 4.5),
    ("100x65x7", 100.0, 65.0, 7.0, 10.0, 5.0),
    ("100x75x8", 100.0, 75.0, 8.0, 10.0, 5.0),
    ("100x75x10", 100.0, 75.0, 10.0, 10.0, 5.0),
    ("120x80x8", 120.0, 80.0, 8.0, 11.0, 5.5),
    ("120x80x10", 120.0, 80.0, 10.0, 11.0, 5.5),
    ("125x75x8", 125.0, 75.0, 8.0, 11.0, 5.5),
];

static LNP_CATALOG: Lazy<HashMap<String, CatalogEntry>> = Lazy::new(|| {
    LNP_TABLE
        .iter()
        .map(|&(alias, height, width, thickness, root_radius, toe_radius)| {
            let entry = CatalogEntry {
                alias: alias.to_string(),
                height,
                width,
                thickness,
                root_radius,
                toe_radius,
            };
            (normalize(alias), entry)
        })
        .collect()
});

/// Uppercase, no whitespace, family prefix removed
fn normalize(designation: &str) -> String {
    let compact: String = designation
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    compact
        .strip_prefix(LNP_PREFIX)
        .map(str::to_string)
        .unwrap_or(compact)
}

/// Find a catalog entry by designation.
///
/// # Errors
/// `ProfileNotFound` if the designation is not in the table.
pub fn lookup(designation: &str) -> SectionResult<&'static CatalogEntry> {
    LNP_CATALOG
        .get(&normalize(designation))
        .ok_or_else(|| SectionError::profile_not_found(designation))
}

/// All designations in table order (ascending size)
pub fn designations() -> Vec<String> {
    LNP_TABLE
        .iter()
        .map(|(alias, ..)| format!("{} {}", LNP_PREFIX, alias))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_profile() {
        let entry = lookup("LNP 120x80x10").unwrap();
        assert_eq!(entry.width, 80.0);
        assert_eq!(entry.thickness, 10.0);
        assert_eq!(entry.toe_radius, 5.5);
        assert_eq!(entry.designation(), "LNP 120x80x10");
    }

    #[test]
    fn test_lookup_unknown_profile() {
        let err = lookup("LNP 999x1x1").unwrap_err();
        assert_eq!(err, SectionError::profile_not_found("LNP 999x1x1"));
    }

    #[test]
    fn test_every_entry_is_reachable() {
        for designation in designations() {
            assert!(lookup(&designation).is_ok(), "{}", designation);
        }
        assert_eq!(designations().len(), LNP_TABLE.len());
    }

    #[test]
    fn test_table_is_consistent() {
        for entry in LNP_CATALOG.values() {
            assert!(entry.height >= entry.width, "{}", entry);
            assert!(entry.thickness < entry.width);
            assert_eq!(entry.toe_radius * 2.0, entry.root_radius);
        }
    }

    #[test]
    fn test_entry_serializes() {
        let json = serde_json::to_string(lookup("LNP 30x20x3").unwrap()).unwrap();
        assert!(json.contains("\"alias\":\"30x20x3\""));
    }
}
