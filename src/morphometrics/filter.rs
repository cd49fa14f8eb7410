//! Post-hoc filtering rules for measurement tables
//!
//! The external computation reports every detected structure, including
//! implausible ones (vanishing diameters, g-ratios outside (0, 1), concave
//! blobs). Each rule below names one plausibility check; rules are
//! independent and a row is discarded when any rule matches it.

use crate::io::configuration::{
    MAX_UNMYELINATED_AREA_UM2, MIN_MYELINATED_DIAMETER_UM, MIN_SOLIDITY,
    MIN_UNMYELINATED_DIAMETER_UM,
};
use crate::io::error::Result;
use crate::morphometrics::table::{MeasurementTable, MorphRow, filtered_path};
use std::path::Path;

/// A named row-exclusion rule
///
/// The predicate returns true when the row must be discarded.
pub struct FilterRule {
    /// Short rule identifier used in removal reports
    pub name: &'static str,
    /// Human-readable description of what the rule removes
    pub description: &'static str,
    /// Discard predicate
    pub discard: fn(&MorphRow) -> bool,
}

fn myelinated_diameter_too_small(row: &MorphRow) -> bool {
    row.axon_diam < MIN_MYELINATED_DIAMETER_UM
}

// NaN and missing cells fail the open-interval check and are discarded
fn gratio_out_of_range(row: &MorphRow) -> bool {
    !(row.gratio > 0.0 && row.gratio < 1.0)
}

fn unmyelinated_diameter_too_small(row: &MorphRow) -> bool {
    row.axon_diam < MIN_UNMYELINATED_DIAMETER_UM
}

fn solidity_too_low(row: &MorphRow) -> bool {
    row.solidity < MIN_SOLIDITY
}

fn area_too_large(row: &MorphRow) -> bool {
    row.axon_area > MAX_UNMYELINATED_AREA_UM2
}

/// Exclusion rules applied to myelinated measurement tables
pub const MYELINATED_RULES: [FilterRule; 2] = [
    FilterRule {
        name: "diameter-too-small",
        description: "axon diameter below 0.1 um",
        discard: myelinated_diameter_too_small,
    },
    FilterRule {
        name: "gratio-out-of-range",
        description: "g-ratio missing or outside the open interval (0, 1)",
        discard: gratio_out_of_range,
    },
];

/// Exclusion rules applied to unmyelinated measurement tables
pub const UNMYELINATED_RULES: [FilterRule; 3] = [
    FilterRule {
        name: "diameter-too-small",
        description: "axon diameter below 0.05 um",
        discard: unmyelinated_diameter_too_small,
    },
    FilterRule {
        name: "solidity-too-low",
        description: "solidity below 0.8, likely a segmentation artifact",
        discard: solidity_too_low,
    },
    FilterRule {
        name: "area-too-large",
        description: "axon area above 1 um^2",
        discard: area_too_large,
    },
];

/// Removal count attributed to one rule
#[derive(Debug, Clone, Copy)]
pub struct RuleCount {
    /// Rule identifier
    pub name: &'static str,
    /// Number of rows the rule matched
    pub removed: usize,
}

/// Result of applying a rule set to a table
#[derive(Debug)]
pub struct FilterOutcome {
    /// The surviving rows, original columns intact
    pub table: MeasurementTable,
    /// Sum of per-rule counts
    ///
    /// Each rule is counted against the original table, so a row matching
    /// several rules contributes to each of them and this total can exceed
    /// the number of rows actually removed.
    pub removed_total: usize,
    /// Per-rule removal counts, in rule order
    pub per_rule: Vec<RuleCount>,
}

/// Apply a rule set to a table
///
/// Every rule is evaluated against the original table state; the surviving
/// rows are those matching no rule, so rule order cannot change the result.
pub fn apply_rules(table: &MeasurementTable, rules: &[FilterRule]) -> FilterOutcome {
    let mut keep = vec![true; table.len()];
    let mut per_rule = Vec::with_capacity(rules.len());
    let mut removed_total = 0;

    for rule in rules {
        let mut removed = 0;
        for (row, kept) in table.rows().iter().zip(keep.iter_mut()) {
            if (rule.discard)(row) {
                removed += 1;
                *kept = false;
            }
        }
        removed_total += removed;
        per_rule.push(RuleCount {
            name: rule.name,
            removed,
        });
    }

    FilterOutcome {
        table: table.retained(&keep),
        removed_total,
        per_rule,
    }
}

/// Load a table, apply a rule set, and write the filtered table alongside
///
/// Logs the per-rule removal counts at info level.
///
/// # Errors
///
/// Returns an error if the table cannot be loaded or the filtered table
/// cannot be written
pub fn filter_table(path: &Path, rules: &[FilterRule]) -> Result<FilterOutcome> {
    let table = MeasurementTable::load(path)?;
    let outcome = apply_rules(&table, rules);

    for count in &outcome.per_rule {
        if count.removed > 0 {
            log::info!(
                "{}: rule '{}' removed {} row(s)",
                path.display(),
                count.name,
                count.removed
            );
        }
    }
    log::info!(
        "{}: kept {} of {} rows",
        path.display(),
        outcome.table.len(),
        table.len()
    );

    outcome.table.write(&filtered_path(path))?;
    Ok(outcome)
}
