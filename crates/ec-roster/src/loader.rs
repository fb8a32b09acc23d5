//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per unit type.  Empty asset columns mean "none".
//!
//! ```csv
//! unit_type,aggro_range,behavior_asset,combat_asset
//! Grunt,750,BT_Grunt,BT_GruntCombat
//! Sniper,2400,BT_Sniper,
//! Turret,1200,,
//! ```
//!
//! `aggro_range` must be finite and non-negative.  A unit type listed twice
//! is an error.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Roster, RosterError, UnitTypeDef};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    unit_type:      String,
    aggro_range:    f32,
    behavior_asset: Option<String>,
    combat_asset:   Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Roster`] from a CSV file.
pub fn load_roster_csv(path: &Path) -> Result<Roster, RosterError> {
    let file = std::fs::File::open(path).map_err(RosterError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
pub fn load_roster_reader<R: Read>(reader: R) -> Result<Roster, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut roster = Roster::default();

    for result in csv_reader.deserialize::<RosterRecord>() {
        let row = result.map_err(|e| RosterError::Parse(e.to_string()))?;

        if row.unit_type.is_empty() {
            return Err(RosterError::Parse("empty unit_type".into()));
        }
        if !row.aggro_range.is_finite() || row.aggro_range < 0.0 {
            return Err(RosterError::Parse(format!(
                "unit type {:?}: aggro_range must be finite and non-negative, got {}",
                row.unit_type, row.aggro_range
            )));
        }

        let def = UnitTypeDef {
            unit_type:      row.unit_type,
            aggro_range:    row.aggro_range,
            behavior_asset: non_empty(row.behavior_asset),
            combat_asset:   non_empty(row.combat_asset),
        };
        let name = def.unit_type.clone();
        if !roster.insert(def) {
            return Err(RosterError::Parse(format!("duplicate unit type {name:?}")));
        }
    }

    Ok(roster)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}
