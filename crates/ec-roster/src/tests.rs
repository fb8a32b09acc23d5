//! Unit tests for ec-roster.

use std::io::{Cursor, Write};
use std::sync::Arc;

use ec_behavior::PossessedUnit;
use ec_blackboard::standard_schema;
use ec_core::{ActorId, ControllerConfig};

use crate::{load_roster_csv, load_roster_reader, RosterError};

// ── Helpers ───────────────────────────────────────────────────────────────────

const ROSTER: &str = "\
unit_type,aggro_range,behavior_asset,combat_asset
Grunt,750,BT_Grunt,BT_GruntCombat
Sniper,2400,BT_Sniper,
Turret,1200,,
";

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_three_types_in_order() {
        let roster = load_roster_reader(Cursor::new(ROSTER)).unwrap();
        assert_eq!(roster.len(), 3);
        let names: Vec<&str> = roster.iter().map(|d| d.unit_type.as_str()).collect();
        assert_eq!(names, ["Grunt", "Sniper", "Turret"]);
    }

    #[test]
    fn empty_columns_are_none() {
        let roster = load_roster_reader(Cursor::new(ROSTER)).unwrap();
        let sniper = roster.get("Sniper").unwrap();
        assert_eq!(sniper.behavior_asset.as_deref(), Some("BT_Sniper"));
        assert_eq!(sniper.combat_asset, None);
        let turret = roster.get("Turret").unwrap();
        assert_eq!(turret.behavior_asset, None);
        assert_eq!(turret.aggro_range, 1200.0);
    }

    #[test]
    fn unknown_type_is_none() {
        let roster = load_roster_reader(Cursor::new(ROSTER)).unwrap();
        assert!(roster.get("Tank").is_none());
    }

    #[test]
    fn negative_aggro_range_errors() {
        let csv = "unit_type,aggro_range,behavior_asset,combat_asset\nGrunt,-1,BT,\n";
        assert!(matches!(load_roster_reader(Cursor::new(csv)), Err(RosterError::Parse(_))));
    }

    #[test]
    fn non_numeric_aggro_range_errors() {
        let csv = "unit_type,aggro_range,behavior_asset,combat_asset\nGrunt,far,BT,\n";
        assert!(matches!(load_roster_reader(Cursor::new(csv)), Err(RosterError::Parse(_))));
    }

    #[test]
    fn duplicate_type_errors() {
        let csv = "unit_type,aggro_range,behavior_asset,combat_asset\nGrunt,1,BT,\nGrunt,2,BT,\n";
        match load_roster_reader(Cursor::new(csv)) {
            Err(RosterError::Parse(msg)) => assert!(msg.contains("Grunt")),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ROSTER.as_bytes()).unwrap();
        let roster = load_roster_csv(file.path()).unwrap();
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        assert!(matches!(load_roster_csv(&path), Err(RosterError::Io(_))));
    }
}

// ── UnitTypeDef ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod unit_type {
    use super::*;

    #[test]
    fn controller_config_overrides_aggro_only() {
        let roster = load_roster_reader(Cursor::new(ROSTER)).unwrap();
        let base = ControllerConfig { seed: 42, ..ControllerConfig::default() };
        let cfg = roster.get("Sniper").unwrap().controller_config(&base);
        assert_eq!(cfg.aggro_range, 2400.0);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.objective_marker, base.objective_marker);
    }

    #[test]
    fn descriptor_carries_assets() {
        let roster = load_roster_reader(Cursor::new(ROSTER)).unwrap();
        let schema = Arc::new(standard_schema());

        let grunt = roster.get("Grunt").unwrap().descriptor(ActorId(4), &schema);
        assert_eq!(grunt.actor(), ActorId(4));
        assert_eq!(grunt.unit_behavior().unwrap().name, "BT_Grunt");
        assert_eq!(grunt.combat_behavior().unwrap().name, "BT_GruntCombat");

        let turret = roster.get("Turret").unwrap().descriptor(ActorId(5), &schema);
        assert!(turret.unit_behavior().is_none());
    }
}
