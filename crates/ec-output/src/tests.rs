//! Integration tests for ec-output.

use ec_behavior::TreeRole;
use ec_controller::{CommandKind, ControllerEvent, ControllerObserver, StateCause, StateSnapshot};
use ec_core::{ActorId, AiState, MoveRequestId, Vec3};
use ec_navigation::PathFollowingCode;

use crate::{EventRow, OutputResult, SnapshotRow, TraceObserver, TraceWriter};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn snapshot(step: u64, unit: u32) -> StateSnapshot {
    StateSnapshot {
        step,
        unit:                 ActorId(unit),
        ai_state:             Some(AiState::Guard),
        current_enemy:        Some(ActorId(0)),
        have_los:             true,
        enemy_in_aggro_range: false,
        enemy_in_guard_area:  true,
        forced_move:          false,
        position:             Some(Vec3::new(10.0, 20.5, 0.0)),
    }
}

fn guard_changed() -> ControllerEvent {
    ControllerEvent::StateChanged {
        from:  None,
        to:    Some(AiState::Guard),
        cause: StateCause::MoveCompleted,
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;

    #[test]
    fn snapshot_row_flattens() {
        let row = SnapshotRow::from(&snapshot(4, 3));
        assert_eq!(row.step, 4);
        assert_eq!(row.unit, 3);
        assert_eq!(row.ai_state, "guard");
        assert_eq!(row.current_enemy, 0);
        assert!(row.have_los);
        assert_eq!((row.x, row.y, row.z), (10.0, 20.5, 0.0));
    }

    #[test]
    fn unset_fields_use_sentinels() {
        let mut snap = snapshot(0, 1);
        snap.ai_state = None;
        snap.current_enemy = None;
        snap.position = None;

        let row = SnapshotRow::from(&snap);
        assert_eq!(row.ai_state, "unset");
        assert_eq!(row.current_enemy, u32::MAX);
        assert!(row.x.is_nan() && row.y.is_nan() && row.z.is_nan());
    }

    #[test]
    fn event_row_uses_kind_and_detail() {
        let row = EventRow::new(9, ActorId(2), &guard_changed());
        assert_eq!(row.step, 9);
        assert_eq!(row.unit, 2);
        assert_eq!(row.event, "state_changed");
        assert_eq!(row.detail, "unset -> guard (move_completed)");
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{EVENT_FILE, SNAPSHOT_FILE};
    use crate::CsvTraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join(SNAPSHOT_FILE)),
            [
                "step", "unit", "ai_state", "current_enemy", "have_los",
                "enemy_in_aggro_range", "enemy_in_guard_area", "forced_move", "x", "y", "z",
            ]
        );
        assert_eq!(headers(dir.path().join(EVENT_FILE)), ["step", "unit", "event", "detail"]);
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        let rows: Vec<SnapshotRow> = (0..3).map(|u| SnapshotRow::from(&snapshot(5, u))).collect();
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read.len(), 3);
        assert_eq!(&read[0][0], "5");     // step
        assert_eq!(&read[2][1], "2");     // unit
        assert_eq!(&read[0][2], "guard");
        assert_eq!(&read[0][4], "1");     // have_los
        assert_eq!(&read[0][5], "0");     // enemy_in_aggro_range
        assert_eq!(&read[0][9], "20.50"); // y
    }

    #[test]
    fn csv_event_detail_is_quoted() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        let event = ControllerEvent::MoveRequested {
            request:     MoveRequestId(4),
            destination: Vec3::new(1.0, 2.0, 3.0),
            forced:      true,
        };
        w.write_event(&EventRow::new(1, ActorId(7), &event)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENT_FILE)).unwrap();
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read.len(), 1);
        assert_eq!(&read[0][2], "move_requested");
        assert_eq!(&read[0][3], "request=MoveRequestId(4) to=(1.0, 2.0, 3.0) forced=true");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvTraceWriter::new(&dir.path().join("nope")).is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::OutputError;

    #[derive(Default)]
    struct MemoryWriter {
        snapshots: Vec<SnapshotRow>,
        events:    Vec<EventRow>,
        finished:  u32,
        fail:      bool,
    }

    impl TraceWriter for MemoryWriter {
        fn write_snapshots(&mut self, rows: &[SnapshotRow]) -> OutputResult<()> {
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }

        fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.events.push(row.clone());
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn observer_forwards_everything() {
        let mut obs = TraceObserver::new(MemoryWriter::default());
        obs.on_event(0, ActorId(3), &ControllerEvent::TreeStarted {
            role:  TreeRole::Root,
            asset: "BT_Grunt".into(),
        });
        obs.on_event(1, ActorId(3), &ControllerEvent::CommandIssued {
            command: CommandKind::Guard,
            target:  ActorId(0),
        });
        obs.on_snapshot(1, &[snapshot(1, 3), snapshot(1, 4)]);
        obs.on_run_end(2);

        assert_eq!(obs.events_written(), 2);
        assert_eq!(obs.rows_written(), 2);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.events[0].event, "tree_started");
        assert_eq!(w.events[0].detail, "role=root asset=BT_Grunt");
        assert_eq!(w.events[1].detail, "command=guard target=ActorId(0)");
        assert_eq!(w.snapshots.len(), 2);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn empty_snapshot_not_written() {
        let mut obs = TraceObserver::new(MemoryWriter::default());
        obs.on_snapshot(0, &[]);
        assert_eq!(obs.rows_written(), 0);
        assert!(obs.into_writer().snapshots.is_empty());
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = TraceObserver::new(MemoryWriter { fail: true, ..Default::default() });
        obs.on_event(0, ActorId(1), &guard_changed());
        obs.on_event(1, ActorId(1), &ControllerEvent::MoveCompleted {
            request: MoveRequestId(0),
            code:    PathFollowingCode::Blocked,
            handled: false,
        });

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }
}
