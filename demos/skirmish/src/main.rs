//! skirmish: a scripted encounter driving enemy controllers end to end.
//!
//! One player walks east along the southern lane toward four enemy units.
//! Each unit is tuned from the embedded roster and commanded once at the
//! start:
//!
//! - `Grunt_0` engages the player directly.
//! - `Grunt_1` guards the north objective and engages when the player comes
//!   near the guard point.
//! - `Sniper_0` seeks the player from behind a wall, starting with a move to
//!   a vantage point.
//! - `Turret_0` has no behavior asset; possession reports it and the unit is
//!   left alone.
//!
//! Traces are written to `output/skirmish/`.

mod arena;
mod evaluator;
#[cfg(test)]
mod tests;

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ec_blackboard::standard_schema;
use ec_controller::{ControllerBuilder, ControllerObserver, ControllerPool};
use ec_core::{ActorId, AiState, ControllerConfig, Vec3};
use ec_navigation::NavigationEngine;
use ec_output::{CsvTraceWriter, TraceObserver};
use ec_roster::load_roster_reader;
use ec_world::World;

use arena::build_arena;
use evaluator::SkirmishEvaluator;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const STEPS:             u64 = 300;
const STEP_SECONDS:      f32 = 0.1;
const UNIT_SPEED:        f32 = 350.0; // world units per second
const PLAYER_SPEED:      f32 = 5.0;   // world units per step
const PLAYER_STOP_X:     f32 = 1500.0;
const SNAPSHOT_INTERVAL: u64 = 5;
const OUTPUT_DIR:        &str = "output/skirmish";

// ── Roster CSV ────────────────────────────────────────────────────────────────

const ROSTER_CSV: &str = "\
unit_type,aggro_range,behavior_asset,combat_asset\n\
Grunt,750,BT_Grunt,BT_GruntCombat\n\
Sniper,1200,BT_Sniper,\n\
Turret,500,,\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== skirmish: enemy controller demo ===");
    println!("Steps: {STEPS}  |  Step: {STEP_SECONDS} s  |  Seed: {SEED}");
    println!();

    // 1. Roster and shared blackboard schema.
    let roster = load_roster_reader(Cursor::new(ROSTER_CSV)).context("loading roster")?;
    let schema = Arc::new(standard_schema());
    println!("Loaded {} unit types", roster.len());

    // 2. Map.
    let (arena, actors) = build_arena()?;
    println!(
        "Arena: {} actors, {} occluders",
        arena.actor_count(),
        arena.occluder_count()
    );

    // 3. Pool and possession.
    let mut pool = ControllerPool::new(arena, NavigationEngine::new(UNIT_SPEED)?)
        .with_step_seconds(STEP_SECONDS)
        .with_snapshot_interval(SNAPSHOT_INTERVAL);

    let base = ControllerConfig { seed: SEED, ..ControllerConfig::default() };
    for &(actor, unit_type) in &actors.units {
        let def = roster
            .get(unit_type)
            .with_context(|| format!("unit type {unit_type} missing from roster"))?;
        let controller = ControllerBuilder::new(SkirmishEvaluator::default())
            .config(def.controller_config(&base))
            .build()?;
        if let Err(e) = pool.possess(&def.descriptor(actor, &schema), controller) {
            warn!(unit = %actor, unit_type, error = %e, "unit left without AI");
        }
    }

    // 4. Opening orders.
    let [grunt_0, grunt_1, sniper_0, _turret] = unit_ids(&actors.units)?;
    let player = actors.player;

    pool.command(grunt_0, |c, _, _| c.engage_enemy(player))?;
    pool.command(grunt_1, |c, world, nav| {
        c.guard_point(actors.objective, player, world, nav)
    })?;
    pool.command(sniper_0, |c, _, nav| {
        c.seek_enemy_at_point(player, Vec3::new(1300.0, 600.0, 0.0), nav)
    })?;
    info!(supply = %actors.supply, "supply cache carries no objective marker and is never guarded");

    // 5. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvTraceWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = TraceObserver::new(writer);

    // 6. Run, walking the player east toward the units.
    let t0 = Instant::now();
    for _ in 0..STEPS {
        let at = pool
            .arena()
            .actor_location(player)
            .context("player despawned")?;
        let next = Vec3::new((at.x + PLAYER_SPEED).min(PLAYER_STOP_X), at.y, at.z);
        pool.arena_mut().set_actor_location(player, next)?;
        pool.step(&mut obs)?;
    }
    obs.on_run_end(pool.current_step());
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Summary.
    println!();
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  state_snapshots.csv   : {} rows", obs.rows_written());
    println!("  controller_events.csv : {} rows", obs.events_written());
    println!();

    println!("{:<12} {:<8} {:<8} {:<6} {:<22}", "Unit", "Type", "State", "LoS", "Position");
    println!("{}", "-".repeat(60));
    for &(actor, unit_type) in &actors.units {
        let name = pool.arena().actor_name(actor).unwrap_or("?").to_owned();
        let state = pool
            .controller(actor)
            .map_or("-", |c| AiState::label(c.ai_state()));
        let los = pool
            .controller(actor)
            .and_then(|c| c.state())
            .and_then(|s| s.have_los())
            .map_or("-", |v| if v { "yes" } else { "no" });
        let pos = pool
            .arena()
            .actor_location(actor)
            .map_or_else(|| "-".to_owned(), |p| format!("({:.0}, {:.0}, {:.0})", p.x, p.y, p.z));
        println!("{name:<12} {unit_type:<8} {state:<8} {los:<6} {pos:<22}");
    }

    Ok(())
}

fn unit_ids(units: &[(ActorId, &'static str)]) -> Result<[ActorId; 4]> {
    let ids: Vec<ActorId> = units.iter().map(|&(id, _)| id).collect();
    ids.try_into()
        .map_err(|v: Vec<ActorId>| anyhow::anyhow!("expected 4 units, got {}", v.len()))
}
