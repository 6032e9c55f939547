//! guardhouse: smallest demo for the rust_patrol engine.
//!
//! A walled courtyard on a 100-unit grid: one guard wanders the yard zone,
//! a second walks a drawn beat loaded from CSV, and a player hides behind
//! the inner wall.  Runs a minute of game time at 100 ms per frame and prints
//! every sighting plus the final positions.
//!
//! Set `RUST_LOG=debug` to see roster rebuilds, holds and transitions.

use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pt_agent::{AgentFlags, EntityKind, EntitySnapshot, WorldSnapshot};
use pt_core::{Cell, EntityId, PatrolConfig};
use pt_detect::PatrolEvent;
use pt_movement::HoldReason;
use pt_schedule::load_paths_reader;
use pt_sim::{MemoryHost, PatrolEngineBuilder, PatrolObserver, TickReport};
use pt_spatial::{GridGeometry, Polygon};

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID:       i32 = 100;
const SEED:       u64 = 42;
const FRAME_MS:   u32 = 100;
const RUN_FRAMES: u64 = 600; // one minute of game time

const WANDERER: EntityId = EntityId(1);
const WALKER:   EntityId = EntityId(2);
const HERO:     EntityId = EntityId(10);

// ── Paths CSV ─────────────────────────────────────────────────────────────────

// The walker's beat: a closed loop round the outer yard.
const PATHS_CSV: &str = "\
path,segment,x,y\n\
beat,0,100,100\n\
beat,0,800,100\n\
beat,0,800,600\n\
beat,0,100,600\n\
beat,0,100,100\n\
";

// ── Map ───────────────────────────────────────────────────────────────────────

/// 10×8 squares enclosed by walls, with a short inner wall at x = 5.
fn courtyard() -> GridGeometry {
    let mut geometry = GridGeometry::new(GRID).with_units_per_cell(5.0);
    for x in -1..=10 {
        geometry.add_wall(Cell::new(x * GRID, -GRID));
        geometry.add_wall(Cell::new(x * GRID, 8 * GRID));
    }
    for y in 0..8 {
        geometry.add_wall(Cell::new(-GRID, y * GRID));
        geometry.add_wall(Cell::new(10 * GRID, y * GRID));
    }
    for y in 2..6 {
        geometry.add_wall(Cell::new(5 * GRID, y * GRID));
    }
    geometry
}

fn scene() -> Result<WorldSnapshot> {
    let paths = load_paths_reader(Cursor::new(PATHS_CSV))?;

    let wanderer = EntitySnapshot::new(WANDERER, Cell::new(300, 300))
        .with_flags(AgentFlags::explorer(true))
        .with_sight(30.0);
    let walker = EntitySnapshot::new(WALKER, Cell::new(100, 100))
        .with_flags(AgentFlags::follower("beat", true))
        .with_sight(30.0);
    let hero = EntitySnapshot::new(HERO, Cell::new(700, 400)).with_kind(EntityKind::Character);

    Ok(WorldSnapshot {
        entities: vec![wanderer, walker, hero],
        zones:    vec![Polygon::rect(0.0, 0.0, 500.0, 800.0)],
        paths,
    })
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct TickLog {
    ticks: usize,
    moves: usize,
    holds: usize,
}

impl PatrolObserver for TickLog {
    fn on_hold(&mut self, entity: EntityId, reason: HoldReason) {
        if reason != HoldReason::Blocked {
            info!(%entity, ?reason, "hold");
        }
    }

    fn on_tick(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.moves += report.updates.len();
        self.holds += report.holds.len();
        for t in &report.transitions {
            info!(tick = %report.tick, entity = %t.entity, from = ?t.from, to = ?t.to, "transition");
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = PatrolConfig {
        tick_delay_ms:  1_000,
        alert_delay_ms: 2_000,
        frame_ms:       FRAME_MS,
        seed:           SEED,
        ..PatrolConfig::default()
    };

    let mut engine = PatrolEngineBuilder::new(config, courtyard())
        .sink(|event: PatrolEvent, spotter: EntityId, target: EntityId| {
            println!("  !! {spotter} {event:?} {target}");
        })
        .build()?;

    let mut host = MemoryHost::new(scene()?);
    let mut log = TickLog::default();

    let t0 = Instant::now();
    engine.start(&mut host);
    for _ in 0..RUN_FRAMES {
        engine.frame(&mut host, &mut log);
    }
    engine.stop();
    let elapsed = t0.elapsed();

    println!(
        "{} ticks over {} frames ({} s game time): {} moves, {} holds, {} commits in {:.2?}",
        log.ticks,
        RUN_FRAMES,
        RUN_FRAMES * FRAME_MS as u64 / 1_000,
        log.moves,
        log.holds,
        host.commits,
        elapsed,
    );
    for id in [WANDERER, WALKER, HERO] {
        let cell = host.cell_of(id).map(|c| c.to_string()).unwrap_or_else(|| "gone".into());
        let state = engine
            .agent(id)
            .map(|a| format!("{:?}", a.detection.state()))
            .unwrap_or_else(|| "-".into());
        println!("  {id} at {cell} {state}");
    }

    Ok(())
}
