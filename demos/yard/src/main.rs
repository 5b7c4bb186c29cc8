//! yard — headless demo for the pup behavior framework.
//!
//! Runs a handful of pups in a shared yard at a fixed step, writes a CSV
//! trace, and prints how the pups ended up distributed over the states.
//!
//! ```text
//! cargo run -p yard -- demos/yard/yard.toml
//! RUST_LOG=pup_behavior=debug cargo run -p yard
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;

use pup_behavior::{AnimationPlayer, AnimationSignal, StateKind};
use pup_core::{PupId, SimConfig, Tick};
use pup_output::{CsvWriter, OutputWriter, TraceObserver};
use pup_sim::{Pup, TransitionEvent, YardBuilder, YardObserver};

// ── Run configuration ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RunConfig {
    pups:       usize,
    output_dir: PathBuf,
    sim:        SimConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pups:       4,
            output_dir: PathBuf::from("trace"),
            sim:        SimConfig::default(),
        }
    }
}

impl RunConfig {
    fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse run config TOML: {}", e))
    }
}

// ── Animation player stand-in ─────────────────────────────────────────────────

/// Counts trigger calls the way a sprite animation graph would receive them.
#[derive(Default)]
struct TriggerCounter {
    sets:   usize,
    resets: usize,
}

impl AnimationPlayer for TriggerCounter {
    fn set_trigger(&mut self, name: &str) {
        self.sets += 1;
        tracing::trace!(trigger = name, "set");
    }

    fn reset_trigger(&mut self, name: &str) {
        self.resets += 1;
        tracing::trace!(trigger = name, "reset");
    }
}

// ── Observer wrapper ──────────────────────────────────────────────────────────

struct DemoObserver<W: OutputWriter> {
    inner:       TraceObserver<W>,
    player:      TriggerCounter,
    transitions: [[usize; 4]; 4],
}

impl<W: OutputWriter> DemoObserver<W> {
    fn new(inner: TraceObserver<W>) -> Self {
        Self { inner, player: TriggerCounter::default(), transitions: [[0; 4]; 4] }
    }
}

fn kind_index(kind: StateKind) -> usize {
    StateKind::ALL.iter().position(|&k| k == kind).unwrap_or(0)
}

impl<W: OutputWriter> YardObserver for DemoObserver<W> {
    fn on_signals(&mut self, _tick: Tick, _pup: PupId, signals: &[AnimationSignal]) {
        for signal in signals {
            match *signal {
                AnimationSignal::Raise(i) => self.player.set_trigger(i.trigger()),
                AnimationSignal::Clear(i) => self.player.reset_trigger(i.trigger()),
            }
        }
    }

    fn on_tick_end(&mut self, tick: Tick, transitions: &[TransitionEvent]) {
        for t in transitions {
            self.transitions[kind_index(t.from)][kind_index(t.to)] += 1;
        }
        self.inner.on_tick_end(tick, transitions);
    }

    fn on_snapshot(&mut self, tick: Tick, pups: &[Pup]) {
        self.inner.on_snapshot(tick, pups);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let run = match std::env::args_os().nth(1) {
        Some(path) => RunConfig::load(Path::new(&path))?,
        None       => RunConfig::default(),
    };

    println!("=== yard — pup behavior demo ===");
    println!(
        "Pups: {}  |  Ticks: {}  |  dt: {:.4}s  |  Seed: {}",
        run.pups, run.sim.total_ticks, run.sim.dt_secs, run.sim.seed
    );
    println!();

    let mut yard = YardBuilder::new(run.sim.clone())
        .pups(run.pups)
        .build()
        .context("building yard")?;

    let writer = CsvWriter::new(&run.output_dir)
        .with_context(|| format!("opening trace in {}", run.output_dir.display()))?;
    let mut obs = DemoObserver::new(TraceObserver::new(writer));

    let started = Instant::now();
    yard.run(&mut obs)?;
    let wall = started.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("Trace error: {e}");
    }

    // ── Summary ───────────────────────────────────────────────────────────
    println!(
        "Simulated {:.1}s in {:.3}s wall time ({})",
        yard.clock.elapsed_secs(),
        wall.as_secs_f64(),
        yard.clock,
    );
    println!();
    println!("Final occupancy:");
    for (kind, count) in yard.occupancy() {
        println!("  {:<8} {count:>5}", kind.name());
    }
    println!();
    println!("Final poses:");
    for (i, pup) in yard.pups.iter().enumerate() {
        let body = pup.body();
        let state = pup.state_kind().map_or("-", StateKind::name);
        println!(
            "  pup {i:>3}  {state:<8} at {}  facing {}",
            body.position, body.facing
        );
    }
    println!();
    println!("Transitions:");
    for from in StateKind::ALL {
        for to in StateKind::ALL {
            let n = obs.transitions[kind_index(from)][kind_index(to)];
            if n > 0 {
                println!("  {:<8} -> {:<8} {n:>6}", from.name(), to.name());
            }
        }
    }
    println!();
    println!(
        "Animation triggers: {} set, {} reset",
        obs.player.sets, obs.player.resets
    );
    println!("Trace written to {}", run.output_dir.display());

    Ok(())
}
