//! habsim headless validation harness.
//!
//! Runs seeded long-horizon sweeps over the simulator and analyzer and
//! checks every documented invariant. Entirely in-process: no storage,
//! no networking, no rendering.
//!
//! Usage:
//!   cargo run -p habsim-simtest
//!   cargo run -p habsim-simtest -- --verbose

use habsim_core::prelude::*;
use habsim_logic::advisory::generate_advisory;
use habsim_logic::alerts::{detect_alerts, ReadingSnapshot};
use habsim_logic::thresholds::THRESHOLDS_VERSION;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SWEEP_TICKS: usize = 10_000;
const SWEEP_SEED: u64 = 0xB10_5EED;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: &str, passed: bool, detail: String) -> Self {
        Self {
            name: name.to_string(),
            passed,
            detail,
        }
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== habsim Simulation Harness ===");
    println!("threshold tables v{}\n", THRESHOLDS_VERSION);

    let mut results = Vec::new();

    // 1. Clamp and stability invariants over long seeded runs
    for profile in [Profile::Habitat, Profile::Facility] {
        results.push(sweep_bounds(profile));
    }

    // 2. Trend walk bound
    results.push(sweep_trend_offset());

    // 3. Crisis episode shape
    results.push(sweep_crisis_episodes());

    // 4. Analyzer determinism
    results.push(check_analyzer_determinism());

    // 5. Declining-oxygen scenario
    results.push(check_declining_oxygen_scenario());

    // 6. Alert and advisory rules over generated readings
    results.push(sweep_alert_rules());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Clamp sweep ──────────────────────────────────────────────────────

fn sweep_bounds(profile: Profile) -> TestResult {
    let mut rng = StdRng::seed_from_u64(SWEEP_SEED);
    let mut sim = TelemetrySimulator::new(profile);
    let mut violations = 0usize;

    for _ in 0..SWEEP_TICKS {
        let reading = sim.generate(&mut rng);
        let cfg = sim.config();
        let ok = (0.0..=50.0).contains(&reading.temperature())
            && (0.0..=cfg.gas_ceiling).contains(&reading.primary_gas())
            && reading.power().map_or(true, |p| (0.0..=100.0).contains(&p))
            && (0.0..=100.0).contains(&reading.humidity())
            && (0.0..=cfg.pressure_ceiling).contains(&reading.pressure())
            && (0.0..=100.0).contains(&reading.stability_score());
        if !ok {
            violations += 1;
        }
    }

    TestResult::new(
        &format!("bounds sweep ({profile})"),
        violations == 0,
        format!("{SWEEP_TICKS} ticks, {violations} out-of-range readings"),
    )
}

// ── 2. Trend walk ───────────────────────────────────────────────────────

fn sweep_trend_offset() -> TestResult {
    let mut rng = StdRng::seed_from_u64(SWEEP_SEED + 1);
    let mut sim = TelemetrySimulator::new(Profile::Habitat);
    let mut peak = 0.0f64;

    for _ in 0..SWEEP_TICKS {
        sim.generate(&mut rng);
        peak = peak.max(sim.trend_offset().abs());
    }

    TestResult::new(
        "trend offset bound",
        peak <= 5.0,
        format!("peak |offset| = {peak:.3} over {SWEEP_TICKS} ticks"),
    )
}

// ── 3. Crisis episodes ──────────────────────────────────────────────────

fn sweep_crisis_episodes() -> TestResult {
    let mut rng = StdRng::seed_from_u64(SWEEP_SEED + 2);
    let mut sim = TelemetrySimulator::new(Profile::Habitat);

    let mut episode_kinds: Vec<CrisisKind> = Vec::new();
    let mut longest = 0u32;
    let mut run_len = 0u32;
    let mut run_kind: Option<CrisisKind> = None;
    let mut kind_drift = false;

    for _ in 0..50_000 {
        let reading = sim.generate(&mut rng);
        match reading.crisis_kind() {
            Some(kind) => {
                if run_len == 0 {
                    episode_kinds.push(kind);
                    run_kind = Some(kind);
                } else if run_kind != Some(kind) {
                    kind_drift = true;
                }
                run_len += 1;
                longest = longest.max(run_len);
            }
            None => {
                run_len = 0;
                run_kind = None;
            }
        }
    }

    let count_of = |kind: CrisisKind| episode_kinds.iter().filter(|k| **k == kind).count();
    let breakdown: Vec<String> = [
        CrisisKind::GasDepletion,
        CrisisKind::PowerFailure,
        CrisisKind::ThermalSpike,
    ]
    .iter()
    .map(|k| format!("{} x{}", k.label(), count_of(*k)))
    .collect();

    let passed = !episode_kinds.is_empty() && longest <= 40 && !kind_drift;
    TestResult::new(
        "crisis episodes",
        passed,
        format!(
            "{} episodes ({}), longest {} ticks, kind drift: {}",
            episode_kinds.len(),
            breakdown.join(", "),
            longest,
            kind_drift
        ),
    )
}

// ── 4. Analyzer determinism ─────────────────────────────────────────────

fn check_analyzer_determinism() -> TestResult {
    let mut rng = StdRng::seed_from_u64(SWEEP_SEED + 3);
    let mut sim = TelemetrySimulator::new(Profile::Habitat);
    let mut history = HistoryBuffer::new();
    for _ in 0..25 {
        history.push(sim.generate(&mut rng));
    }
    let current = history.latest().cloned().expect("non-empty history");

    let first = serde_json::to_string(&analyze(&history, &current)).expect("report serializes");
    let second = serde_json::to_string(&analyze(&history, &current)).expect("report serializes");

    TestResult::new(
        "analyzer determinism",
        first == second,
        format!("{} bytes per report", first.len()),
    )
}

// ── 5. Declining-oxygen scenario ────────────────────────────────────────

fn check_declining_oxygen_scenario() -> TestResult {
    let mut rng = StdRng::seed_from_u64(SWEEP_SEED + 4);
    let mut sim = TelemetrySimulator::new(Profile::Habitat);
    let mut history = HistoryBuffer::new();

    // Seed with real generated readings, then overwrite the gas channel
    // with a linear decline from 21.0 to 18.0.
    for i in 0..10 {
        let reading = match sim.generate(&mut rng) {
            Reading::Habitat(mut r) => {
                r.primary_gas = 21.0 - i as f64 / 3.0;
                Reading::Habitat(r)
            }
            other => other,
        };
        history.push(reading);
    }
    let current = history.latest().cloned().expect("non-empty history");
    let report = analyze(&history, &current);

    let gas = report
        .predictions
        .iter()
        .find(|p| p.metric == Metric::PrimaryGas);

    let (passed, detail) = match gas {
        Some(p) => (
            p.trend == Trend::Decreasing
                && p.alert_level == AlertLevel::Critical
                && p.predicted < 19.5,
            format!(
                "{} predicted {:.2}, trend {:?}, level {:?}",
                p.metric.as_str(),
                p.predicted,
                p.trend,
                p.alert_level
            ),
        ),
        None => (false, "no primary gas prediction".to_string()),
    };

    TestResult::new("declining oxygen scenario", passed, detail)
}

// ── 6. Alert & advisory rules ───────────────────────────────────────────

fn sweep_alert_rules() -> TestResult {
    let mut rng = StdRng::seed_from_u64(SWEEP_SEED + 5);
    let mut sim = TelemetrySimulator::new(Profile::Habitat);
    let mut alert_count = 0usize;
    let mut mismatches = 0usize;

    for _ in 0..SWEEP_TICKS {
        let reading = sim.generate(&mut rng);
        let snapshot = ReadingSnapshot {
            profile: reading.profile(),
            temperature: reading.temperature(),
            primary_gas: reading.primary_gas(),
            power: reading.power(),
            humidity: reading.humidity(),
            pressure: reading.pressure(),
            stability: reading.stability_score(),
        };
        let alerts = detect_alerts(&snapshot);
        alert_count += alerts.len();

        // Advisory exists exactly when something is alerting.
        if generate_advisory(&snapshot, &alerts).is_some() != !alerts.is_empty() {
            mismatches += 1;
        }
    }

    TestResult::new(
        "alert/advisory rules",
        mismatches == 0,
        format!("{alert_count} alerts raised, {mismatches} advisory mismatches"),
    )
}
