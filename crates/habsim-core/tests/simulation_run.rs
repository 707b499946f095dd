//! End-to-end pipeline test: simulate → buffer → analyze, the way the
//! scheduling layer drives the core in production.

use habsim_core::prelude::*;
use habsim_logic::alerts::{detect_alerts, ReadingSnapshot};
use habsim_logic::advisory::generate_advisory;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn snapshot_of(reading: &Reading) -> ReadingSnapshot {
    ReadingSnapshot {
        profile: reading.profile(),
        temperature: reading.temperature(),
        primary_gas: reading.primary_gas(),
        power: reading.power(),
        humidity: reading.humidity(),
        pressure: reading.pressure(),
        stability: reading.stability_score(),
    }
}

#[test]
fn test_full_update_cycle_per_profile() {
    for profile in [Profile::Habitat, Profile::Facility] {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut sim = TelemetrySimulator::new(profile);
        let mut history = HistoryBuffer::new();

        for tick in 0..200 {
            let reading = sim.generate(&mut rng);
            history.push(reading.clone());

            let report = analyze(&history, &reading);
            if tick + 1 < 5 {
                assert!(report.predictions.is_empty());
                continue;
            }

            // All four metrics present for simulated readings, fixed order.
            let metrics: Vec<Metric> = report.predictions.iter().map(|p| p.metric).collect();
            assert_eq!(metrics, Metric::TRACKED.to_vec());
            for prediction in &report.predictions {
                assert!((0.0..=1.0).contains(&prediction.confidence));
                assert!(prediction.predicted.is_finite());
            }

            // Alert and advisory rules must accept every generated reading.
            let snapshot = snapshot_of(&reading);
            let alerts = detect_alerts(&snapshot);
            let advisory = generate_advisory(&snapshot, &alerts);
            if alerts.is_empty() {
                assert!(advisory.is_none());
            } else {
                assert!(advisory.is_some());
            }
        }

        assert_eq!(
            history.len(),
            history.capacity(),
            "buffer must cap at its capacity"
        );
        for buffered in history.iter() {
            assert!((0.0..=100.0).contains(&buffered.stability_score()));
        }
    }
}

#[test]
fn test_profile_switch_mid_run() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut sim = TelemetrySimulator::new(Profile::Habitat);
    let mut history = HistoryBuffer::new();

    for _ in 0..30 {
        history.push(sim.generate(&mut rng));
    }
    sim.set_profile(Profile::Facility);
    let reading = sim.generate(&mut rng);
    assert_eq!(reading.profile(), Profile::Facility);

    // A mixed buffer still analyzes; alert levels follow the current
    // reading's profile.
    history.push(reading.clone());
    let report = analyze(&history, &reading);
    assert_eq!(report.predictions.len(), 4);
}
