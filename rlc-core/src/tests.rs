//! Testes integrados para rlc-core

use crate::*;
use std::f64::consts::PI;

fn rel_close(a: f64, b: f64) -> bool {
    ((a - b) / b).abs() <= 1e-9
}

#[test]
fn test_scenario_fifty_ohms_sixty_hertz() {
    let mut state = CircuitState::new()
        .with(Parameter::Resistance, 50.0)
        .with(Parameter::Frequency, 60.0);
    solve(&mut state).unwrap();

    let omega0 = 2.0 * PI * 60.0;
    let c = state.capacitance.unwrap();
    let l = state.inductance.unwrap();
    assert!((c - 5.305165e-5).abs() < 1e-11);
    assert!(rel_close(c, 1.0 / (50.0 * omega0)));
    assert!(rel_close(l, 1.0 / (omega0 * omega0 * c)));
    assert!((l - 0.1326).abs() < 1e-4);
}

#[test]
fn test_branch_one_recomputes_over_known_pair() {
    let mut state = CircuitState::new()
        .with(Parameter::Inductance, 3.0)
        .with(Parameter::Capacitance, 7e-6);
    solve(&mut state).unwrap();
    let f = state.frequency.unwrap();

    // f vem do par L, C; agora R entra e o ramo 1 tem prioridade
    state.set(Parameter::Resistance, 20.0);
    let derivation = solve(&mut state).unwrap();
    assert_eq!(derivation.branch, Branch::ResistanceFrequency);
    assert_eq!(state.frequency, Some(f));
    assert!(rel_close(state.capacitance.unwrap(), 1.0 / (20.0 * 2.0 * PI * f)));
}

#[test]
fn test_quality_with_frequency_still_uses_branch_one() {
    let mut state = CircuitState::new()
        .with(Parameter::Quality, 10.0)
        .with(Parameter::Resistance, 5.0)
        .with(Parameter::Frequency, 100.0);
    let derivation = solve(&mut state).unwrap();
    assert_eq!(derivation.branch, Branch::ResistanceFrequency);
    assert_eq!(state.quality, Some(10.0));
}

#[test]
fn test_solve_then_report_then_render() {
    let mut state = CircuitState::new()
        .with(Parameter::Resistance, 100.0)
        .with(Parameter::Frequency, 1000.0);
    assert!(report_conversions(&state).is_err());

    solve(&mut state).unwrap();
    let report = report_conversions(&state).unwrap();
    assert!(report.contains("mH (millihenrys)"));

    let at = chrono::NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(14, 0, 9)
        .unwrap();
    let doc = render_report(&state, &at).unwrap();
    assert!(doc.starts_with("Résultats calculés (Date : 2026-10-19 14:0:9):\n"));
    assert!(!doc.contains("Facteur de qualité"));
}

#[test]
fn test_state_snapshot_json() {
    let state = CircuitState::new()
        .with(Parameter::Resistance, 50.0)
        .with(Parameter::Frequency, 60.0);
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["resistance"], 50.0);
    assert!(json["inductance"].is_null());

    let back: CircuitState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
}
