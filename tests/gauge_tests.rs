// Host-side tests for the random-walk gauges and their configuration checks.
// The web crate is wasm-only, so these go through panel-core directly.

use panel_core::rng;
use panel_core::{
    AnalysisConfig, Bounds, ConfigError, Gauge, GaugeSpec, Quantize, TacticalConfig,
    TacticalState, WallClock, Walk,
};

const NOON: WallClock = WallClock::new(12, 0, 0);

#[test]
fn percent_gauges_stay_in_bounds_over_long_runs() {
    let config = TacticalConfig::default();
    let mut sync = Gauge::new(config.sync_ratio).unwrap();
    let mut at = Gauge::new(config.at_field).unwrap();
    let mut rng = rng::seeded(7);
    for _ in 0..10_000 {
        let s = sync.step(&mut rng);
        let a = at.step(&mut rng);
        assert!((0.0..=100.0).contains(&s), "sync escaped: {}", s);
        assert!((0.0..=100.0).contains(&a), "at field escaped: {}", a);
        assert_eq!(a, a.floor(), "at field must stay integral");
    }
}

#[test]
fn at_field_only_decays_and_parks_at_zero() {
    let config = TacticalConfig::default();
    let mut at = Gauge::new(config.at_field).unwrap();
    let mut rng = rng::seeded(11);
    let mut prev = at.value();
    for _ in 0..5_000 {
        let a = at.step(&mut rng);
        // floor(x + (u - 0.4)) on an integer x is x or x - 1
        assert!(a == prev || a == prev - 1.0);
        prev = a;
    }
    assert_eq!(at.value(), 0.0);
}

#[test]
fn target_distance_never_increases_or_goes_negative() {
    let config = TacticalConfig::default();
    let mut dist = Gauge::new(config.target_distance).unwrap();
    let mut rng = rng::seeded(3);
    let mut prev = dist.value();
    for _ in 0..1_000 {
        let d = dist.step(&mut rng);
        assert!(d <= prev);
        assert!(d >= 0.0);
        assert!(prev - d <= 15.0);
        prev = d;
    }
    assert_eq!(dist.value(), 0.0);
}

#[test]
fn plug_depth_is_unbounded_but_moves_in_small_steps() {
    let config = TacticalConfig::default();
    let mut depth = Gauge::new(config.plug_depth).unwrap();
    assert_eq!(depth.bounds(), Bounds::UNBOUNDED);
    let mut rng = rng::seeded(5);
    let mut prev = depth.value();
    for _ in 0..1_000 {
        let d = depth.step(&mut rng);
        assert!((d - prev).abs() <= 0.1 + 1e-9);
        prev = d;
    }
}

#[test]
fn analysis_diameter_respects_its_range() {
    let config = AnalysisConfig::default();
    let mut dia = Gauge::new(config.diameter).unwrap();
    let mut rng = rng::seeded(21);
    for _ in 0..20_000 {
        let d = dia.step(&mut rng);
        assert!((600.0..=760.0).contains(&d));
    }
}

#[test]
fn pattern_confidence_walk_has_no_drift() {
    let spec = AnalysisConfig::default().pattern_confidence;
    let mut total = 0.0;
    let mut steps = 0;
    for seed in 0..40 {
        let mut g = Gauge::new(spec).unwrap();
        g.set(50.0);
        let mut rng = rng::seeded(seed);
        let mut prev = g.value();
        for _ in 0..50 {
            let v = g.step(&mut rng);
            assert_eq!(v, v.round());
            assert!((v - prev).abs() <= 2.0);
            total += v - prev;
            prev = v;
            steps += 1;
        }
    }
    let mean = total / steps as f64;
    assert!(mean.abs() < 0.15, "mean step {mean}");
}

#[test]
fn set_clamps_into_bounds() {
    let mut g = Gauge::new(GaugeSpec {
        name: "g",
        initial: 50.0,
        bounds: Bounds::PERCENT,
        walk: Walk::symmetric(1.0),
        quantize: Quantize::None,
    })
    .unwrap();
    g.set(140.0);
    assert_eq!(g.value(), 100.0);
    g.set(-3.0);
    assert_eq!(g.value(), 0.0);
}

#[test]
fn invalid_specs_are_rejected() {
    let base = GaugeSpec {
        name: "g",
        initial: 10.0,
        bounds: Bounds::PERCENT,
        walk: Walk::symmetric(1.0),
        quantize: Quantize::None,
    };
    assert!(matches!(
        Gauge::new(GaugeSpec {
            bounds: Bounds::new(5.0, 1.0),
            ..base
        }),
        Err(ConfigError::InvertedBounds { .. })
    ));
    assert!(matches!(
        Gauge::new(GaugeSpec {
            initial: 101.0,
            ..base
        }),
        Err(ConfigError::OutOfBounds { .. })
    ));
    assert!(matches!(
        Gauge::new(GaugeSpec {
            initial: f64::NAN,
            ..base
        }),
        Err(ConfigError::NotANumber { .. })
    ));
    assert!(matches!(
        Gauge::new(GaugeSpec {
            walk: Walk::symmetric(-1.0),
            ..base
        }),
        Err(ConfigError::NegativeMagnitude { .. })
    ));
}

#[test]
fn screen_configs_reject_bad_probabilities_and_periods() {
    let mut tactical = TacticalConfig::default();
    tactical.damage_chance = 1.5;
    assert!(matches!(
        TacticalState::new(&tactical),
        Err(ConfigError::Probability {
            name: "damage_chance",
            ..
        })
    ));

    let analysis = AnalysisConfig {
        data_period: std::time::Duration::ZERO,
        ..AnalysisConfig::default()
    };
    assert_eq!(
        analysis.validate(),
        Err(ConfigError::ZeroPeriod {
            name: "data_period"
        })
    );

    let analysis = AnalysisConfig {
        countdown_secs: 0,
        ..AnalysisConfig::default()
    };
    assert_eq!(
        analysis.validate(),
        Err(ConfigError::ZeroPeriod {
            name: "countdown_secs"
        })
    );
}

#[test]
fn config_errors_render_readable_messages() {
    let err = ConfigError::Probability {
        name: "ch1.chance",
        p: 2.0,
    };
    assert_eq!(err.to_string(), "ch1.chance: probability 2 is outside [0, 1]");
}

#[test]
fn tactical_update_keeps_every_gauge_valid() {
    let mut state = TacticalState::new(&TacticalConfig::default()).unwrap();
    let mut rng = rng::seeded(99);
    for _ in 0..2_000 {
        state.update(&mut rng, NOON);
        assert!(state.sync_ratio().bounds().contains(state.sync_ratio().value()));
        assert!(state.at_field().bounds().contains(state.at_field().value()));
        assert!(state.target_distance().value() >= 0.0);
        assert!((0.0..=100.0).contains(&state.power().battery()));
    }
}
