// Host-side tests for the umbilical/internal power model and how the
// tactical screen presents it.

use panel_core::rng;
use panel_core::{
    BatteryBand, PowerEvent, PowerParams, PowerSource, PowerSystem, RecordingSink, Region,
    TacticalConfig, TacticalState, TimerUrgency, WallClock,
};

const NOON: WallClock = WallClock::new(12, 0, 0);

fn quiet_power() -> PowerParams {
    PowerParams {
        switch_chance: 0.0,
        ..PowerParams::default()
    }
}

#[test]
fn external_power_keeps_battery_full() {
    let mut power = PowerSystem::new(quiet_power());
    let mut rng = rng::seeded(1);
    for _ in 0..1_000 {
        assert_eq!(power.tick(&mut rng), None);
        assert_eq!(power.battery(), 100.0);
    }
    assert_eq!(power.source(), PowerSource::External);
}

#[test]
fn internal_countdown_reaches_exactly_zero() {
    let mut power = PowerSystem::new(quiet_power());
    let mut rng = rng::seeded(2);
    assert!(power.switch_to_internal());
    assert_eq!(power.remaining_ticks(), 300);

    for i in 1..=300u32 {
        power.tick(&mut rng);
        assert_eq!(power.remaining_ticks(), 300 - i);
        let expected = (300 - i) as f64 / 300.0 * 100.0;
        assert!((power.battery() - expected).abs() < 1e-9);
    }
    assert_eq!(power.battery(), 0.0);

    for _ in 0..50 {
        power.tick(&mut rng);
        assert_eq!(power.remaining_ticks(), 0);
        assert_eq!(power.battery(), 0.0);
    }
}

#[test]
fn switching_is_one_way_and_idempotent() {
    let mut power = PowerSystem::default();
    assert!(power.switch_to_internal());
    assert!(!power.switch_to_internal());
    assert!(power.is_internal());
    assert_eq!(power.source().label(), "INTERNAL");
}

#[test]
fn certain_switch_fires_once() {
    let mut power = PowerSystem::new(PowerParams {
        switch_chance: 1.0,
        ..PowerParams::default()
    });
    let mut rng = rng::seeded(3);
    assert_eq!(power.tick(&mut rng), Some(PowerEvent::SwitchedToInternal));
    for _ in 0..10 {
        assert_eq!(power.tick(&mut rng), None);
    }
}

#[test]
fn battery_bands_follow_thresholds() {
    assert_eq!(BatteryBand::from_level(19.9).class(), "progress-bar critical");
    assert_eq!(BatteryBand::from_level(20.0).class(), "progress-bar low");
    assert_eq!(BatteryBand::from_level(49.9).class(), "progress-bar low");
    assert_eq!(BatteryBand::from_level(50.0).class(), "progress-bar");
}

#[test]
fn timer_turns_red_under_a_minute() {
    assert_eq!(TimerUrgency::from_remaining(60), TimerUrgency::Amber);
    assert_eq!(TimerUrgency::from_remaining(59), TimerUrgency::Red);
    assert_eq!(TimerUrgency::Red.color(), "var(--eva-red)");
    assert_eq!(TimerUrgency::Amber.color(), "var(--eva-amber)");
}

#[test]
fn severed_umbilical_is_announced_once_on_the_display() {
    let config = TacticalConfig {
        power: quiet_power(),
        ..TacticalConfig::default()
    };
    let mut state = TacticalState::new(&config).unwrap();
    let mut sink = RecordingSink::new();

    assert!(state.sever_umbilical(NOON));
    assert!(!state.sever_umbilical(NOON));

    let view = state.view();
    assert!(view.power_switched);
    state.render(&view, &mut sink);

    assert_eq!(sink.text(Region::PowerStatus), Some("INTERNAL"));
    assert_eq!(sink.class(Region::PowerStatus), Some("warning"));
    assert_eq!(sink.text(Region::InternalTimer), Some("05:00"));
    assert_eq!(sink.style(Region::InternalTimer, "display"), Some("inline"));
    assert_eq!(
        sink.style(Region::InternalTimer, "color"),
        Some("var(--eva-amber)")
    );
    let log = sink.log(Region::AlertLog);
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].class, "log-entry critical");
    assert_eq!(
        log[0].text,
        "[12:00:00] UMBILICAL CABLE SEVERED - SWITCHING TO INTERNAL POWER"
    );

    // later renders leave the power label alone
    assert!(!state.view().power_switched);
}

#[test]
fn internal_timer_hidden_on_external_power_and_red_near_the_end() {
    let config = TacticalConfig {
        power: quiet_power(),
        ..TacticalConfig::default()
    };
    let mut state = TacticalState::new(&config).unwrap();
    let mut sink = RecordingSink::new();
    let mut rng = rng::seeded(4);

    let view = state.update(&mut rng, NOON);
    state.render(&view, &mut sink);
    assert_eq!(sink.style(Region::InternalTimer, "display"), Some("none"));
    assert_eq!(sink.style(Region::BatteryBar, "width"), Some("100%"));

    state.sever_umbilical(NOON);
    for _ in 0..250 {
        let view = state.update(&mut rng, NOON);
        state.render(&view, &mut sink);
    }
    assert_eq!(sink.text(Region::InternalTimer), Some("00:50"));
    assert_eq!(
        sink.style(Region::InternalTimer, "color"),
        Some("var(--eva-red)")
    );
    assert_eq!(sink.class(Region::BatteryBar), Some("progress-bar critical"));
}
