use panel_core::WallClock;

/// Local wall-clock time from the browser.
pub fn local_now() -> WallClock {
    let d = js_sys::Date::new_0();
    WallClock::new(
        d.get_hours() as u8,
        d.get_minutes() as u8,
        d.get_seconds() as u8,
    )
}
