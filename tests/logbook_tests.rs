// Host-side tests for the bounded alert log and how it is flushed to a display.

use panel_core::{flush_log, LogBook, LogKind, RecordingSink, Region, WallClock};

fn stamp(secs: u64) -> WallClock {
    WallClock::from_seconds_of_day(12 * 3600 + secs)
}

#[test]
fn entry_text_and_class() {
    let mut log = LogBook::with_capacity(50);
    log.push(
        WallClock::new(9, 5, 3),
        LogKind::Sys,
        "MAGI SYSTEM KERNEL ONLINE",
    );
    let e = log.newest().unwrap();
    assert_eq!(e.text(), "[09:05:03] MAGI SYSTEM KERNEL ONLINE");
    assert_eq!(e.kind.class(), "log-entry sys");
    assert_eq!(LogKind::Op.class(), "log-entry op");
    assert_eq!(LogKind::Warning.class(), "log-entry warning");
    assert_eq!(LogKind::Critical.class(), "log-entry critical");
}

#[test]
fn capacity_evicts_the_oldest() {
    let mut log = LogBook::with_capacity(50);
    for i in 0..50 {
        assert!(log.push(stamp(i), LogKind::Op, format!("entry {}", i)).is_none());
    }
    let evicted = log.push(stamp(50), LogKind::Op, "entry 50").unwrap();
    assert_eq!(evicted.message, "entry 0");
    assert_eq!(log.len(), 50);
    assert_eq!(log.newest().unwrap().message, "entry 50");
    assert_eq!(log.oldest().unwrap().message, "entry 1");
    let order: Vec<&str> = log.entries().map(|e| e.message.as_str()).take(3).collect();
    assert_eq!(order, ["entry 50", "entry 49", "entry 48"]);
}

#[test]
fn unrendered_entries_come_back_oldest_first_once() {
    let mut log = LogBook::with_capacity(5);
    log.push(stamp(0), LogKind::Sys, "a");
    log.push(stamp(1), LogKind::Op, "b");
    let fresh: Vec<String> = log.take_unrendered().into_iter().map(|e| e.message).collect();
    assert_eq!(fresh, ["a", "b"]);
    assert!(log.take_unrendered().is_empty());

    for m in ["c", "d", "e", "f", "g", "h", "i"] {
        log.push(stamp(2), LogKind::Op, m);
    }
    let fresh: Vec<String> = log.take_unrendered().into_iter().map(|e| e.message).collect();
    assert_eq!(fresh, ["e", "f", "g", "h", "i"]);
}

#[test]
fn flushed_display_mirrors_the_log() {
    let mut log = LogBook::with_capacity(50);
    let mut sink = RecordingSink::new();
    for i in 0..60 {
        log.push(stamp(i), LogKind::Warning, format!("entry {}", i));
    }
    flush_log(&mut log, Region::AlertLog, &mut sink);
    let lines = sink.log(Region::AlertLog);
    assert_eq!(lines.len(), 50);
    assert_eq!(lines[0].text, "[12:00:59] entry 59");
    assert_eq!(lines[49].text, "[12:00:10] entry 10");

    log.push(stamp(60), LogKind::Critical, "entry 60");
    flush_log(&mut log, Region::AlertLog, &mut sink);
    let lines = sink.log(Region::AlertLog);
    assert_eq!(lines.len(), 50);
    assert_eq!(lines[0].text, "[12:01:00] entry 60");
    assert_eq!(lines[0].class, "log-entry critical");
    assert_eq!(lines[49].text, "[12:00:11] entry 11");
}

#[test]
fn flushing_nothing_writes_nothing() {
    let mut log = LogBook::with_capacity(50);
    let mut sink = RecordingSink::new();
    flush_log(&mut log, Region::AlertLog, &mut sink);
    assert_eq!(sink.writes(), 0);
}
