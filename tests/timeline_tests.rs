use scrubline::{Scrubline, Segment, Timeline, TimelineStats};

#[test]
fn test_basic_recording_and_lookup() {
    let mut timeline = Timeline::new();

    // Record three phases: (position, elapsed, payload)
    timeline.append(0.0, 0.0, "warmup").unwrap();
    timeline.append(40.0, 12.5, "sprint").unwrap();
    timeline.append(160.0, 9.0, "cooldown").unwrap();

    assert_eq!(timeline.len(), 3);
    assert!(timeline.has_origin());

    // Time axis accumulates elapsed deltas
    assert_eq!(timeline.at_time(0.0).0, "warmup");
    assert_eq!(timeline.at_time(13.0).0, "sprint");
    assert_eq!(timeline.at_time(1000.0).0, "cooldown");

    // Position axis resolves through the expanding search
    assert_eq!(timeline.at_position(39.9).0, "warmup");
    assert_eq!(timeline.at_position(40.0).0, "sprint");
    assert_eq!(timeline.at_position(200.0).0, "cooldown");

    // Index access mirrors insertion order
    let (payload, segment) = timeline.at_index(1);
    assert_eq!(payload, "sprint");
    assert_eq!(segment.data_index(), 1);
}

#[test]
fn test_backward_position_leaves_empty_interval() {
    let mut timeline = Timeline::new();
    timeline.append(0.0, 0.0, "a").unwrap();
    timeline.append(5.0, 2.0, "b").unwrap();
    timeline.append(3.0, 3.0, "c").unwrap();

    // Appends accumulate time regardless of position direction
    let times: Vec<f64> = (0..3).map(|i| timeline.at_index(i).1.time()).collect();
    assert_eq!(times, vec![0.0, 2.0, 5.0]);

    let (_, first) = timeline.at_index(0);
    let (_, second) = timeline.at_index(1);
    let (_, third) = timeline.at_index(2);
    assert_eq!(first.time_next(), 2.0);
    assert_eq!(second.time_next(), 5.0);
    assert_eq!(third.time_next(), f64::INFINITY);

    // Temporal intervals tile, so every entry stays reachable by time
    assert_eq!(timeline.at_time(1.9).0, "a");
    assert_eq!(timeline.at_time(2.0).0, "b");
    assert_eq!(timeline.at_time(4.9).0, "b");
    assert_eq!(timeline.at_time(5.0).0, "c");

    // "b" spans positions [5, 3), an empty interval: no position hits it
    assert_eq!(timeline.at_position(2.0).0, "a");
    assert_eq!(timeline.at_position(5.0).0, "c");
    assert_eq!(timeline.at_position(100.0).0, "c");

    // It remains reachable through its neighbors
    let (payload, _) = timeline.next_of(&first);
    assert_eq!(payload, "b");
    let (payload, _) = timeline.previous_of(&third);
    assert_eq!(payload, "b");
}

#[test]
fn test_position_lookup_is_anchor_independent() {
    let mut timeline = Timeline::new();
    for i in 0..100u32 {
        timeline.append(i as f64 * 10.0, 1.0, i).unwrap();
    }

    // Park the remembered index at the far end, then jump to the front
    assert_eq!(timeline.at_position(995.0).0, 99);
    assert_eq!(timeline.at_position(0.5).0, 0);

    // And from the front back to an arbitrary middle entry
    assert_eq!(timeline.at_position(473.0).0, 47);

    // Interval bounds are half-open: a boundary belongs to the new entry
    assert_eq!(timeline.at_position(480.0).0, 48);
    assert_eq!(timeline.at_position(479.999).0, 47);
}

#[test]
fn test_scrubbing_walk_hits_every_entry() {
    let mut timeline = Timeline::new();
    for i in 0..50u32 {
        timeline.append(i as f64, 1.0, i).unwrap();
    }

    // Small forward steps, the intended access pattern
    for i in 0..50 {
        let (payload, segment) = timeline.at_position(i as f64 + 0.5);
        assert_eq!(payload, i);
        assert!(segment.contains_position(i as f64 + 0.5));
    }

    // And back again
    for i in (0..50).rev() {
        assert_eq!(timeline.at_position(i as f64 + 0.25).0, i);
    }

    let stats = timeline.stats();
    assert_eq!(stats.position_queries, 100);
    assert_eq!(stats.position_misses, 0);
}

#[test]
fn test_add_default_at_zero_is_idempotent() {
    let mut timeline = Timeline::new();

    timeline.add_default_at_zero("empty").unwrap();
    timeline.add_default_at_zero("ignored").unwrap();
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.first_payload(), "empty");

    // Recording continues on top of the seed
    timeline.append(4.0, 1.5, "loaded").unwrap();
    timeline.add_default_at_zero("still ignored").unwrap();
    assert_eq!(timeline.len(), 2);

    // Queries below the first recorded position now resolve to the seed
    assert_eq!(timeline.at_position(0.0).0, "empty");
    assert_eq!(timeline.at_time(0.0).0, "empty");
}

#[test]
fn test_add_default_at_zero_after_nonzero_entries_fails() {
    let mut timeline = Timeline::new();
    timeline.append(3.0, 0.0, "late start").unwrap();

    // No origin entry exists and a zero-elapsed append is not allowed
    assert!(timeline.add_default_at_zero("seed").is_err());
    assert_eq!(timeline.len(), 1);
    assert!(!timeline.has_origin());
}

#[test]
fn test_clone_is_independent() {
    let mut timeline = Timeline::new();
    timeline.append(0.0, 0.0, 1u32).unwrap();
    timeline.append(10.0, 2.0, 2u32).unwrap();

    let mut copy = timeline.clone();
    copy.append(20.0, 2.0, 3u32).unwrap();
    copy.clear();

    // The original never observes the copy's appends or its clear
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.last_payload(), 2);
    assert_eq!(timeline.last_segment().position_next(), f64::INFINITY);
    assert!(copy.is_empty());
}

#[test]
fn test_clear_then_reuse() {
    let mut timeline = Timeline::new();
    for i in 0..20u32 {
        timeline.append(i as f64, 1.0, i).unwrap();
    }
    timeline.at_position(15.5);

    timeline.clear();
    assert!(timeline.is_empty());
    assert!(!timeline.has_origin());
    assert_eq!(timeline.stats(), TimelineStats::new());
    assert!(timeline.at_position(15.5).1.is_invalid());

    // A fresh first entry accepts zero elapsed again
    timeline.append(0.0, 0.0, 100u32).unwrap();
    assert_eq!(timeline.at_position(0.0).0, 100);
}

#[test]
fn test_stats_count_operations() {
    let mut timeline = Timeline::new();
    timeline.append(0.0, 0.0, 1u8).unwrap();
    timeline.append(10.0, 1.0, 2u8).unwrap();

    // Failed appends are not counted
    assert!(timeline.append(20.0, 0.0, 3u8).is_err());

    timeline.at_position(5.0);
    timeline.at_position(15.0);
    timeline.at_position(-1.0);

    let stats = timeline.stats();
    assert_eq!(stats.appends, 2);
    assert_eq!(stats.position_queries, 3);
    assert_eq!(stats.position_misses, 1);
}

#[test]
fn test_first_and_last_accessors() {
    let mut timeline = Timeline::new();
    timeline.append(0.0, 0.0, "first").unwrap();
    timeline.append(8.0, 4.0, "middle").unwrap();
    timeline.append(16.0, 4.0, "last").unwrap();

    assert_eq!(timeline.first_payload(), "first");
    assert_eq!(timeline.last_payload(), "last");
    assert_eq!(timeline.first_segment().data_index(), 0);
    assert_eq!(timeline.last_segment().data_index(), 2);
    assert_eq!(timeline.last_segment().time(), 8.0);
}

#[test]
fn test_neighbor_traversal_walks_the_timeline() {
    let mut timeline = Timeline::new();
    for i in 0..5u32 {
        timeline.append(i as f64 * 2.0, 1.0, i).unwrap();
    }

    // Forward walk from the sentinel visits every entry in order
    let mut cursor = Segment::INVALID;
    let mut visited = Vec::new();
    loop {
        let (payload, segment) = timeline.next_of(&cursor);
        if segment.is_invalid() {
            break;
        }
        visited.push(payload);
        cursor = segment;
    }
    assert_eq!(visited, vec![0, 1, 2, 3, 4]);

    // Backward walk from the last entry
    let mut cursor = timeline.last_segment();
    let mut count = 1;
    loop {
        let (_, segment) = timeline.previous_of(&cursor);
        if segment.is_invalid() {
            break;
        }
        count += 1;
        cursor = segment;
    }
    assert_eq!(count, 5);
}

#[test]
fn test_prelude_covers_common_usage() {
    use scrubline::prelude::*;

    // The prelude's Result is the crate's one-parameter alias.
    fn record() -> Result<Timeline<u32>> {
        let mut timeline = Timeline::new();
        timeline.append(0.0, 0.0, 1)?;
        timeline.append(5.0, 1.0, 2)?;
        Ok(timeline)
    }

    let mut timeline = record().unwrap();
    assert_eq!(timeline.at_position(6.0).0, 2);
    assert!(timeline.last_segment().is_valid());
    assert!(Segment::INVALID.is_invalid());
}

#[test]
fn test_stats_and_segments_serialize_to_json() {
    let mut timeline = Timeline::new();
    timeline.append(0.0, 0.0, 1u8).unwrap();
    timeline.append(10.0, 2.0, 2u8).unwrap();
    timeline.at_position(3.0);

    let json = serde_json::to_string(&timeline.stats()).unwrap();
    assert!(json.contains("\"appends\":2"));
    let stats: TimelineStats = serde_json::from_str(&json).unwrap();
    assert_eq!(stats, timeline.stats());

    // A linked segment has finite bounds and survives JSON intact
    let (_, first) = timeline.at_index(0);
    let json = serde_json::to_string(&first).unwrap();
    let segment: Segment = serde_json::from_str(&json).unwrap();
    assert_eq!(segment.position_next(), 10.0);
    assert_eq!(segment.time_next(), 2.0);
}

#[test]
fn test_alias_and_version() {
    let mut timeline: Scrubline<u64> = Scrubline::new();
    timeline.append(0.0, 0.0, 42).unwrap();
    assert_eq!(timeline.at_position(0.0).0, 42);

    assert!(!scrubline::VERSION.is_empty());
}
