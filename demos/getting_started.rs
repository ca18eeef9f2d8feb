//! Getting started with Scrubline
//!
//! Records a small timeline and walks through every way to read it back.
//!
//! Run with: cargo run --example getting_started

use scrubline::{Segment, Timeline};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Scrubline Getting Started ===\n");

    // 1. Create and seed a timeline
    println!("1. Creating a timeline:");
    let mut timeline = Timeline::new();
    timeline.add_default_at_zero("idle")?;
    println!("   ✓ Seeded with \"idle\" at the origin\n");

    // 2. Record entries: (position, elapsed, payload)
    println!("2. Recording a run:");
    timeline.append(12.0, 3.0, "walk")?;
    timeline.append(48.0, 6.0, "sprint")?;
    timeline.append(60.0, 4.5, "cooldown")?;
    println!("   ✓ Recorded {} entries", timeline.len());
    for i in 0..timeline.len() as i32 {
        let (state, segment) = timeline.at_index(i);
        println!("   {} {}", segment, state);
    }
    println!();

    // 3. Query by position
    println!("3. Position lookups:");
    for position in [5.0, 30.0, 55.0, 500.0] {
        let (state, _) = timeline.at_position(position);
        println!("   position {:>5} -> {}", position, state);
    }
    println!();

    // 4. Query by time
    println!("4. Time lookups:");
    for time in [0.0, 4.0, 10.0, 60.0] {
        let (state, _) = timeline.at_time(time);
        println!("   time {:>5} -> {}", time, state);
    }
    println!();

    // 5. Walk neighbors from the sentinel
    println!("5. Walking the timeline:");
    let mut cursor = Segment::INVALID;
    loop {
        let (state, segment) = timeline.next_of(&cursor);
        if segment.is_invalid() {
            break;
        }
        println!("   entry {}: {}", segment.data_index(), state);
        cursor = segment;
    }
    println!();

    // 6. Misses return the sentinel pair instead of failing
    println!("6. Out-of-range lookups:");
    let (state, segment) = timeline.at_time(-1.0);
    println!(
        "   time -1 -> payload {:?}, segment valid: {}",
        state,
        segment.is_valid()
    );
    println!();

    // 7. Operation counters
    println!("7. Stats:");
    let stats = timeline.stats();
    println!("   Appends: {}", stats.appends);
    println!("   Position queries: {}", stats.position_queries);
    println!("   Position misses: {}", stats.position_misses);
    println!();

    println!("=== Getting Started Complete ===");
    Ok(())
}
