//! Scrubbing a recorded replay
//!
//! Records telemetry frames for a lap, then drags a playhead across the
//! recording the way a replay UI would. Position lookups expand outward
//! from the previous hit, so dragging stays cheap no matter how long the
//! recording gets.
//!
//! Run with: cargo run --example timeline_scrubbing

use scrubline::Scrubline;

/// One recorded telemetry frame. Any `Copy + Default` value works as a
/// timeline payload.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Frame {
    gear: u8,
    speed_kmh: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Scrubline Replay Scrubbing ===\n");

    // 1. Record a lap: distance along the track, seconds since last frame
    println!("1. Recording 2,000 telemetry frames:");
    let mut replay: Scrubline<Frame> = Scrubline::with_capacity(2_000);
    for i in 0..2_000u32 {
        let frame = Frame {
            gear: (i % 6 + 1) as u8,
            speed_kmh: 120.0 + (i % 80) as f32,
        };
        replay.append(i as f64 * 2.5, 0.05, frame)?;
    }
    let lap = replay.last_segment();
    println!(
        "   ✓ {} frames, track 0..{} m, lap time {:.1} s\n",
        replay.len(),
        lap.position(),
        lap.time()
    );

    // 2. Drag the playhead forward in small steps
    println!("2. Dragging the playhead forward:");
    for step in 1..=5 {
        let position = step as f64 * 230.0;
        let (frame, segment) = replay.at_position(position);
        println!(
            "   {:>6.1} m -> gear {} at {:>5.1} km/h (frame {})",
            position,
            frame.gear,
            frame.speed_kmh,
            segment.data_index()
        );
    }
    println!();

    // 3. Jump to the end, then back to the start
    println!("3. Seeking across the whole replay:");
    for position in [4_990.0, 3.0, 2_600.0] {
        let (frame, segment) = replay.at_position(position);
        println!(
            "   seek {:>6.1} m -> frame {} (gear {})",
            position,
            segment.data_index(),
            frame.gear
        );
    }
    println!();

    // 4. The time axis answers "what was happening at second T"
    println!("4. Time lookups:");
    for time in [0.05, 25.0, 99.9] {
        let (frame, segment) = replay.at_time(time);
        println!(
            "   {:>5.2} s -> frame {} at {:.1} km/h",
            time,
            segment.data_index(),
            frame.speed_kmh
        );
    }
    println!();

    // 5. Every lookup was a hit; misses would return the sentinel pair
    println!("5. Lookup accounting:");
    let stats = replay.stats();
    println!(
        "   {} position queries, {} misses",
        stats.position_queries, stats.position_misses
    );

    let (missing, segment) = replay.at_position(-10.0);
    println!(
        "   position -10 m -> default frame {:?}, segment valid: {}",
        missing,
        segment.is_valid()
    );
    println!();

    println!("=== Replay Scrubbing Complete ===");
    Ok(())
}
