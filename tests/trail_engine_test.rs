//! Integration tests for the trail engine
//!
//! These drive the public API the way a host does: samples in, per-frame
//! updates, buffer out.

use glam::Vec2;
use watercolor_trail::{touch_queue, BlendMode, Ease, TrailConfig, TrailEngine};

fn small_config() -> TrailConfig {
    TrailConfig {
        width: 100,
        height: 100,
        max_age: 1000.0,
        radius: 0.2,
        intensity: 0.5,
        smoothing: 0.0,
        min_force: 0.3,
        interpolate: 0.0,
        ..TrailConfig::default()
    }
}

/// A zig-zag stroke across the surface, one sample per step.
fn stroke(n: usize) -> Vec<Vec2> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n as f32;
            Vec2::new(t, 0.5 + 0.3 * (t * 12.0).sin())
        })
        .collect()
}

fn run(config: TrailConfig, samples: &[Vec2]) -> Vec<u8> {
    let mut engine = TrailEngine::new(config).unwrap();
    for chunk in samples.chunks(4) {
        for &p in chunk {
            engine.add_touch(p);
        }
        engine.update(1.0 / 60.0);
    }
    engine.buffer().as_rgba().to_vec()
}

#[test]
fn test_identical_runs_are_byte_identical() {
    let samples = stroke(120);
    let config = TrailConfig { interpolate: 2.0, ..small_config() };
    let a = run(config.clone(), &samples);
    let b = run(config, &samples);
    assert_eq!(a, b);
    assert!(a.chunks_exact(4).any(|px| px[0] > 0));
}

#[test]
fn test_points_live_exactly_max_age() {
    let mut engine = TrailEngine::new(small_config()).unwrap();
    engine.add_touch_xy(0.5, 0.5);
    let mut elapsed = 0.0_f32;
    for _ in 0..48 {
        engine.update(0.025);
        elapsed += 25.0;
        let present = !engine.points().is_empty();
        assert_eq!(present, elapsed <= 1000.0, "elapsed {elapsed}");
    }
}

#[test]
fn test_forces_stay_in_range() {
    let config = TrailConfig { interpolate: 3.0, smoothing: 0.4, ..small_config() };
    let mut engine = TrailEngine::new(config).unwrap();
    for p in stroke(200) {
        engine.add_touch(p);
    }
    assert!(engine.points().len() >= 200);
    for point in engine.points() {
        assert!(point.force >= 0.3 && point.force <= 1.0, "force {}", point.force);
        assert_eq!(point.age, 0.0);
    }
}

#[test]
fn test_subdivision_spacing_bound() {
    for k in [1.0_f32, 2.0, 4.0] {
        let config = TrailConfig { interpolate: k, ..small_config() };
        let bound = config.radius * 0.5 / k;
        let mut engine = TrailEngine::new(config).unwrap();
        engine.add_touch_xy(0.1, 0.2);
        engine.add_touch_xy(0.8, 0.7);
        let points = engine.points();
        assert!(points.len() > 2);
        for pair in points.windows(2) {
            let gap = (pair[1].position - pair[0].position).length();
            assert!(gap <= bound + 1e-5, "k={k} gap={gap} bound={bound}");
        }
    }
}

#[test]
fn test_reset_before_next_touch() {
    let mut engine = TrailEngine::new(TrailConfig { smoothing: 0.8, ..small_config() }).unwrap();
    for p in stroke(10) {
        engine.add_touch(p);
    }
    assert!(engine.force() > 0.0);
    engine.update(2.0);
    assert_eq!(engine.force(), 0.0);
    engine.add_touch_xy(0.5, 0.5);
    assert_eq!(engine.force(), 0.0);
}

#[test]
fn test_stamp_spreads_as_it_ages() {
    let mut engine = TrailEngine::new(small_config()).unwrap();
    engine.add_touch_xy(0.5, 0.5);
    engine.update(0.1);
    let young_edge = engine.buffer().trail_strength(50 + 30, 50);
    engine.update(0.8);
    let old_edge = engine.buffer().trail_strength(50 + 30, 50);
    assert_eq!(young_edge, 0.0);
    assert!(old_edge > 0.0);
}

#[test]
fn test_out_of_range_samples_are_tolerated() {
    let mut engine = TrailEngine::new(small_config()).unwrap();
    engine.add_touch_xy(-3.0, 7.0);
    engine.add_touch_xy(10.0, -10.0);
    engine.update(0.016);
    assert_eq!(engine.points().len(), 2);
    assert!(engine.buffer().is_black());
}

#[test]
fn test_every_blend_mode_composites() {
    for blend in [
        BlendMode::Screen,
        BlendMode::SourceOver,
        BlendMode::Lighten,
        BlendMode::Lighter,
    ] {
        let mut engine = TrailEngine::new(TrailConfig { blend, ..small_config() }).unwrap();
        engine.add_touch_xy(0.5, 0.5);
        engine.update(0.0);
        assert!(engine.buffer().trail_strength(50, 50) > 0.4, "{blend:?}");
    }
    // Multiply over black stays black
    let mut engine =
        TrailEngine::new(TrailConfig { blend: BlendMode::Multiply, ..small_config() }).unwrap();
    engine.add_touch_xy(0.5, 0.5);
    engine.update(0.0);
    assert!(engine.buffer().is_black());
}

#[test]
fn test_custom_ease_controls_fade() {
    fn step(x: f32) -> f32 {
        if x > 0.5 { 1.0 } else { 0.0 }
    }
    let mut engine = TrailEngine::new(TrailConfig { ease: Ease::Custom(step), ..small_config() }).unwrap();
    engine.add_touch_xy(0.5, 0.5);
    engine.update(0.4);
    assert!(engine.buffer().trail_strength(50, 50) > 0.4);
    engine.update(0.2);
    assert!(engine.buffer().is_black(), "curve drops to zero past half life");
    assert_eq!(engine.points().len(), 1);
}

#[test]
fn test_driver_matches_direct_engine() {
    let samples = stroke(64);
    let direct = run(small_config(), &samples);

    let engine = TrailEngine::new(small_config()).unwrap();
    let (mut tx, mut driver) = touch_queue(engine, 16);
    for chunk in samples.chunks(4) {
        for &p in chunk {
            assert!(tx.push(p));
        }
        driver.frame(1.0 / 60.0);
    }
    assert_eq!(driver.engine().buffer().as_rgba(), direct.as_slice());
}

#[test]
fn test_snapshot_png() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("trail.png");
    let mut engine = TrailEngine::new(small_config()).unwrap();
    engine.add_touch_xy(0.25, 0.75);
    engine.update(0.2);
    engine.buffer().save_png(&path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (100, 100));
    assert_eq!(img.as_raw().as_slice(), engine.buffer().as_rgba());
}
