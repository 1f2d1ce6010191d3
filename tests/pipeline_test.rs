//! End-to-end pipeline tests.
//!
//! The PNG-sequence sink exercises the full render loop without any external
//! binary; the ffmpeg tests run only when an `ffmpeg` binary is on PATH.

#![allow(clippy::unwrap_used)]

use gridvid::encode::is_ffmpeg_available;
use gridvid::prelude::*;

/// Route the crate's `debug!`/`trace!` events into the captured test output.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn sine_frames(frames: usize, len: usize) -> Vec<Vec<f32>> {
    (0..frames)
        .map(|f| {
            (0..len)
                .map(|i| (i as f32 * 0.1 + f as f32 * 0.5).sin())
                .collect()
        })
        .collect()
}

fn field_frames(frames: usize, rows: usize, cols: usize) -> Vec<Vec<Vec<f32>>> {
    (0..frames)
        .map(|f| {
            (0..rows)
                .map(|r| {
                    (0..cols)
                        .map(|c| ((r * cols + c) as f32 * 0.05 + f as f32).cos())
                        .collect()
                })
                .collect()
        })
        .collect()
}

// ============================================================================
// Frame-count and axis properties through the PNG sink
// ============================================================================

#[test]
fn line_animation_writes_one_png_per_input_frame() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let grid = LineGrid::from_frames(&sine_frames(3, 100)).unwrap();
    let anim = LineAnimation::new(grid)
        .dimensions(200, 120)
        .margin(10)
        .build()
        .unwrap();

    let mut sink = PngSequence::new(dir.path().join("frames")).unwrap();
    let written = encode_animation(&anim, &mut sink).unwrap();
    assert_eq!(written, 3);
    assert_eq!(sink.frames_written(), 3);
    sink.finish().unwrap();

    let count = std::fs::read_dir(dir.path().join("frames")).unwrap().count();
    assert_eq!(count, 3);
}

#[test]
fn line_animation_y_axis_is_global_extent() {
    // 3 frames, 100 samples, values in [-1, 1], x range (-50, 50).
    let frames = sine_frames(3, 100);
    let grid = LineGrid::from_frames(&frames).unwrap();
    let anim = LineAnimation::new(grid).build().unwrap();

    let global_min = frames
        .iter()
        .flatten()
        .copied()
        .fold(f32::INFINITY, f32::min);
    let global_max = frames
        .iter()
        .flatten()
        .copied()
        .fold(f32::NEG_INFINITY, f32::max);

    let (y_min, y_max) = anim.y_extent();
    assert!((y_min - global_min).abs() < 1e-6);
    assert!((y_max - global_max).abs() < 1e-6);
    assert_eq!(anim.x_range(), (-50.0, 50.0));
}

#[test]
fn contour_animation_writes_one_png_per_input_frame() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    // Shape (5, 20, 20): 5 frames of 20x20 filled contours.
    let grid = FieldGrid::from_frames(&field_frames(5, 20, 20)).unwrap();
    let anim = ContourAnimation::new(grid)
        .dimensions(120, 100)
        .margin(10)
        .build()
        .unwrap();
    assert_eq!(anim.level_count(), 20);

    let mut sink = PngSequence::new(dir.path().join("frames")).unwrap();
    let written = encode_animation(&anim, &mut sink).unwrap();
    assert_eq!(written, 5);
    sink.finish().unwrap();

    let count = std::fs::read_dir(dir.path().join("frames")).unwrap().count();
    assert_eq!(count, 5);
}

#[test]
fn contour_levels_are_independent_per_frame() {
    let f0 = vec![vec![0.0_f32, 1.0], vec![2.0, 3.0]];
    let f1 = vec![vec![10.0_f32, 20.0], vec![30.0, 40.0]];
    let grid = FieldGrid::from_frames(&[f0, f1]).unwrap();
    let anim = ContourAnimation::new(grid).build().unwrap();

    assert_eq!(anim.frame_level_extent(0), Some((0.0, 3.0)));
    assert_eq!(anim.frame_level_extent(1), Some((10.0, 40.0)));
}

#[test]
fn malformed_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.mp4");

    let mut frames = sine_frames(3, 100);
    frames[2].pop();

    let err = create_line_video(&frames, &out, Some((-50.0, 50.0))).unwrap_err();
    assert!(matches!(err, Error::FrameLengthMismatch { frame: 2, .. }));
    assert!(!out.exists());
}

// ============================================================================
// ffmpeg smoke tests (skipped when the binary is missing)
// ============================================================================

#[test]
fn ffmpeg_line_video_end_to_end() {
    if !is_ffmpeg_available() {
        eprintln!("skipping: ffmpeg not on PATH");
        return;
    }

    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("line.mp4");

    let stats = create_line_video(&sine_frames(3, 100), &out, None).unwrap();

    assert_eq!(stats.frames, 3);
    assert_eq!((stats.width, stats.height), (1000, 600));
    assert!(out.exists());
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn ffmpeg_field_video_end_to_end() {
    if !is_ffmpeg_available() {
        eprintln!("skipping: ffmpeg not on PATH");
        return;
    }

    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("field.mp4");

    let stats = create_field_video(&field_frames(5, 20, 20), &out).unwrap();

    assert_eq!(stats.frames, 5);
    assert!(out.exists());
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}
