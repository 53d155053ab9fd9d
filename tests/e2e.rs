mod common;

use common::synthetic_image::{horizontal_step, noise, solid_rgb, vertical_step};
use edge_ascii::diagnostics::{NoopObserver, Stage, TimingBreakdown};
use edge_ascii::stages::thin_edges;
use edge_ascii::{asciiize, AsciiError, AsciiParams, Asciiizer, Glyph};

fn params(x_win: usize, y_win: usize, raw_threshold: i64, blur: bool) -> AsciiParams {
    AsciiParams {
        edge_threshold: edge_ascii::config::squared_threshold(raw_threshold),
        particle_threshold: 0,
        x_win,
        y_win,
        blur,
    }
}

fn lines(text: &str) -> Vec<&str> {
    assert!(text.is_empty() || text.ends_with('\n'));
    text.split_terminator('\n').collect()
}

#[test]
fn solid_image_renders_blank_lines() {
    let _ = env_logger::builder().is_test(true).try_init();
    let img = solid_rgb(4, 4, [200, 30, 90]);
    for (x_win, y_win) in [(1, 1), (1, 2), (2, 1), (3, 3), (4, 4)] {
        let art = Asciiizer::new(params(x_win, y_win, 1, false))
            .unwrap()
            .run_image(&img, &mut NoopObserver)
            .unwrap();
        assert_eq!(art.edges.edge_count(), 0);
        let rows = lines(&art.text);
        assert_eq!(rows.len(), 4 / y_win);
        for row in rows {
            assert_eq!(row, " ".repeat(4 / x_win));
        }
    }
}

#[test]
fn vertical_edge_traces_a_bar_column() {
    let img = vertical_step(10, 10, 5);
    let art = Asciiizer::new(params(1, 1, 1, false))
        .unwrap()
        .run_image(&img, &mut NoopObserver)
        .unwrap();

    for y in 0..10 {
        for x in 0..10 {
            let expected = x == 4 && y >= 1;
            assert_eq!(art.edges.edges.get(x, y), expected, "edge at ({x},{y})");
        }
    }

    let rows = lines(&art.text);
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0], "          ");
    for row in &rows[1..] {
        assert_eq!(*row, "    |     ");
    }
}

#[test]
fn vertical_edge_in_wider_blocks() {
    let img = vertical_step(10, 10, 5);
    let art = Asciiizer::new(params(2, 2, 1, false))
        .unwrap()
        .run_image(&img, &mut NoopObserver)
        .unwrap();
    assert_eq!(art.text, "  |  \n".repeat(5));
}

#[test]
fn horizontal_edge_traces_a_dash_row() {
    let img = horizontal_step(10, 10, 5);
    let art = Asciiizer::new(params(1, 1, 1, false))
        .unwrap()
        .run_image(&img, &mut NoopObserver)
        .unwrap();
    let rows = lines(&art.text);
    assert_eq!(rows[4], " ---------");
    for (y, row) in rows.iter().enumerate().filter(|&(y, _)| y != 4) {
        assert_eq!(row.trim(), "", "row {y} should be blank");
    }
}

#[test]
fn blurred_vertical_edge_only_yields_bars_away_from_borders() {
    let img = vertical_step(40, 40, 20);
    let art = Asciiizer::new(params(1, 1, 1000, true))
        .unwrap()
        .run_image(&img, &mut NoopObserver)
        .unwrap();
    let rows = lines(&art.text);
    assert_eq!(rows.len(), 40);
    for row in &rows[10..30] {
        assert_eq!(row.chars().nth(19), Some('|'), "row: {row:?}");
        assert!(row.chars().all(|c| c == '|' || c == ' '), "row: {row:?}");
    }
}

#[test]
fn all_planes_cover_the_image() {
    let img = noise(23, 17, 7);
    for blur in [false, true] {
        let art = Asciiizer::new(params(3, 4, 2000, blur))
            .unwrap()
            .run_image(&img, &mut NoopObserver)
            .unwrap();
        assert_eq!(art.gray.len(), 23 * 17);
        assert_eq!(art.edges.edges.len(), 23 * 17);
        assert_eq!(art.edges.magnitude.len(), 23 * 17);
        assert_eq!(art.edges.angle.len(), 23 * 17);
        assert_eq!((art.glyphs.cols, art.glyphs.rows), (7, 4));

        let rows = lines(&art.text);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.chars().count() == 7));
    }
}

#[test]
fn noisy_image_produces_only_known_glyphs() {
    let img = noise(64, 48, 42);
    let art = Asciiizer::new(params(1, 1, 500, false))
        .unwrap()
        .run_image(&img, &mut NoopObserver)
        .unwrap();
    assert!(art.glyphs.ink() > 0, "noise should produce some edges");
    assert!(art
        .text
        .chars()
        .all(|c| matches!(c, '\\' | '|' | '/' | '-' | ' ' | '\n')));
    let blanks = art.glyphs.glyphs.iter().filter(|&&g| g == Glyph::Blank).count();
    assert_eq!(blanks + art.glyphs.ink(), 64 * 48);
}

#[test]
fn rethinning_the_output_changes_nothing() {
    let img = noise(32, 32, 3);
    let art = Asciiizer::new(params(1, 1, 300, true))
        .unwrap()
        .run_image(&img, &mut NoopObserver)
        .unwrap();
    let again = thin_edges(&art.edges.edges, &art.edges.magnitude, &art.edges.angle).unwrap();
    assert_eq!(again, art.edges.edges);
}

#[test]
fn observer_sees_every_stage_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("step.png");
    vertical_step(12, 8, 6).save(&path).unwrap();

    let mut timings = TimingBreakdown::default();
    let art = Asciiizer::new(AsciiParams::default())
        .unwrap()
        .run_path(&path, &mut timings)
        .unwrap();
    let labels: Vec<&str> = timings.stages.iter().map(|s| s.label.as_str()).collect();
    let expected: Vec<&str> = Stage::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, expected);
    assert_eq!(art.text, asciiize(&path, AsciiParams::default()).unwrap());
}

#[test]
fn unreadable_and_corrupt_inputs_fail() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.png");
    assert!(matches!(
        asciiize(&missing, AsciiParams::default()),
        Err(AsciiError::Open { .. })
    ));

    let corrupt = dir.path().join("corrupt.gif");
    std::fs::write(&corrupt, b"GIF89a but not really").unwrap();
    assert!(matches!(
        asciiize(&corrupt, AsciiParams::default()),
        Err(AsciiError::Decode { .. })
    ));
}

#[test]
fn zero_sized_windows_are_rejected_up_front() {
    let bad = AsciiParams {
        x_win: 0,
        ..Default::default()
    };
    assert!(matches!(
        Asciiizer::new(bad),
        Err(AsciiError::InvalidParams(_))
    ));
}
