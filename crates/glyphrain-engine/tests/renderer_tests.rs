//! Frame rendering against a recording context.

use glyphrain_core::{Column, RainConfig};
use glyphrain_engine::recording::{DrawCall, RecordingCanvas, RecordingContext};
use glyphrain_engine::{Canvas, RandomSource, RenderStyle, Renderer};

fn fixed(max: u32) -> u32 {
    123_456_789 % max
}

fn scenario_style() -> RenderStyle {
    RenderStyle::from_config(&RainConfig {
        tile_size: 10,
        fade_factor: 0.5,
        glow_color: "#00ff00".to_string(),
        ..RainConfig::default()
    })
    .expect("valid config")
}

fn sized_canvas(width: u32, height: u32) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new(width as f64, height as f64);
    canvas.set_size(width, height);
    canvas
}

fn draw_once(
    ctx: &mut RecordingContext,
    canvas: &RecordingCanvas,
    columns: &mut [Column],
    style: &RenderStyle,
    random: &mut impl RandomSource,
) {
    let max_stack_height = canvas.height().div_ceil(style.tile_size);
    Renderer::new(ctx, canvas, columns, max_stack_height, style, random).draw();
}

fn glow_paints(calls: &[DrawCall]) -> Vec<&DrawCall> {
    calls
        .iter()
        .filter(|call| matches!(call, DrawCall::FillText { shadow_blur, .. } if *shadow_blur > 0.0))
        .collect()
}

#[test]
fn test_scenario_single_column() {
    let style = scenario_style();
    let canvas = sized_canvas(100, 100);
    let mut ctx = RecordingContext::new();
    let mut random = fixed;
    let mut columns = [Column {
        x: 0,
        stack_height: 10,
        stack_counter: 5,
    }];

    draw_once(&mut ctx, &canvas, &mut columns, &style, &mut random);

    assert!(matches!(
        ctx.calls()[0],
        DrawCall::FillRect { x, y, width, height, .. }
            if (x, y, width, height) == (0.0, 0.0, 100.0, 100.0)
    ));
    assert_eq!(ctx.state().font, "8px monospace");
    assert_eq!(ctx.texts().count(), 1);
    assert_eq!(columns[0].stack_counter, 6);

    // Three more frames bring the stream to its last slot.
    for _ in 0..3 {
        draw_once(&mut ctx, &canvas, &mut columns, &style, &mut random);
    }
    assert_eq!(columns[0].stack_counter, 9);
    assert!(glow_paints(ctx.calls()).is_empty());

    ctx.take_calls();
    draw_once(&mut ctx, &canvas, &mut columns, &style, &mut random);
    let glows = glow_paints(ctx.calls());
    assert_eq!(glows.len(), 1);
    match glows[0] {
        DrawCall::FillText {
            shadow_color,
            shadow_blur,
            ..
        } => {
            assert_eq!(shadow_color, "#00ff00");
            assert_eq!(*shadow_blur, 10.0);
        }
        other => panic!("unexpected call {other:?}"),
    }
    assert!(ctx.calls().contains(&DrawCall::Save));
    assert!(ctx.calls().contains(&DrawCall::Restore));

    // 10 + 123456789 % 10
    assert_eq!(columns[0].stack_counter, 0);
    assert_eq!(columns[0].stack_height, 19);
}

#[test]
fn test_background_fill_precedes_glyphs() {
    let style = scenario_style();
    let canvas = sized_canvas(80, 60);
    let mut ctx = RecordingContext::new();
    let mut random = fixed;
    let mut columns: Vec<Column> = (0..8)
        .map(|i| Column {
            x: i * 10,
            stack_height: 12,
            stack_counter: i as i32 - 2,
        })
        .collect();

    for _ in 0..5 {
        ctx.take_calls();
        draw_once(&mut ctx, &canvas, &mut columns, &style, &mut random);

        let fills: Vec<usize> = ctx
            .calls()
            .iter()
            .enumerate()
            .filter(|(_, call)| matches!(call, DrawCall::FillRect { .. }))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(fills, vec![0]);
        assert!(matches!(
            &ctx.calls()[0],
            DrawCall::FillRect { width, height, fill_style, .. }
                if *width == 80.0 && *height == 60.0 && fill_style == "rgba(17, 17, 17, 0.5)"
        ));
    }
}

#[test]
fn test_glyph_color_and_baseline() {
    let style = scenario_style();
    let canvas = sized_canvas(100, 100);
    let mut ctx = RecordingContext::new();
    let mut random = fixed;
    let mut columns = [Column {
        x: 40,
        stack_height: 15,
        stack_counter: 0,
    }];

    draw_once(&mut ctx, &canvas, &mut columns, &style, &mut random);

    let text = ctx.texts().next().expect("one glyph");
    match text {
        DrawCall::FillText {
            text,
            x,
            y,
            fill_style,
            ..
        } => {
            // No tile set: '!' + 123456789 % 94
            assert_eq!(text, "*");
            assert_eq!((*x, *y), (40.0, 10.0));
            assert_eq!(fill_style, "rgb(0, 133, 41)");
        }
        other => panic!("unexpected call {other:?}"),
    }
}

#[test]
fn test_waiting_columns_never_paint() {
    let style = scenario_style();
    let canvas = sized_canvas(100, 100);
    let mut ctx = RecordingContext::new();
    let mut random = fixed;
    let mut columns = [
        Column {
            x: 0,
            stack_height: 10,
            stack_counter: -3,
        },
        Column {
            x: 10,
            stack_height: 10,
            stack_counter: 2,
        },
    ];

    for _ in 0..3 {
        draw_once(&mut ctx, &canvas, &mut columns, &style, &mut random);
    }
    let xs: Vec<f64> = ctx
        .texts()
        .map(|call| match call {
            DrawCall::FillText { x, .. } => *x,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(xs, vec![10.0, 10.0, 10.0]);
    assert_eq!(columns[0].stack_counter, 0);

    draw_once(&mut ctx, &canvas, &mut columns, &style, &mut random);
    assert_eq!(ctx.texts().count(), 5);
}

#[test]
fn test_tile_set_glyphs_only() {
    let style = RenderStyle {
        tile_set: Some(RainConfig::tiles_from_chars("01")),
        ..scenario_style()
    };
    let canvas = sized_canvas(100, 100);
    let mut ctx = RecordingContext::new();
    let mut counter = 0u32;
    let mut random = move |max: u32| {
        counter = counter.wrapping_add(7);
        counter % max
    };
    let mut columns: Vec<Column> = (0..10)
        .map(|i| Column {
            x: i * 10,
            stack_height: 10,
            stack_counter: 0,
        })
        .collect();

    for _ in 0..20 {
        draw_once(&mut ctx, &canvas, &mut columns, &style, &mut random);
    }
    for call in ctx.texts() {
        if let DrawCall::FillText { text, .. } = call {
            assert!(text == "0" || text == "1", "unexpected glyph {text:?}");
        }
    }
}
