use approx::assert_abs_diff_eq;
use chart_scene::api::{ChartConfig, ChartEngine, ChartKind};
use chart_scene::core::{ChartPoint, ChartSeries, Orientation, Padding, PointRef, ScaleDomain};
use chart_scene::render::{
    AnimationKind, Color, DEFAULT_PALETTE, DrawPrimitive, LineStrokeStyle, NullRenderer, Palette,
    PrimitiveRole, RectShape, RenderFrame, RoleAccent, Shape,
};

fn bar_engine(config: ChartConfig) -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), ChartKind::Bar, config).expect("engine init")
}

fn rect_of(primitive: &DrawPrimitive) -> RectShape {
    match &primitive.shape {
        Shape::Rect(rect) => *rect,
        other => panic!("expected rect, got {other:?}"),
    }
}

fn bars(frame: &RenderFrame) -> Vec<RectShape> {
    frame.primitives_with_role(PrimitiveRole::Bar).map(rect_of).collect()
}

fn jan_feb() -> Vec<ChartPoint> {
    vec![ChartPoint::new("Jan", 0.0), ChartPoint::new("Feb", 100.0)]
}

#[test]
fn zero_and_full_height_bars() {
    let mut engine = bar_engine(ChartConfig::default().with_legend(false));
    engine.set_data(jan_feb());

    let frame = engine.build_frame();
    assert_eq!(frame.domain, Some(ScaleDomain::new(0.0, 100.0)));
    let geometry = frame.geometry.expect("geometry");
    assert_eq!(geometry.plot_width, 712.0);
    assert_eq!(geometry.plot_height, 336.0);

    let rects = bars(&frame);
    assert_eq!(rects.len(), 2);

    let jan = rects[0];
    assert_eq!(jan.height, 0.0);
    assert_eq!(jan.y, geometry.plot_bottom());

    let feb = rects[1];
    assert_eq!(feb.height, geometry.plot_height);
    assert_eq!(feb.y, geometry.plot_top());
    assert_eq!(feb.width, 48.0);
    // two 48px bars 12px apart, centred in 712px: 296px either side
    assert_abs_diff_eq!(jan.x, 64.0 + 296.0 + 6.0);
    assert_abs_diff_eq!(feb.x, 64.0 + 296.0 + 6.0 + 48.0 + 12.0);
}

#[test]
fn drawn_gap_matches_reported_item_spacing() {
    let mut engine = bar_engine(
        ChartConfig::default()
            .with_size(100.0, 100.0)
            .with_padding(Padding::new(0.0, 0.0, 0.0, 0.0))
            .with_legend(false)
            .with_item_sizing(100.0, 12.0),
    );
    engine.set_data(jan_feb());

    let frame = engine.build_frame();
    let geometry = frame.geometry.expect("geometry");
    assert_abs_diff_eq!(geometry.item_size, 38.0);
    assert_abs_diff_eq!(geometry.item_spacing, 12.0);

    let rects = bars(&frame);
    assert_eq!(rects.len(), 2);
    assert_abs_diff_eq!(rects[0].width, geometry.item_size);
    assert_abs_diff_eq!(
        rects[1].x - (rects[0].x + rects[0].width),
        geometry.item_spacing
    );
    assert_abs_diff_eq!(rects[0].x - geometry.plot_left(), geometry.item_spacing / 2.0);
    assert_abs_diff_eq!(
        geometry.plot_right() - (rects[1].x + rects[1].width),
        geometry.item_spacing / 2.0
    );
}

#[test]
fn equal_values_render_full_height_without_division_by_zero() {
    let mut engine = bar_engine(ChartConfig::default());
    engine.set_data(vec![
        ChartPoint::new("a", 10.0),
        ChartPoint::new("b", 10.0),
        ChartPoint::new("c", 10.0),
    ]);

    let frame = engine.build_frame();
    let geometry = frame.geometry.expect("geometry");
    let rects = bars(&frame);
    assert_eq!(rects.len(), 3);
    for rect in rects {
        assert!(rect.height.is_finite());
        assert_eq!(rect.height, geometry.plot_height);
    }
    frame.validate().expect("valid frame");
}

#[test]
fn all_zero_values_stay_finite() {
    let mut engine = bar_engine(ChartConfig::default());
    engine.set_data(vec![ChartPoint::new("a", 0.0), ChartPoint::new("b", 0.0)]);

    let frame = engine.build_frame();
    frame.validate().expect("valid frame");
    assert!(bars(&frame).iter().all(|rect| rect.height == 0.0));
    assert_eq!(frame.count_role(PrimitiveRole::GridLine), 1);
}

#[test]
fn negative_bars_hang_below_the_zero_line() {
    let mut engine = bar_engine(ChartConfig::default().with_legend(false));
    engine.set_data(vec![ChartPoint::new("loss", -50.0), ChartPoint::new("gain", 50.0)]);

    let frame = engine.build_frame();
    let geometry = frame.geometry.expect("geometry");
    let zero_y = geometry.plot_bottom() - geometry.plot_height / 2.0;

    let rects = bars(&frame);
    assert_eq!(rects[0].y, zero_y);
    assert_eq!(rects[0].height, geometry.plot_height / 2.0);
    assert_eq!(rects[1].y + rects[1].height, zero_y);
}

#[test]
fn multi_series_bars_split_the_group() {
    let mut engine = bar_engine(ChartConfig::default());
    engine.set_data(vec![
        ChartSeries::new(
            "2024",
            vec![ChartPoint::new("Q1", 10.0), ChartPoint::new("Q2", 20.0)],
        ),
        ChartSeries::new(
            "2025",
            vec![ChartPoint::new("Q1", 15.0), ChartPoint::new("Q2", 25.0)],
        ),
    ]);

    let frame = engine.build_frame();
    let rects = bars(&frame);
    assert_eq!(rects.len(), 4);

    // series 0 first, then series 1
    let (q1_a, q1_b) = (rects[0], rects[2]);
    assert_eq!(q1_a.width, 24.0);
    assert_eq!(q1_b.width, 24.0);
    assert_eq!(q1_b.x, q1_a.x + 24.0);

    let origins: Vec<PointRef> = frame
        .primitives_with_role(PrimitiveRole::Bar)
        .filter_map(|primitive| primitive.origin)
        .collect();
    assert_eq!(origins[3], PointRef::new(1, 1));

    assert_eq!(frame.legend.len(), 2);
    assert_eq!(frame.legend[1].label, "2025");
    assert_eq!(frame.count_role(PrimitiveRole::LegendSwatch), 2);
}

#[test]
fn empty_series_get_no_slot_and_no_legend_entry() {
    let mut engine = bar_engine(ChartConfig::default());
    engine.set_data(vec![
        ChartSeries::new("a", vec![ChartPoint::new("x", 1.0)]),
        ChartSeries::new("empty", Vec::new()),
    ]);

    let frame = engine.build_frame();
    let rects = bars(&frame);
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].width, 48.0);
    assert_eq!(frame.legend.len(), 1);
}

#[test]
fn horizontal_bars_grow_rightward() {
    let mut engine = bar_engine(
        ChartConfig::default()
            .with_orientation(Orientation::Horizontal)
            .with_legend(false),
    );
    engine.set_data(jan_feb());

    let frame = engine.build_frame();
    assert_eq!(frame.viewport.width, 600);
    assert_eq!(frame.viewport.height, 480);

    let geometry = frame.geometry.expect("geometry");
    let rects = bars(&frame);
    assert_eq!(rects[0].width, 0.0);
    assert_eq!(rects[1].x, geometry.plot_left());
    assert_eq!(rects[1].width, geometry.plot_width);
    assert_eq!(rects[1].height, 48.0);
    assert!(rects[1].y > rects[0].y);
}

#[test]
fn first_series_uses_palette_then_accent_then_explicit_color() {
    let mut engine = bar_engine(ChartConfig::default());
    engine.set_data(jan_feb());
    let frame = engine.build_frame();
    assert_eq!(frame.legend[0].color, DEFAULT_PALETTE[0]);

    let mut engine = bar_engine(ChartConfig::default().with_role_accent(RoleAccent::Admin));
    engine.set_data(jan_feb());
    let frame = engine.build_frame();
    assert_eq!(frame.legend[0].color, RoleAccent::Admin.color());
    let bar = frame
        .primitives_with_role(PrimitiveRole::Bar)
        .next()
        .expect("bar");
    assert_eq!(bar.style.fill, Some(RoleAccent::Admin.color()));

    let explicit = Color::from_hex("#123456").expect("hex");
    let mut engine = bar_engine(ChartConfig::default().with_role_accent(RoleAccent::Admin));
    engine.set_data(vec![ChartSeries::new("s", jan_feb()).with_color(explicit)]);
    let frame = engine.build_frame();
    assert_eq!(frame.legend[0].color, explicit);
}

#[test]
fn point_color_overrides_series_color() {
    let highlight = Color::rgb(1.0, 0.0, 0.0);
    let mut engine = bar_engine(ChartConfig::default());
    engine.set_data(vec![
        ChartPoint::new("a", 1.0),
        ChartPoint::new("b", 2.0).with_color(highlight),
    ]);

    let frame = engine.build_frame();
    let fills: Vec<Option<Color>> = frame
        .primitives_with_role(PrimitiveRole::Bar)
        .map(|primitive| primitive.style.fill)
        .collect();
    assert_eq!(fills, vec![Some(DEFAULT_PALETTE[0]), Some(highlight)]);
}

#[test]
fn palette_indexing_wraps_around() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let palette = Palette::new(vec![red, blue]).expect("palette");
    let mut engine = bar_engine(ChartConfig::default().with_palette(palette));
    engine.set_data(vec![
        ChartSeries::new("a", vec![ChartPoint::new("x", 1.0)]),
        ChartSeries::new("b", vec![ChartPoint::new("x", 2.0)]),
        ChartSeries::new("c", vec![ChartPoint::new("x", 3.0)]),
    ]);

    let frame = engine.build_frame();
    let colors: Vec<Color> = frame.legend.iter().map(|entry| entry.color).collect();
    assert_eq!(colors, vec![red, blue, red]);
}

#[test]
fn bars_carry_staggered_grow_animation() {
    let mut engine = bar_engine(ChartConfig::default());
    engine.set_data(vec![
        ChartPoint::new("a", 1.0),
        ChartPoint::new("b", 2.0),
        ChartPoint::new("c", 3.0),
    ]);

    let frame = engine.build_frame();
    let animations: Vec<_> = frame
        .primitives_with_role(PrimitiveRole::Bar)
        .map(|primitive| primitive.animation.expect("animation"))
        .collect();
    assert!(animations.iter().all(|a| a.kind == AnimationKind::Grow));
    let delays: Vec<u32> = animations.iter().map(|a| a.delay_ms).collect();
    assert_eq!(delays, vec![0, 60, 120]);

    let mut still = bar_engine(ChartConfig::default().with_animated(false));
    still.set_data(jan_feb());
    let frame = still.build_frame();
    assert!(frame.primitives.iter().all(|p| p.animation.is_none()));
}

#[test]
fn grid_lines_follow_grid_toggle_but_keep_zero_line() {
    let mut engine = bar_engine(ChartConfig::default());
    engine.set_data(jan_feb());

    let frame = engine.build_frame();
    let grid: Vec<&DrawPrimitive> = frame.primitives_with_role(PrimitiveRole::GridLine).collect();
    assert_eq!(grid.len(), 6);
    assert_eq!(grid[0].style.stroke_style, LineStrokeStyle::Solid);
    assert!(
        grid[1..]
            .iter()
            .all(|line| line.style.stroke_style == LineStrokeStyle::Dashed)
    );

    let labels: Vec<String> = frame
        .primitives_with_role(PrimitiveRole::AxisLabel)
        .map(|primitive| match &primitive.shape {
            Shape::Text(text) => text.text.clone(),
            other => panic!("expected text, got {other:?}"),
        })
        .collect();
    assert_eq!(labels, vec!["0", "20", "40", "60", "80", "100"]);

    let mut bare = bar_engine(ChartConfig::default().with_grid(false));
    bare.set_data(jan_feb());
    let frame = bare.build_frame();
    assert_eq!(frame.count_role(PrimitiveRole::GridLine), 1);
    assert_eq!(frame.count_role(PrimitiveRole::AxisLabel), 6);
}

#[test]
fn category_labels_sit_under_each_bar() {
    let mut engine = bar_engine(ChartConfig::default());
    engine.set_data(jan_feb());

    let frame = engine.build_frame();
    let labels: Vec<(String, f64)> = frame
        .primitives_with_role(PrimitiveRole::CategoryLabel)
        .map(|primitive| match &primitive.shape {
            Shape::Text(text) => (text.text.clone(), text.x),
            other => panic!("expected text, got {other:?}"),
        })
        .collect();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].0, "Jan");
    assert_eq!(labels[1].0, "Feb");
    assert_abs_diff_eq!(labels[0].1, 64.0 + 326.0);
    assert_abs_diff_eq!(labels[1].1, 64.0 + 386.0);

    let rects = bars(&frame);
    for (rect, (_, x)) in rects.iter().zip(&labels) {
        assert_abs_diff_eq!(rect.x + rect.width / 2.0, *x);
    }
}

#[test]
fn hovered_bar_is_highlighted_and_others_dimmed() {
    let mut engine = bar_engine(ChartConfig::default());
    engine.set_data(jan_feb());
    engine.pointer_enter(0, 1).expect("enter");

    let frame = engine.build_frame();
    let opacities: Vec<f64> = frame
        .primitives_with_role(PrimitiveRole::Bar)
        .map(|primitive| primitive.style.opacity)
        .collect();
    assert_eq!(opacities, vec![0.6, 1.0]);

    let tooltip_text = frame
        .primitives_with_role(PrimitiveRole::Tooltip)
        .find_map(|primitive| match &primitive.shape {
            Shape::Text(text) => Some(text.text.clone()),
            _ => None,
        })
        .expect("tooltip text");
    assert_eq!(tooltip_text, "Feb: 100");
}

#[test]
fn title_and_subtitle_shift_plot_down() {
    let mut engine = bar_engine(
        ChartConfig::default()
            .with_title("Revenue")
            .with_subtitle("Last 12 months"),
    );
    engine.set_data(jan_feb());

    let frame = engine.build_frame();
    assert_eq!(frame.count_role(PrimitiveRole::Title), 1);
    assert_eq!(frame.count_role(PrimitiveRole::Subtitle), 1);
    let geometry = frame.geometry.expect("geometry");
    assert_eq!(geometry.plot_top(), 24.0 + 28.0 + 18.0);
}
