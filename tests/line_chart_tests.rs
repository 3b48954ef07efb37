use approx::assert_abs_diff_eq;
use chart_scene::api::{ChartConfig, ChartEngine, ChartKind};
use chart_scene::core::{ChartPoint, ChartSeries, PathCommand, PathData, PointRef};
use chart_scene::render::{
    AnimationKind, CircleShape, NullRenderer, POINT_OUTLINE_COLOR, PrimitiveRole, Shape,
};

fn line_engine(config: ChartConfig) -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), ChartKind::Line, config).expect("engine init")
}

fn three_points() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Mon", 0.0),
        ChartPoint::new("Tue", 50.0),
        ChartPoint::new("Wed", 100.0),
    ]
}

fn path_of(shape: &Shape) -> &PathData {
    match shape {
        Shape::Path { path } => path,
        other => panic!("expected path, got {other:?}"),
    }
}

fn circle_of(shape: &Shape) -> CircleShape {
    match shape {
        Shape::Circle(circle) => *circle,
        other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn line_passes_through_every_point() {
    let mut engine = line_engine(ChartConfig::default().with_legend(false));
    engine.set_data(three_points());

    let frame = engine.build_frame();
    let geometry = frame.geometry.expect("geometry");
    assert_eq!(frame.count_role(PrimitiveRole::Line), 1);
    assert_eq!(frame.count_role(PrimitiveRole::Area), 0);

    let line = frame
        .primitives_with_role(PrimitiveRole::Line)
        .next()
        .expect("line");
    let commands = path_of(&line.shape).commands();
    assert_eq!(commands.len(), 3);

    // three 48px slots 12px apart, centred in the plot
    assert_abs_diff_eq!(geometry.item_offset(0, 3), 296.0, epsilon = 1e-9);
    let PathCommand::MoveTo { x, y } = commands[0] else {
        panic!("path must start with a move");
    };
    assert_abs_diff_eq!(x, geometry.plot_left() + geometry.item_offset(0, 3), epsilon = 1e-9);
    assert_abs_diff_eq!(y, geometry.plot_bottom(), epsilon = 1e-9);

    let PathCommand::LineTo { x, y } = commands[2] else {
        panic!("straight path uses line segments");
    };
    assert_abs_diff_eq!(x, geometry.plot_left() + geometry.item_offset(2, 3), epsilon = 1e-9);
    assert_abs_diff_eq!(y, geometry.plot_top(), epsilon = 1e-9);

    assert_eq!(line.style.stroke_width, 2.0);
    assert!(line.style.fill.is_none());
}

#[test]
fn markers_match_anchors() {
    let mut engine = line_engine(ChartConfig::default());
    engine.set_data(three_points());

    let frame = engine.build_frame();
    assert_eq!(frame.anchors.len(), 3);
    let markers: Vec<CircleShape> = frame
        .primitives_with_role(PrimitiveRole::Point)
        .map(|primitive| circle_of(&primitive.shape))
        .collect();
    assert_eq!(markers.len(), 3);
    for (marker, anchor) in markers.iter().zip(&frame.anchors) {
        assert_eq!((marker.cx, marker.cy), (anchor.x, anchor.y));
        assert_eq!(marker.radius, 4.0);
    }
    assert!(
        frame
            .primitives_with_role(PrimitiveRole::Point)
            .all(|primitive| primitive.style.stroke == Some(POINT_OUTLINE_COLOR))
    );

    let mut hidden = line_engine(ChartConfig::default().with_points(false));
    hidden.set_data(three_points());
    let frame = hidden.build_frame();
    assert_eq!(frame.count_role(PrimitiveRole::Point), 0);
    // Anchors stay so hover still works without markers.
    assert_eq!(frame.anchors.len(), 3);
}

#[test]
fn area_is_drawn_beneath_the_line() {
    let mut engine = line_engine(ChartConfig::default().with_area(true));
    engine.set_data(three_points());

    let frame = engine.build_frame();
    let area_index = frame
        .primitives
        .iter()
        .position(|p| p.role == PrimitiveRole::Area)
        .expect("area");
    let line_index = frame
        .primitives
        .iter()
        .position(|p| p.role == PrimitiveRole::Line)
        .expect("line");
    assert!(area_index < line_index);

    let area = &frame.primitives[area_index];
    let commands = path_of(&area.shape).commands();
    assert_eq!(commands.last(), Some(&PathCommand::Close));
    assert!(area.style.opacity < 1.0);

    let geometry = frame.geometry.expect("geometry");
    let PathCommand::LineTo { y, .. } = commands[commands.len() - 2] else {
        panic!("area closes via the baseline");
    };
    assert_abs_diff_eq!(y, geometry.plot_bottom(), epsilon = 1e-9);
}

#[test]
fn smooth_lines_use_quadratic_segments() {
    let mut engine = line_engine(ChartConfig::default().with_smooth(true));
    engine.set_data(three_points());

    let frame = engine.build_frame();
    let line = frame
        .primitives_with_role(PrimitiveRole::Line)
        .next()
        .expect("line");
    let commands = path_of(&line.shape).commands();
    assert!(matches!(commands[1], PathCommand::QuadTo { .. }));
    assert!(matches!(commands[2], PathCommand::LineTo { .. }));
}

#[test]
fn single_point_series_has_marker_but_no_stroke() {
    let mut engine = line_engine(ChartConfig::default());
    engine.set_data(vec![ChartPoint::new("only", 42.0)]);

    let frame = engine.build_frame();
    assert_eq!(frame.count_role(PrimitiveRole::Line), 0);
    assert_eq!(frame.count_role(PrimitiveRole::Point), 1);
    frame.validate().expect("valid frame");
}

#[test]
fn each_series_gets_its_own_line_with_staggered_draw() {
    let mut engine = line_engine(ChartConfig::default());
    engine.set_data(vec![
        ChartSeries::new("Plan A", three_points()),
        ChartSeries::new("Plan B", three_points()),
    ]);

    let frame = engine.build_frame();
    let delays: Vec<u32> = frame
        .primitives_with_role(PrimitiveRole::Line)
        .map(|primitive| {
            let animation = primitive.animation.expect("animation");
            assert_eq!(animation.kind, AnimationKind::Draw);
            animation.delay_ms
        })
        .collect();
    assert_eq!(delays, vec![0, 150]);
    assert_eq!(frame.legend.len(), 2);
    assert_ne!(frame.legend[0].color, frame.legend[1].color);
}

#[test]
fn hovered_marker_grows() {
    let mut engine = line_engine(ChartConfig::default());
    engine.set_data(three_points());
    engine.pointer_enter(0, 2).expect("enter");

    let frame = engine.build_frame();
    let radii: Vec<f64> = frame
        .primitives_with_role(PrimitiveRole::Point)
        .map(|primitive| circle_of(&primitive.shape).radius)
        .collect();
    assert_eq!(radii, vec![4.0, 4.0, 6.0]);

    let origins: Vec<Option<PointRef>> = frame
        .primitives_with_role(PrimitiveRole::Tooltip)
        .map(|primitive| primitive.origin)
        .collect();
    assert_eq!(origins, vec![Some(PointRef::new(0, 2)); 2]);
}

#[test]
fn multi_series_tooltip_names_the_series() {
    let mut engine = line_engine(ChartConfig::default());
    engine.set_data(vec![
        ChartSeries::new("Plan A", three_points()),
        ChartSeries::new("Plan B", three_points()),
    ]);
    engine.pointer_enter(1, 0).expect("enter");

    let frame = engine.build_frame();
    let text = frame
        .primitives_with_role(PrimitiveRole::Tooltip)
        .find_map(|primitive| match &primitive.shape {
            Shape::Text(text) => Some(text.text.clone()),
            _ => None,
        })
        .expect("tooltip text");
    assert_eq!(text, "Plan B · Mon: 0");
}
