use kochwonder_compute::{generate, BoundaryGenerator};
use kochwonder_core::{
    expected_len, BaseShape, InputEvent, KochError, Point, Update, ViewportController,
    SNOWFLAKE_CONFIG,
};

fn snowflake_base() -> BaseShape {
    BaseShape::equilateral(Point::new(0.0, 0.0), 600.0).unwrap()
}

#[test]
fn length_is_three_times_four_to_the_depth() {
    let base = snowflake_base();
    for depth in 0..=7 {
        let boundary = generate(&base, depth).unwrap();
        assert_eq!(boundary.len(), expected_len(depth), "depth {}", depth);
    }
}

#[test]
fn concrete_scenario_sizes() {
    let base = snowflake_base();
    assert_eq!(generate(&base, 0).unwrap().len(), 3);
    assert_eq!(generate(&base, 1).unwrap().len(), 12);
    assert_eq!(generate(&base, 2).unwrap().len(), 48);
}

#[test]
fn depth_zero_is_the_input_triangle_in_order() {
    let base = snowflake_base();
    let boundary = generate(&base, 0).unwrap();
    assert_eq!(boundary.points(), &base.vertices()[..]);
}

#[test]
fn perimeter_grows_by_four_thirds_per_level() {
    let base = snowflake_base();
    let mut previous = generate(&base, 0).unwrap().perimeter();
    assert!((previous - 1800.0).abs() < 1e-9);

    for depth in 1..=7 {
        let perimeter = generate(&base, depth).unwrap().perimeter();
        let ratio = perimeter / previous;
        assert!(
            (ratio - 4.0 / 3.0).abs() < 1e-9,
            "depth {}: perimeter ratio {}",
            depth,
            ratio
        );
        previous = perimeter;
    }
}

#[test]
fn generation_is_pure() {
    let base = snowflake_base();
    for depth in 0..=5 {
        assert_eq!(generate(&base, depth).unwrap(), generate(&base, depth).unwrap());
    }
}

#[test]
fn points_stay_between_inradius_and_circumradius() {
    let base = snowflake_base();
    let centroid = base.centroid();
    let outer = base.circumradius();
    let inner = outer / 2.0;
    let tolerance = outer * 1e-9;

    for depth in 0..=6 {
        for p in generate(&base, depth).unwrap().iter() {
            let r = p.distance(&centroid);
            assert!(r <= outer + tolerance, "depth {}: {:?} outside circumcircle", depth, p);
            assert!(r >= inner - tolerance, "depth {}: {:?} inside incircle", depth, p);
        }
    }
}

#[test]
fn boundary_has_no_duplicate_closing_vertex() {
    let base = snowflake_base();
    for depth in 0..=4 {
        let boundary = generate(&base, depth).unwrap();
        let points = boundary.points();
        assert_ne!(points.first(), points.last());
    }
}

#[test]
fn all_edges_have_equal_length() {
    let base = snowflake_base();
    for depth in 0..=5 {
        let boundary = generate(&base, depth).unwrap();
        let expected = 600.0 / 3f64.powi(depth as i32);
        for (a, b) in boundary.edges() {
            assert!((a.distance(&b) - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn degenerate_base_is_rejected_before_generation() {
    let collinear = BaseShape::from_vertices(
        Point::new(-1.0, 0.0),
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
    );
    assert!(matches!(collinear, Err(KochError::InvalidInput(_))));
}

#[test]
fn controller_projects_generated_boundary() {
    let mut controller = ViewportController::new(&SNOWFLAKE_CONFIG).unwrap();
    let mut generator = BoundaryGenerator::from_config(&SNOWFLAKE_CONFIG).unwrap();

    let update = controller
        .regenerate_with(|_, depth| generator.request(depth))
        .unwrap();
    assert_eq!(update, Update::Redraw);

    let screen = controller.screen_points();
    assert_eq!(screen.len(), expected_len(SNOWFLAKE_CONFIG.default_level));

    // the fitted view keeps the whole snowflake on the canvas
    let (width, height) = controller.canvas_size();
    for p in &screen {
        assert!(*p.x() >= 0.0 && *p.x() <= width as f64);
        assert!(*p.y() >= 0.0 && *p.y() <= height as f64);
    }
}

#[test]
fn level_change_flows_through_to_generator() {
    let mut controller = ViewportController::new(&SNOWFLAKE_CONFIG).unwrap();
    let mut generator = BoundaryGenerator::from_config(&SNOWFLAKE_CONFIG).unwrap();

    assert_eq!(controller.handle(InputEvent::LevelUp), Update::Regenerate);
    assert_eq!(controller.handle(InputEvent::LevelUp), Update::Regenerate);
    controller
        .regenerate_with(|_, depth| generator.request(depth))
        .unwrap();
    assert_eq!(controller.vertex_count(), expected_len(6));

    controller.set_level(1_000);
    controller
        .regenerate_with(|_, depth| generator.request(depth))
        .unwrap();
    assert_eq!(controller.level(), SNOWFLAKE_CONFIG.max_level);
    assert_eq!(
        controller.vertex_count(),
        expected_len(SNOWFLAKE_CONFIG.max_level)
    );
}

#[test]
fn zoom_pivot_survives_regeneration() {
    let mut controller = ViewportController::new(&SNOWFLAKE_CONFIG).unwrap();
    let mut generator = BoundaryGenerator::from_config(&SNOWFLAKE_CONFIG).unwrap();
    controller
        .regenerate_with(|_, depth| generator.boundary(depth))
        .unwrap();

    // apex of the base triangle is vertex 0 at every depth
    let apex_screen = controller.screen_points()[0];
    controller.zoom_at(3.0, apex_screen);
    controller.increment_level();
    controller
        .regenerate_with(|_, depth| generator.boundary(depth))
        .unwrap();

    assert!(controller.screen_points()[0].distance(&apex_screen) < 1e-9);
}
