use kochwonder_core::{
    InputEvent, KochConfig, Point, Update, ViewTransform, ViewportController, SNOWFLAKE_CONFIG,
};

const EPS: f64 = 1e-9;

fn controller() -> ViewportController {
    ViewportController::new(&SNOWFLAKE_CONFIG).unwrap()
}

#[test]
fn zoom_pivot_invariance_over_many_pivots_and_factors() {
    let pivots = [
        Point::new(0.0, 0.0),
        Point::new(500.0, 400.0),
        Point::new(999.0, 1.0),
        Point::new(-250.0, 1200.0),
    ];
    let factors = [1.1, 1.0 / 1.1, 1.2, 0.5, 2.0, 7.5];

    for pivot in pivots {
        for factor in factors {
            let mut c = controller();
            c.pan(33.0, -71.0);
            let under = c.transform().invert(&pivot);
            c.zoom_at(factor, pivot);
            let after = c.transform().apply(&under);
            assert!(
                after.distance(&pivot) < EPS * 1e3,
                "pivot {:?} factor {} drifted to {:?}",
                pivot,
                factor,
                after
            );
        }
    }
}

#[test]
fn drag_sequence_is_pure_translation() {
    let mut c = controller();
    let before = c.transform();

    let events = [
        InputEvent::PointerDown { x: 10.0, y: 10.0 },
        InputEvent::PointerMove { x: 20.0, y: 15.0 },
        InputEvent::PointerMove { x: 60.0, y: -5.0 },
        InputEvent::PointerUp,
        // ignored: no drag active
        InputEvent::PointerMove { x: 500.0, y: 500.0 },
    ];
    for event in events {
        c.handle(event);
    }

    let after = c.transform();
    assert_eq!(after.scale, before.scale);
    assert_eq!(after.offset_x, before.offset_x + 50.0);
    assert_eq!(after.offset_y, before.offset_y - 15.0);
}

#[test]
fn mixed_pan_and_zoom_composes_like_a_single_affine_map() {
    let mut c = controller();
    let probe = Point::new(123.0, -45.0);

    c.pan(40.0, 10.0);
    c.wheel(-100.0, 300.0, 200.0);
    c.pan(-15.0, 25.0);
    c.zoom_out();

    let t = c.transform();
    let screen = t.apply(&probe);

    // rebuild the same map by hand
    let mut expected = ViewTransform::fit(
        c.base_shape().circumradius(),
        c.base_shape().centroid(),
        c.canvas_size(),
    );
    expected.translate(40.0, 10.0);
    let pivot = Point::new(300.0, 200.0);
    let s = 1.1;
    expected.offset_x = pivot.x() - (pivot.x() - expected.offset_x) * s;
    expected.offset_y = pivot.y() - (pivot.y() - expected.offset_y) * s;
    expected.scale *= s;
    expected.translate(-15.0, 25.0);
    let center = Point::new(500.0, 400.0);
    let s = 1.0 / 1.2;
    expected.offset_x = center.x() - (center.x() - expected.offset_x) * s;
    expected.offset_y = center.y() - (center.y() - expected.offset_y) * s;
    expected.scale *= s;

    assert!(screen.distance(&expected.apply(&probe)) < 1e-6);
}

#[test]
fn level_clamps_to_configured_bounds() {
    let config = KochConfig {
        min_level: 1,
        max_level: 5,
        default_level: 3,
        ..SNOWFLAKE_CONFIG
    };
    let mut c = ViewportController::new(&config).unwrap();

    c.set_level(i64::from(config.max_level) + 100);
    assert_eq!(c.level(), 5);
    c.set_level(-100);
    assert_eq!(c.level(), 1);
    assert_eq!(c.handle(InputEvent::LevelDown), Update::Unchanged);
}

#[test]
fn small_canvas_shrinks_initial_fit() {
    let c = ViewportController::with_canvas_size(&SNOWFLAKE_CONFIG, (300, 300)).unwrap();
    let radius = c.base_shape().circumradius();
    assert!((c.transform().scale - 300.0 / (2.0 * radius)).abs() < EPS);
    assert_eq!(c.zoom(), 1.0);
}
