//! End-to-end behavior of the gauge state without opening a window.

use std::time::{Duration, Instant};

use pressure_gauge::{
    angle_of, AnimationPhase, AppState, Canvas, Color, DrawCommand, GaugeConfig, InputError,
    Pressure,
};

const FRAME: Duration = Duration::from_millis(16);

fn run_frames(app: &mut AppState, frames: u32) {
    for _ in 0..frames {
        app.tick(FRAME);
    }
}

#[test]
fn committed_value_settles_on_the_readout() {
    let now = Instant::now();
    let mut app = AppState::new(&GaugeConfig::default());
    app.set_input("42");
    assert_eq!(app.apply(now), Ok(Pressure::new(42).unwrap()));

    run_frames(&mut app, 40);
    assert_eq!(app.readout(), 42);
    assert_eq!(app.needle().value(), angle_of(Pressure::new(42).unwrap()));
    assert_eq!(app.needle().phase(), AnimationPhase::Idle);
}

#[test]
fn invalid_inputs_keep_the_previous_pressure() {
    let now = Instant::now();
    let mut app = AppState::new(&GaugeConfig::default());
    app.set_input("30");
    app.apply(now).unwrap();
    run_frames(&mut app, 40);

    app.set_input("150");
    assert_eq!(app.apply(now), Err(InputError::Range(150)));
    app.set_input("abc");
    assert!(matches!(app.apply(now), Err(InputError::Parse(_))));

    assert_eq!(app.pressure().get(), 30);
    assert!(!app.needle().is_animating());
    assert_eq!(app.readout(), 30);
    assert_eq!(app.active_toast(now), Some("Invalid range"));
    assert_eq!(app.active_toast(now + Duration::from_secs(3)), None);
}

#[test]
fn retarget_mid_flight_continues_from_the_needle() {
    let now = Instant::now();
    let mut app = AppState::new(&GaugeConfig::default());
    app.set_input("10");
    app.apply(now).unwrap();
    run_frames(&mut app, 6);
    let in_flight = app.needle().value();
    assert_ne!(in_flight, angle_of(Pressure::new(10).unwrap()));

    app.set_input("90");
    app.apply(now).unwrap();
    match app.needle().phase() {
        AnimationPhase::Animating { from, .. } => assert_eq!(from, in_flight),
        AnimationPhase::Idle => panic!("retarget should animate"),
    }

    run_frames(&mut app, 40);
    assert_eq!(app.readout(), 90);
}

#[test]
fn scene_follows_the_animated_angle() {
    let now = Instant::now();
    let mut app = AppState::new(&GaugeConfig::default());
    app.set_input("100");
    app.apply(now).unwrap();
    run_frames(&mut app, 40);

    let scene = app.scene(now);
    let sweep = scene.commands().iter().find_map(|c| match c {
        DrawCommand::RingSector { sweep, .. } => Some(*sweep),
        _ => None,
    });
    assert_eq!(sweep, Some(160.0));

    let layout = *app.layout();
    let mut frame = vec![0u8; layout.width as usize * layout.height as usize * 4];
    let mut canvas = Canvas::new(&mut frame, layout.width as usize, layout.height as usize);
    scene.render(&mut canvas, None);

    // Far end of the level arc, just inside the last segment: mostly red.
    let (x, y) = layout.gauge.point_at(-20.0, 130.0);
    let end = canvas.pixel(x.round() as usize, y.round() as usize).unwrap();
    assert_eq!(end.b, 0);
    assert!(end.r == 0xff && end.g < 0xe0, "{end:?}");

    // The button is painted in the accent color.
    let (bx, by) = layout.button.center();
    assert_eq!(
        canvas.pixel(bx as usize, by as usize),
        Some(GaugeConfig::default().accent_color)
    );
    assert_ne!(canvas.pixel(bx as usize, by as usize), Some(Color::WHITE));
}
