use bearingcam_capture::sources::{ScriptedOrientation, StaticLocation, SyntheticCamera};
use bearingcam_capture::{CaptureSession, SessionConfig};
use bearingcam_render::OverlayAssets;

fn live_session(width: u32, height: u32) -> (CaptureSession, SyntheticCamera) {
    let mut session = CaptureSession::new(SessionConfig::default(), OverlayAssets::without_font());
    let mut camera = SyntheticCamera::new(width, height);
    session
        .start(
            &mut camera,
            Box::new(ScriptedOrientation::new(vec![45.0, 180.0])),
        )
        .unwrap();
    (session, camera)
}

#[tokio::test]
async fn zoom_never_alters_composite_dimensions() {
    let (mut session, _camera) = live_session(800, 600);

    session.set_zoom(1.0);
    let at_min = session.capture().unwrap();

    session.set_zoom(5.0);
    let at_max = session.capture().unwrap();

    assert_eq!((at_min.width(), at_min.height()), (800, 600));
    assert_eq!((at_max.width(), at_max.height()), (800, 600));
    // Preview transform is where zoom shows up
    assert_ne!(session.preview_transform().scale, 1.0);

    session.stop().await.unwrap();
}

#[tokio::test]
async fn location_fix_flows_into_snapshot() {
    let (mut session, _camera) = live_session(320, 240);

    assert!(session.snapshot().geo.is_none());

    session.request_location(&mut StaticLocation::Fix {
        latitude: 51.5007,
        longitude: -0.1246,
    });
    let fix = session.snapshot().geo.expect("fix should be recorded");
    assert!((fix.latitude - 51.5007).abs() < 1e-9);

    // A later denied request keeps the stale (still valid) fix
    session.request_location(&mut StaticLocation::Denied);
    assert!(session.snapshot().geo.is_some());

    session.stop().await.unwrap();
}

#[tokio::test]
async fn orientation_samples_reach_captures() {
    let (mut session, _camera) = live_session(320, 240);

    // Give the tracker task time to drain the scripted readings
    tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

    let snapshot = session.snapshot();
    assert_eq!(snapshot.heading.unwrap().degrees(), 180.0);

    session.stop().await.unwrap();
}
