//! Integration tests for rig construction and resize handling.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use matchcam::{
    CalibrationRecord, CameraRig, CameraRigBuilder, MatchcamError, ResizeBus, RigOptions, Vec3,
    ViewportSize,
};

fn test_record() -> CalibrationRecord {
    CalibrationRecord::new(
        1920,
        1080,
        [
            [1.0, 0.0, 0.0, 5.0],
            [0.0, 1.0, 0.0, 2.0],
            [0.0, 0.0, 1.0, -3.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    )
    .expect("valid record")
}

#[test]
fn test_construction_matches_viewport() {
    let rig = CameraRigBuilder::new(test_record())
        .viewport(ViewportSize::new(1600, 900))
        .build()
        .expect("build failed");

    let camera = rig.camera();
    assert!((camera.aspect - 1600.0 / 900.0).abs() < 1e-6);
    assert_eq!(camera.zoom, 1.0);
    assert!((rig.base_aspect() - 1600.0 / 900.0).abs() < 1e-6);
}

#[test]
fn test_construction_poses_camera_from_transform() {
    let rig = CameraRigBuilder::new(test_record())
        .viewport(ViewportSize::new(1920, 1080))
        .build()
        .expect("build failed");

    assert_eq!(rig.camera().position, Vec3::new(5.0, 2.0, -3.0));
}

#[test]
fn test_options_override_projection_constants() {
    let rig = CameraRigBuilder::new(test_record())
        .viewport(ViewportSize::new(1920, 1080))
        .options(RigOptions {
            fov_y_degrees: 35.0,
            near: 0.5,
            far: 500.0,
        })
        .build()
        .expect("build failed");

    assert_eq!(rig.camera().fov_y_degrees, 35.0);
    assert_eq!(rig.camera().near, 0.5);
    assert_eq!(rig.camera().far, 500.0);
}

#[test]
fn test_ready_callback_fires_once_with_configured_camera() {
    let calls = Rc::new(Cell::new(0u32));
    let calls2 = Rc::clone(&calls);

    let _rig = CameraRigBuilder::new(test_record())
        .viewport(ViewportSize::new(1920, 1080))
        .on_ready(move |camera| {
            calls2.set(calls2.get() + 1);
            assert_eq!(camera.position, Vec3::new(5.0, 2.0, -3.0));
            assert_eq!(camera.zoom, 1.0);
        })
        .build()
        .expect("build failed");

    assert_eq!(calls.get(), 1);
}

#[test]
fn test_no_callback_on_failed_build() {
    let called = Rc::new(Cell::new(false));
    let called2 = Rc::clone(&called);

    let result = CameraRigBuilder::new("/nonexistent/camera.json")
        .viewport(ViewportSize::new(1920, 1080))
        .on_ready(move |_| called2.set(true))
        .build();

    assert!(result.is_err());
    assert!(!called.get());
}

#[test]
fn test_degenerate_viewport_is_configuration_error() {
    let err = CameraRigBuilder::new(test_record())
        .viewport(ViewportSize::new(0, 1080))
        .build()
        .unwrap_err();
    assert!(matches!(err, MatchcamError::Configuration(_)));
}

#[test]
fn test_resize_worked_example() {
    // Reference aspect 16:9.
    let mut rig = CameraRigBuilder::new(test_record())
        .viewport(ViewportSize::new(1920, 1080))
        .build()
        .expect("build failed");

    // Narrower (4:3): aspect tracks, zoom floors at 1.
    rig.handle_resize(ViewportSize::new(1600, 1200));
    assert!((rig.camera().aspect - 4.0 / 3.0).abs() < 1e-6);
    assert_eq!(rig.camera().zoom, 1.0);

    // Wider (21:9): zoom compensates by the aspect ratio.
    rig.handle_resize(ViewportSize::new(2100, 900));
    assert!((rig.camera().aspect - 21.0 / 9.0).abs() < 1e-6);
    assert!((rig.camera().zoom - 1.3125).abs() < 1e-4);
}

#[test]
fn test_resize_is_idempotent() {
    let mut rig = CameraRigBuilder::new(test_record())
        .viewport(ViewportSize::new(1920, 1080))
        .build()
        .expect("build failed");

    rig.handle_resize(ViewportSize::new(2560, 1080));
    let aspect = rig.camera().aspect;
    let zoom = rig.camera().zoom;
    let projection = rig.camera().projection_matrix();

    rig.handle_resize(ViewportSize::new(2560, 1080));
    assert_eq!(rig.camera().aspect, aspect);
    assert_eq!(rig.camera().zoom, zoom);
    assert_eq!(rig.camera().projection_matrix(), projection);
}

#[test]
fn test_resize_round_trip_restores_reference() {
    let mut rig = CameraRigBuilder::new(test_record())
        .viewport(ViewportSize::new(1920, 1080))
        .build()
        .expect("build failed");
    let base = rig.base_aspect();

    for size in [
        ViewportSize::new(640, 480),
        ViewportSize::new(3440, 1440),
        ViewportSize::new(1080, 1920),
        ViewportSize::new(7680, 1080),
    ] {
        rig.handle_resize(size);
    }
    rig.handle_resize(ViewportSize::new(1920, 1080));

    assert!((rig.camera().aspect - base).abs() < 1e-6);
    assert_eq!(rig.camera().zoom, 1.0);
}

#[test]
fn test_degenerate_resize_is_ignored() {
    let mut rig = CameraRigBuilder::new(test_record())
        .viewport(ViewportSize::new(1920, 1080))
        .build()
        .expect("build failed");

    rig.handle_resize(ViewportSize::new(2560, 1080));
    let aspect = rig.camera().aspect;

    rig.handle_resize(ViewportSize::new(0, 0));
    assert_eq!(rig.camera().aspect, aspect);
}

#[test]
fn test_bus_drives_attached_rig() {
    let bus = ResizeBus::new();
    let rig = Rc::new(RefCell::new(
        CameraRigBuilder::new(test_record())
            .viewport(ViewportSize::new(1920, 1080))
            .build()
            .expect("build failed"),
    ));

    let sub = CameraRig::attach(&rig, &bus);
    bus.publish(ViewportSize::new(2100, 900));
    assert!((rig.borrow().camera().zoom - 1.3125).abs() < 1e-4);

    // Dropping the subscription detaches the rig.
    drop(sub);
    bus.publish(ViewportSize::new(1920, 1080));
    assert!((rig.borrow().camera().aspect - 21.0 / 9.0).abs() < 1e-6);
}

#[test]
fn test_bus_skips_dropped_rig() {
    let bus = ResizeBus::new();
    let rig = Rc::new(RefCell::new(
        CameraRigBuilder::new(test_record())
            .viewport(ViewportSize::new(1920, 1080))
            .build()
            .expect("build failed"),
    ));

    let _sub = CameraRig::attach(&rig, &bus);
    drop(rig);

    // Publishing after the rig is gone must not panic.
    bus.publish(ViewportSize::new(800, 600));
}

#[test]
fn test_two_rigs_one_bus() {
    let bus = ResizeBus::new();
    let rig_a = Rc::new(RefCell::new(
        CameraRigBuilder::new(test_record())
            .viewport(ViewportSize::new(1920, 1080))
            .build()
            .expect("build failed"),
    ));
    let rig_b = Rc::new(RefCell::new(
        CameraRigBuilder::new(test_record())
            .viewport(ViewportSize::new(1000, 1000))
            .build()
            .expect("build failed"),
    ));

    let _sub_a = CameraRig::attach(&rig_a, &bus);
    let _sub_b = CameraRig::attach(&rig_b, &bus);
    bus.publish(ViewportSize::new(2100, 900));

    // Same event, different reference aspects, different zooms.
    assert!((rig_a.borrow().camera().zoom - 1.3125).abs() < 1e-4);
    assert!((rig_b.borrow().camera().zoom - 21.0 / 9.0).abs() < 1e-4);
}
