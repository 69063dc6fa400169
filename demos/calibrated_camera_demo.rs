//! Demo: build a camera rig from an inline calibration export and
//! drive it through a storm of viewport resizes.
//!
//! Run with: cargo run --example calibrated_camera_demo

use std::cell::RefCell;
use std::rc::Rc;

use matchcam::{CalibrationSource, CameraRig, CameraRigBuilder, ResizeBus, ViewportSize};

/// A minimal calibration export: a camera 7 units back, 2 up, looking
/// at the origin area of a 1920x1080 source image.
const CALIBRATION_JSON: &str = r#"{
    "imageWidth": 1920,
    "imageHeight": 1080,
    "cameraTransform": {
        "rows": [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.9863, -0.1650, 2.0],
            [0.0, 0.1650, 0.9863, 7.0],
            [0.0, 0.0, 0.0, 1.0]
        ]
    }
}"#;

fn main() {
    env_logger::init();

    let source = CalibrationSource::from_json_value(
        serde_json::from_str(CALIBRATION_JSON).expect("demo JSON is well-formed"),
    )
    .expect("demo JSON is a calibration object");

    let rig = CameraRigBuilder::new(source)
        .viewport(ViewportSize::new(1920, 1080))
        .on_ready(|camera| {
            println!(
                "camera ready at ({:.2}, {:.2}, {:.2}), fov {:.2} deg",
                camera.position.x, camera.position.y, camera.position.z, camera.fov_y_degrees
            );
        })
        .build()
        .expect("failed to build camera rig");

    println!("reference aspect: {:.4}", rig.base_aspect());
    println!();

    let rig = Rc::new(RefCell::new(rig));
    let bus = ResizeBus::new();
    let _subscription = CameraRig::attach(&rig, &bus);

    let sizes = [
        ViewportSize::new(1920, 1080), // reference
        ViewportSize::new(1600, 1200), // 4:3, narrower
        ViewportSize::new(2560, 1080), // ultrawide
        ViewportSize::new(1080, 1920), // portrait
        ViewportSize::new(7680, 1080), // extreme stretch
        ViewportSize::new(1920, 1080), // back to the reference
    ];

    println!("{:>12} {:>10} {:>8}", "viewport", "aspect", "zoom");
    for size in sizes {
        bus.publish(size);
        let rig = rig.borrow();
        let camera = rig.camera();
        println!(
            "{:>12} {:>10.4} {:>8.4}",
            format!("{}x{}", size.width, size.height),
            camera.aspect,
            camera.zoom
        );
    }
}
