// File: crates/scatter-core/tests/chart_build.rs
// Purpose: Validate scene assembly: mesh order/count, point placement and camera framing.

use scatter_core::scene::Mesh;
use scatter_core::{data, ChartBuilder, ChartConfig, DataPoint, PointMapping, Scale, Vertex};

fn builder() -> ChartBuilder {
    ChartBuilder::new(ChartConfig::from_viewport(1600, 900)).expect("scales")
}

#[test]
fn config_derives_height_and_surface_from_viewport() {
    let cfg = ChartConfig::from_viewport(1600, 900);
    assert!((cfg.ratio() - 0.5625).abs() < 1e-12);
    assert!((cfg.height() - 56.25).abs() < 1e-12);
    assert_eq!(cfg.surface_size().width, 800);
    assert_eq!(cfg.surface_size().height, 450);
}

#[test]
fn empty_data_gives_only_the_two_axis_lines() {
    let scene = builder().build_scene(&[]);
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.lines().count(), 2);
    assert_eq!(scene.discs().count(), 0);
}

#[test]
fn scene_order_is_y_axis_x_axis_then_points() {
    let b = builder();
    let data = [DataPoint::new(10.0, 20.0), DataPoint::new(10.0, 20.0), DataPoint::new(90.0, 5.0)];
    let scene = b.build_scene(&data);
    assert_eq!(scene.len(), 5);
    match &scene.meshes()[0] {
        Mesh::Line(l) => assert_eq!(l.vertices, b.y_axis_geometry().into_vertices()),
        other => panic!("expected Y axis line, got {other:?}"),
    }
    match &scene.meshes()[1] {
        Mesh::Line(l) => assert_eq!(l.vertices, b.x_axis_geometry().into_vertices()),
        other => panic!("expected X axis line, got {other:?}"),
    }
    // duplicates are kept as separate discs
    let discs: Vec<_> = scene.discs().collect();
    assert_eq!(discs.len(), 3);
    assert_eq!(discs[0].geometry.center, discs[1].geometry.center);
}

#[test]
fn points_use_forward_x_and_inverse_y() {
    let b = builder();
    let height = b.config().height();
    let data = [DataPoint::new(0.0, 1.0), DataPoint::new(100.0, height)];
    let got: Vec<Vertex> = data.iter().map(|&p| b.point_position(p)).collect();
    let want = vec![
        Vertex::new(b.x_scale().forward(0.0), b.y_scale().invert(1.0), 0.0),
        Vertex::new(b.x_scale().forward(100.0), b.y_scale().invert(height), 0.0),
    ];
    assert_eq!(got, want);

    let scene = b.build_scene(&data);
    let centers: Vec<Vertex> = scene.discs().map(|d| d.geometry.center).collect();
    assert_eq!(centers, want);
}

#[test]
fn forward_y_mapping_is_selectable() {
    let mut cfg = ChartConfig::from_viewport(1600, 900);
    cfg.point_mapping = PointMapping::ForwardY;
    let b = ChartBuilder::new(cfg).unwrap();
    let p = b.point_position(DataPoint::new(50.0, 8.0));
    assert_eq!(p, Vertex::new(50.0, b.y_scale().forward(8.0), 0.0));
}

#[test]
fn discs_have_configured_radius_and_segments() {
    let b = builder();
    let scene = b.build_scene(&[DataPoint::new(25.0, 100.0)]);
    let disc = scene.discs().next().unwrap();
    assert_eq!(disc.geometry.radius, 0.5);
    assert_eq!(disc.geometry.segments, 100);
    let rim = disc.geometry.outline();
    assert_eq!(rim.len(), 101);
    assert!((rim[0] - rim[100]).norm() < 1e-12);
    for v in &rim {
        assert!(((v - disc.geometry.center).norm() - 0.5).abs() < 1e-12);
    }
}

#[test]
fn camera_frames_plot_with_margin() {
    let b = builder();
    let chart = b.build(&[]);
    let cam = &chart.camera;
    assert_eq!((cam.left, cam.right, cam.bottom), (-2.0, 98.0, -2.0));
    assert!((cam.top - 54.25).abs() < 1e-12);
    assert_eq!(cam.position, Vertex::new(0.0, 0.0, 10.0));

    let (x0, y0) = cam.project(&Vertex::new(-2.0, -2.0, 0.0)).unwrap();
    let (x1, y1) = cam.project(&Vertex::new(98.0, 54.25, 1.0)).unwrap();
    assert!((x0 + 1.0).abs() < 1e-12 && (y0 + 1.0).abs() < 1e-12);
    assert!((x1 - 1.0).abs() < 1e-12 && (y1 - 1.0).abs() < 1e-12);
    // behind the camera
    assert!(cam.project(&Vertex::new(0.0, 0.0, 20.0)).is_none());
}

#[test]
fn bundled_data_builds_one_disc_per_row() {
    let points = data::bundled().expect("bundled data parses");
    assert!(!points.is_empty());
    let scene = builder().build_scene(&points);
    assert_eq!(scene.discs().count(), points.len());
}
