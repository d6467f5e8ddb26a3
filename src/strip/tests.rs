use std::sync::Arc;

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::{
    curve::{HelixCurve, LineCurve3},
    error::StripError,
    misc::{ScalarFn, UvFn},
    uv::{UvLayout, UvPreset},
    window::{parse_window, DashRun},
};

use super::*;

fn line() -> LineCurve3<f64> {
    LineCurve3::try_new(Point3::origin(), Point3::new(0., 2., 0.)).unwrap()
}

fn helix() -> HelixCurve<f64> {
    HelixCurve::try_new(Point3::origin(), 1., 2., 1.5).unwrap()
}

#[test]
fn straight_strip_forms_parallel_lines() {
    let strip = StripBuilder::new()
        .with_curve(line())
        .with_segments(4)
        .with_radius(0.5)
        .build()
        .unwrap();

    let mesh = strip.mesh().unwrap();
    assert_eq!(mesh.vertex_count(), 10);
    assert_eq!(mesh.faces().len(), 8);
    for (i, pair) in mesh.points().chunks(2).enumerate() {
        let y = 0.5 * i as f64;
        assert_relative_eq!(pair[0], Point3::new(0.5, y, 0.), epsilon = 1e-12);
        assert_relative_eq!(pair[1], Point3::new(-0.5, y, 0.), epsilon = 1e-12);
    }
    mesh.normals()
        .iter()
        .for_each(|n| assert_relative_eq!(*n, -Vector3::z(), epsilon = 1e-12));
}

#[test]
fn contiguous_indices_follow_quad_pattern() {
    let output = StripProps::new(helix(), parse_window(3)).build();
    assert_eq!(
        output.mesh.faces(),
        &[
            [0, 1, 2],
            [2, 1, 3],
            [2, 3, 4],
            [4, 3, 5],
            [4, 5, 6],
            [6, 5, 7]
        ]
    );
    assert_eq!(output.mesh.index_buffer().len(), 18);
    assert_eq!(output.mesh.position_buffer().len(), 24);
}

#[test]
fn faces_point_along_frame_normal() {
    let output = StripProps::new(helix(), parse_window(16)).build();
    let mesh = &output.mesh;
    mesh.faces().iter().for_each(|[a, b, c]| {
        let (pa, pb, pc) = (mesh.points()[*a], mesh.points()[*b], mesh.points()[*c]);
        let face = (pb - pa).cross(&(pc - pa));
        assert!(face.dot(&mesh.normals()[*a]) > 0.);
    });
}

#[test]
fn interior_normals_average_neighbors() {
    let output = StripProps::new(helix(), parse_window(8)).build();
    let frames = &output.frames;
    let normals = output.rail.normals();
    assert_eq!(normals[0], *frames[0].normal());
    assert_eq!(normals[8], *frames[8].normal());
    let expected = (frames[3].normal() + frames[4].normal() + frames[5].normal()).normalize();
    assert_relative_eq!(normals[4], expected, epsilon = 1e-12);
    normals
        .iter()
        .for_each(|n| assert_relative_eq!(n.norm(), 1., epsilon = 1e-12));
}

#[test]
fn single_segment_shares_averaged_normal() {
    let output = StripProps::new(helix(), parse_window(1)).build();
    let frames = &output.frames;
    let expected = (frames[0].normal() + frames[1].normal()).normalize();
    output
        .mesh
        .normals()
        .iter()
        .for_each(|n| assert_relative_eq!(*n, expected, epsilon = 1e-12));
}

#[test]
fn zero_tilt_matches_omitted_tilt() {
    let mut props = StripProps::new(helix(), parse_window(24));
    let omitted = props.build();
    props.tilt = ScalarFn::varying(|_, _| 0.);
    let zero = props.build();
    assert_eq!(omitted.mesh.position_buffer(), zero.mesh.position_buffer());
    assert_eq!(omitted.mesh.normal_buffer(), zero.mesh.normal_buffer());
}

#[test]
fn dashed_strip_emits_disconnected_runs() {
    let props = StripProps::new(line(), parse_window((10, vec![3, 2])));
    let mesh = props.build().mesh;

    assert_eq!(mesh.runs(), &[DashRun::new(0, 3), DashRun::new(5, 8)]);
    assert_eq!(mesh.vertex_count(), 2 * 8);
    assert_eq!(mesh.faces().len(), 2 * 6);

    // every face of run r stays within the run's own vertex range
    let mut base = 0;
    let mut faces = mesh.faces().iter();
    for run in mesh.runs() {
        let range = base..base + 2 * run.samples();
        faces.by_ref().take(2 * run.segments()).for_each(|f| {
            assert!(f.iter().all(|i| range.contains(i)));
        });
        base = range.end;
    }

    // second run starts at rail sample 5
    assert_relative_eq!(mesh.points()[8], Point3::new(0.5, 1., 0.), epsilon = 1e-12);
}

#[test]
fn dashed_uv_receives_run_local_indices() {
    let calls: UvFn<f64> = Arc::new(|i: usize, n: usize, j: usize, m: usize| {
        [i as f64, n as f64, j as f64, m as f64]
    });
    let mut props = StripProps::new(line(), parse_window((10, vec![3, 2], 1)));
    props.uv = Some(calls);
    let mesh = props.build().mesh;
    let uvs = mesh.uvs().unwrap();
    assert_eq!(uvs.len(), mesh.vertex_count());
    // first sample of the second run (rail samples 4..=7)
    let k = 2 * 3;
    assert_eq!([uvs[k].x, uvs[k].y, uvs[k + 1].x, uvs[k + 1].y], [4., 10., 0., 3.]);
}

#[test]
fn contiguous_uv_uses_rail_indices() {
    let mut props = StripProps::new(line(), parse_window(4));
    props.uv = Some(UvPreset::rail(UvLayout::Along));
    let uvs = props.build().mesh.uv_buffer().unwrap();
    assert_eq!(&uvs[..8], &[0., 0., 1., 0., 0., 0.25, 1., 0.25]);
}

#[test]
fn morph_targets_share_topology() {
    let mut props = StripProps::new(helix(), parse_window((12, vec![2, 1])));
    props.morphs = vec![
        Morph::new(helix()).with_radius(1.),
        Morph::new(HelixCurve::try_new(Point3::new(0., 1., 0.), 2., 1., 1.).unwrap()),
    ];
    let mesh = props.build().mesh;
    assert_eq!(mesh.morph_targets().len(), 2);
    mesh.morph_targets().iter().for_each(|m| {
        assert_eq!(m.points().len(), mesh.vertex_count());
        assert_eq!(m.normals().len(), mesh.vertex_count());
    });

    // same curve with twice the radius doubles the handle offset
    let base = &mesh.points()[..2];
    let wide = &mesh.morph_targets()[0].points()[..2];
    assert_relative_eq!((wide[0] - wide[1]).norm(), 2., epsilon = 1e-12);
    assert_relative_eq!((base[0] - base[1]).norm(), 1., epsilon = 1e-12);
}

#[test]
fn nan_radius_propagates() {
    let mut props = StripProps::new(line(), parse_window(2));
    props.radius = ScalarFn::Constant(f64::NAN);
    let mesh = props.build().mesh;
    assert!(mesh.points().iter().all(|p| p.x.is_nan()));
}

#[test]
fn builder_requires_curve() {
    let result = StripBuilder::<f64, LineCurve3<f64>>::new().with_segments(4).build();
    assert_eq!(result.unwrap_err(), StripError::MissingDependency("curve"));
}

#[test]
fn setters_rebuild_immediately() {
    let mut strip = StripBuilder::new()
        .with_curve(line())
        .with_segments(4)
        .build()
        .unwrap();
    strip.set_segments(8);
    assert_eq!(strip.segments(), Some(8));
    assert_eq!(strip.frames().unwrap().len(), 9);
    assert_eq!(strip.mesh().unwrap().vertex_count(), 18);

    strip.set_radius(1.);
    assert_relative_eq!(strip.mesh().unwrap().points()[0].x, 1., epsilon = 1e-12);

    strip.modify(|props| {
        props.curve = LineCurve3::try_new(Point3::origin(), Point3::new(0., 4., 0.)).unwrap();
        props.radius = ScalarFn::varying(|i, n| 1. - i as f64 / n as f64);
    });
    let points = strip.points().unwrap();
    assert_relative_eq!(points[8], Point3::new(0., 4., 0.), epsilon = 1e-12);
    let last = strip.mesh().unwrap().points()[17];
    assert_relative_eq!(last, Point3::new(0., 4., 0.), epsilon = 1e-12);
}

#[test]
fn disposed_strip_ignores_mutation() {
    let mut strip = StripBuilder::new()
        .with_curve(line())
        .with_segments(4)
        .build()
        .unwrap();
    assert!(strip.ensure_active().is_ok());
    strip.dispose();
    strip.dispose();
    assert!(strip.is_disposed());
    strip.set_segments(10);
    assert!(strip.mesh().is_none());
    assert!(strip.frames().is_none());
    assert!(strip.points().is_none());
    assert_eq!(strip.segments(), None);
    assert_eq!(strip.ensure_active(), Err(StripError::Disposed));
}
