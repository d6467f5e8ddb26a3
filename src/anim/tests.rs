use approx::assert_relative_eq;
use nalgebra::Point3;

use crate::{
    curve::{HelixCurve, LineCurve3},
    error::StripError,
    strip::{Strip, StripBuilder},
    uv::{UvLayout, UvPreset},
};

use super::*;

fn rail(segments: usize) -> Strip<f64, LineCurve3<f64>> {
    StripBuilder::new()
        .with_curve(LineCurve3::try_new(Point3::origin(), Point3::new(0., 10., 0.)).unwrap())
        .with_segments(segments)
        .build()
        .unwrap()
}

#[test]
fn window_wraps_around_rail_end() {
    let strip = rail(10);
    let anim = RailAnimation::try_new(&strip, 4, 1.).unwrap();
    assert_eq!(anim.morph_targets().len(), 11);

    let target = &anim.morph_targets()[8];
    assert_eq!(target.points().len(), 6 * 4);
    let starts: Vec<f64> = target.points().chunks(6).map(|quad| quad[0].y).collect();
    assert_eq!(starts.len(), 4);
    starts
        .iter()
        .zip([8., 9., 0., 1.])
        .for_each(|(y, expected)| assert_relative_eq!(*y, expected, epsilon = 1e-12));

    // segment 9 ends on the last rail sample
    assert_relative_eq!(target.points()[6 + 2], Point3::new(0.5, 10., 0.), epsilon = 1e-12);
}

#[test]
fn window_at_rail_length_restarts_from_origin() {
    let strip = rail(10);
    let anim = RailAnimation::try_new(&strip, 3, 1.).unwrap();
    let targets = anim.morph_targets();
    assert_eq!(targets[10], targets[0]);
    assert_eq!(anim.points(), targets[0].points());
    assert_eq!(anim.normals(), targets[0].normals());
}

#[test]
fn window_is_clamped() {
    let strip = rail(5);
    assert_eq!(RailAnimation::try_new(&strip, 0, 1.).unwrap().window(), 1);
    assert_eq!(RailAnimation::try_new(&strip, 9, 1.).unwrap().window(), 5);
}

#[test]
fn quads_use_two_triangles_per_segment() {
    let strip = rail(4);
    let anim = RailAnimation::try_new(&strip, 1, 1.).unwrap();
    let handles = strip.rail().unwrap().handles();
    let quad = anim.morph_targets()[2].points();
    let expected = [
        handles[2][0],
        handles[2][1],
        handles[3][0],
        handles[3][0],
        handles[2][1],
        handles[3][1],
    ];
    assert_eq!(quad, &expected);
}

#[test]
fn discrete_tracks_select_one_target_at_a_time() {
    let strip = rail(4);
    let anim = RailAnimation::try_new(&strip, 2, 2.).unwrap();
    let clip = anim.clip();
    assert_eq!(clip.duration(), 2.);
    assert_eq!(clip.tracks().len(), 5);

    let track = &clip.tracks()[1];
    assert_eq!(track.target(), 1);
    assert_eq!(track.interpolation(), Interpolation::Discrete);
    assert_eq!(track.times(), &[0., 0.5, 1., 1.5, 2.]);
    assert_eq!(track.values(), &[0., 1., 0., 0., 0.]);

    // between keyframes the previous value holds
    assert_eq!(clip.influences(0.75), vec![0., 1., 0., 0., 0.]);
    assert_eq!(clip.influences(1.9), vec![0., 0., 0., 1., 0.]);
    assert_eq!(clip.influences(5.), vec![0., 0., 0., 0., 1.]);
}

#[test]
fn linear_track_interpolates() {
    let track = KeyframeTrack::new(0, vec![0., 1.], vec![0., 2.], Interpolation::Linear);
    assert_relative_eq!(track.sample(0.25), 0.5);
    assert_relative_eq!(track.sample(-1.), 0.);
    assert_relative_eq!(track.sample(3.), 2.);
}

#[test]
fn uvs_follow_window_local_samples() {
    let mut strip = rail(10);
    strip.set_uv(Some(UvPreset::rail(UvLayout::Along)));
    let anim = RailAnimation::try_new(&strip, 4, 1.).unwrap();
    let uvs = anim.uvs().unwrap();
    assert_eq!(uvs.len(), 6 * 4);
    // second quad: samples 1 and 2 of 4
    assert_relative_eq!(uvs[6].y, 0.25);
    assert_relative_eq!(uvs[8].y, 0.5);
    assert_relative_eq!(uvs[11].x, 1.);
}

#[test]
fn disposed_rail_is_rejected() {
    let mut strip = StripBuilder::new()
        .with_curve(HelixCurve::try_circle(Point3::origin(), 1.).unwrap())
        .with_segments(8)
        .build()
        .unwrap();
    strip.dispose();
    assert_eq!(
        RailAnimation::try_new(&strip, 2, 1.).unwrap_err(),
        StripError::Disposed
    );
}
