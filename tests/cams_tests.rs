mod support;

use linkcams::{
    CamJob, CamMesh,
    cams::{Side, build_profiles, create_cams, write_cam, write_cam_with_thickness},
    errors::CamError,
    io::{IoError, csv::{read_coords_csv, write_coords_csv}, stl::read_stl},
    triangulated::Triangulated3D,
};
use tempfile::tempdir;

#[test]
fn create_cams_writes_both_sides() {
    let dir = tempdir().expect("tempdir");
    let left = dir.path().join("left.stl");
    let right = dir.path().join("right.stl");

    let pair = create_cams(support::fixture("star_path.csv"), &left, &right, &CamJob::default())
        .expect("star path is reachable");

    assert_eq!(pair.left.side, Side::Left);
    assert_eq!(pair.right.side, Side::Right);
    assert_eq!(pair.left.pivot.x, -21750.0);
    assert_eq!(pair.right.pivot.x, 21750.0);

    for (profile, file) in [(&pair.left, &left), (&pair.right, &right)] {
        let mesh = read_stl(file).expect("readable STL");
        let expected = profile.to_mesh(CamJob::default().thickness).expect("extrude");
        assert_eq!(mesh.faces.len(), expected.triangle_count());
    }
}

#[test]
fn create_cams_is_deterministic() {
    let dir = tempdir().expect("tempdir");
    let job = CamJob::default();
    let input = support::fixture("star_path.csv");

    let first = (dir.path().join("l1.stl"), dir.path().join("r1.stl"));
    let second = (dir.path().join("l2.stl"), dir.path().join("r2.stl"));
    create_cams(&input, &first.0, &first.1, &job).expect("first run");
    create_cams(&input, &second.0, &second.1, &job).expect("second run");

    assert_eq!(std::fs::read(&first.0).unwrap(), std::fs::read(&second.0).unwrap());
    assert_eq!(std::fs::read(&first.1).unwrap(), std::fs::read(&second.1).unwrap());
}

#[test]
fn create_cams_matches_build_profiles() {
    let dir = tempdir().expect("tempdir");
    let input = support::fixture("star_path.csv");
    let job = CamJob { interpolation: 2, ..CamJob::default() };

    let written = create_cams(&input, dir.path().join("l.stl"), dir.path().join("r.stl"), &job)
        .expect("reachable");
    let path = read_coords_csv(&input).expect("fixture");
    assert_eq!(build_profiles(&path, &job).expect("reachable"), written);
}

#[test]
fn unreachable_point_fails_before_writing() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("far.csv");
    write_coords_csv(&input, &support::coords(&[[0.0, 0.0], [100000.0, 0.0]])).expect("write csv");

    let left = dir.path().join("left.stl");
    let right = dir.path().join("right.stl");
    let job = CamJob { x_scale: 1.0, y_scale: 1.0, ..CamJob::default() };

    let result = create_cams(&input, &left, &right, &job);

    assert!(matches!(result, Err(CamError::UnreachableTarget { .. })), "{result:?}");
    assert!(!left.exists());
    assert!(!right.exists());
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let result = create_cams(
        dir.path().join("nope.csv"),
        dir.path().join("l.stl"),
        dir.path().join("r.stl"),
        &CamJob::default(),
    );
    assert!(matches!(result, Err(CamError::Io(IoError::StdIo(_)))), "{result:?}");
}

#[test]
fn invalid_job_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let job = CamJob { height: 0.0, ..CamJob::default() };
    let result = create_cams(
        support::fixture("star_path.csv"),
        dir.path().join("l.stl"),
        dir.path().join("r.stl"),
        &job,
    );
    assert!(matches!(result, Err(CamError::InvalidParameter(_))), "{result:?}");
}

#[test]
fn write_cam_from_precomputed_profile() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("star_cam.stl");
    let profile = read_coords_csv(support::fixture("star_cam_coordinates.csv")).expect("fixture");

    write_cam(&profile, &output).expect("write cam");

    let mesh = read_stl(&output).expect("readable STL");
    assert_eq!(mesh.faces.len(), 4 * profile.len() - 4);
}

#[test]
fn write_cam_accepts_crossing_outline() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("simple_cam.stl");
    let profile = support::coords(&[
        [1.0, 1.0],
        [40.0, 5.0],
        [3.0, 40.0],
        [100.0, 100.0],
        [10.0, 100.0],
        [100.0, 50.0],
        [1.0, 150.0],
        [30.0, 6.0],
    ]);

    write_cam_with_thickness(&profile, &output, 3.0).expect("write cam");
    assert!(output.exists());
    assert!(CamMesh::extrude(&profile, 3.0).expect("extrude").is_closed());
}

#[test]
fn write_cam_rejects_two_points() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("line.stl");
    let result = write_cam(&support::coords(&[[0.0, 0.0], [5.0, 5.0]]), &output);

    assert!(matches!(result, Err(CamError::DegenerateProfile { .. })), "{result:?}");
    assert!(!output.exists());
}

#[test]
fn write_cam_into_missing_directory_fails() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("missing").join("cam.stl");
    let profile = read_coords_csv(support::fixture("star_cam_coordinates.csv")).expect("fixture");

    assert!(matches!(write_cam(&profile, &output), Err(CamError::Io(_))));
}

#[test]
fn job_file_fills_missing_fields() {
    let job: CamJob = serde_json::from_str(r#"{ "interpolation": 0, "thickness": 10.0 }"#)
        .expect("valid job json");
    assert_eq!(job.interpolation, 0);
    assert_eq!(job.thickness, 10.0);
    assert_eq!(job.proximal_len, CamJob::default().proximal_len);
}
