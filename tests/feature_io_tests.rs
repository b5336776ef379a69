mod support;

use linkcams::{
    CamMesh,
    io::{
        IoError,
        csv::{parse_coords, read_coords_csv, write_coords_csv},
        stl::{read_stl, to_stl_ascii, to_stl_binary, write_mesh},
    },
};
use tempfile::tempdir;

#[test]
fn csv_written_coordinates_read_back_exactly() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("coords.csv");
    let coords = read_coords_csv(support::fixture("star_path.csv")).expect("fixture");

    write_coords_csv(&file, &coords).expect("write");
    assert_eq!(read_coords_csv(&file).expect("read"), coords);
}

#[test]
fn csv_header_and_comments_are_skipped() {
    let text = "# exported path\nx,y\n1.5,2\n\n-3,4.25,extra\n";
    let coords = parse_coords(text).expect("parse");
    assert_eq!(coords, support::coords(&[[1.5, 2.0], [-3.0, 4.25]]));
}

#[test]
fn csv_bad_number_is_reported() {
    assert!(matches!(parse_coords("1,2\n3,abc\n"), Err(IoError::ParseFloat(_))));
    assert!(matches!(parse_coords("1,2\n3\n"), Err(IoError::MalformedInput(_))));
    assert!(matches!(parse_coords("x,y\n"), Err(IoError::MalformedInput(_))));
}

#[test]
fn stl_binary_file_round_trips_geometry() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("block.stl");
    let mesh = CamMesh::extrude(
        &support::coords(&[[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [0.0, 1.0]]),
        0.5,
    )
    .expect("extrude");

    write_mesh(&mesh, &file).expect("write");
    assert_eq!(std::fs::read(&file).expect("read"), to_stl_binary(&mesh).expect("encode"));

    let back = read_stl(&file).expect("read back");
    assert_eq!(back.faces.len(), 12);
    assert_eq!(back.vertices.len(), 8);
}

#[test]
fn stl_ascii_names_the_solid() {
    let mesh = CamMesh::extrude(
        &support::coords(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]),
        1.0,
    )
    .expect("extrude");
    let text = to_stl_ascii(&mesh, "wedge");
    assert!(text.starts_with("solid wedge\n"));
    assert!(text.ends_with("endsolid wedge\n"));
    assert_eq!(text.matches("facet normal").count(), 8);
}
