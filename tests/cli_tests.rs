use assert_cmd::Command;
use predicates::prelude::*;

fn raycast() -> Command {
    Command::cargo_bin("raycast").unwrap()
}

#[test]
fn test_subcommand_options() {
    raycast()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: raycast [OPTIONS] <COMMAND>"))
        .stderr(predicate::str::contains("transform"))
        .stderr(predicate::str::contains("measure"))
        .stderr(predicate::str::contains("example"));
}

#[test]
fn example_prints_loadable_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = raycast().args(["example", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let cfg_path = dir.path().join("example.json");
    std::fs::write(&cfg_path, &output.stdout).unwrap();
    let target = raycast::transform::TransformTarget::from_cfg_file(cfg_path.to_str().unwrap()).unwrap();
    assert_eq!(target, raycast::transform::TransformTarget::example());
}

#[test]
fn transform_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let points_path = dir.path().join("points.json");
    let cfg_path = dir.path().join("cfg.yaml");
    std::fs::write(&points_path, r#"{"points": [[1, 1, 1], [0, 0, 0]]}"#).unwrap();
    std::fs::write(&cfg_path, format!(
        "input_path: {}\nformat: json\nmatrices:\n  - [[1, 0, 0, 2], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]\n",
        points_path.to_str().unwrap(),
    )).unwrap();

    let output = raycast().arg("transform").arg(&cfg_path).output().unwrap();
    assert!(output.status.success());
    let cloud: raycast::cloud::PointCloud = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(cloud.points, vec![
        raycast::Point::new(3.0, 1.0, 1.0),
        raycast::Point::new(2.0, 0.0, 0.0),
    ]);
}

#[test]
fn projective_matrix_warns() {
    let dir = tempfile::tempdir().unwrap();
    let points_path = dir.path().join("points.yaml");
    let out_path = dir.path().join("out.yaml");
    let cfg_path = dir.path().join("cfg.toml");
    std::fs::write(&points_path, "points:\n  - [1, 2, 3]\n").unwrap();
    std::fs::write(&cfg_path, format!(
        "input_path = {:?}\noutput_path = {:?}\nmatrices = [[[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 1, 0]]]\n",
        points_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
    )).unwrap();

    raycast()
        .arg("transform")
        .arg(&cfg_path)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("bottom row"));

    let cloud = raycast::cloud::PointCloud::load(out_path.to_str().unwrap()).unwrap();
    assert_eq!(cloud.points, vec![raycast::Point::new(1.0, 2.0, 3.0)]);
}

#[test]
fn measure_report() {
    let dir = tempfile::tempdir().unwrap();
    let points_path = dir.path().join("points.yaml");
    std::fs::write(&points_path, "points:\n  - [3, 4, 0]\n").unwrap();

    raycast()
        .arg("measure")
        .arg(&points_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("norm1: 7.0"))
        .stdout(predicate::str::contains("norm2: 5.0"))
        .stdout(predicate::str::contains("norm_inf: 4.0"));
}

#[test]
fn unsupported_point_file() {
    raycast()
        .args(["measure", "mesh.stl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ARGUMENT ERROR"));
}

#[test]
fn missing_config_file() {
    raycast()
        .args(["transform", "does/not/exist.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TRANSFORM ERROR"))
        .stderr(predicate::str::contains("does/not/exist.yaml"));
}
