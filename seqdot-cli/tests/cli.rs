use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn seqdot(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seqdot"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run seqdot")
}

#[test]
fn literal_sequences_produce_image_and_report() {
    let dir = tempdir().unwrap();
    let out = seqdot(dir.path(), &["ACTG", "ACTG", "plot.png", "-n", "2"]);

    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(dir.path().join("plot.png").exists());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.trim(), r#"[{"sequence":"ACTG","position":{"x":0,"y":0}}]"#);
}

#[test]
fn weighted_fasta_run_with_config_and_region() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.fa"), ">a\nACTGA\n").unwrap();
    std::fs::write(dir.path().join("b.txt"), "ACTGT\n").unwrap();
    std::fs::write(dir.path().join("x.txt"), "1\n1\n1\n1\n1\n").unwrap();
    std::fs::write(dir.path().join("y.txt"), "0.5\n0.5\n0.5\n0.5\n0.5\n").unwrap();
    std::fs::write(
        dir.path().join("plot.toml"),
        r##"
[plot]
region_color = "#0000ff"

[palette]
default_color = "#00ff00"
ranges = [{ start = 0.0, end = 0.5, color = "#ff0000" }]
"##,
    )
    .unwrap();

    let out = seqdot(
        dir.path(),
        &[
            "a.fa", "b.txt", "plot.png", "--fasta", "-n", "4", "-x", "x.txt", "-y", "y.txt", "--config",
            "plot.toml", "--region", "y:2:1",
        ],
    );
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.trim(), r#"[{"sequence":"ACTG","position":{"x":0,"y":0}}]"#);

    let image = image::open(dir.path().join("plot.png")).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (5, 5));
    // Run cells weigh 0.75, outside every configured range
    for i in [0, 1, 3] {
        assert_eq!(image.get_pixel(i, i).0, [0, 255, 0]);
    }
    assert_eq!(image.get_pixel(2, 2).0, [0, 0, 255]);
    // Isolated A/A match dropped by run detection
    assert_eq!(image.get_pixel(4, 0).0, [255, 255, 255]);
    assert_eq!(image.get_pixel(4, 4).0, [255, 255, 255]);
}

#[test]
fn disabled_run_detection_reports_nothing() {
    let dir = tempdir().unwrap();
    let out = seqdot(dir.path(), &["ACTG", "ACTG", "plot.svg", "-n", "1"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout).unwrap().trim(), "[]");
    let svg = std::fs::read_to_string(dir.path().join("plot.svg")).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn mismatched_weights_exit_with_4() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("x.txt"), "1\n1\n1\n").unwrap();
    std::fs::write(dir.path().join("y.txt"), "1\n1\n1\n1\n").unwrap();

    let out = seqdot(dir.path(), &["ACTG", "ACTG", "plot.png", "-x", "x.txt", "-y", "y.txt"]);
    assert_eq!(out.status.code(), Some(4));
}

#[test]
fn missing_weight_file_exits_with_3() {
    let dir = tempdir().unwrap();
    let out = seqdot(dir.path(), &["ACTG", "ACTG", "plot.png", "-x", "nope.txt", "-y", "nope.txt"]);
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn unwritable_output_exits_with_2() {
    let dir = tempdir().unwrap();
    let out = seqdot(dir.path(), &["ACTG", "ACTG", "missing/plot.png"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn missing_arguments_exit_with_1() {
    let dir = tempdir().unwrap();
    let out = seqdot(dir.path(), &["ACTG"]);
    assert_eq!(out.status.code(), Some(1));
}
