use std::process::Command;
use tempfile::TempDir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_housing-etl"))
}

#[test]
fn test_missing_arguments_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = binary()
        .current_dir(temp_dir.path())
        .arg("only-input.csv")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = binary().output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_successful_run_prints_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("houses.csv");
    let json = temp_dir.path().join("houses.json");
    std::fs::write(
        &input,
        "value,income,age,rooms,bedrooms,pop,hh\n452600,8.3252,41,880,129,322,126\n",
    )
    .unwrap();

    let output = binary().arg(&input).arg(&json).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("File converted successfully"));
    assert!(stdout.contains(json.to_str().unwrap()));
    assert!(json.exists());
}

#[test]
fn test_schema_error_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("houses.csv");
    let json = temp_dir.path().join("houses.json");
    std::fs::write(&input, "value,income\n1,2\n").unwrap();

    let output = binary().arg(&input).arg(&json).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unexpected CSV headers"));
    assert!(!json.exists());
}

#[test]
fn test_extra_argument_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = binary()
        .current_dir(temp_dir.path())
        .args(["in.csv", "out.json", "extra"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_invalid_utf8_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("houses.csv");
    let json = temp_dir.path().join("houses.json");
    let mut content = b"value,income,age,rooms,bedrooms,pop,hh\n1,1.0,1,1,1,1,".to_vec();
    content.extend_from_slice(b"\xFF\n");
    std::fs::write(&input, content).unwrap();

    let output = binary().arg(&input).arg(&json).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not readable as CSV"));
    assert!(!json.exists());
}
