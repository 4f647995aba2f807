// CLI smoke tests: run the `cnpj` binary and check stdout / exit codes

use assert_cmd::Command;

fn cnpj() -> Command {
    Command::cargo_bin("cnpj").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_validate_valid_values() {
    let mut cmd = cnpj();
    cmd.args(["validate", "12.345.678/0001-95", "12.ABC.345/01DE-35"]);
    cmd.assert().success();

    let stdout = stdout_of(&mut cmd);
    assert!(stdout.contains("12.345.678/0001-95 valid (numeric)"));
    assert!(stdout.contains("12.ABC.345/01DE-35 valid (alphanumeric)"));
}

#[test]
fn test_validate_invalid_value_fails() {
    let mut cmd = cnpj();
    cmd.args(["validate", "12345678000100"]);
    cmd.assert().failure().code(1);

    let stdout = stdout_of(&mut cmd);
    assert!(stdout.contains("invalid"));
    assert!(stdout.contains("expected 95"));
}

#[test]
fn test_validate_json() {
    let mut cmd = cnpj();
    cmd.args(["validate", "--json", "11222333000181", "123"]);

    let stdout = stdout_of(&mut cmd);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["summary"]["valid_count"], 1);
    assert_eq!(json["reports"][1]["rejection"]["reason"], "wrong_length");
}

#[test]
fn test_reject_repeated_flag() {
    cnpj().args(["validate", "00000000000000"]).assert().success();
    cnpj()
        .args(["validate", "--reject-repeated", "00000000000000"])
        .assert()
        .failure();
}

#[test]
fn test_format_and_normalize() {
    let stdout = stdout_of(cnpj().args(["format", "12345678000195", "1a3bc5f700xz43"]));
    assert_eq!(stdout, "12.345.678/0001-95\n1A.3BC.5F7/00XZ-43\n");

    let stdout = stdout_of(cnpj().args(["normalize", "12.345.678/0001-95"]));
    assert_eq!(stdout, "12345678000195\n");
}

#[test]
fn test_detect() {
    let stdout = stdout_of(cnpj().args(["detect", "12345678000195", "12ABC34501DE35", "1234*67890123"]));
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "12345678000195\tnumeric");
    assert_eq!(lines[1], "12ABC34501DE35\talphanumeric");
    assert_eq!(lines[2], "1234*67890123\tunknown");
}

#[test]
fn test_generate_is_seeded_and_valid() {
    let first = stdout_of(cnpj().args(["generate", "--type", "alphanumeric", "-n", "3", "--seed", "7"]));
    let second = stdout_of(cnpj().args(["generate", "--type", "alphanumeric", "-n", "3", "--seed", "7"]));
    assert_eq!(first, second);

    let values: Vec<&str> = first.lines().collect();
    assert_eq!(values.len(), 3);
    for value in values {
        assert!(cnpj_engine::is_valid(value));
        assert_eq!(
            cnpj_engine::detect_type(value),
            Some(cnpj_engine::IdentifierType::Alphanumeric)
        );
    }
}

#[test]
fn test_check_digits() {
    let stdout = stdout_of(cnpj().args(["check-digits", "12.345.678/0001"]));
    assert_eq!(stdout, "95\n");

    let stdout = stdout_of(cnpj().args(["check-digits", "12ABC34501DE"]));
    assert_eq!(stdout, "35\n");

    cnpj().args(["check-digits", "123"]).assert().failure();
}

#[test]
fn test_branches() {
    let stdout = stdout_of(cnpj().args(["branches", "12345678", "-n", "2", "--masked"]));
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "12.345.678/0001-95");
    assert!(lines[1].starts_with("12.345.678/0002-"));
}

#[test]
fn test_invalid_config_is_reported() {
    cnpj()
        .args(["--config", "{\"nope\": 1}", "validate", "12345678000195"])
        .assert()
        .failure();
}

#[test]
fn test_branch_count_is_bounded() {
    let mut cmd = cnpj();
    cmd.args(["branches", "12345678", "-n", "10000"]);
    cmd.assert().failure();
    assert_eq!(stdout_of(&mut cmd), "");

    cnpj().args(["branches", "12345678", "-n", "0"]).assert().failure();
}

#[test]
fn test_value_commands_require_values() {
    for command in ["validate", "format", "normalize", "detect"] {
        let mut cmd = cnpj();
        cmd.arg(command);
        cmd.assert().failure();
        assert_eq!(stdout_of(&mut cmd), "");
    }
}
