use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bolsillo"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute bolsillo");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("notification area"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bolsillo"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute bolsillo");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bolsillo"));
}

#[test]
fn target_subcommand_requires_an_action() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bolsillo"));
    cmd.arg("target");

    // Act
    let output = cmd.output().expect("failed to execute bolsillo");

    // Assert: clap reports the missing subcommand.
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}
