use std::process::Command;

#[test]
fn test_binary_prints_plain_script_when_piped() {
    let output = Command::new(env!("CARGO_BIN_EXE_zoo_demo"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = zoo_demo::demo::render(&zoo_demo::DemoConfig::script().unwrap()).unwrap();
    assert_eq!(stdout, expected);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_piped_output_ignores_color_env() {
    let output = Command::new(env!("CARGO_BIN_EXE_zoo_demo"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains('\u{1b}'));
    assert!(stdout.starts_with("=== ZOO MANAGEMENT SYSTEM (OOP DEMO) ===\n"));
}
