use anyhow::Result;
use std::process::{Command, Output};

fn run_chestnut(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_chestnut"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_power_of_two_scenario_with_ceil() -> Result<()> {
    let output = run_chestnut(&["--V0", "1", "--V", "1024", "--dt", "2", "--ceil"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("V0 (initial single-bun volume) = 1.000000e+00 m^3"));
    assert!(stdout.contains("dt (doubling interval)        = 2.0 minutes"));
    assert!(stdout.contains("n (required doublings, real)  = 10.000000"));
    assert!(stdout.contains("T (time to reach target, real)= 20.000 minutes"));
    assert!(stdout.contains("[ceil] n (integer doublings)  = 10"));
    assert!(stdout.contains("[ceil] T (time with integer)  = 20.000 minutes"));
    assert!(stdout.contains("--- end ---"));
    Ok(())
}

#[test]
fn test_default_parameters() -> Result<()> {
    let output = run_chestnut(&[])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("V0 (initial single-bun volume) = 1.130000e-04 m^3"));
    assert!(stdout.contains("V  (target volume)            = 3.810000e+38 m^3"));
    assert!(stdout.contains("dt (doubling interval)        = 5.0 minutes"));
    assert!(stdout.contains("n (required doublings, real)  = 141.274448"));
    assert!(stdout.contains("T (time to reach target, real)= 706.372 minutes"));
    assert!(!stdout.contains("[ceil]"));
    Ok(())
}

#[test]
fn test_invalid_parameters_print_message_and_exit_cleanly() -> Result<()> {
    for args in [
        vec!["--V0", "0"],
        vec!["--V", "-5"],
        vec!["--dt", "-1", "--ceil"],
    ] {
        let output = run_chestnut(&args)?;
        assert_eq!(output.status.code(), Some(0));

        let stdout = String::from_utf8(output.stdout)?;
        assert_eq!(stdout.trim(), "V0, V and dt must be positive numbers.");
        assert!(!stdout.contains("n (required doublings"));
    }
    Ok(())
}

#[test]
fn test_config_file_supplies_defaults() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let config_path = temp_dir.path().join("chestnut.toml");
    std::fs::write(&config_path, "[growth]\nv0 = 1.0\nv = 1024.0\ndt = 2.0\n")?;

    let output = run_chestnut(&["--config", config_path.to_str().unwrap(), "--dt", "3"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("n (required doublings, real)  = 10.000000"));
    assert!(stdout.contains("T (time to reach target, real)= 30.000 minutes"));
    Ok(())
}

#[test]
fn test_broken_config_file_fails() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "[growth\n")?;

    let output = run_chestnut(&["--config", config_path.to_str().unwrap()])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    Ok(())
}
