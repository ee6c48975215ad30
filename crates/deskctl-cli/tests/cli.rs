//! Runs the `deskctl` binary against throwaway installation layouts.

use std::process::{Command, Output};

use tempfile::TempDir;

fn deskctl(args: &[&str], home: &TempDir, resources: &TempDir) -> Output {
    Command::new(env!("CARGO_BIN_EXE_deskctl"))
        .args(args)
        .env("DESKCTL_APP_HOME", home.path())
        .env("DESKCTL_RESOURCES_DIR", resources.path())
        .env("DESKCTL_APP_DIR", resources.path())
        .env("RUST_LOG", "deskctl=debug")
        .output()
        .expect("failed to run deskctl")
}

#[test]
fn paths_reports_overrides_and_unresolved_entries() {
    let home = TempDir::new().unwrap();
    let resources = TempDir::new().unwrap();

    let output = deskctl(&["paths"], &home, &resources);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("app_home = {}", home.path().display())));
    assert!(stdout.contains(&format!("resources = {}", resources.path().display())));
    assert!(stdout.contains("vm_home = <unresolved:"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let resources = TempDir::new().unwrap();

    let output = deskctl(&["reboot"], &home, &resources);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
#[cfg(all(unix, not(target_os = "macos")))]
fn missing_emulator_is_a_configuration_error() {
    let home = TempDir::new().unwrap();
    let resources = TempDir::new().unwrap();

    let output = deskctl(&["shutdown", "--no-wait"], &home, &resources);
    assert_eq!(output.status.code(), Some(78));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to find qemu executable"), "{stderr}");
}

#[test]
#[cfg(target_os = "linux")]
fn cli_inside_the_installation_survives_the_sweep() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().unwrap();
    let app = TempDir::new().unwrap();
    let resources = app.path().join("resources").join("resources");
    let bin = resources.join("linux").join("bin");
    let lima_bin = resources.join("linux").join("lima").join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    std::fs::create_dir_all(&lima_bin).unwrap();

    let stub = |path: std::path::PathBuf| {
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    };
    stub(app.path().join("deskbox"));
    stub(lima_bin.join(format!("qemu-system-{}", std::env::consts::ARCH)));

    let shipped = bin.join("deskctl");
    std::fs::copy(env!("CARGO_BIN_EXE_deskctl"), &shipped).unwrap();

    let output = Command::new(&shipped)
        .args(["shutdown", "--no-wait"])
        .env("DESKCTL_APP_HOME", home.path())
        .env("DESKCTL_RESOURCES_DIR", &resources)
        .env("DESKCTL_APP_DIR", app.path())
        .env("RUST_LOG", "deskctl=debug")
        .output()
        .expect("failed to run deskctl");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "{stderr}");
    assert!(stderr.contains("Shutdown complete"), "{stderr}");
}
