//! Cross-process determinism: the `report_fixture` binary must print the same
//! lines regardless of cwd, locale, and unrelated environment variables.

use std::path::Path;
use std::process::Command;

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_report_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "report_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("report_digest=sha256:"));
    assert!(baseline.contains("verdict=Match"));
    assert!(baseline.contains("probe_count=21"));

    let alt_cwd = std::env::temp_dir();
    let alt_cwd = alt_cwd.to_string_lossy();
    assert_eq!(
        baseline,
        run_variant(&alt_cwd, &[]),
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "output differs when LC_ALL=C LANG=C"
    );

    assert_eq!(
        baseline,
        run_variant(
            &root,
            &[
                ("STRIDE_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("HOME", "/nonexistent"),
            ],
        ),
        "output differs with spurious env vars"
    );
}

#[test]
fn crossproc_matches_inproc() {
    let report = stride_harness::runner::run_suite(
        &stride_harness::samples::default_samples(),
        &stride_harness::policy::PolicyConfig::default(),
    )
    .unwrap();
    let mut expected = report.render_lines().unwrap().join("\n");
    expected.push('\n');
    assert_eq!(run_variant(&workspace_root(), &[]), expected);
}
