//! Runs the built binary end to end. External tools are replaced with
//! `true`/`false` so nothing from CASAVA needs to be installed.

use std::path::Path;
use std::process::{Command, Output};

fn run(current_dir: &Path, args: &[&str]) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_runbcl2fastq"))
        .current_dir(current_dir)
        .env_remove("BCL2FASTQ_CONFIGURE")
        .env_remove("BCL2FASTQ_MAKE")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
}

#[test]
fn test_help() -> anyhow::Result<()> {
    let tmpdir = tempfile::tempdir()?;
    let output = run(tmpdir.path(), &["-h"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    for flag in ["-i", "-o", "-s", "-m", "-b", "-j", "-h"] {
        assert!(stderr.contains(flag), "{} missing from usage", flag);
    }
    assert!(stderr.contains("Data/Intensities/BaseCalls"));
    assert!(stderr.contains("Unaligned"));
    assert!(stderr.contains("SampleSheet.csv"));
    assert!(!tmpdir.path().join("configureBclToFastq.log").exists());
    Ok(())
}

#[test]
fn test_unknown_flag() -> anyhow::Result<()> {
    let tmpdir = tempfile::tempdir()?;
    let output = run(tmpdir.path(), &["-z"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("-z"));
    assert!(!tmpdir.path().join("configureBclToFastq.log").exists());
    Ok(())
}

#[test]
fn test_missing_value() -> anyhow::Result<()> {
    let tmpdir = tempfile::tempdir()?;
    let output = run(tmpdir.path(), &["-m"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("--mismatches"));
    Ok(())
}

#[test]
fn test_negative_values() -> anyhow::Result<()> {
    let tmpdir = tempfile::tempdir()?;
    for (args, flag) in [(["-m", "-1"], "--mismatches"), (["-j", "-3"], "--jobs")] {
        let output = run(tmpdir.path(), &args)?;
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8(output.stderr)?.contains(flag));
    }
    Ok(())
}

#[test]
fn test_dry_run() -> anyhow::Result<()> {
    let tmpdir = tempfile::tempdir()?;
    let output = run(tmpdir.path(), &["-n", "-b", "y101,I8,y101", "-j", "3"])?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains(
        "(DRY_RUN): configureBclToFastq.pl --input-dir Data/Intensities/BaseCalls \
         --output-dir Unaligned --mismatches 1 --fastq-cluster-count 0 \
         --sample-sheet SampleSheet.csv --use-bases-mask y101,I8,y101"
    ));
    assert!(stdout.contains("(DRY_RUN): make -j 3"));
    assert!(!tmpdir.path().join("configureBclToFastq.log").exists());
    assert!(!tmpdir.path().join("bclToFastq.log").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_configure_failure() -> anyhow::Result<()> {
    let tmpdir = tempfile::tempdir()?;
    std::fs::create_dir(tmpdir.path().join("Unaligned"))?;
    let output = run(
        tmpdir.path(),
        &["--configure-program", "false", "--make-program", "true"],
    )?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("configureBclToFastq.log"));
    assert!(!stdout.contains("Changing directory"));
    assert!(tmpdir.path().join("configureBclToFastq.log").exists());
    assert!(!tmpdir.path().join("bclToFastq.log").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_build_failure() -> anyhow::Result<()> {
    let tmpdir = tempfile::tempdir()?;
    std::fs::create_dir(tmpdir.path().join("Unaligned"))?;
    let output = run(
        tmpdir.path(),
        &["--configure-program", "true", "--make-program", "false"],
    )?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Changing directory to Unaligned"));
    assert!(stdout.contains("Returning to"));
    assert!(!stdout.contains("finished"));
    assert!(tmpdir.path().join("configureBclToFastq.log").exists());
    assert!(tmpdir.path().join("bclToFastq.log").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_success() -> anyhow::Result<()> {
    let tmpdir = tempfile::tempdir()?;
    std::fs::create_dir(tmpdir.path().join("Demux"))?;
    let output = run(
        tmpdir.path(),
        &[
            "-o",
            "Demux",
            "--configure-program",
            "true",
            "--make-program",
            "true",
        ],
    )?;
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("finished"));
    assert!(tmpdir.path().join("bclToFastq.log").exists());
    Ok(())
}

#[test]
fn test_missing_program() -> anyhow::Result<()> {
    let tmpdir = tempfile::tempdir()?;
    let output = run(
        tmpdir.path(),
        &["--configure-program", "no-such-configureBclToFastq.pl"],
    )?;
    assert_eq!(output.status.code(), Some(127));
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_stdout() -> anyhow::Result<()> {
    let tmpdir = tempfile::tempdir()?;
    std::fs::create_dir(tmpdir.path().join("Unaligned"))?;
    let status = Command::new(env!("CARGO_BIN_EXE_runbcl2fastq"))
        .current_dir(tmpdir.path())
        .args(["--configure-program", "true", "--make-program", "true"])
        .stdout(std::fs::OpenOptions::new().write(true).open("/dev/full")?)
        .status()?;
    assert_eq!(status.code(), Some(0));
    assert!(tmpdir.path().join("configureBclToFastq.log").exists());
    assert!(tmpdir.path().join("bclToFastq.log").exists());
    Ok(())
}
