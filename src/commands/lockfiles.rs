//! Refreshes package-lock.json across the service directories.
use crate::error::SetupError;
use colored::Colorize;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

struct NpmRun {
    dir: PathBuf,
    output: Output,
}

/// Re-locks every service directory under `<root>/src`. A failing directory
/// is reported and the remaining ones are still processed; the command exits
/// unsuccessfully if any of them failed.
pub fn run(base_dir: &Path) -> Result<(), SetupError> {
    let mut runs = vec![];
    let mut failed = false;

    for dir in service_dirs(&base_dir.join("src"))? {
        info!("Updating package-lock.json in {}", dir.display());

        match relock(&dir) {
            Ok(run) => {
                if !run.output.status.success() {
                    failed = true;
                    error!(
                        "npm exited with {} in {}",
                        run.output.status,
                        run.dir.display()
                    );
                }
                runs.push(run);
            }
            Err(e) => {
                failed = true;
                error!("Error running npm in {}: {e}", dir.display());
            }
        }
    }

    for run in runs {
        println!("\n----------------------------------");
        println!(
            "{} {}:\n{}",
            "npm output in".blue(),
            run.dir.display(),
            String::from_utf8_lossy(&run.output.stdout)
        );

        let stderr = String::from_utf8_lossy(&run.output.stderr);
        if !stderr.trim().is_empty() {
            error!("npm errors in {}:\n{stderr}", run.dir.display());
        }
    }

    if failed {
        return Err(SetupError::LockfileRefresh);
    }

    Ok(())
}

/// Direct subdirectories of `src_dir` that carry a package.json.
fn service_dirs(src_dir: &Path) -> Result<Vec<PathBuf>, SetupError> {
    let mut dirs = vec![];

    for entry in fs::read_dir(src_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let dir = entry.path();
        if dir.join("package.json").is_file() {
            dirs.push(dir);
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// Runs npm with node_modules shielded behind a temporary rename, restoring
/// it regardless of the npm outcome.
fn relock(dir: &Path) -> Result<NpmRun, SetupError> {
    let node_modules = dir.join("node_modules");
    let shielded = dir.join("_node_modules");

    safe_rename(&node_modules, &shielded)?;

    let result = Command::new("npm")
        .args(["i", "--package-lock-only"])
        .current_dir(dir)
        .output();

    safe_rename(&shielded, &node_modules)?;

    Ok(NpmRun {
        dir: dir.to_path_buf(),
        output: result?,
    })
}

fn safe_rename(from: &Path, to: &Path) -> Result<(), SetupError> {
    if from.exists() {
        fs::rename(from, to)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn only_visits_directories_with_a_manifest() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("auth")).unwrap();
        fs::write(src.join("auth/package.json"), "{}").unwrap();
        fs::create_dir_all(src.join("docs")).unwrap();
        fs::write(src.join("notes.txt"), "x").unwrap();

        let dirs = service_dirs(&src).unwrap();

        assert_eq!(dirs, vec![src.join("auth")]);
    }

    #[test]
    fn rename_is_a_noop_for_missing_source() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("node_modules");
        let to = dir.path().join("_node_modules");

        safe_rename(&from, &to).unwrap();

        assert!(!to.exists());
    }

    #[test]
    fn rename_round_trips_node_modules() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("node_modules");
        let to = dir.path().join("_node_modules");
        fs::create_dir(&from).unwrap();
        fs::write(from.join("marker"), "x").unwrap();

        safe_rename(&from, &to).unwrap();
        assert!(to.join("marker").is_file());
        assert!(!from.exists());

        safe_rename(&to, &from).unwrap();
        assert!(from.join("marker").is_file());
    }
}
