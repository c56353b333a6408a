//! Virtualenv creation and dependency installation
//!
//! Optional last stage of the pipeline. Failure here is non-fatal: the
//! project tree is already written, so errors surface as warnings with
//! instructions for finishing setup manually.

use crate::error::KickstartError;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// venv creation is quick; a hung python is the only way to hit this
const VENV_TIMEOUT: Duration = Duration::from_secs(60);

/// pip has to download and build wheels, give it room
const INSTALL_TIMEOUT: Duration = Duration::from_secs(600);

/// Python interpreter used to create the venv
#[cfg(windows)]
const PYTHON: &str = "python";
#[cfg(not(windows))]
const PYTHON: &str = "python3";

/// Path to pip inside the project's venv
fn venv_pip(project_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        project_dir.join("venv").join("Scripts").join("pip.exe")
    } else {
        project_dir.join("venv").join("bin").join("pip")
    }
}

/// OS-appropriate activation command for the next-steps output
pub fn activate_hint() -> &'static str {
    if cfg!(windows) {
        r"venv\Scripts\activate"
    } else {
        "source venv/bin/activate"
    }
}

/// Create `venv/` in the project directory and install requirements.txt
pub async fn bootstrap(project_dir: &Path) -> Result<(), KickstartError> {
    let venv_dir = project_dir.join("venv");

    let mut venv_cmd = TokioCommand::new(PYTHON);
    venv_cmd.arg("-m").arg("venv").arg(&venv_dir);
    run_streamed(venv_cmd, "create virtual environment", VENV_TIMEOUT).await?;

    let pip = venv_pip(project_dir);
    if !pip.exists() {
        return Err(KickstartError::Bootstrap(format!(
            "pip not found in venv at {}",
            pip.display()
        )));
    }

    let requirements = project_dir.join("requirements.txt");
    let mut install_cmd = TokioCommand::new(&pip);
    install_cmd.arg("install").arg("-r").arg(&requirements);
    install_cmd.current_dir(project_dir);
    run_streamed(install_cmd, "install dependencies", INSTALL_TIMEOUT).await?;

    Ok(())
}

/// Run a subprocess, streaming its output indented, with a hard timeout
async fn run_streamed(
    mut cmd: TokioCommand,
    label: &str,
    limit: Duration,
) -> Result<(), KickstartError> {
    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| KickstartError::Bootstrap(format!("failed to {label}: {e}")))?;

    let stdout = child.stdout.take().expect("Failed to capture stdout");
    let stderr = child.stderr.take().expect("Failed to capture stderr");

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    let output_task = async {
        loop {
            tokio::select! {
                line = stdout_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line.dimmed()),
                        _ => break,
                    }
                }
                line = stderr_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        _ => {}
                    }
                }
            }
        }
    };

    if timeout(limit, output_task).await.is_err() {
        let _ = child.kill().await;
        return Err(KickstartError::Bootstrap(format!(
            "timed out after {}s trying to {label}",
            limit.as_secs()
        )));
    }

    match timeout(Duration::from_secs(5), child.wait()).await {
        Ok(Ok(status)) if status.success() => Ok(()),
        Ok(Ok(status)) => Err(KickstartError::Bootstrap(format!(
            "failed to {label} (exit code {})",
            status.code().unwrap_or(-1)
        ))),
        Ok(Err(e)) => Err(KickstartError::Bootstrap(format!(
            "failed to wait for {label}: {e}"
        ))),
        Err(_) => {
            let _ = child.kill().await;
            Err(KickstartError::Bootstrap(format!(
                "{label} process hung after output ended"
            )))
        }
    }
}
