//! Materializes the rendered file plan onto disk
//!
//! The one real safety invariant in the pipeline lives here: every rendered
//! output path must stay inside the project root. Any path that escapes
//! aborts the whole generation, and a failure partway through removes the
//! tree this invocation created so no half-written project is left behind.

use crate::error::KickstartError;
use crate::templates::{render, FileSpec, RenderContext};
use colored::Colorize;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Render and write the full plan under `root`
///
/// `root` must not exist yet (the validator checks this first); it is
/// created here, which is what makes removal on failure safe.
pub async fn write_project(
    root: &Path,
    plan: &[FileSpec],
    ctx: &RenderContext,
) -> Result<Vec<PathBuf>, KickstartError> {
    fs::create_dir_all(root)
        .await
        .map_err(|source| KickstartError::Write {
            path: root.to_path_buf(),
            source,
        })?;

    match write_all(root, plan, ctx).await {
        Ok(written) => Ok(written),
        Err(err) => {
            if let Err(cleanup) = fs::remove_dir_all(root).await {
                eprintln!(
                    "{} could not remove partial project at {}: {}",
                    "Warning:".yellow(),
                    root.display(),
                    cleanup
                );
            }
            Err(err)
        }
    }
}

async fn write_all(
    root: &Path,
    plan: &[FileSpec],
    ctx: &RenderContext,
) -> Result<Vec<PathBuf>, KickstartError> {
    let mut written = Vec::with_capacity(plan.len());

    for spec in plan {
        let relative = render(spec.path, ctx);
        let target = resolve_within(root, &relative)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| KickstartError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let body = render(spec.body, ctx);
        fs::write(&target, body)
            .await
            .map_err(|source| KickstartError::Write {
                path: target.clone(),
                source,
            })?;

        written.push(target);
    }

    Ok(written)
}

/// Resolve `relative` against `root`, rejecting anything that escapes it
///
/// The check is lexical (the target does not exist yet, so canonicalizing is
/// not an option): absolute paths are rejected outright, and `..` components
/// may never climb above the root.
fn resolve_within(root: &Path, relative: &str) -> Result<PathBuf, KickstartError> {
    let rel_path = Path::new(relative);

    if rel_path.is_absolute() {
        return Err(KickstartError::PathSafety {
            path: relative.to_string(),
        });
    }

    let mut depth: i32 = 0;
    for component in rel_path.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return Err(KickstartError::PathSafety {
                        path: relative.to_string(),
                    });
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(KickstartError::PathSafety {
                    path: relative.to_string(),
                });
            }
        }
    }

    Ok(root.join(rel_path))
}
