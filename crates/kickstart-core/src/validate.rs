//! Project name and target directory validation

use crate::error::KickstartError;
use std::path::Path;

/// Check the name against the identifier pattern `[a-zA-Z_][a-zA-Z0-9_]*`
///
/// The name doubles as the Django settings package and as part of every
/// output path, so anything outside this pattern is rejected up front.
pub fn validate_project_name(name: &str) -> Result<(), KickstartError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(KickstartError::Validation(format!(
            "'{name}' is not a valid project name. \
             Use only letters, numbers, and underscores, and do not start with a digit."
        )))
    }
}

/// Refuse to generate over anything that already exists at the target path
pub fn validate_target(target: &Path) -> Result<(), KickstartError> {
    if target.exists() {
        return Err(KickstartError::Validation(format!(
            "'{}' already exists. Remove it first or choose a different project name.",
            target.display()
        )));
    }
    Ok(())
}
