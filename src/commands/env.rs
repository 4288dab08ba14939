//! Line-level updates to the services' .env files.
use crate::error::SetupError;
use log::info;
use std::fs;
use std::path::Path;

/// True when the line defines `key`: optional leading whitespace, the key
/// itself, optional whitespace, then `=`.
fn defines_key(line: &str, key: &str) -> bool {
    match line.trim_start().strip_prefix(key) {
        Some(rest) => rest.trim_start().starts_with('='),
        None => false,
    }
}

/// Rewrites the line defining `key` to `key=new_value`, appending one when
/// the key is absent. Every line defining the key is rewritten, so a file
/// with duplicate keys ends up with duplicate replacement lines. The value
/// is inserted verbatim; callers supply their own quoting.
pub fn replace_env_line(path: &Path, key: &str, new_value: &str) -> Result<(), SetupError> {
    if !path.exists() {
        return Err(SetupError::EnvFileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;

    let mut updated_lines = vec![];
    let mut key_found = false;

    for line in contents.lines() {
        if defines_key(line, key) {
            info!("Updating {key} to {new_value}");
            updated_lines.push(format!("{key}={new_value}"));
            key_found = true;
        } else {
            updated_lines.push(line.to_string());
        }
    }

    if !key_found {
        info!("Key {key} not found, it will be appended");
        updated_lines.push(format!("{key}={new_value}"));
    }

    fs::write(path, updated_lines.join("\n") + "\n")?;

    Ok(())
}
