//! The full environment bootstrap: placeholder secrets plus .env patches.
use super::{env, secrets};
use crate::error::SetupError;
use std::io;
use std::path::{Path, PathBuf};

/// Secret files created under the project root.
const SECRET_FILES: [&str; 6] = [
    "secrets/auth_client.txt",
    "secrets/fluentbit_db.txt",
    "secrets/internal_api.txt",
    "secrets/keycloak_admin.txt",
    "secrets/postgres.txt",
    "secrets/session.txt",
];

/// (file, key, value) patches applied to the service .env files, in order.
/// Values land in the files verbatim, quotes and trailing comments included.
const ENV_UPDATES: [(&str, &str, &str); 4] = [
    ("src/auth/.env", "ADMIN_USER_ROLE", "\"\""),
    (
        "src/auth/.env",
        "ACCEPTED_USER_EMAILS_FILE",
        "\"\" # \"/run/auth/accepted-emails.txt\"",
    ),
    ("src/auth/.env", "PASS_THROUGH_MODE", "true"),
    ("src/scheduler/.env", "ENABLE_SCHEDULED_TASKS", "false"),
];

/// The project root is two levels above the installed binary, which keeps
/// the tool independent from the directory it is invoked from.
pub fn project_root() -> Result<PathBuf, SetupError> {
    let exe = std::env::current_exe()?.canonicalize()?;
    let root = exe.parent().and_then(Path::parent).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "executable has no grandparent directory",
        )
    })?;
    Ok(root.to_path_buf())
}

pub fn run(base_dir: &Path) -> Result<(), SetupError> {
    for file in SECRET_FILES {
        secrets::write_placeholder(&base_dir.join(file))?;
    }

    for (file, key, value) in ENV_UPDATES {
        env::replace_env_line(&base_dir.join(file), key, value)?;
    }

    Ok(())
}
