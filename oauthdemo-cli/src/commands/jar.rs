//! On-disk cookie jar standing in for the browser's cookie store.

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result, bail};
use directories::BaseDirs;
use reqwest::cookie::{CookieStore, Jar};
use url::Url;

/// Overrides the default jar location.
pub const COOKIE_JAR_ENV: &str = "OAUTHDEMO_COOKIE_JAR";

pub fn session_path() -> PathBuf {
    if let Some(path) = env::var_os(COOKIE_JAR_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(path);
    }
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("oauthdemo").join("session.cookies"))
        .unwrap_or_else(|| PathBuf::from("./session.cookies"))
}

/// Loads the jar for `origin`, or an empty one when nothing is stored yet.
pub fn load_cookie_jar(origin: &Url, path: &Path) -> Result<Arc<Jar>> {
    let jar = Arc::new(Jar::default());
    if !path.exists() {
        return Ok(jar);
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read session jar {}", path.display()))?;
    for entry in contents.split(';') {
        let cookie = entry.trim();
        if !cookie.is_empty() {
            jar.add_cookie_str(cookie, origin);
        }
    }
    Ok(jar)
}

/// Writes the cookies the jar holds for `origin`, removing the file when there are none.
pub fn persist_cookie_jar(jar: &Jar, origin: &Url, path: &Path) -> Result<()> {
    if let Some(header) = jar.cookies(origin) {
        ensure_parent(path)?;
        fs::write(path, header.to_str()?.as_bytes())
            .with_context(|| format!("failed to write session jar at {}", path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .context("failed to set session jar permissions")?;
        }
        tracing::debug!(path = %path.display(), "session cookies saved");
    } else if path.exists() {
        fs::remove_file(path).ok();
    }
    Ok(())
}

/// Adds a cookie copied from a browser (e.g. `JSESSIONID=...`) to the stored jar.
pub fn import_cookie(origin: &Url, path: &Path, cookie: &str) -> Result<()> {
    let cookie = cookie.trim();
    let Some((name, value)) = cookie.split_once('=') else {
        bail!("cookie must look like NAME=VALUE");
    };
    if name.trim().is_empty() || value.trim().is_empty() {
        bail!("cookie must look like NAME=VALUE");
    }

    let jar = load_cookie_jar(origin, path)?;
    jar.add_cookie_str(cookie, origin);
    persist_cookie_jar(&jar, origin, path)
}

/// Deletes the stored jar. Returns whether a file was removed.
pub fn clear(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)
        .with_context(|| format!("failed to remove session jar {}", path.display()))?;
    Ok(true)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create session directory {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn origin() -> Url {
        Url::parse("http://127.0.0.1:8080").unwrap()
    }

    #[test]
    fn missing_jar_loads_empty() {
        let dir = TempDir::new().unwrap();
        let jar = load_cookie_jar(&origin(), &dir.path().join("none.cookies")).unwrap();
        assert!(jar.cookies(&origin()).is_none());
    }

    #[test]
    fn imported_cookie_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.cookies");

        import_cookie(&origin(), &path, "JSESSIONID=abc123").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "JSESSIONID=abc123");

        let jar = load_cookie_jar(&origin(), &path).unwrap();
        let header = jar.cookies(&origin()).unwrap();
        assert_eq!(header.to_str().unwrap(), "JSESSIONID=abc123");
    }

    #[cfg(unix)]
    #[test]
    fn jar_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.cookies");
        import_cookie(&origin(), &path, "JSESSIONID=abc123").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn malformed_cookie_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.cookies");
        assert!(import_cookie(&origin(), &path, "no-equals").is_err());
        assert!(import_cookie(&origin(), &path, "=value").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn clear_reports_removal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.cookies");
        assert!(!clear(&path).unwrap());

        import_cookie(&origin(), &path, "JSESSIONID=abc123").unwrap();
        assert!(clear(&path).unwrap());
        assert!(!path.exists());
    }
}
