// File: crates/chart-render-html/src/browser.rs
// Summary: Writing rendered pages to disk and opening them in the default browser.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

/// Write `html` to `<tmp>/<id>.html`.
pub fn save_html(html: &str, id: &str) -> Result<PathBuf> {
    write_page(std::env::temp_dir().join(format!("{id}.html")), html)
}

/// Write `html` to `path`, creating parent directories.
pub fn write_page(path: impl AsRef<Path>, html: &str) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("failed to write page '{}'", path.display()))?;
    info!(path = %path.display(), bytes = html.len(), "page written");
    Ok(path.to_path_buf())
}

/// Launch the platform opener on `path`. Returns once the opener is spawned.
pub fn open_in_browser(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(any(target_os = "linux", target_os = "freebsd", target_os = "openbsd")) {
        Command::new("xdg-open")
    } else {
        bail!("opening a browser is not supported on this platform");
    };
    cmd.arg(path)
        .spawn()
        .with_context(|| format!("failed to open '{}' in a browser", path.display()))?;
    info!(path = %path.display(), "opened in browser");
    Ok(())
}

/// Save `html` under `id` in the temp directory and open it.
pub fn show(html: &str, id: &str) -> Result<PathBuf> {
    let path = save_html(html, id)?;
    open_in_browser(&path)?;
    Ok(path)
}
