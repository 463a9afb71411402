/// Store key holding the report snapshot. Shared with previously saved data.
pub const STORAGE_KEY: &str = "clientReportData";
pub const WINDOW_TITLE: &str = "Client Report";
pub const DEFAULT_LOG_DIRECTIVE: &str = "client_report=info";

#[cfg(not(target_arch = "wasm32"))]
pub mod paths {
    use std::path::{Path, PathBuf};

    use anyhow::{anyhow, Context, Result};
    use directories::ProjectDirs;

    const DB_FILE_NAME: &str = "report.sqlite";

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "hellhbbd", "client-report")
            .ok_or_else(|| anyhow!("unable to resolve data directory"))
    }

    pub fn default_db_path() -> Result<PathBuf> {
        Ok(project_dirs()?.data_local_dir().join(DB_FILE_NAME))
    }

    /// WebView profile directory kept next to the report database.
    pub fn webview_data_dir_for(db_path: &Path) -> PathBuf {
        db_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("webview")
    }

    pub fn ensure_webview_data_dir(db_path: &Path) -> Result<PathBuf> {
        let dir = webview_data_dir_for(db_path);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create webview dir: {}", dir.display()))?;
        Ok(dir)
    }

    pub fn default_webview_data_dir() -> Result<PathBuf> {
        ensure_webview_data_dir(&default_db_path()?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use paths::{default_db_path, default_webview_data_dir};
