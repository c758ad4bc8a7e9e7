use crate::error::{Result, SearchError};
use std::env;
use std::path::{Path, PathBuf};

/// Environment override for the ripgrep executable.
pub const RG_PATH_ENV: &str = "RG_MCP_RG_PATH";

pub fn rg_file_name() -> String {
    format!("rg{}", env::consts::EXE_SUFFIX)
}

/// Finds the ripgrep executable.
///
/// Lookup order: explicit override, directories next to the running binary, then `PATH`.
#[derive(Debug, Clone)]
pub struct RgLocator {
    explicit: Option<PathBuf>,
    sibling_dirs: Vec<PathBuf>,
    use_path: bool,
}

impl Default for RgLocator {
    fn default() -> Self {
        Self::from_env()
    }
}

impl RgLocator {
    pub fn from_env() -> Self {
        let explicit = env::var(RG_PATH_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let sibling_dirs = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .into_iter()
            .collect();
        Self {
            explicit,
            sibling_dirs,
            use_path: true,
        }
    }

    /// A locator that only looks where it is told to.
    pub fn isolated(sibling_dirs: Vec<PathBuf>) -> Self {
        Self {
            explicit: None,
            sibling_dirs,
            use_path: false,
        }
    }

    /// A CLI-provided path wins over the environment.
    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.explicit = path;
        }
        self
    }

    pub fn locate(&self) -> Result<PathBuf> {
        if let Some(path) = self.explicit.as_ref() {
            if path.is_file() {
                return Ok(path.clone());
            }
            return Err(SearchError::NotFound(format!(
                "configured path '{}' is not a file",
                path.display()
            )));
        }

        let name = rg_file_name();
        for dir in &self.sibling_dirs {
            let candidate = dir.join(&name);
            if candidate.is_file() {
                log::debug!("using ripgrep next to binary: {}", candidate.display());
                return Ok(candidate);
            }
        }

        if self.use_path {
            if let Ok(found) = which::which("rg") {
                log::debug!("using ripgrep from PATH: {}", found.display());
                return Ok(found);
            }
        }

        Err(SearchError::NotFound(format!(
            "place {name} next to the rg-mcp binary or install ripgrep on PATH"
        )))
    }
}
