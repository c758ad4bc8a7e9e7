use crate::definitions::{python_definition_pattern, EXCLUDED_GLOBS};
use crate::error::{Result, SearchError};
use crate::locate::RgLocator;
use crate::output::{timing_header, truncate_lines};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

pub const DEFAULT_MAX_LINES: usize = 300;
pub const DEFAULT_DEFINITION_MAX_LINES: usize = 400;
pub const MAX_COUNT_PER_FILE: usize = 5;
pub const CONTEXT_BEFORE: usize = 1;
pub const CONTEXT_AFTER: usize = 5;

pub const NO_MATCHES: &str = "No matches found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Files,
    PythonDefinitions,
}

impl SearchKind {
    fn header_label(self) -> &'static str {
        match self {
            SearchKind::Files => "Search",
            SearchKind::PythonDefinitions => "Python definition search",
        }
    }
}

/// Output caps applied after ripgrep returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_lines: usize,
    pub definition_max_lines: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            definition_max_lines: DEFAULT_DEFINITION_MAX_LINES,
        }
    }
}

impl SearchLimits {
    fn cap_for(&self, kind: SearchKind) -> usize {
        match kind {
            SearchKind::Files => self.max_lines,
            SearchKind::PythonDefinitions => self.definition_max_lines,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub pattern: String,
    pub folder: PathBuf,
}

impl SearchRequest {
    pub fn new(pattern: impl Into<String>, folder: impl Into<PathBuf>) -> Self {
        Self {
            pattern: pattern.into(),
            folder: folder.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub kind: SearchKind,
    /// Bounded ripgrep output, or the no-match message.
    pub body: String,
    pub elapsed: Duration,
    pub matched: bool,
    pub truncated: bool,
}

impl SearchOutcome {
    pub fn render(&self) -> String {
        let mut out = timing_header(self.kind.header_label(), self.elapsed);
        out.push_str(&self.body);
        out
    }
}

/// Checks the folder before anything is spawned.
pub fn validate_folder(folder: &Path) -> Result<()> {
    if !folder.exists() {
        return Err(SearchError::InvalidInput(format!(
            "Folder '{}' does not exist",
            folder.display()
        )));
    }
    if !folder.is_dir() {
        return Err(SearchError::InvalidInput(format!(
            "'{}' is not a directory",
            folder.display()
        )));
    }
    Ok(())
}

/// Argument template for a plain content search.
pub fn file_search_args(pattern: &str, folder: &Path) -> Vec<OsString> {
    let mut args = common_args();
    args.push("-e".into());
    args.push(pattern.into());
    args.push("--".into());
    args.push(folder.as_os_str().to_owned());
    args
}

/// Argument template for a Python definition search.
pub fn definition_search_args(regex: &str, folder: &Path) -> Vec<OsString> {
    let mut args = common_args();
    args.push("-t".into());
    args.push("py".into());
    for glob in EXCLUDED_GLOBS {
        args.push("--glob".into());
        args.push((*glob).into());
    }
    args.push("-e".into());
    args.push(regex.into());
    args.push("--".into());
    args.push(folder.as_os_str().to_owned());
    args
}

fn common_args() -> Vec<OsString> {
    vec![
        "--heading".into(),
        "-n".into(),
        "--max-count".into(),
        MAX_COUNT_PER_FILE.to_string().into(),
        "-B".into(),
        CONTEXT_BEFORE.to_string().into(),
        "-A".into(),
        CONTEXT_AFTER.to_string().into(),
    ]
}

/// Runs ripgrep for one request at a time; holds no per-call state.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    locator: RgLocator,
    limits: SearchLimits,
}

impl Searcher {
    pub fn new(locator: RgLocator, limits: SearchLimits) -> Self {
        Self { locator, limits }
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    pub async fn search_files(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        if request.pattern.is_empty() {
            return Err(SearchError::InvalidInput(
                "pattern must not be empty".to_string(),
            ));
        }
        validate_folder(&request.folder)?;
        let rg = self.locator.locate()?;
        let args = file_search_args(&request.pattern, &request.folder);
        self.run(&rg, args, SearchKind::Files, || NO_MATCHES.to_string())
            .await
    }

    pub async fn search_definitions(&self, name: &str, folder: &Path) -> Result<SearchOutcome> {
        let regex = python_definition_pattern(name)?;
        validate_folder(folder)?;
        let rg = self.locator.locate()?;
        let args = definition_search_args(&regex, folder);
        let name = name.trim().to_string();
        self.run(&rg, args, SearchKind::PythonDefinitions, move || {
            format!("No Python definitions found for '{name}'")
        })
        .await
    }

    async fn run(
        &self,
        rg: &Path,
        args: Vec<OsString>,
        kind: SearchKind,
        no_match_message: impl FnOnce() -> String,
    ) -> Result<SearchOutcome> {
        log::debug!("running {} {:?}", rg.display(), args);

        let started = Instant::now();
        let output = Command::new(rg)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    SearchError::NotFound(format!("failed to start {}: {err}", rg.display()))
                } else {
                    SearchError::ExecutionFailure(format!(
                        "failed to run {}: {err}",
                        rg.display()
                    ))
                }
            })?;
        let elapsed = started.elapsed();

        let stdout = String::from_utf8_lossy(&output.stdout);
        let status = output.status.code();
        // rg: 0 = matches, 1 = no matches, 2 = error (possibly alongside partial matches).
        if !matches!(status, Some(0) | Some(1)) && stdout.trim().is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("rg exited with {}", output.status)
            } else {
                stderr
            };
            log::warn!("ripgrep failed: {message}");
            return Err(SearchError::ExecutionFailure(message));
        }

        if stdout.trim().is_empty() {
            return Ok(SearchOutcome {
                kind,
                body: no_match_message(),
                elapsed,
                matched: false,
                truncated: false,
            });
        }

        let (body, truncated) = truncate_lines(&stdout, self.limits.cap_for(kind));
        log::debug!(
            "search finished in {:.3}s (truncated={truncated})",
            elapsed.as_secs_f64()
        );
        Ok(SearchOutcome {
            kind,
            body,
            elapsed,
            matched: true,
            truncated,
        })
    }
}
