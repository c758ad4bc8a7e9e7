//! # rg-mcp search
//!
//! Thin, bounded wrapper around the `rg` executable.
//!
//! ```text
//! pattern + folder
//!     │
//!     ├──> validate (non-empty pattern, existing directory)
//!     ├──> locate rg (override → next to binary → PATH)
//!     ├──> run with the fixed template (--heading -n --max-count 5 -B 1 -A 5)
//!     └──> truncate to the line cap, prepend timing header
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use rg_mcp_search::{Searcher, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let searcher = Searcher::default();
//!     match searcher.search_files(&SearchRequest::new("fn main", ".")).await {
//!         Ok(outcome) => println!("{}", outcome.render()),
//!         Err(err) => eprintln!("{}", err.render()),
//!     }
//! }
//! ```

mod definitions;
mod error;
mod invoker;
mod locate;
mod output;

pub use definitions::{python_definition_pattern, EXCLUDED_GLOBS};
pub use error::{Result, SearchError};
pub use invoker::{
    definition_search_args, file_search_args, validate_folder, SearchKind, SearchLimits,
    SearchOutcome, SearchRequest, Searcher, CONTEXT_AFTER, CONTEXT_BEFORE,
    DEFAULT_DEFINITION_MAX_LINES, DEFAULT_MAX_LINES, MAX_COUNT_PER_FILE, NO_MATCHES,
};
pub use locate::{rg_file_name, RgLocator, RG_PATH_ENV};
pub use output::{timing_header, truncate_lines};
