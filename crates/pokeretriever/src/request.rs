use pokeretriever_core::modes::SearchMode;
use std::path::PathBuf;

/// Where the batch identifiers come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchSource {
    /// A single name or id given on the command line
    Single(String),
    /// A file with one name or id per line
    File(PathBuf),
}

/// Everything one invocation needs, fixed before the first fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub mode: SearchMode,
    pub source: BatchSource,
    /// Resolve nested references of a pokemon into full records
    pub expanded: bool,
    pub output: Option<PathBuf>,
    pub json: bool,
}
