use crate::rules::Category;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building rule sets or reading configuration.
///
/// Converting text never fails; these only surface when a rule table or a
/// config file is malformed, or a script directory cannot be read.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A rule pattern did not compile.
    #[error("rule `{rule}` has an invalid pattern: {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    /// A category was opened after one that must run later.
    #[error("category {category:?} cannot follow {after:?}")]
    CategoryOrder { category: Category, after: Category },

    /// Syntax label not recognised.
    #[error("unknown syntax: {0}")]
    UnknownSyntax(String),

    /// Configuration file could not be loaded.
    #[error("config error: {0}")]
    Config(String),

    /// A path could not be resolved while collecting scripts.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
