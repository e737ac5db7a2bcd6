use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language dialect a script is written in.
///
/// The same set names both the Selenium source dialect and the Playwright
/// target dialect: every dialect we can read is also one we can emit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    Java,
    Python,
    #[default]
    #[serde(alias = "js")]
    Javascript,
    #[serde(alias = "ts")]
    Typescript,
    #[serde(alias = "c#", alias = "cs")]
    Csharp,
}

impl Syntax {
    pub const ALL: [Syntax; 5] = [
        Syntax::Java,
        Syntax::Python,
        Syntax::Javascript,
        Syntax::Typescript,
        Syntax::Csharp,
    ];

    /// Lowercase identifier used on the command line and in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Syntax::Java => "java",
            Syntax::Python => "python",
            Syntax::Javascript => "javascript",
            Syntax::Typescript => "typescript",
            Syntax::Csharp => "csharp",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Syntax::Java => "Java",
            Syntax::Python => "Python",
            Syntax::Javascript => "JavaScript",
            Syntax::Typescript => "TypeScript",
            Syntax::Csharp => "C#",
        }
    }

    /// File extension for exported scripts
    pub fn extension(&self) -> &'static str {
        match self {
            Syntax::Java => "java",
            Syntax::Python => "py",
            Syntax::Javascript => "js",
            Syntax::Typescript => "ts",
            Syntax::Csharp => "cs",
        }
    }

    /// Export file name, e.g. `playwright-test.py`
    pub fn output_file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }

    /// Map a file extension back to its syntax
    pub fn from_extension(ext: &str) -> Option<Syntax> {
        Syntax::ALL
            .into_iter()
            .find(|s| s.extension().eq_ignore_ascii_case(ext))
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Syntax {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "java" => Ok(Syntax::Java),
            "python" | "py" => Ok(Syntax::Python),
            "javascript" | "js" => Ok(Syntax::Javascript),
            "typescript" | "ts" => Ok(Syntax::Typescript),
            "csharp" | "c#" | "cs" => Ok(Syntax::Csharp),
            _ => Err(ConvertError::UnknownSyntax(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("py".parse::<Syntax>().unwrap(), Syntax::Python);
        assert_eq!("C#".parse::<Syntax>().unwrap(), Syntax::Csharp);
        assert_eq!(" TypeScript ".parse::<Syntax>().unwrap(), Syntax::Typescript);
        assert!("ruby".parse::<Syntax>().is_err());
    }

    #[test]
    fn test_extensions_round_trip() {
        for syntax in Syntax::ALL {
            assert_eq!(Syntax::from_extension(syntax.extension()), Some(syntax));
        }
        assert_eq!(
            Syntax::Csharp.output_file_name("playwright-test"),
            "playwright-test.cs"
        );
    }
}
