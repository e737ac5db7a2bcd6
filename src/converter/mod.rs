//! Converters and the target-syntax dispatcher

use crate::error::Result;
use crate::report::types::ConversionReport;
use crate::rules::{self, RuleSet};
use crate::syntax::Syntax;
use crate::utils::config::Config;
use std::sync::LazyLock;

/// Input to one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source_text: String,
    pub target: Syntax,
}

impl ConversionRequest {
    pub fn new(source_text: impl Into<String>, target: Syntax) -> Self {
        Self {
            source_text: source_text.into(),
            target,
        }
    }
}

/// Output of one conversion
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub output_text: String,
    pub report: ConversionReport,
}

/// Rewrites Selenium scripts into Playwright code for one target syntax
#[derive(Debug, Clone)]
pub struct Converter {
    rules: RuleSet,
}

impl Converter {
    pub fn new(target: Syntax, config: &Config) -> Result<Self> {
        Ok(Self {
            rules: rules::for_syntax(target, config)?,
        })
    }

    pub fn target(&self) -> Syntax {
        self.rules.syntax()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Convert `source`. Never fails: text no rule recognises is returned as is.
    pub fn convert(&self, source: &str) -> String {
        self.rules.apply(source).text
    }

    pub fn convert_with_report(&self, source: &str) -> ConversionResult {
        let applied = self.rules.apply(source);
        let report = ConversionReport {
            target: self.target(),
            header: applied.header,
            changed: applied.text != source,
            hits: applied.hits,
        };
        ConversionResult {
            output_text: applied.text,
            report,
        }
    }
}

/// One converter per target syntax
#[derive(Debug, Clone)]
pub struct Converters {
    java: Converter,
    python: Converter,
    javascript: Converter,
    typescript: Converter,
    csharp: Converter,
}

impl Converters {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            java: Converter::new(Syntax::Java, config)?,
            python: Converter::new(Syntax::Python, config)?,
            javascript: Converter::new(Syntax::Javascript, config)?,
            typescript: Converter::new(Syntax::Typescript, config)?,
            csharp: Converter::new(Syntax::Csharp, config)?,
        })
    }

    pub fn get(&self, target: Syntax) -> &Converter {
        match target {
            Syntax::Java => &self.java,
            Syntax::Python => &self.python,
            Syntax::Javascript => &self.javascript,
            Syntax::Typescript => &self.typescript,
            Syntax::Csharp => &self.csharp,
        }
    }

    pub fn convert(&self, source: &str, target: Syntax) -> String {
        self.get(target).convert(source)
    }

    pub fn run(&self, request: &ConversionRequest) -> ConversionResult {
        self.get(request.target)
            .convert_with_report(&request.source_text)
    }
}

// Built-in rule tables are fixed; a failure here is caught by
// `test_default_converters_compile`.
static DEFAULT: LazyLock<Converters> = LazyLock::new(|| {
    Converters::new(&Config::default()).expect("built-in rule tables must compile")
});

/// Converters built from the default configuration
pub fn defaults() -> &'static Converters {
    &DEFAULT
}

/// Convert a Selenium script into Playwright code in `target` syntax
pub fn convert(source: &str, target: Syntax) -> String {
    DEFAULT.convert(source, target)
}

/// Like [`convert`], also reporting which rules fired
pub fn convert_with_report(request: &ConversionRequest) -> ConversionResult {
    DEFAULT.run(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::HeaderPlacement;

    #[test]
    fn test_default_converters_compile() {
        let converters = Converters::new(&Config::default()).unwrap();
        for syntax in Syntax::ALL {
            let converter = converters.get(syntax);
            assert_eq!(converter.target(), syntax);
            assert!(!converter.rules().is_empty());
        }
    }

    #[test]
    fn test_dispatch_selects_target() {
        let source = "driver.get(\"https://a.test\");";
        // C# Selenium has no `get`, so the C# converter leaves it alone.
        assert_eq!(convert(source, Syntax::Csharp), source);
        assert!(convert(source, Syntax::Java).ends_with("driver.navigate(\"https://a.test\");"));
    }

    #[test]
    fn test_report_for_untouched_text() {
        let result = convert_with_report(&ConversionRequest::new("let x = 1;\n", Syntax::Java));
        assert_eq!(result.output_text, "let x = 1;\n");
        assert!(!result.report.changed);
        assert!(result.report.hits.is_empty());
        assert_eq!(result.report.header, HeaderPlacement::Omitted);
    }

    #[test]
    fn test_report_lists_hits_in_order() {
        let request = ConversionRequest::new(
            "from selenium import webdriver\ndriver = webdriver.Chrome()\ndriver.quit()\n",
            Syntax::Python,
        );
        let result = convert_with_report(&request);
        assert!(result.report.changed);
        assert_eq!(result.report.target, Syntax::Python);
        assert_eq!(result.report.header, HeaderPlacement::Replaced);

        let names: Vec<&str> = result.report.hits.iter().map(|h| h.rule.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "strip-python-selenium-import",
                "webdriver-chrome",
                "driver-to-page",
                "quit"
            ]
        );
    }

    #[test]
    fn test_custom_config_converter() {
        let config = Config {
            headless: true,
            ..Config::default()
        };
        let converter = Converter::new(Syntax::Javascript, &config).unwrap();
        let out = converter.convert("let driver = await new Builder().forBrowser('chrome').build();");
        assert!(out.contains("chromium.launch({ headless: true })"));
    }
}
