//! Rules shared by every target syntax

use super::{Category, RuleSetBuilder};
use crate::error::Result;
use crate::utils::config::Config;

/// Selenium import lines in each of the five dialects. Each pattern eats its
/// trailing newline so stripped imports leave no blank lines behind.
const SELENIUM_IMPORTS: [(&str, &str); 6] = [
    (
        "strip-java-selenium-import",
        r"(?m)^[ \t]*import\s+(?:static\s+)?org\.openqa\.selenium(?:\.[\w*]+)*\s*;?[ \t]*\r?\n?",
    ),
    (
        "strip-java-duration-import",
        r"(?m)^[ \t]*import\s+java\.time\.Duration\s*;?[ \t]*\r?\n?",
    ),
    (
        "strip-python-selenium-import",
        r"(?m)^[ \t]*(?:from\s+selenium(?:\.\w+)*\s+import\s+[^\n]+|import\s+selenium\b(?:\.\w+)*(?:\s+as\s+\w+)?)[ \t]*\r?\n?",
    ),
    (
        "strip-javascript-selenium-require",
        r#"(?m)^[ \t]*(?:const|let|var)\s+[^=\n]+=\s*require\(\s*['"]selenium-webdriver(?:/[\w./-]*)?['"]\s*\)\s*;?[ \t]*\r?\n?"#,
    ),
    (
        "strip-typescript-selenium-import",
        r#"(?m)^[ \t]*import\s+[^;\n]*?\s*from\s+['"]selenium-webdriver(?:/[\w./-]*)?['"]\s*;?[ \t]*\r?\n?"#,
    ),
    (
        "strip-csharp-selenium-using",
        r"(?m)^[ \t]*using\s+(?:OpenQA\.Selenium|SeleniumExtras)(?:\.\w+)*\s*;[ \t]*\r?\n?",
    ),
];

/// Open the imports category and strip Selenium imports written in any dialect.
///
/// A Java script converted to Python still loses its `org.openqa.selenium`
/// imports; the target header takes the place of the first one.
pub fn strip_selenium_imports(builder: RuleSetBuilder) -> Result<RuleSetBuilder> {
    let mut builder = builder.category(Category::Imports)?;
    for (name, pattern) in SELENIUM_IMPORTS {
        builder = builder.rule(name, pattern, "")?;
    }
    Ok(builder)
}

/// Fill configuration placeholders in a rule template.
///
/// `{headless}` renders as `true`/`false`, `{Headless}` as `True`/`False`,
/// `{width}` and `{height}` as the configured viewport.
pub fn render(template: &str, config: &Config) -> String {
    let headless = config.headless.to_string();
    let capitalized = if config.headless { "True" } else { "False" };
    template
        .replace("{headless}", &headless)
        .replace("{Headless}", capitalized)
        .replace("{width}", &config.viewport_width.to_string())
        .replace("{height}", &config.viewport_height.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;
    use crate::syntax::Syntax;

    fn strip(text: &str) -> String {
        let set = strip_selenium_imports(RuleSet::builder(Syntax::Java))
            .unwrap()
            .build();
        set.apply(text).text
    }

    #[test]
    fn test_strips_imports_of_every_dialect() {
        assert_eq!(strip("import org.openqa.selenium.By;\nrest"), "rest");
        assert_eq!(strip("import org.openqa.selenium.*;\nrest"), "rest");
        assert_eq!(strip("import java.time.Duration;\nrest"), "rest");
        assert_eq!(
            strip("from selenium.webdriver.common.by import By\nrest"),
            "rest"
        );
        assert_eq!(strip("import selenium\nrest"), "rest");
        assert_eq!(
            strip("const { Builder, By, until } = require('selenium-webdriver');\nrest"),
            "rest"
        );
        assert_eq!(
            strip("const chrome = require(\"selenium-webdriver/chrome\");\nrest"),
            "rest"
        );
        assert_eq!(
            strip("import { Builder, By } from 'selenium-webdriver';\nrest"),
            "rest"
        );
        assert_eq!(
            strip("import * as chrome from 'selenium-webdriver/chrome';\nrest"),
            "rest"
        );
        assert_eq!(strip("using OpenQA.Selenium.Support.UI;\nrest"), "rest");
    }

    #[test]
    fn test_render_placeholders() {
        let config = Config {
            headless: true,
            viewport_width: 800,
            viewport_height: 600,
            ..Config::default()
        };
        assert_eq!(
            render("{headless} {Headless} {width}x{height} ${v}", &config),
            "true True 800x600 ${v}"
        );
    }

    #[test]
    fn test_keeps_unrelated_imports() {
        let text = "import java.util.List;\nfrom os import path\nusing System;\n";
        assert_eq!(strip(text), text);
    }
}
