//! Best-effort guess of the dialect a Selenium script is written in

use crate::syntax::Syntax;
use log::debug;

/// Marker checks in priority order; the first satisfied one wins.
/// C# comes first: a C# class also declares `public class` and `IWebDriver`.
const MARKERS: [(Syntax, fn(&str) -> bool); 5] = [
    (Syntax::Csharp, is_csharp),
    (Syntax::Java, is_java),
    (Syntax::Python, is_python),
    (Syntax::Typescript, is_typescript),
    (Syntax::Javascript, is_javascript),
];

fn is_csharp(text: &str) -> bool {
    text.contains("using OpenQA.Selenium") || text.contains("IWebDriver") || text.contains("FindElement")
}

fn is_java(text: &str) -> bool {
    text.contains("WebDriver")
        && (text.contains("import org.openqa.selenium") || text.contains("public class"))
}

fn is_python(text: &str) -> bool {
    text.contains("from selenium")
        || text.contains("import selenium")
        || text.contains("driver.find_element")
}

fn is_typescript(text: &str) -> bool {
    text.contains(": WebDriver")
        || text.contains("Promise<void>")
        || (text.contains("import {") && text.contains("selenium-webdriver"))
}

fn is_javascript(text: &str) -> bool {
    text.contains("require(") && text.contains("selenium-webdriver")
}

/// Guess the source syntax of `text`. Falls back to JavaScript.
pub fn detect_syntax(text: &str) -> Syntax {
    let syntax = MARKERS
        .iter()
        .find(|(_, matches)| matches(text))
        .map(|(syntax, _)| *syntax)
        .unwrap_or_default();
    debug!("detected source syntax: {}", syntax);
    syntax
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::sample;

    #[test]
    fn test_detects_every_sample() {
        for syntax in Syntax::ALL {
            assert_eq!(detect_syntax(sample(syntax)), syntax, "{}", syntax);
        }
    }

    #[test]
    fn test_default_is_javascript() {
        assert_eq!(detect_syntax(""), Syntax::Javascript);
        assert_eq!(detect_syntax("print('hello')"), Syntax::Javascript);
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            detect_syntax("public class A { IWebDriver d; }"),
            Syntax::Csharp
        );
        assert_eq!(
            detect_syntax("public class A { WebDriver d; d.findElement(x); }"),
            Syntax::Java
        );
        // Python's attribute idiom alone is enough.
        assert_eq!(detect_syntax("el = driver.find_element(By.ID, 'x')"), Syntax::Python);
        assert_eq!(
            detect_syntax("let driver: WebDriver = await build();"),
            Syntax::Typescript
        );
    }
}
