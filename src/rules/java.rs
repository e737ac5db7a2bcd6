//! Selenium Java → Playwright Java

use super::common::{render, strip_selenium_imports};
use super::{Category, RuleSet};
use crate::error::Result;
use crate::syntax::Syntax;
use crate::utils::config::Config;

const HEADER: &str = "import com.microsoft.playwright.*;\nimport com.microsoft.playwright.options.*;\n";

const SESSION: &str = r"(?m)^(?P<indent>[ \t]*)(?:WebDriver|ChromeDriver)\s+(?P<var>\w+)\s*=\s*new\s+ChromeDriver\([^;\n]*\)[ \t]*;?";

const SESSION_TEMPLATE: &str = "${indent}Playwright playwright = Playwright.create();
${indent}Browser browser = playwright.chromium().launch(new BrowserType.LaunchOptions().setHeadless({headless}));
${indent}BrowserContext context = browser.newContext();
${indent}Page ${var} = context.newPage();";

const TEARDOWN_TEMPLATE: &str = "${indent}context.close();
${indent}browser.close();
${indent}playwright.close();";

/// `WebElement x = <expr>;` followed on the same or next line by `x.<action>`
const DECLARE_THEN: &str = r"(?m)^(?P<indent>[ \t]*)WebElement\s+(?P<var>\w+)\s*=\s*(?P<expr>[^;\n]+);(?P<sep>[ \t]*(?:\r?\n[ \t]*)?)(?P<use>\w+)";

const WAIT_SETUP: &str = r"(?m)^(?P<indent>[ \t]*)WebDriverWait\s+(?P<wait>\w+)\s*=\s*new\s+WebDriverWait\(\s*(?P<h>\w+)\s*,[^;\n]*\);";

const WAIT_UNTIL_CLASS: &str = r"(?:WebElement|Locator)\s+(?P<var>\w+)\s*=\s*(?P<until>\w+)\.until\(\s*ExpectedConditions\.(?:presenceOfElementLocated|visibilityOfElementLocated)\(\s*By\.className\(\s*{str}\s*\)\s*\)\s*\)[ \t]*;?";

pub fn rule_set(config: &Config) -> Result<RuleSet> {
    let builder = strip_selenium_imports(RuleSet::builder(Syntax::Java).header(HEADER))?;

    let builder = builder
        .category(Category::Session)?
        .once("new-chrome-driver", SESSION, &render(SESSION_TEMPLATE, config))?
        .category(Category::Navigation)?
        .quoted(
            "navigate-to",
            r"(?P<h>\w+)\.navigate\(\)\.to\(\s*{str}\s*\)[ \t]*;?",
            "${h}.navigate({q}${v}{q});",
        )?
        .rule(
            "navigate-back",
            r"(?P<h>\w+)\.navigate\(\)\.back\(\)[ \t]*;?",
            "${h}.goBack();",
        )?
        .rule(
            "navigate-forward",
            r"(?P<h>\w+)\.navigate\(\)\.forward\(\)[ \t]*;?",
            "${h}.goForward();",
        )?
        .rule(
            "navigate-refresh",
            r"(?P<h>\w+)\.navigate\(\)\.refresh\(\)[ \t]*;?",
            "${h}.reload();",
        )?
        .quoted(
            "get",
            r"(?P<h>\w+)\.get\(\s*{str}\s*\)[ \t]*;?",
            "${h}.navigate({q}${v}{q});",
        )?;

    let builder = builder
        .category(Category::Viewport)?
        .rule(
            "maximize-window",
            r"(?P<h>\w+)\.manage\(\)\.window\(\)\.maximize\(\)[ \t]*;?",
            &render("${h}.setViewportSize({width}, {height});", config),
        )?
        .rule(
            "set-window-size",
            r"(?P<h>\w+)\.manage\(\)\.window\(\)\.setSize\(\s*new\s+Dimension\(\s*(?P<w>\d+)\s*,\s*(?P<ht>\d+)\s*\)\s*\)[ \t]*;?",
            "${h}.setViewportSize(${w}, ${ht});",
        )?;

    let builder = builder
        .category(Category::Location)?
        .double_quoted(
            "by-id",
            r"(?P<h>\w+)\.findElement\(\s*By\.id\(\s*{str}\s*\)\s*\)",
            r##"${h}.locator("#${v}")"##,
        )?
        .double_quoted(
            "by-name",
            r"(?P<h>\w+)\.findElement\(\s*By\.name\(\s*{str}\s*\)\s*\)",
            r#"${h}.locator("[name='${v}']")"#,
        )?
        .double_quoted(
            "by-class-name",
            r"(?P<h>\w+)\.findElement\(\s*By\.className\(\s*{str}\s*\)\s*\)",
            r#"${h}.locator(".${v}")"#,
        )?
        .double_quoted(
            "by-css-selector",
            r"(?P<h>\w+)\.findElement\(\s*By\.cssSelector\(\s*{str}\s*\)\s*\)",
            r#"${h}.locator("${v}")"#,
        )?
        .double_quoted(
            "by-xpath",
            r"(?P<h>\w+)\.findElement\(\s*By\.xpath\(\s*{str}\s*\)\s*\)",
            r#"${h}.locator("xpath=${v}")"#,
        )?;

    // Declare-then-act rules must precede the single-call rules below.
    let builder = builder
        .category(Category::Actions)?
        .double_quoted(
            "declare-then-send-keys",
            &format!(r"{DECLARE_THEN}\.sendKeys\(\s*{{str}}\s*\)[ \t]*;?"),
            r#"${indent}Locator ${var} = ${expr};${sep}${var}.fill("${v}");"#,
        )?
        .same("var", "use")
        .rule(
            "declare-then-click",
            &format!(r"{DECLARE_THEN}\.click\(\)[ \t]*;?"),
            "${indent}Locator ${var} = ${expr};${sep}${var}.click();",
        )?
        .same("var", "use")
        .double_quoted("send-keys", r"\.sendKeys\(\s*{str}\s*\)", r#".fill("${v}")"#)?
        .rule(
            "send-keys-variable",
            r"\.sendKeys\(\s*(?P<arg>\w+)\s*\)",
            ".fill(${arg})",
        )?;

    let builder = builder
        .category(Category::Waits)?
        .double_quoted(
            "wait-setup-then-until-class",
            &format!(r"{WAIT_SETUP}(?P<gap>(?s:.*?)\n)(?P<indent2>[ \t]*){WAIT_UNTIL_CLASS}"),
            "${indent}// Playwright has built-in auto-waiting${gap}${indent2}Locator ${var} = ${h}.locator(\".${v}\");
${indent2}${var}.waitFor();",
        )?
        .same("wait", "until")
        .double_quoted(
            "wait-until-class",
            &format!(r"(?m)^(?P<indent>[ \t]*){WAIT_UNTIL_CLASS}"),
            "${indent}Locator ${var} = page.locator(\".${v}\");
${indent}${var}.waitFor();",
        )?
        .rule(
            "wait-setup",
            WAIT_SETUP,
            "${indent}// Playwright has built-in auto-waiting",
        )?
        .rule(
            "implicit-wait",
            r"(?m)^(?P<indent>[ \t]*)\w+\.manage\(\)\.timeouts\(\)\.implicitlyWait\([^;\n]*\);",
            "${indent}// Playwright has built-in auto-waiting",
        )?
        .rule(
            "web-element-declaration",
            r"\bWebElement\s+(?P<var>\w+)\s*=",
            "Locator ${var} =",
        )?;

    let builder = builder
        .category(Category::Teardown)?
        .rule(
            "quit",
            r"(?m)^(?P<indent>[ \t]*)\w+\.quit\(\)[ \t]*;?",
            TEARDOWN_TEMPLATE,
        )?
        .rule(
            "close",
            r"(?m)^(?P<indent>[ \t]*)driver\.close\(\)[ \t]*;?",
            TEARDOWN_TEMPLATE,
        )?;

    Ok(builder.build())
}
