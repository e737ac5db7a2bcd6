//! Selenium JavaScript → Playwright JavaScript
//!
//! TypeScript shares these rules; it only differs in the header, the session
//! block and the declared type of element locals (see [`Dialect`]).

use super::common::{render, strip_selenium_imports};
use super::{Category, RuleSet};
use crate::error::Result;
use crate::syntax::Syntax;
use crate::utils::config::Config;

/// What a script dialect changes in the shared rules
pub(super) struct Dialect {
    pub syntax: Syntax,
    pub header: &'static str,
    pub session_template: &'static str,
    /// Declaration emitted for `const x = <locator>`; `${var}` is the name
    pub local: &'static str,
}

const JAVASCRIPT: Dialect = Dialect {
    syntax: Syntax::Javascript,
    header: "const { chromium } = require('playwright');\n",
    session_template: "${indent}const browser = await chromium.launch({ headless: {headless} });
${indent}const context = await browser.newContext();
${indent}const ${var} = await context.newPage();",
    local: "const ${var}",
};

const SESSION: &str = r"(?m)^(?P<indent>[ \t]*)(?:let|const|var)\s+(?P<var>\w+)(?:\s*:\s*WebDriver)?\s*=\s*await\s+new\s+Builder\(\)(?:\s*\.\w+\([^()]*\))*?\s*\.build\(\)[ \t]*;?";

const TEARDOWN_TEMPLATE: &str = "${indent}await context.close();
${indent}await browser.close();";

/// `const x = <locator>;` followed on the same or next line by `await x.<action>`
const DECLARE_THEN: &str = r"(?m)^(?P<indent>[ \t]*)(?:let|const|var)\s+(?P<var>\w+)(?:\s*:\s*WebElement)?\s*=\s*(?P<expr>\w+\.locator\([^\n]*?\))[ \t]*;?(?P<sep>[ \t]*(?:\r?\n[ \t]*)?)await\s+(?P<use>\w+)";

pub fn rule_set(config: &Config) -> Result<RuleSet> {
    script_rules(&JAVASCRIPT, config)
}

pub(super) fn script_rules(dialect: &Dialect, config: &Config) -> Result<RuleSet> {
    let builder = strip_selenium_imports(RuleSet::builder(dialect.syntax).header(dialect.header))?;

    let builder = builder
        .category(Category::Session)?
        .once(
            "builder-build",
            SESSION,
            &render(dialect.session_template, config),
        )?
        .category(Category::Navigation)?
        .quoted(
            "navigate-to",
            r"await\s+(?P<h>\w+)\.navigate\(\)\.to\(\s*{str}\s*\)[ \t]*;?",
            "await ${h}.goto({q}${v}{q});",
        )?
        .rule(
            "navigate-back",
            r"await\s+(?P<h>\w+)\.navigate\(\)\.back\(\)[ \t]*;?",
            "await ${h}.goBack();",
        )?
        .rule(
            "navigate-forward",
            r"await\s+(?P<h>\w+)\.navigate\(\)\.forward\(\)[ \t]*;?",
            "await ${h}.goForward();",
        )?
        .rule(
            "navigate-refresh",
            r"await\s+(?P<h>\w+)\.navigate\(\)\.refresh\(\)[ \t]*;?",
            "await ${h}.reload();",
        )?
        .quoted(
            "get",
            r"await\s+(?P<h>\w+)\.get\(\s*{str}\s*\)[ \t]*;?",
            "await ${h}.goto({q}${v}{q});",
        )?;

    let builder = builder
        .category(Category::Viewport)?
        .rule(
            "maximize-window",
            r"await\s+(?P<h>\w+)\.manage\(\)\.window\(\)\.maximize\(\)[ \t]*;?",
            &render(
                "await ${h}.setViewportSize({ width: {width}, height: {height} });",
                config,
            ),
        )?
        .rule(
            "set-window-rect",
            r"await\s+(?P<h>\w+)\.manage\(\)\.window\(\)\.setRect\(\s*\{\s*width\s*:\s*(?P<w>\d+)\s*,\s*height\s*:\s*(?P<ht>\d+)\s*\}\s*\)[ \t]*;?",
            "await ${h}.setViewportSize({ width: ${w}, height: ${ht} });",
        )?;

    let builder = builder
        .category(Category::Location)?
        .quoted(
            "by-id",
            r"(?P<h>\w+)\.findElement\(\s*By\.id\(\s*{str}\s*\)\s*\)",
            "${h}.locator({q}#${v}{q})",
        )?
        .quoted(
            "by-name",
            r"(?P<h>\w+)\.findElement\(\s*By\.name\(\s*{str}\s*\)\s*\)",
            "${h}.locator({q}[name={iq}${v}{iq}]{q})",
        )?
        .quoted(
            "by-class-name",
            r"(?P<h>\w+)\.findElement\(\s*By\.className\(\s*{str}\s*\)\s*\)",
            "${h}.locator({q}.${v}{q})",
        )?
        .quoted(
            "by-css",
            r"(?P<h>\w+)\.findElement\(\s*By\.css\(\s*{str}\s*\)\s*\)",
            "${h}.locator({q}${v}{q})",
        )?
        .quoted(
            "by-xpath",
            r"(?P<h>\w+)\.findElement\(\s*By\.xpath\(\s*{str}\s*\)\s*\)",
            "${h}.locator({q}xpath=${v}{q})",
        )?
        // Creating a locator is synchronous; an awaited call chained on it is not.
        .rule(
            "assigned-locator-await",
            r"=\s*await\s+(?P<h>\w+)\.locator\(",
            "= ${h}.locator(",
        )?;

    let declare_fill = format!("${{indent}}{} = ${{expr}};${{sep}}await ${{var}}.fill({{q}}${{v}}{{q}});", dialect.local);
    let declare_click = format!("${{indent}}{} = ${{expr}};${{sep}}await ${{var}}.click();", dialect.local);

    let builder = builder
        .category(Category::Actions)?
        .quoted(
            "declare-then-send-keys",
            &format!(r"{DECLARE_THEN}\.sendKeys\(\s*{{str}}\s*\)[ \t]*;?"),
            &declare_fill,
        )?
        .same("var", "use")
        .rule(
            "declare-then-click",
            &format!(r"{DECLARE_THEN}\.click\(\)[ \t]*;?"),
            &declare_click,
        )?
        .same("var", "use")
        .quoted(
            "send-keys",
            r"\.sendKeys\(\s*{str}\s*\)",
            ".fill({q}${v}{q})",
        )?
        .rule(
            "send-keys-variable",
            r"\.sendKeys\(\s*(?P<arg>\w+)\s*\)",
            ".fill(${arg})",
        )?;

    let builder = builder
        .category(Category::Waits)?
        .quoted(
            "wait-until-class",
            r"await\s+(?P<h>\w+)\.wait\(\s*until\.(?:elementLocated|elementIsVisible)\(\s*By\.className\(\s*{str}\s*\)\s*\)\s*,\s*\d+\s*\)[ \t]*;?",
            "await ${h}.locator({q}.${v}{q}).waitFor();",
        )?
        .rule(
            "wait-until",
            r"(?m)^(?P<indent>[ \t]*)await\s+\w+\.wait\(\s*until\.[^;]*?,\s*\d+\s*\)[ \t]*;?",
            "${indent}// Playwright has built-in auto-waiting",
        )?
        .rule(
            "implicit-wait",
            r"(?m)^(?P<indent>[ \t]*)await\s+\w+\.manage\(\)\.setTimeouts\(\s*\{\s*implicit\s*:[^}]*\}\s*\)[ \t]*;?",
            "${indent}// Playwright has built-in auto-waiting",
        )?;

    let builder = builder
        .category(Category::Teardown)?
        .rule(
            "quit",
            r"(?m)^(?P<indent>[ \t]*)await\s+\w+\.quit\(\)[ \t]*;?",
            TEARDOWN_TEMPLATE,
        )?
        .rule(
            "close",
            r"(?m)^(?P<indent>[ \t]*)await\s+driver\.close\(\)[ \t]*;?",
            TEARDOWN_TEMPLATE,
        )?;

    Ok(builder.build())
}
