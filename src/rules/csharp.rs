//! Selenium C# → Playwright .NET

use super::common::{render, strip_selenium_imports};
use super::{Category, RuleSet};
use crate::error::Result;
use crate::syntax::Syntax;
use crate::utils::config::Config;

const HEADER: &str = "using Microsoft.Playwright;\nusing System.Threading.Tasks;\n";

const SESSION_TEMPLATE: &str = "${indent}var playwright = await Playwright.CreateAsync();
${indent}var browser = await playwright.Chromium.LaunchAsync(new() { Headless = {headless} });
${indent}var context = await browser.NewContextAsync();
${indent}var ${var} = await context.NewPageAsync();";

const TEARDOWN_TEMPLATE: &str = "${indent}await context.CloseAsync();
${indent}await browser.CloseAsync();
${indent}playwright.Dispose();";

/// `IWebElement x = <expr>;` followed on the same or next line by `x.<Action>`
const DECLARE_THEN: &str = r"(?m)^(?P<indent>[ \t]*)IWebElement\s+(?P<var>\w+)\s*=\s*(?P<expr>[^;\n]+);(?P<sep>[ \t]*(?:\r?\n[ \t]*)?)(?P<use>\w+)";

/// A member-access or call chain starting a statement: at the start of a line,
/// after `;`, `{`, `}` or an `if (...)` condition, or after `else`
const STATEMENT: &str = r"(?m)(?P<pre>(?:^|[;{})])[ \t]*|\belse[ \t]+)(?P<target>\w+(?:\.\w+|\((?:[^()\n;]|\([^()\n;]*\))*\))*)";

const WAIT_SETUP: &str = r"(?m)^(?P<indent>[ \t]*)WebDriverWait\s+(?P<wait>\w+)\s*=\s*new\s+WebDriverWait\(\s*(?P<h>\w+)\s*,[^;\n]*\);";

const WAIT_UNTIL_CLASS: &str = r"(?:IWebElement|ILocator|var)\s+(?P<var>\w+)\s*=\s*(?P<until>\w+)\.Until\(\s*(?:SeleniumExtras\.WaitHelpers\.)?ExpectedConditions\.(?:ElementExists|ElementIsVisible)\(\s*By\.ClassName\(\s*{str}\s*\)\s*\)\s*\)[ \t]*;?";

pub fn rule_set(config: &Config) -> Result<RuleSet> {
    let builder = strip_selenium_imports(RuleSet::builder(Syntax::Csharp).header(HEADER))?;

    let builder = builder
        .category(Category::Session)?
        .once(
            "async-main",
            r"(?P<mods>(?:(?:public|private|internal)\s+)?static)\s+void\s+Main\(",
            "${mods} async Task Main(",
        )?
        .once(
            "new-chrome-driver",
            r"(?m)^(?P<indent>[ \t]*)(?:IWebDriver|ChromeDriver|var)\s+(?P<var>\w+)\s*=\s*new\s+ChromeDriver\([^;\n]*\)[ \t]*;?",
            &render(SESSION_TEMPLATE, config),
        )?;

    let builder = builder
        .category(Category::Navigation)?
        .quoted(
            "go-to-url",
            r"(?P<h>\w+)\.Navigate\(\)\.GoToUrl\(\s*{str}\s*\)[ \t]*;?",
            "await ${h}.GotoAsync({q}${v}{q});",
        )?
        .rule(
            "navigate-back",
            r"(?P<h>\w+)\.Navigate\(\)\.Back\(\)[ \t]*;?",
            "await ${h}.GoBackAsync();",
        )?
        .rule(
            "navigate-forward",
            r"(?P<h>\w+)\.Navigate\(\)\.Forward\(\)[ \t]*;?",
            "await ${h}.GoForwardAsync();",
        )?
        .rule(
            "navigate-refresh",
            r"(?P<h>\w+)\.Navigate\(\)\.Refresh\(\)[ \t]*;?",
            "await ${h}.ReloadAsync();",
        )?;

    let builder = builder
        .category(Category::Viewport)?
        .rule(
            "maximize-window",
            r"(?P<h>\w+)\.Manage\(\)\.Window\.Maximize\(\)[ \t]*;?",
            &render("await ${h}.SetViewportSizeAsync({width}, {height});", config),
        )?
        .rule(
            "window-size",
            r"(?P<h>\w+)\.Manage\(\)\.Window\.Size\s*=\s*new\s+(?:System\.Drawing\.)?Size\(\s*(?P<w>\d+)\s*,\s*(?P<ht>\d+)\s*\)[ \t]*;?",
            "await ${h}.SetViewportSizeAsync(${w}, ${ht});",
        )?;

    let builder = builder
        .category(Category::Location)?
        .double_quoted(
            "by-id",
            r"(?P<h>\w+)\.FindElement\(\s*By\.Id\(\s*{str}\s*\)\s*\)",
            r##"${h}.Locator("#${v}")"##,
        )?
        .double_quoted(
            "by-name",
            r"(?P<h>\w+)\.FindElement\(\s*By\.Name\(\s*{str}\s*\)\s*\)",
            r#"${h}.Locator("[name='${v}']")"#,
        )?
        .double_quoted(
            "by-class-name",
            r"(?P<h>\w+)\.FindElement\(\s*By\.ClassName\(\s*{str}\s*\)\s*\)",
            r#"${h}.Locator(".${v}")"#,
        )?
        .double_quoted(
            "by-css-selector",
            r"(?P<h>\w+)\.FindElement\(\s*By\.CssSelector\(\s*{str}\s*\)\s*\)",
            r#"${h}.Locator("${v}")"#,
        )?
        .double_quoted(
            "by-xpath",
            r"(?P<h>\w+)\.FindElement\(\s*By\.XPath\(\s*{str}\s*\)\s*\)",
            r#"${h}.Locator("xpath=${v}")"#,
        )?;

    // Declare-then-act rules must precede the statement rules below.
    let builder = builder
        .category(Category::Actions)?
        .double_quoted(
            "declare-then-send-keys",
            &format!(r"{DECLARE_THEN}\.SendKeys\(\s*{{str}}\s*\)[ \t]*;?"),
            r#"${indent}ILocator ${var} = ${expr};${sep}await ${var}.FillAsync("${v}");"#,
        )?
        .same("var", "use")
        .rule(
            "declare-then-click",
            &format!(r"{DECLARE_THEN}\.Click\(\)[ \t]*;?"),
            "${indent}ILocator ${var} = ${expr};${sep}await ${var}.ClickAsync();",
        )?
        .same("var", "use")
        .double_quoted(
            "send-keys",
            &format!(r"{STATEMENT}\.SendKeys\(\s*{{str}}\s*\)"),
            r#"${pre}await ${target}.FillAsync("${v}")"#,
        )?
        .rule(
            "send-keys-variable",
            &format!(r"{STATEMENT}\.SendKeys\(\s*(?P<arg>\w+)\s*\)"),
            "${pre}await ${target}.FillAsync(${arg})",
        )?
        .rule(
            "click",
            &format!(r"{STATEMENT}\.Click\(\)"),
            "${pre}await ${target}.ClickAsync()",
        )?;

    let builder = builder
        .category(Category::Waits)?
        .double_quoted(
            "wait-setup-then-until-class",
            &format!(r"{WAIT_SETUP}(?P<gap>(?s:.*?)\n)(?P<indent2>[ \t]*){WAIT_UNTIL_CLASS}"),
            "${indent}// Playwright has built-in auto-waiting${gap}${indent2}ILocator ${var} = ${h}.Locator(\".${v}\");
${indent2}await ${var}.WaitForAsync();",
        )?
        .same("wait", "until")
        .double_quoted(
            "wait-until-class",
            &format!(r"(?m)^(?P<indent>[ \t]*){WAIT_UNTIL_CLASS}"),
            "${indent}ILocator ${var} = page.Locator(\".${v}\");
${indent}await ${var}.WaitForAsync();",
        )?
        .rule(
            "wait-setup",
            WAIT_SETUP,
            "${indent}// Playwright has built-in auto-waiting",
        )?
        .rule(
            "implicit-wait",
            r"(?m)^(?P<indent>[ \t]*)\w+\.Manage\(\)\.Timeouts\(\)\.ImplicitWait\s*=[^;\n]*;",
            "${indent}// Playwright has built-in auto-waiting",
        )?
        .rule(
            "web-element-declaration",
            r"\bIWebElement\s+(?P<var>\w+)\s*=",
            "ILocator ${var} =",
        )?;

    let builder = builder
        .category(Category::Teardown)?
        .rule(
            "quit",
            r"(?m)^(?P<indent>[ \t]*)\w+\.Quit\(\)[ \t]*;?",
            TEARDOWN_TEMPLATE,
        )?
        .rule(
            "close",
            r"(?m)^(?P<indent>[ \t]*)driver\.Close\(\)[ \t]*;?",
            TEARDOWN_TEMPLATE,
        )?;

    Ok(builder.build())
}
