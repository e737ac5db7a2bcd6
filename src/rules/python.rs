//! Selenium Python → Playwright Python (sync API)
//!
//! When the script creates its own session, the `driver` handle is renamed to
//! `page` right after it. Snippets without a session keep `driver`, so the
//! handle-based rules below accept either name.

use super::common::{render, strip_selenium_imports};
use super::{Category, RuleSet};
use crate::error::Result;
use crate::syntax::Syntax;
use crate::utils::config::Config;

const HEADER: &str = "from playwright.sync_api import sync_playwright\n";

const SESSION_TEMPLATE: &str = "${indent}playwright = sync_playwright().start()
${indent}browser = playwright.chromium.launch(headless={Headless})
${indent}context = browser.new_context()
${indent}page = context.new_page()";

const TEARDOWN_TEMPLATE: &str = "${indent}context.close()
${indent}browser.close()
${indent}playwright.stop()";

const WAIT_SETUP: &str = r"(?m)^(?P<indent>[ \t]*)(?P<wait>\w+)\s*=\s*WebDriverWait\(\s*(?P<h>\w+)\s*,[^)\n]*\)";

const WAIT_UNTIL_CLASS: &str = r"(?P<var>\w+)\s*=\s*(?P<until>\w+)\.until\(\s*EC\.(?:presence|visibility)_of_element_located\(\s*\(\s*By\.CLASS_NAME\s*,\s*{str}\s*\)\s*\)\s*\)";

pub fn rule_set(config: &Config) -> Result<RuleSet> {
    let builder = strip_selenium_imports(RuleSet::builder(Syntax::Python).header(HEADER))?;

    let builder = builder
        .category(Category::Session)?
        .rule(
            "chrome-options",
            r"(?m)^[ \t]*\w+\s*=\s*(?:webdriver\.)?(?:Chrome)?Options\(\)[ \t]*\r?\n",
            "",
        )?
        .once(
            "webdriver-chrome",
            r"(?m)^(?P<indent>[ \t]*)driver\s*=\s*webdriver\.Chrome\([^)\n]*\)",
            &render(SESSION_TEMPLATE, config),
        )?
        .rule("driver-to-page", r"\bdriver\b", "page")?
        .after("webdriver-chrome");

    let builder = builder
        .category(Category::Navigation)?
        .quoted(
            "get",
            r"\b(?P<h>driver|page)\.get\(\s*{str}\s*\)",
            "${h}.goto({q}${v}{q})",
        )?
        .rule("back", r"\b(?P<h>driver|page)\.back\(\)", "${h}.go_back()")?
        .rule("forward", r"\b(?P<h>driver|page)\.forward\(\)", "${h}.go_forward()")?
        .rule("refresh", r"\b(?P<h>driver|page)\.refresh\(\)", "${h}.reload()")?;

    let builder = builder
        .category(Category::Viewport)?
        .rule(
            "maximize-window",
            r"\b(?P<h>driver|page)\.maximize_window\(\)",
            &render(
                r#"${h}.set_viewport_size({"width": {width}, "height": {height}})"#,
                config,
            ),
        )?
        .rule(
            "set-window-size",
            r"\b(?P<h>driver|page)\.set_window_size\(\s*(?P<w>\d+)\s*,\s*(?P<ht>\d+)\s*\)",
            r#"${h}.set_viewport_size({"width": ${w}, "height": ${ht}})"#,
        )?;

    let builder = builder
        .category(Category::Location)?
        .quoted(
            "by-id",
            r"(?P<h>\w+)\.find_element\(\s*By\.ID\s*,\s*{str}\s*\)",
            "${h}.locator({q}#${v}{q})",
        )?
        .quoted(
            "by-name",
            r"(?P<h>\w+)\.find_element\(\s*By\.NAME\s*,\s*{str}\s*\)",
            "${h}.locator({q}[name={iq}${v}{iq}]{q})",
        )?
        .quoted(
            "by-class-name",
            r"(?P<h>\w+)\.find_element\(\s*By\.CLASS_NAME\s*,\s*{str}\s*\)",
            "${h}.locator({q}.${v}{q})",
        )?
        .quoted(
            "by-css-selector",
            r"(?P<h>\w+)\.find_element\(\s*By\.CSS_SELECTOR\s*,\s*{str}\s*\)",
            "${h}.locator({q}${v}{q})",
        )?
        .quoted(
            "by-xpath",
            r"(?P<h>\w+)\.find_element\(\s*By\.XPATH\s*,\s*{str}\s*\)",
            "${h}.locator({q}xpath=${v}{q})",
        )?;

    // Python has no declared element type; the assign-then-type rule only
    // keeps the pair together before the generic send_keys rule runs.
    let builder = builder
        .category(Category::Actions)?
        .quoted(
            "assign-then-send-keys",
            r"(?m)^(?P<indent>[ \t]*)(?P<var>\w+)\s*=\s*(?P<expr>\w+\.locator\([^\n]*\))[ \t]*\r?\n(?P<indent2>[ \t]*)(?P<use>\w+)\.send_keys\(\s*{str}\s*\)",
            "${indent}${var} = ${expr}\n${indent2}${var}.fill({q}${v}{q})",
        )?
        .same("var", "use")
        .quoted("send-keys", r"\.send_keys\(\s*{str}\s*\)", ".fill({q}${v}{q})")?
        .rule(
            "send-keys-variable",
            r"\.send_keys\(\s*(?P<arg>\w+)\s*\)",
            ".fill(${arg})",
        )?;

    let builder = builder
        .category(Category::Waits)?
        .quoted(
            "wait-setup-then-until-class",
            &format!(r"{WAIT_SETUP}(?P<gap>(?s:.*?)\n)(?P<indent2>[ \t]*){WAIT_UNTIL_CLASS}"),
            "${indent}# Playwright has built-in auto-waiting${gap}${indent2}${var} = ${h}.locator({q}.${v}{q})
${indent2}${var}.wait_for()",
        )?
        .same("wait", "until")
        .quoted(
            "wait-until-class",
            &format!(r"(?m)^(?P<indent>[ \t]*){WAIT_UNTIL_CLASS}"),
            "${indent}${var} = page.locator({q}.${v}{q})
${indent}${var}.wait_for()",
        )?
        .rule(
            "wait-setup",
            WAIT_SETUP,
            "${indent}# Playwright has built-in auto-waiting",
        )?
        .rule(
            "implicit-wait",
            r"(?m)^(?P<indent>[ \t]*)(?:driver|page)\.implicitly_wait\([^)\n]*\)",
            "${indent}# Playwright has built-in auto-waiting",
        )?;

    let builder = builder
        .category(Category::Teardown)?
        .rule(
            "quit",
            r"(?m)^(?P<indent>[ \t]*)(?:driver|page)\.quit\(\)",
            TEARDOWN_TEMPLATE,
        )?;

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(text: &str) -> String {
        rule_set(&Config::default()).unwrap().apply(text).text
    }

    #[test]
    fn test_session_and_navigation() {
        let out = convert(
            "from selenium import webdriver\n\ndriver = webdriver.Chrome()\ndriver.get(\"https://example.com/login\")\n",
        );
        assert_eq!(
            out,
            "from playwright.sync_api import sync_playwright\n
playwright = sync_playwright().start()
browser = playwright.chromium.launch(headless=False)
context = browser.new_context()
page = context.new_page()
page.goto(\"https://example.com/login\")\n"
        );
        assert!(!out.contains("driver"));
    }

    #[test]
    fn test_options_line_dropped() {
        let out = convert("options = Options()\ndriver = webdriver.Chrome(options=options)\n");
        assert!(!out.contains("Options()"));
        assert!(out.contains("page = context.new_page()\n"));
    }

    #[test]
    fn test_headless_from_config() {
        let config = Config {
            headless: true,
            ..Config::default()
        };
        let out = rule_set(&config)
            .unwrap()
            .apply("driver = webdriver.Chrome()")
            .text;
        assert!(out.contains("playwright.chromium.launch(headless=True)"));
    }

    #[test]
    fn test_locators_keep_source_quote() {
        let double = convert(r#"page.find_element(By.NAME, "q").click()"#);
        let single = convert("page.find_element(By.NAME, 'q').click()");
        assert!(double.ends_with(r#"page.locator("[name='q']").click()"#));
        assert!(single.ends_with(r#"page.locator('[name="q"]').click()"#));

        let xpath = convert(r#"page.find_element(By.XPATH, "//a").click()"#);
        assert!(xpath.ends_with(r#"page.locator("xpath=//a").click()"#));
    }

    #[test]
    fn test_single_quoted_literal_with_double_quotes_stays_valid() {
        let out = convert(r#"page.find_element(By.CSS_SELECTOR, 'a[title="x"]').send_keys('say "hi"')"#);
        assert!(out.ends_with(r#"page.locator('a[title="x"]').fill('say "hi"')"#), "{}", out);
    }

    #[test]
    fn test_assign_then_send_keys() {
        let out = convert("    field = driver.find_element(By.ID, 'user')\n    field.send_keys('bob')");
        assert!(out.ends_with("    field = driver.locator('#user')\n    field.fill('bob')"));
    }

    #[test]
    fn test_driver_kept_without_session() {
        let out = convert("driver.get('https://a.test')\ndriver.refresh()\n");
        assert!(out.ends_with("driver.goto('https://a.test')\ndriver.reload()\n"));

        let prose = "# the driver is installed separately\nprint(\"driver\")\n";
        assert_eq!(convert(prose), prose);
    }

    #[test]
    fn test_wait_with_class_condition() {
        let text = "    wait = WebDriverWait(driver, 10)
    dashboard = wait.until(
        EC.presence_of_element_located((By.CLASS_NAME, \"dashboard\"))
    )";
        assert!(convert(text).ends_with(
            "    # Playwright has built-in auto-waiting
    dashboard = driver.locator(\".dashboard\")
    dashboard.wait_for()"
        ));
    }

    #[test]
    fn test_wait_after_blank_line_keeps_handle() {
        let text = "driver = webdriver.Chrome()
wait = WebDriverWait(driver, 10)

panel = wait.until(EC.visibility_of_element_located((By.CLASS_NAME, 'panel')))";
        assert!(convert(text).ends_with(
            "# Playwright has built-in auto-waiting

panel = page.locator('.panel')
panel.wait_for()"
        ));
    }

    #[test]
    fn test_quit_closes_in_reverse_order() {
        assert!(convert("    driver.quit()")
            .ends_with("    context.close()\n    browser.close()\n    playwright.stop()"));
    }
}
