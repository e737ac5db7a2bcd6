//! Selenium TypeScript → Playwright TypeScript

use super::javascript::{script_rules, Dialect};
use super::RuleSet;
use crate::error::Result;
use crate::syntax::Syntax;
use crate::utils::config::Config;

const TYPESCRIPT: Dialect = Dialect {
    syntax: Syntax::Typescript,
    header: "import { chromium, Browser, BrowserContext, Page, Locator } from 'playwright';\n",
    session_template: "${indent}const browser: Browser = await chromium.launch({ headless: {headless} });
${indent}const context: BrowserContext = await browser.newContext();
${indent}const ${var}: Page = await context.newPage();",
    local: "const ${var}: Locator",
};

pub fn rule_set(config: &Config) -> Result<RuleSet> {
    script_rules(&TYPESCRIPT, config)
}
