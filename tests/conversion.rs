use lumi_converter::{convert, detect_syntax, sample, Syntax};

/// Import text that only appears in Selenium scripts of each syntax
fn selenium_marker(syntax: Syntax) -> &'static str {
    match syntax {
        Syntax::Java => "import org.openqa.selenium",
        Syntax::Python => "from selenium",
        Syntax::Javascript => "require('selenium-webdriver')",
        Syntax::Typescript => "from 'selenium-webdriver'",
        Syntax::Csharp => "using OpenQA.Selenium",
    }
}

/// Import text of the Playwright header for each syntax
fn playwright_marker(syntax: Syntax) -> &'static str {
    match syntax {
        Syntax::Java => "import com.microsoft.playwright.*;",
        Syntax::Python => "from playwright.sync_api import sync_playwright",
        Syntax::Javascript => "require('playwright')",
        Syntax::Typescript => "from 'playwright'",
        Syntax::Csharp => "using Microsoft.Playwright;",
    }
}

#[test]
fn test_samples_swap_imports_for_every_pair() {
    for source in Syntax::ALL {
        let text = sample(source);
        assert!(text.contains(selenium_marker(source)), "{}", source);
        for target in Syntax::ALL {
            let out = convert(text, target);
            assert!(
                out.contains(playwright_marker(target)),
                "{} -> {}: missing target import\n{}",
                source,
                target,
                out
            );
            assert!(
                !out.contains(selenium_marker(source)),
                "{} -> {}: source import left behind\n{}",
                source,
                target,
                out
            );
            assert_eq!(
                out.matches(playwright_marker(target)).count(),
                1,
                "{} -> {}: header inserted more than once",
                source,
                target
            );
        }
    }
}

#[test]
fn test_unrecognised_text_is_returned_unchanged() {
    let texts = [
        "",
        "fn main() {\n    println!(\"hello\");\n}\n",
        "def add(a, b):\n    return a + b\n",
        "import java.util.List;\n\nclass A {}\n",
        "const x = require('fs');\nconsole.log(x);",
        "# the driver is installed separately\nprint(\"driver\")\n",
    ];
    for text in texts {
        for target in Syntax::ALL {
            assert_eq!(convert(text, target), text, "{} changed {:?}", target, text);
        }
    }
}

#[test]
fn test_java_declared_variable_keeps_its_name() {
    let out = convert(
        r#"WebElement x = driver.findElement(By.id("u")); x.sendKeys("v");"#,
        Syntax::Java,
    );
    assert!(out.contains(r##"Locator x = driver.locator("#u");"##), "{}", out);
    assert!(out.contains(r#"x.fill("v");"#), "{}", out);
    assert!(!out.contains("WebElement"));
}

#[test]
fn test_locators_accept_either_quote() {
    let strategies = [
        (Syntax::Java, "driver.findElement(By.id({}))"),
        (Syntax::Java, "driver.findElement(By.name({}))"),
        (Syntax::Java, "driver.findElement(By.className({}))"),
        (Syntax::Java, "driver.findElement(By.cssSelector({}))"),
        (Syntax::Java, "driver.findElement(By.xpath({}))"),
        (Syntax::Python, "driver.find_element(By.ID, {})"),
        (Syntax::Python, "driver.find_element(By.NAME, {})"),
        (Syntax::Python, "driver.find_element(By.CLASS_NAME, {})"),
        (Syntax::Python, "driver.find_element(By.CSS_SELECTOR, {})"),
        (Syntax::Python, "driver.find_element(By.XPATH, {})"),
        (Syntax::Csharp, "driver.FindElement(By.Id({}))"),
        (Syntax::Csharp, "driver.FindElement(By.Name({}))"),
        (Syntax::Csharp, "driver.FindElement(By.ClassName({}))"),
        (Syntax::Csharp, "driver.FindElement(By.CssSelector({}))"),
        (Syntax::Csharp, "driver.FindElement(By.XPath({}))"),
        (Syntax::Javascript, "driver.findElement(By.id({}))"),
        (Syntax::Javascript, "driver.findElement(By.name({}))"),
        (Syntax::Javascript, "driver.findElement(By.className({}))"),
        (Syntax::Javascript, "driver.findElement(By.css({}))"),
        (Syntax::Typescript, "driver.findElement(By.xpath({}))"),
    ];
    for (target, shape) in strategies {
        let double = convert(&shape.replace("{}", "\"field\""), target);
        let single = convert(&shape.replace("{}", "'field'"), target);
        assert_ne!(double, shape.replace("{}", "\"field\""), "{}: {}", target, shape);
        assert!(double.contains("field"));
        assert_eq!(
            double.replace('\'', "\""),
            single.replace('\'', "\""),
            "{}: {}",
            target,
            shape
        );
    }
}

#[test]
fn test_python_session_renames_driver() {
    let text = "from selenium import webdriver

driver = webdriver.Chrome()
driver.get(\"https://example.com/login\")
";
    let out = convert(text, Syntax::Python);
    assert!(out.contains(
        "playwright = sync_playwright().start()
browser = playwright.chromium.launch(headless=False)
context = browser.new_context()
page = context.new_page()
"
    ));
    assert!(out.contains("page.goto(\"https://example.com/login\")"));
    assert!(!out.contains("driver"));
}

#[test]
fn test_java_explicit_wait_on_class() {
    let text = "        WebDriverWait wait = new WebDriverWait(driver, Duration.ofSeconds(10));
        WebElement dashboard = wait.until(ExpectedConditions.presenceOfElementLocated(By.className(\"dashboard\")));
";
    let out = convert(text, Syntax::Java);
    assert!(out.contains(
        "        // Playwright has built-in auto-waiting
        Locator dashboard = driver.locator(\".dashboard\");
        dashboard.waitFor();
"
    ), "{}", out);
    assert!(!out.contains("WebDriverWait"));
}

#[test]
fn test_explicit_wait_separated_by_blank_line() {
    let cases = [
        (
            Syntax::Java,
            "WebDriverWait wait = new WebDriverWait(driver, Duration.ofSeconds(10));\n\nWebElement dashboard = wait.until(ExpectedConditions.presenceOfElementLocated(By.className(\"dashboard\")));",
            "driver.locator(\".dashboard\")",
        ),
        (
            Syntax::Csharp,
            "WebDriverWait wait = new WebDriverWait(driver, TimeSpan.FromSeconds(10));\n\nIWebElement dashboard = wait.Until(ExpectedConditions.ElementExists(By.ClassName(\"dashboard\")));",
            "driver.Locator(\".dashboard\")",
        ),
    ];
    for (target, text, locator) in cases {
        let out = convert(text, target);
        assert!(out.contains(locator), "{}: {}", target, out);
        assert!(!out.contains("page."), "{}: {}", target, out);
    }
}

#[test]
fn test_single_quoted_literal_stays_valid_in_double_quoted_targets() {
    let cases = [
        (
            Syntax::Java,
            r#"driver.findElement(By.cssSelector('a[title="x"]')).click();"#,
            r#"driver.locator("a[title=\"x\"]").click();"#,
        ),
        (
            Syntax::Csharp,
            r#"driver.FindElement(By.CssSelector('a[title="x"]')).Click();"#,
            r#"await driver.Locator("a[title=\"x\"]").ClickAsync();"#,
        ),
        (
            Syntax::Python,
            r#"driver.find_element(By.CSS_SELECTOR, 'a[title="x"]').click()"#,
            r#"driver.locator('a[title="x"]').click()"#,
        ),
    ];
    for (target, text, expected) in cases {
        let out = convert(text, target);
        assert!(out.ends_with(expected), "{}: {}", target, out);
    }
}

#[test]
fn test_teardown_closes_in_reverse_order() {
    let cases = [
        (Syntax::Java, "driver.quit();", ["context.close()", "browser.close()", "playwright.close()"]),
        (Syntax::Python, "driver.quit()", ["context.close()", "browser.close()", "playwright.stop()"]),
        (Syntax::Javascript, "await driver.quit();", ["context.close()", "browser.close()", ""]),
        (Syntax::Typescript, "await driver.quit();", ["context.close()", "browser.close()", ""]),
        (Syntax::Csharp, "driver.Quit();", ["context.CloseAsync()", "browser.CloseAsync()", "playwright.Dispose()"]),
    ];
    for (target, text, order) in cases {
        let out = convert(text, target);
        let mut last = 0;
        for step in order.iter().filter(|s| !s.is_empty()) {
            let at = out[last..]
                .find(step)
                .unwrap_or_else(|| panic!("{}: `{}` missing or out of order in\n{}", target, step, out));
            last += at + step.len();
        }
        assert!(!out.to_lowercase().contains("quit()"), "{}", out);
    }
}

#[test]
fn test_converted_samples_drop_selenium_idioms() {
    for syntax in Syntax::ALL {
        let out = convert(sample(syntax), syntax);
        for idiom in ["findElement", "find_element", "FindElement", "sendKeys", "send_keys", "SendKeys"] {
            assert!(!out.contains(idiom), "{}: `{}` left in\n{}", syntax, idiom, out);
        }
        assert!(!out.contains("WebDriverWait"), "{}", out);
    }
}

#[test]
fn test_samples_detect_as_themselves() {
    for syntax in Syntax::ALL {
        assert_eq!(detect_syntax(sample(syntax)), syntax);
    }
}
