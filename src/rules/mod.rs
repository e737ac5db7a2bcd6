//! Ordered textual rewrite rules
//!
//! A [`RuleSet`] is a list of regex rules grouped into categories that always
//! run in the same order:
//!
//! imports → session → navigation → viewport → location → actions → waits → teardown
//!
//! Every rule sees the buffer produced by the rules before it. Within a
//! category, rules that recognise a multi-line idiom (declare an element, then
//! act on it on the next line) are declared before the single-line rule that
//! matches a subset of the same text; the single-line rule would otherwise
//! consume the line and the composite rule could never fire.
//!
//! Text that no rule matches is passed through byte for byte.

pub mod common;
pub mod csharp;
pub mod java;
pub mod javascript;
pub mod python;
pub mod typescript;

use crate::error::{ConvertError, Result};
use crate::syntax::Syntax;
use crate::utils::config::Config;
use log::{debug, trace};
use regex::{Captures, Regex};
use serde::Serialize;
use std::borrow::Cow;
use std::ops::Range;

/// Rule categories, in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Imports,
    Session,
    Navigation,
    Viewport,
    Location,
    Actions,
    Waits,
    Teardown,
}

/// How many matches a rule rewrites per application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every non-overlapping match
    Global,
    /// Only the first match
    FirstMatch,
}

/// One pattern → template rewrite
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    pattern: Regex,
    template: String,
    scope: Scope,
    /// Two named captures that must hold the same text for a match to count
    same: Option<(&'static str, &'static str)>,
    /// Capture whose `"` are escaped as `\"` when substituted
    escape: Option<&'static str>,
    /// Name of an earlier rule that must have fired for this one to run
    requires: Option<&'static str>,
}

impl Rule {
    pub fn new(name: &str, pattern: &str, template: &str, scope: Scope) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| ConvertError::Pattern {
            rule: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            template: template.to_string(),
            scope,
            same: None,
            escape: None,
            requires: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    fn accepts(&self, caps: &Captures) -> bool {
        match self.same {
            Some((a, b)) => {
                let left = caps.name(a).map(|m| m.as_str());
                left.is_some() && left == caps.name(b).map(|m| m.as_str())
            }
            None => true,
        }
    }

    fn expand(&self, caps: &Captures, out: &mut String) {
        let Some(name) = self.escape else {
            caps.expand(&self.template, out);
            return;
        };
        let value = caps
            .name(name)
            .map_or(String::new(), |m| m.as_str().replace('"', "\\\""));
        let token = format!("${{{}}}", name);
        for (i, piece) in self.template.split(token.as_str()).enumerate() {
            if i > 0 {
                out.push_str(&value);
            }
            caps.expand(piece, out);
        }
    }

    /// Byte range of the first accepted match
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.pattern
            .captures_iter(text)
            .filter(|caps| self.accepts(caps))
            .find_map(|caps| caps.get(0).map(|m| m.range()))
    }

    /// Rewrite `text`, returning the new buffer and the number of rewrites.
    /// The input is borrowed back untouched when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut out = String::new();
        let mut last = 0;
        let mut count = 0;

        for caps in self.pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if !self.accepts(&caps) {
                continue;
            }
            out.push_str(&text[last..whole.start()]);
            self.expand(&caps, &mut out);
            last = whole.end();
            count += 1;
            if self.scope == Scope::FirstMatch {
                break;
            }
        }

        if count == 0 {
            return (Cow::Borrowed(text), 0);
        }
        out.push_str(&text[last..]);
        (Cow::Owned(out), count)
    }
}

/// A rule that fired during one conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleHit {
    pub category: Category,
    pub rule: String,
    pub count: usize,
}

/// Where the target import block ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderPlacement {
    /// At the position of the first stripped source import
    Replaced,
    /// Prepended: no source import was found but other rules fired
    Top,
    /// Not inserted: the text was left unchanged
    Omitted,
}

/// Buffer and bookkeeping after a rule set has run
#[derive(Debug, Clone)]
pub struct Applied {
    pub text: String,
    pub header: HeaderPlacement,
    pub hits: Vec<RuleHit>,
}

/// Ordered rules for one target syntax
#[derive(Debug, Clone)]
pub struct RuleSet {
    syntax: Syntax,
    header: String,
    rules: Vec<(Category, Rule)>,
}

impl RuleSet {
    pub fn builder(syntax: Syntax) -> RuleSetBuilder {
        RuleSetBuilder {
            syntax,
            header: String::new(),
            category: Category::Imports,
            rules: Vec::new(),
            last_batch: 0,
        }
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// Target import block inserted once per conversion
    pub fn header(&self) -> &str {
        &self.header
    }

    /// `(category, rule name)` pairs in application order
    pub fn rules(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        self.rules.iter().map(|(c, r)| (*c, r.name()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over `source`, threading the buffer from rule to rule.
    pub fn apply(&self, source: &str) -> Applied {
        let mut header = HeaderPlacement::Omitted;
        let mut hits: Vec<RuleHit> = Vec::new();

        // The header goes in front of the earliest source import; the import
        // rules then strip that import along with the rest.
        let anchor = self
            .rules
            .iter()
            .filter(|(category, _)| *category == Category::Imports)
            .filter_map(|(_, rule)| rule.find(source))
            .map(|range| range.start)
            .min();

        let mut buffer = match anchor {
            Some(at) if !self.header.is_empty() => {
                trace!("{}: import header placed at byte {}", self.syntax, at);
                header = HeaderPlacement::Replaced;
                let mut buffer = String::with_capacity(source.len() + self.header.len());
                buffer.push_str(&source[..at]);
                buffer.push_str(&self.header);
                buffer.push_str(&source[at..]);
                buffer
            }
            _ => source.to_string(),
        };

        for (category, rule) in &self.rules {
            if let Some(required) = rule.requires {
                if !hits.iter().any(|h| h.rule == required) {
                    continue;
                }
            }
            let (next, count) = rule.apply(&buffer);
            if count == 0 {
                continue;
            }
            debug!(
                "{}: {:?} rule `{}` rewrote {} match(es)",
                self.syntax,
                category,
                rule.name(),
                count
            );
            buffer = next.into_owned();
            hits.push(RuleHit {
                category: *category,
                rule: rule.name().to_string(),
                count,
            });
        }

        if header == HeaderPlacement::Omitted && !hits.is_empty() && !self.header.is_empty() {
            trace!("{}: no source import found, header prepended", self.syntax);
            header = HeaderPlacement::Top;
            buffer.insert_str(0, &self.header);
        }

        Applied {
            text: buffer,
            header,
            hits,
        }
    }
}

/// Declares a [`RuleSet`] category by category
#[derive(Debug)]
pub struct RuleSetBuilder {
    syntax: Syntax,
    header: String,
    category: Category,
    rules: Vec<(Category, Rule)>,
    last_batch: usize,
}

impl RuleSetBuilder {
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Start declaring rules for `category`. Categories must be opened in
    /// application order.
    pub fn category(mut self, category: Category) -> Result<Self> {
        if category < self.category {
            return Err(ConvertError::CategoryOrder {
                category,
                after: self.category,
            });
        }
        self.category = category;
        Ok(self)
    }

    fn push(mut self, rules: Vec<Rule>) -> Self {
        self.last_batch = rules.len();
        let category = self.category;
        self.rules.extend(rules.into_iter().map(|r| (category, r)));
        self
    }

    /// Rule rewriting every match
    pub fn rule(self, name: &str, pattern: &str, template: &str) -> Result<Self> {
        let rule = Rule::new(name, pattern, template, Scope::Global)?;
        Ok(self.push(vec![rule]))
    }

    /// Rule rewriting the first match only
    pub fn once(self, name: &str, pattern: &str, template: &str) -> Result<Self> {
        let rule = Rule::new(name, pattern, template, Scope::FirstMatch)?;
        Ok(self.push(vec![rule]))
    }

    /// Declare a double-quoted and a single-quoted variant of one rule.
    ///
    /// `{str}` in the pattern becomes a string literal whose contents are
    /// captured as `v`. In the template `{q}` is the quote the source used and
    /// `{iq}` the other one.
    pub fn quoted(self, name: &str, pattern: &str, template: &str) -> Result<Self> {
        let mut rules = Vec::with_capacity(2);
        for (suffix, quote, inner) in [("dq", '"', '\''), ("sq", '\'', '"')] {
            let literal = format!("{quote}(?P<v>[^{quote}\\n]*){quote}");
            let rule = Rule::new(
                &format!("{}/{}", name, suffix),
                &pattern.replace("{str}", &literal),
                &template
                    .replace("{q}", &quote.to_string())
                    .replace("{iq}", &inner.to_string()),
                Scope::Global,
            )?;
            rules.push(rule);
        }
        Ok(self.push(rules))
    }

    /// Declare a rule emitting a double-quoted literal whatever quote the
    /// source used. `{str}` is captured as `v`; in the single-quoted variant
    /// any `"` inside `v` is escaped.
    pub fn double_quoted(self, name: &str, pattern: &str, template: &str) -> Result<Self> {
        let mut rules = Vec::with_capacity(2);
        for (suffix, quote) in [("dq", '"'), ("sq", '\'')] {
            let literal = format!("{quote}(?P<v>[^{quote}\\n]*){quote}");
            let mut rule = Rule::new(
                &format!("{}/{}", name, suffix),
                &pattern.replace("{str}", &literal),
                template,
                Scope::Global,
            )?;
            if quote == '\'' {
                rule.escape = Some("v");
            }
            rules.push(rule);
        }
        Ok(self.push(rules))
    }

    /// Only run the rules added by the previous call when the rule named
    /// `rule` has already fired during this application.
    pub fn after(mut self, rule: &'static str) -> Self {
        let from = self.rules.len() - self.last_batch;
        for (_, r) in &mut self.rules[from..] {
            r.requires = Some(rule);
        }
        self
    }

    /// Only accept matches where captures `a` and `b` are identical.
    /// Applies to every rule added by the previous call.
    pub fn same(mut self, a: &'static str, b: &'static str) -> Self {
        let from = self.rules.len() - self.last_batch;
        for (_, rule) in &mut self.rules[from..] {
            rule.same = Some((a, b));
        }
        self
    }

    pub fn build(self) -> RuleSet {
        RuleSet {
            syntax: self.syntax,
            header: self.header,
            rules: self.rules,
        }
    }
}

/// Build the rule set converting Selenium scripts into Playwright `target` code
pub fn for_syntax(target: Syntax, config: &Config) -> Result<RuleSet> {
    match target {
        Syntax::Java => java::rule_set(config),
        Syntax::Python => python::rule_set(config),
        Syntax::Javascript => javascript::rule_set(config),
        Syntax::Typescript => typescript::rule_set(config),
        Syntax::Csharp => csharp::rule_set(config),
    }
}
