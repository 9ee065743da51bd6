// src/harness.rs
//
// Assertion-driven scenario runner. Scenarios receive a factory rather
// than concrete types, so an alternative parser/document implementation
// can be swapped in behind the same suite.

use std::fmt;

use crate::document::Document;
use crate::error::ParseError;
use crate::parser::Parser;

/// Produces the units under test for one scenario run.
pub trait Factory {
    /// A fresh parser.
    fn parser(&self) -> Parser;
    /// A fresh, empty document.
    fn document(&self) -> Document;
}

/// Factory backed by this crate's own parser and document types.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl Factory for DefaultFactory {
    fn parser(&self) -> Parser {
        Parser::new()
    }

    fn document(&self) -> Document {
        Document::new()
    }
}

/// A failed assertion or an unexpected parse error inside a scenario.
#[derive(Debug, PartialEq)]
pub struct Failure {
    message: String,
}

impl Failure {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ParseError> for Failure {
    fn from(err: ParseError) -> Self {
        Failure {
            message: format!("unexpected parse error: {err}"),
        }
    }
}

/// Fails unless `expected` equals `actual`.
pub fn assert_equal<T, U>(expected: T, actual: U) -> Result<(), Failure>
where
    T: fmt::Debug + PartialEq<U>,
    U: fmt::Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(Failure {
            message: format!("expected {expected:?}, got {actual:?}"),
        })
    }
}

/// Fails when `value` is absent; unwraps it otherwise so follow-up
/// assertions can use the inner value directly.
pub fn assert_not_null<T>(value: Option<T>) -> Result<T, Failure> {
    value.ok_or_else(|| Failure {
        message: "expected a value, got none".to_string(),
    })
}

/// One named scenario.
pub type Scenario = fn(&dyn Factory) -> Result<(), Failure>;

/// A collection of named scenarios, run sequentially against one factory.
#[derive(Default)]
pub struct Harness {
    scenarios: Vec<(&'static str, Scenario)>,
}

impl Harness {
    pub fn new() -> Self {
        Harness::default()
    }

    /// Registers a scenario under `name`.
    pub fn add(&mut self, name: &'static str, scenario: Scenario) -> &mut Self {
        self.scenarios.push((name, scenario));
        self
    }

    /// Runs every registered scenario in registration order.
    ///
    /// A failing scenario is recorded and never aborts the ones after it.
    pub fn run(&self, factory: &dyn Factory) -> Report {
        let outcomes = self
            .scenarios
            .iter()
            .map(|(name, scenario)| (*name, scenario(factory)))
            .collect();
        Report { outcomes }
    }
}

/// Per-scenario outcomes of one harness run.
pub struct Report {
    outcomes: Vec<(&'static str, Result<(), Failure>)>,
}

impl Report {
    pub fn outcomes(&self) -> impl Iterator<Item = (&'static str, &Result<(), Failure>)> + '_ {
        self.outcomes.iter().map(|(name, result)| (*name, result))
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}
