//! Declarative "option A is required if option B ..." rules.
//!
//! Rules are evaluated once per invocation, after every raw option value has
//! been collected, instead of branching inside argument parsing. Predicates
//! are plain `fn` pointers so one mechanism covers equality, transformed
//! equality and arbitrary checks.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// When a dependent option becomes mandatory.
#[derive(Clone, Copy)]
pub enum Condition {
    /// The other option was passed at all, whatever its value.
    Present,
    /// The other option's value equals this string.
    Equals(&'static str),
    /// `transform(value)` equals `expected`. `name` labels the transform in messages.
    TransformEquals {
        name: &'static str,
        transform: fn(&str) -> String,
        expected: &'static str,
    },
    /// `check(value)` holds. `name` labels the check in messages.
    Check {
        name: &'static str,
        check: fn(&str) -> bool,
    },
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => f.write_str("Present"),
            Self::Equals(value) => f.debug_tuple("Equals").field(value).finish(),
            Self::TransformEquals { name, expected, .. } => f
                .debug_struct("TransformEquals")
                .field("name", name)
                .field("expected", expected)
                .finish(),
            Self::Check { name, .. } => f.debug_struct("Check").field("name", name).finish(),
        }
    }
}

/// `option` must be supplied whenever `condition` holds over `depends_on`.
#[derive(Debug, Clone, Copy)]
pub struct RequiredIf {
    pub option: &'static str,
    pub depends_on: &'static str,
    pub condition: Condition,
}

impl RequiredIf {
    /// True if `option` is mandatory given the collected values.
    ///
    /// An absent `depends_on` never makes the option required.
    pub fn is_required(&self, values: &OptionValues) -> bool {
        let Some(other) = values.get(self.depends_on) else {
            return false;
        };
        match self.condition {
            Condition::Present => true,
            Condition::Equals(expected) => other == expected,
            Condition::TransformEquals {
                transform,
                expected,
                ..
            } => transform(other) == expected,
            Condition::Check { check, .. } => check(other),
        }
    }

    /// Human-readable reason, e.g. `--column is required if --type=csv`.
    pub fn describe(&self) -> String {
        let reason = match self.condition {
            Condition::Present => format!("--{} is passed", self.depends_on),
            Condition::Equals(expected) => format!("--{}={}", self.depends_on, expected),
            Condition::TransformEquals { name, expected, .. } => {
                format!("{}(--{})={}", name, self.depends_on, expected)
            }
            Condition::Check { name, .. } => format!("{}(--{}) is true", name, self.depends_on),
        };
        format!("--{} is required if {}", self.option, reason)
    }
}

/// Raw option values collected after parsing, keyed by long option name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionValues {
    values: BTreeMap<String, String>,
}

impl OptionValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `option`; `None` leaves the option absent.
    pub fn set(&mut self, option: &str, value: Option<impl Into<String>>) -> &mut Self {
        match value {
            Some(value) => {
                self.values.insert(option.to_string(), value.into());
            }
            None => {
                self.values.remove(option);
            }
        }
        self
    }

    pub fn get(&self, option: &str) -> Option<&str> {
        self.values.get(option).map(String::as_str)
    }

    pub fn contains(&self, option: &str) -> bool {
        self.values.contains_key(option)
    }
}

/// One or more conditionally-required options were missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required option: {}", .violations.join("; "))]
pub struct MissingOptionError {
    pub violations: Vec<String>,
}

/// Evaluate every rule and report all missing options at once.
pub fn check_required(rules: &[RequiredIf], values: &OptionValues) -> Result<(), MissingOptionError> {
    let violations: Vec<String> = rules
        .iter()
        .filter(|rule| !values.contains(rule.option) && rule.is_required(values))
        .map(RequiredIf::describe)
        .collect();
    if violations.is_empty() {
        return Ok(());
    }
    Err(MissingOptionError { violations })
}
