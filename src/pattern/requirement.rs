use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{CompilerOptions, PatternError, PatternResult};

/// Constraint attached to a `:name` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Requirement {
    /// Matched verbatim; escaped before use.
    Literal(String),
    /// Regex source spliced into the capture group as is.
    Pattern(String),
}

impl Requirement {
    pub fn literal<S: Into<String>>(value: S) -> Self {
        Self::Literal(value.into())
    }

    pub fn pattern<S: Into<String>>(source: S) -> Self {
        Self::Pattern(source.into())
    }

    fn to_regex_source(&self, name: &str) -> PatternResult<String> {
        match self {
            Self::Literal(value) => Ok(regex::escape(value)),
            Self::Pattern(source) => {
                Regex::new(source).map_err(|err| PatternError::RequirementInvalid {
                    name: name.to_string(),
                    message: err.to_string(),
                })?;
                Ok(source.clone())
            }
        }
    }
}

impl From<&Regex> for Requirement {
    fn from(regex: &Regex) -> Self {
        Self::Pattern(regex.as_str().to_string())
    }
}

impl From<Regex> for Requirement {
    fn from(regex: Regex) -> Self {
        Self::from(&regex)
    }
}

/// Per-placeholder constraints for one route pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requirements {
    entries: HashMap<String, Requirement>,
}

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<S: Into<String>>(mut self, name: S, requirement: Requirement) -> Self {
        self.insert(name, requirement);
        self
    }

    pub fn insert<S: Into<String>>(&mut self, name: S, requirement: Requirement) {
        self.entries.insert(name.into(), requirement);
    }

    pub fn get(&self, name: &str) -> Option<&Requirement> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Turns every requirement into regex source and fixes the fallback for
    /// names without one.
    pub(crate) fn resolve(&self, options: &CompilerOptions) -> PatternResult<ResolvedRequirements> {
        let mut sources = HashMap::with_capacity(self.entries.len());
        for (name, requirement) in &self.entries {
            sources.insert(name.clone(), requirement.to_regex_source(name)?);
        }

        Ok(ResolvedRequirements {
            sources,
            fallback: options.default_param_pattern(),
            unseparated: options.separators.is_empty(),
        })
    }
}

impl<S: Into<String>> FromIterator<(S, Requirement)> for Requirements {
    fn from_iter<T: IntoIterator<Item = (S, Requirement)>>(iter: T) -> Self {
        let mut requirements = Self::new();
        for (name, requirement) in iter {
            requirements.insert(name, requirement);
        }
        requirements
    }
}

#[derive(Debug)]
pub(crate) struct ResolvedRequirements {
    sources: HashMap<String, String>,
    fallback: String,
    unseparated: bool,
}

impl ResolvedRequirements {
    pub(crate) fn constraint_for(&self, name: &str) -> &str {
        if let Some(source) = self.sources.get(name) {
            return source;
        }
        if self.unseparated {
            tracing::debug!(
                param = name,
                "no requirement and no separators; parameter falls back to '.+'"
            );
        }
        &self.fallback
    }
}
