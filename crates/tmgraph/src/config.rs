//! Configuration types for grammar graphing.
//!
//! This module provides the option set that drives graph construction and
//! the file configuration it can be loaded from. [`AppConfig`] implements
//! [`serde::Deserialize`] so front ends can read it from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration file root.
//! - [`GraphConfig`] - The `[graph]` section: exclusions and output toggles.
//! - [`GraphOptions`] - The resolved options a graph build runs with.
//!
//! # Example
//!
//! ```
//! # use tmgraph::config::GraphOptions;
//! let options = GraphOptions::default()
//!     .with_exclude(["comments"])
//!     .with_regex(true);
//!
//! assert!(options.is_excluded("comments"));
//! assert!(options.include_regex());
//! assert!(!options.label_arrows());
//! ```

use std::{collections::BTreeSet, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

/// Top-level configuration file root.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Graph configuration section.
    #[serde(default)]
    graph: GraphConfig,
}

impl AppConfig {
    /// Returns the graph configuration.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }
}

/// The `[graph]` configuration section.
///
/// Keys use the same spelling as the command-line flags:
///
/// ```toml
/// [graph]
/// exclude = ["comments", "whitespace"]
/// enable-regex = true
/// label-arrows = true
/// uncomment-regex = false
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GraphConfig {
    #[serde(default)]
    exclude: Vec<String>,

    #[serde(default)]
    enable_regex: bool,

    #[serde(default)]
    label_arrows: bool,

    #[serde(default)]
    uncomment_regex: bool,
}

impl GraphConfig {
    /// Resolve this section into build options.
    pub fn to_options(&self) -> GraphOptions {
        GraphOptions::default()
            .with_exclude(self.exclude.iter().cloned())
            .with_regex(self.enable_regex)
            .with_labels(self.label_arrows)
            .with_uncomment(self.uncomment_regex)
    }
}

/// Options for one graph build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphOptions {
    exclude: BTreeSet<String>,
    include_regex: bool,
    label_arrows: bool,
    uncomment_regex: bool,
}

impl GraphOptions {
    /// Adds names to the exclusion list. Existing names are kept.
    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets whether `match` and `begin`/`end` regexes become graph nodes.
    pub fn with_regex(mut self, include_regex: bool) -> Self {
        self.include_regex = include_regex;
        self
    }

    /// Sets whether edges are labeled with their relation.
    pub fn with_labels(mut self, label_arrows: bool) -> Self {
        self.label_arrows = label_arrows;
        self
    }

    /// Sets whether free-spacing comments are stripped from regex nodes.
    pub fn with_uncomment(mut self, uncomment_regex: bool) -> Self {
        self.uncomment_regex = uncomment_regex;
        self
    }

    /// Whether `name` is excluded, as a rule or as a reference target.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.contains(name)
    }

    pub fn excluded(&self) -> impl Iterator<Item = &str> {
        self.exclude.iter().map(String::as_str)
    }

    pub fn include_regex(&self) -> bool {
        self.include_regex
    }

    pub fn label_arrows(&self) -> bool {
        self.label_arrows
    }

    pub fn uncomment_regex(&self) -> bool {
        self.uncomment_regex
    }
}
