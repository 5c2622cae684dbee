//! Configuration parsing and validation.
//!
//! Handles lintdiff.toml parsing with version validation and unknown key
//! warnings. Every knob has a compiled-in default, so the tool runs without
//! any config file at all.

use std::collections::BTreeSet;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    tools: Option<toml::Value>,

    #[serde(default)]
    filter: Option<toml::Value>,

    #[serde(default)]
    special_case: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// External tool names, resolved on the search path at startup.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Path filter lists.
    #[serde(default)]
    pub filter: FilterConfig,

    /// Ordered per-path-pattern linter argument overrides.
    #[serde(default = "default_special_cases")]
    pub special_case: Vec<SpecialCaseConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            tools: ToolsConfig::default(),
            filter: FilterConfig::default(),
            special_case: default_special_cases(),
        }
    }
}

/// External tool names.
#[derive(Debug, Deserialize)]
pub struct ToolsConfig {
    /// Version-control tool (default: git).
    #[serde(default = "ToolsConfig::default_git")]
    pub git: String,

    /// Linter invoked per file (default: flake8).
    #[serde(default = "ToolsConfig::default_linter")]
    pub linter: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            git: Self::default_git(),
            linter: Self::default_linter(),
        }
    }
}

impl ToolsConfig {
    fn default_git() -> String {
        "git".to_string()
    }

    fn default_linter() -> String {
        "flake8".to_string()
    }
}

/// Path filter lists. A path is checked only if it matches ALL allow
/// patterns and NONE of the deny patterns.
#[derive(Debug, Deserialize)]
pub struct FilterConfig {
    /// Patterns a path must match, anchored at the start of the path.
    #[serde(default = "FilterConfig::default_allow")]
    pub allow: Vec<String>,

    /// Patterns a path must not match, anchored at the start of the path.
    #[serde(default)]
    pub deny: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            allow: Self::default_allow(),
            deny: Vec::new(),
        }
    }
}

impl FilterConfig {
    fn default_allow() -> Vec<String> {
        vec![r".*[.]py$".to_string()]
    }
}

/// One per-path-pattern linter argument override.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecialCaseConfig {
    /// Pattern matched anywhere within the path.
    pub pattern: String,

    /// Extra linter arguments for matching paths.
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_special_cases() -> Vec<SpecialCaseConfig> {
    vec![SpecialCaseConfig {
        pattern: r"migrations/[0-9]+".to_string(),
        args: vec!["--ignore=E501".to_string()],
    }]
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "tools", "filter", "special_case"];

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    check_version(config.version, path)?;
    Ok(config)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    check_version(flexible.version, path)?;

    // Collect unknown top-level keys
    let mut unknown_keys = BTreeSet::new();
    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown_keys.insert(key.clone());
        }
    }
    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }

    let tools = parse_section(flexible.tools, "tools", &["git", "linter"], path)?;
    let filter = parse_section(flexible.filter, "filter", &["allow", "deny"], path)?;

    let special_case = match flexible.special_case {
        Some(value) => value.try_into().map_err(|e: toml::de::Error| Error::Config {
            message: format!("special_case: {}", e),
            path: Some(path.to_path_buf()),
        })?,
        None => default_special_cases(),
    };

    Ok(Config {
        version: flexible.version,
        tools,
        filter,
        special_case,
    })
}

/// Deserialize one known table, warning about unknown fields inside it.
fn parse_section<T>(
    value: Option<toml::Value>,
    name: &str,
    known_fields: &[&str],
    path: &Path,
) -> Result<T>
where
    T: Default + serde::de::DeserializeOwned,
{
    let Some(value) = value else {
        return Ok(T::default());
    };

    if let toml::Value::Table(table) = &value {
        for key in table.keys() {
            if !known_fields.contains(&key.as_str()) {
                warn_unknown_key(path, &format!("{}.{}", name, key));
            }
        }
    }

    value.try_into().map_err(|e: toml::de::Error| Error::Config {
        message: format!("{}: {}", name, e),
        path: Some(path.to_path_buf()),
    })
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "lintdiff: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Compiled path filter lists.
#[derive(Debug)]
pub struct Filters {
    allow: Vec<Regex>,
    deny: Vec<Regex>,
}

impl Filters {
    /// Compile the configured filter patterns. Patterns are anchored at the
    /// start of the path; an invalid pattern is a config error.
    pub fn compile(config: &FilterConfig) -> Result<Self> {
        Ok(Self {
            allow: compile_anchored(&config.allow)?,
            deny: compile_anchored(&config.deny)?,
        })
    }

    /// True when `path` matches all allow patterns and no deny pattern.
    pub fn should_check(&self, path: &str) -> bool {
        self.allow.iter().all(|re| re.is_match(path))
            && !self.deny.iter().any(|re| re.is_match(path))
    }
}

fn compile_anchored(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(&format!("^(?:{})", pattern)).map_err(|e| Error::Pattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}

/// One compiled special-case rule.
#[derive(Debug)]
pub struct SpecialCase {
    /// Matched anywhere within the path, unanchored.
    pub pattern: Regex,

    /// Extra linter arguments supplied on match.
    pub args: Vec<String>,
}

/// Compile the special-case table, preserving declared order.
pub fn compile_special_cases(rules: &[SpecialCaseConfig]) -> Result<Vec<SpecialCase>> {
    rules
        .iter()
        .map(|rule| {
            let pattern = Regex::new(&rule.pattern).map_err(|e| Error::Pattern {
                pattern: rule.pattern.clone(),
                message: e.to_string(),
            })?;
            Ok(SpecialCase {
                pattern,
                args: rule.args.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
