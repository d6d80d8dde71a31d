use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::extract::{DEFAULT_COMPONENT_NAMES, DEFAULT_MODULE_SOURCE_NAME, ExtractorOptions};
use crate::core::unit::ExtractOptions;

pub const CONFIG_FILE_NAME: &str = ".intlrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories (or globs) under `sourceRoot` to scan; empty scans everything.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_module_source_name")]
    pub module_source_name: String,
    #[serde(default = "default_component_names")]
    pub component_names: Vec<String>,
    #[serde(default)]
    pub enforce_descriptions: bool,
    #[serde(default)]
    pub extract_source_location: bool,
    /// Catalogs are only written when this is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_dir: Option<String>,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**", "**/build/**"]
        .map(String::from)
        .to_vec()
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_module_source_name() -> String {
    DEFAULT_MODULE_SOURCE_NAME.to_string()
}

fn default_component_names() -> Vec<String> {
    DEFAULT_COMPONENT_NAMES.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: default_ignores(),
            ignore_test_files: default_ignore_test_files(),
            source_root: default_source_root(),
            module_source_name: default_module_source_name(),
            component_names: default_component_names(),
            enforce_descriptions: false,
            extract_source_location: false,
            messages_dir: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are
    /// invalid, or if the module name is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Includes without wildcards are literal paths, so `app/[locale]` is fine.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.module_source_name.trim().is_empty() {
            anyhow::bail!("'moduleSourceName' must not be empty");
        }

        Ok(())
    }

    /// Extraction options, with `messagesDir` resolved against `cwd`.
    pub fn extract_options(&self, cwd: &Path) -> ExtractOptions {
        ExtractOptions {
            extractor: ExtractorOptions {
                module_source_name: self.module_source_name.clone(),
                component_names: self.component_names.clone(),
                enforce_descriptions: self.enforce_descriptions,
                extract_source_location: self.extract_source_location,
            },
            messages_dir: self
                .messages_dir
                .as_deref()
                .filter(|dir| !dir.is_empty())
                .map(|dir| cwd.join(dir)),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config {
        messages_dir: Some("./build/messages".to_string()),
        ..Default::default()
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::config::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.includes.is_empty());
        assert_eq!(config.module_source_name, "react-intl");
        assert_eq!(
            config.component_names,
            vec!["FormattedMessage", "FormattedHTMLMessage"]
        );
        assert!(!config.enforce_descriptions);
        assert_eq!(config.messages_dir, None);
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "includes": ["src"],
              "moduleSourceName": "@acme/intl",
              "enforceDescriptions": true,
              "extractSourceLocation": true,
              "messagesDir": "./build/messages"
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.includes, vec!["src"]);
        assert_eq!(config.module_source_name, "@acme/intl");
        assert!(config.enforce_descriptions);
        assert!(config.extract_source_location);
        assert_eq!(config.messages_dir.as_deref(), Some("./build/messages"));
        // Untouched fields keep their defaults.
        assert_eq!(config.ignores, default_ignores());
        assert!(config.ignore_test_files);
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        assert_eq!(find_config_file(&sub_dir), Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "componentNames": ["Message"] }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.component_names, vec!["Message"]);
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert_eq!(result.config, Config::default());
    }

    #[test]
    fn test_validate_patterns() {
        let valid = Config {
            includes: vec!["app/[locale]".to_string(), "src/**".to_string()],
            ..Default::default()
        };
        assert!(valid.validate().is_ok());

        let bad_ignore = Config {
            ignores: vec!["[invalid".to_string()],
            ..Default::default()
        };
        assert!(bad_ignore.validate().unwrap_err().to_string().contains("ignores"));

        let bad_include = Config {
            includes: vec!["src/**/[invalid".to_string()],
            ..Default::default()
        };
        assert!(bad_include.validate().unwrap_err().to_string().contains("includes"));
    }

    #[test]
    fn test_validate_module_source_name() {
        let config = Config {
            module_source_name: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_with_invalid_pattern_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "ignores": ["[invalid"] }"#).unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_extract_options() {
        let config = Config {
            messages_dir: Some("out".to_string()),
            enforce_descriptions: true,
            ..Default::default()
        };
        let options = config.extract_options(Path::new("/project"));

        assert_eq!(options.messages_dir, Some(PathBuf::from("/project/out")));
        assert!(options.extractor.enforce_descriptions);
        assert_eq!(options.extractor.module_source_name, "react-intl");

        let unset = Config::default().extract_options(Path::new("/project"));
        assert_eq!(unset.messages_dir, None);
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        assert!(json.contains("\"moduleSourceName\": \"react-intl\""));
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.messages_dir.as_deref(), Some("./build/messages"));
    }
}
