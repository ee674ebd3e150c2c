//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CssModError, CssModResult};

use super::types::{Config, ConfigWarning};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "cssmod.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> CssModResult<Config> {
    let (config, _warnings) = load_with_warnings(path)?;
    Ok(config)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CssModResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| CssModError::Config {
        file: path.to_path_buf(),
        message: format!("cannot read file: {}", e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CssModError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration in priority order: explicit file, project file,
/// user file, defaults. Environment overrides are applied on top.
///
/// An explicit file must exist; the others are optional.
pub fn load_or_default(
    project_root: &Path,
    explicit: Option<&Path>,
) -> CssModResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match find_config_file(project_root, explicit) {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

fn find_config_file(project_root: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return Some(project_config);
    }

    let user_config = dirs::config_dir()?.join("cssmod-types/config.toml");
    user_config.is_file().then_some(user_config)
}

/// Apply environment variable overrides (CSSMOD_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides using an arbitrary variable lookup
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // CSSMOD_EXTENSIONS (comma-separated)
    if let Some(extensions) = lookup("CSSMOD_EXTENSIONS") {
        let parsed: Vec<String> = extensions
            .split(',')
            .map(|s| s.trim().trim_start_matches('.').to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if !parsed.is_empty() {
            config.generate.extensions = parsed;
        }
    }

    // CSSMOD_MODULE_MARKER
    if let Some(marker) = lookup("CSSMOD_MODULE_MARKER") {
        let marker = marker.trim();
        if !marker.is_empty() {
            config.generate.marker = marker.to_string();
        }
    }

    // CSSMOD_SORT
    if let Some(val) = lookup("CSSMOD_SORT") {
        config.generate.sort_paths = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes");
    }

    // CSSMOD_TEMPLATE
    if let Some(template) = lookup("CSSMOD_TEMPLATE") {
        if !template.trim().is_empty() {
            config.generate.template = Some(PathBuf::from(template));
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["generate", "marker", "extensions", "sort_paths", "template"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(
                std::cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + cost,
            );
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

