use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::toolbar::Modifier;

/// Defaults that can be saved and merged with command-line flags.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub json: bool,
    pub modifier: Option<Modifier>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: switches add up, options from `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            json: self.json || other.json,
            modifier: other.modifier.or(self.modifier),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("togglemark").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("togglemark")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("togglemark").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("togglemark")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".togglemarkrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# togglemark defaults (saved with --save)".to_string()];
    if flags.json {
        lines.push("--json".to_string());
    }
    if let Some(modifier) = flags.modifier {
        lines.push(format!("--modifier {}", modifier.as_str()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the saveable flags out of raw arguments; anything else is ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--json" {
            flags.json = true;
        } else if token == "--modifier" {
            if let Some(next) = tokens.get(i + 1) {
                flags.modifier = parse_modifier(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--modifier=") {
            flags.modifier = parse_modifier(value);
        }
        i += 1;
    }
    flags
}

fn parse_modifier(s: &str) -> Option<Modifier> {
    match s {
        "ctrl" => Some(Modifier::Ctrl),
        "cmd" => Some(Modifier::Cmd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "togglemark".to_string(),
            "--json".to_string(),
            "--style".to_string(),
            "bold".to_string(),
            "--modifier".to_string(),
            "cmd".to_string(),
            "notes.md".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.json);
        assert_eq!(flags.modifier, Some(Modifier::Cmd));
    }

    #[test]
    fn test_parse_flag_tokens_ignores_unknown_modifier() {
        let args = vec!["--modifier=alt".to_string()];
        assert_eq!(parse_flag_tokens(&args).modifier, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            json: true,
            modifier: Some(Modifier::Ctrl),
        };
        let cli = ConfigFlags {
            modifier: Some(Modifier::Cmd),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.json);
        assert_eq!(merged.modifier, Some(Modifier::Cmd));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".togglemarkrc");
        let flags = ConfigFlags {
            json: true,
            modifier: Some(Modifier::Cmd),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
