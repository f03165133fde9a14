use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub emit: EmitSettings,
}

/// Where trees are read from and where generated files go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitSettings {
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    #[serde(default = "default_input_glob")]
    pub input_glob: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for EmitSettings {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            out_dir: default_out_dir(),
            input_glob: default_input_glob(),
            extension: default_extension(),
        }
    }
}

fn default_input_dir() -> String {
    "trees/".to_string()
}

fn default_out_dir() -> String {
    "generated/".to_string()
}

fn default_input_glob() -> String {
    "**/*.json".to_string()
}

fn default_extension() -> String {
    "proto".to_string()
}

/// Resolved emit parameters after merging config + CLI arguments.
#[derive(Debug, Clone)]
pub struct EmitParams {
    pub inputs: Vec<PathBuf>,
    pub out_dir: PathBuf,
    pub input_glob: String,
    pub extension: String,
}

/// Discovery order for config file:
/// 1. `--config <path>` (explicit, or `PROTO_FORGE_CONFIG` via clap)
/// 2. `./proto-forge.toml` (project-local)
/// 3. `$XDG_CONFIG_HOME/proto-forge/config.toml`
/// 4. `~/.config/proto-forge/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    let local = PathBuf::from("proto-forge.toml");
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("proto-forge/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/proto-forge/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok(CliConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    tracing::debug!(path = %path.display(), "loading config");
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}

/// Resolve emit parameters from config + CLI overrides.
///
/// Explicit paths and `--out-dir` take precedence over config file values.
pub fn resolve_emit_params(
    config: &CliConfig,
    paths: &[PathBuf],
    out_dir: Option<&Path>,
) -> EmitParams {
    let inputs = if paths.is_empty() {
        vec![PathBuf::from(&config.emit.input_dir)]
    } else {
        paths.to_vec()
    };

    EmitParams {
        inputs,
        out_dir: out_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&config.emit.out_dir)),
        input_glob: config.emit.input_glob.clone(),
        extension: config.emit.extension.trim_start_matches('.').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = CliConfig::default();
        assert_eq!(config.emit.input_dir, "trees/");
        assert_eq!(config.emit.out_dir, "generated/");
        assert_eq!(config.emit.input_glob, "**/*.json");
        assert_eq!(config.emit.extension, "proto");
    }

    #[test]
    fn parse_minimal_toml() {
        let toml_str = r#"
[emit]
out_dir = "src/proto/"
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.emit.out_dir, "src/proto/");
        assert_eq!(config.emit.input_dir, "trees/");
        assert_eq!(config.emit.extension, "proto");
    }

    #[test]
    fn parse_empty_toml() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.emit.out_dir, "generated/");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[emit]
input_dir = "build/trees/"
out_dir = "build/proto/"
input_glob = "*.tree.json"
extension = "pb.txt"
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.emit.input_dir, "build/trees/");
        assert_eq!(config.emit.out_dir, "build/proto/");
        assert_eq!(config.emit.input_glob, "*.tree.json");
        assert_eq!(config.emit.extension, "pb.txt");
    }

    #[test]
    fn resolve_uses_config_defaults() {
        let params = resolve_emit_params(&CliConfig::default(), &[], None);
        assert_eq!(params.inputs, vec![PathBuf::from("trees/")]);
        assert_eq!(params.out_dir, PathBuf::from("generated/"));
    }

    #[test]
    fn resolve_cli_overrides() {
        let params = resolve_emit_params(
            &CliConfig::default(),
            &[PathBuf::from("a.json")],
            Some(Path::new("out")),
        );
        assert_eq!(params.inputs, vec![PathBuf::from("a.json")]);
        assert_eq!(params.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn resolve_strips_leading_dot_from_extension() {
        let mut config = CliConfig::default();
        config.emit.extension = ".proto".into();
        let params = resolve_emit_params(&config, &[], None);
        assert_eq!(params.extension, "proto");
    }

    #[test]
    fn load_config_from_explicit_missing_file() {
        let result = load_config(Some(Path::new("/nonexistent/proto-forge.toml")));
        assert!(matches!(result, Err(CliError::Io { .. })));
    }
}
