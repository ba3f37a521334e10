use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Root configuration structure for stagehand.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StagehandConfig {
    #[serde(default)]
    pub scaffold: ScaffoldConfig,

    #[serde(default)]
    pub build: BuildConfig,
}

/// Paths consumed by the component scaffolder. All paths are relative to
/// the working directory unless absolute; `~` is expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    #[serde(default = "default_components_dir")]
    pub components_dir: String,

    #[serde(default = "default_central_registry")]
    pub central_registry: String,

    #[serde(default = "default_view_registry")]
    pub view_registry: String,

    #[serde(default = "default_routes_registry")]
    pub routes_registry: String,

    #[serde(default = "default_thumbnail_template")]
    pub thumbnail_template: String,

    #[serde(default = "default_thumbnails_dir")]
    pub thumbnails_dir: String,

    /// Optional boilerplate file overriding the embedded component template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_file: Option<String>,
}

/// Commands and directories for the production build flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_project_root")]
    pub project_root: String,

    #[serde(default = "default_build_command")]
    pub command: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_deploy_dir")]
    pub deploy_dir: String,

    /// Long-running static server, launched in the deploy directory.
    #[serde(default = "default_serve_command")]
    pub serve_command: String,

    /// Long-running dev server, launched in the project root.
    #[serde(default = "default_dev_command")]
    pub dev_command: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            components_dir: default_components_dir(),
            central_registry: default_central_registry(),
            view_registry: default_view_registry(),
            routes_registry: default_routes_registry(),
            thumbnail_template: default_thumbnail_template(),
            thumbnails_dir: default_thumbnails_dir(),
            template_file: None,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            command: default_build_command(),
            output_dir: default_output_dir(),
            deploy_dir: default_deploy_dir(),
            serve_command: default_serve_command(),
            dev_command: default_dev_command(),
        }
    }
}

// =============================================================================
// Default value functions (match the documented site layout)
// =============================================================================

fn default_components_dir() -> String {
    "src/app/_components/illusions".to_string()
}

fn default_central_registry() -> String {
    "src/app/_components/CentralSquare.tsx".to_string()
}

fn default_view_registry() -> String {
    "src/app/_components/SquareView.tsx".to_string()
}

fn default_routes_registry() -> String {
    "src/app/[square]/page.tsx".to_string()
}

fn default_thumbnail_template() -> String {
    "public/thumbnails/template thumbnail.jpg".to_string()
}

fn default_thumbnails_dir() -> String {
    "public/thumbnails".to_string()
}

fn default_project_root() -> String {
    ".".to_string()
}

fn default_build_command() -> String {
    "npm run build".to_string()
}

fn default_output_dir() -> String {
    "out".to_string()
}

fn default_deploy_dir() -> String {
    "../prod-space".to_string()
}

fn default_serve_command() -> String {
    "npm exec http-server".to_string()
}

fn default_dev_command() -> String {
    "npm run dev".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Path to the active config file: $STAGEHAND_CONFIG if set, else
/// ./stagehand.json.
pub fn config_path() -> PathBuf {
    match env::var("STAGEHAND_CONFIG") {
        Ok(path) if !path.trim().is_empty() => expand(&path),
        _ => PathBuf::from("stagehand.json"),
    }
}

/// Check if the config file exists.
pub fn config_exists() -> bool {
    config_path().exists()
}

/// Load configuration. A missing file yields built-in defaults; a file
/// that exists but fails to parse is an error.
pub fn load() -> Result<StagehandConfig> {
    let path = config_path();
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<StagehandConfig> {
    if !path.exists() {
        return Ok(StagehandConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    serde_json::from_str(&content).map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

/// Save config to a file (creates parent directories if missing).
pub fn save(config: &StagehandConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
            })?;
        }
    }

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize stagehand.json".to_string()))
    })?;

    fs::write(path, content).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("write {}", path.display())))
    })
}

/// Expand `~` in a configured path.
pub fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// Resolve a configured path against a base directory. Absolute paths
/// (after `~` expansion) stand alone.
pub fn resolve(base: &Path, path: &str) -> PathBuf {
    let expanded = expand(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_from_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = load_from(&dir.path().join("stagehand.json")).unwrap();
        assert_eq!(config.build.command, "npm run build");
        assert_eq!(config.scaffold.components_dir, "src/app/_components/illusions");
    }

    #[test]
    fn load_from_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stagehand.json");
        fs::write(&path, r#"{"build": {"command": "pnpm build"}}"#).unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.build.command, "pnpm build");
        assert_eq!(config.build.output_dir, "out");
        assert_eq!(config.scaffold.thumbnails_dir, "public/thumbnails");
    }

    #[test]
    fn load_from_invalid_json_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stagehand.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_from(&path).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
    }

    #[test]
    fn save_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("stagehand.json");

        let mut config = StagehandConfig::default();
        config.build.deploy_dir = "/srv/prod-space".to_string();
        save(&config, &path).unwrap();

        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.build.deploy_dir, "/srv/prod-space");
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let base = Path::new("/work/site");
        assert_eq!(resolve(base, "/tmp/x"), PathBuf::from("/tmp/x"));
        assert_eq!(resolve(base, "out"), PathBuf::from("/work/site/out"));
    }
}
