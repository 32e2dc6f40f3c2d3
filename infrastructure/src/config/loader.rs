//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "catc-gateway";
const PROJECT_FILES: [&str; 2] = ["catc-gateway.toml", ".catc-gateway.toml"];
const ENV_PREFIX: &str = "CATC_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CATC_` environment variables (`CATC_CATALYST__BASE_URL`, ...)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./catc-gateway.toml` or `./.catc-gateway.toml`
    /// 4. Global: `~/.config/catc-gateway/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Path::new("."),
            config_path.map(PathBuf::as_path),
        )
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(global: Option<&Path>, project_dir: &Path, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(path) = Self::project_config_in(project_dir) {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for `--show-config`)
    pub fn describe_sources(explicit: Option<&PathBuf>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];
        lines.push(format!("  [ENV  ] {}* variables", ENV_PREFIX));

        if let Some(path) = explicit {
            lines.push(format!("  [FOUND] Explicit: {}", path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.catalyst.base_url.is_none());
        assert_eq!(config.task.max_wait_seconds, 300);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains("catc-gateway"));
    }

    #[test]
    fn test_file_priority() {
        figment::Jail::expect_with(|_jail| {
            let dir = TempDir::new().unwrap();
            let global = dir.path().join("global.toml");
            fs::write(
                &global,
                "[task]\nmax_wait_seconds = 100\ncheck_interval_seconds = 7\n",
            )
            .unwrap();

            let project = dir.path().join("project");
            fs::create_dir(&project).unwrap();
            fs::write(project.join("catc-gateway.toml"), "[task]\nmax_wait_seconds = 200\n").unwrap();

            let explicit = dir.path().join("explicit.toml");
            fs::write(&explicit, "[router]\ndefault_domain = \"events\"\n").unwrap();

            let config: FileConfig =
                ConfigLoader::figment(Some(&global), &project, Some(&explicit)).extract()?;

            assert_eq!(config.task.max_wait_seconds, 200);
            assert_eq!(config.task.check_interval_seconds, 7);
            assert_eq!(config.router.default_domain.as_deref(), Some("events"));
            Ok(())
        });
    }

    #[test]
    fn test_missing_global_is_ignored() {
        figment::Jail::expect_with(|_jail| {
            let dir = TempDir::new().unwrap();
            let config: FileConfig =
                ConfigLoader::figment(Some(&dir.path().join("nope.toml")), dir.path(), None)
                    .extract()?;
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        figment::Jail::expect_with(|_jail| {
            let dir = TempDir::new().unwrap();
            let explicit = dir.path().join("broken.toml");
            fs::write(&explicit, "[task\nmax_wait_seconds = ").unwrap();

            let result: Result<FileConfig, _> =
                ConfigLoader::figment(None, dir.path(), Some(&explicit)).extract();
            assert!(result.is_err());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("catc-gateway.toml", "[catalyst]\nusername = \"file-user\"\n")?;
            jail.set_env("CATC_CATALYST__USERNAME", "env-user");
            jail.set_env("CATC_TASK__CHECK_INTERVAL_SECONDS", "2");

            let config: FileConfig = ConfigLoader::figment(None, jail.directory(), None).extract()?;
            assert_eq!(config.catalyst.username.as_deref(), Some("env-user"));
            assert_eq!(config.task.check_interval_seconds, 2);
            Ok(())
        });
    }
}
