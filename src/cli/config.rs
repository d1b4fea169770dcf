//! Configuration file support.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bag::NotePaths;

/// Index filename used when the config doesn't name one.
pub const DEFAULT_INDEX_FILE: &str = "NoteBag.index";

/// Template filename used when the config doesn't name one.
pub const DEFAULT_TEMPLATE_FILE: &str = "Template.txt";

/// Name of the config file inside the config directory.
pub const CONFIG_FILENAME: &str = "NoteBag.toml";

/// Layout of the config file: all settings live in a `[NoteBag]` table.
#[derive(Debug, Default, Deserialize, Serialize)]
struct ConfigFile {
    #[serde(rename = "NoteBag", default)]
    notebag: Config,
}

/// Application configuration loaded from the `[NoteBag]` section.
///
/// ```toml
/// [NoteBag]
/// "Notes Directory" = "/home/me/Notes"
/// "Notes List File" = "NoteBag.index"
/// "Note Template Filename" = "Template.rtf"
/// "Document Editor" = ""
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the note documents
    #[serde(rename = "Notes Directory", skip_serializing_if = "Option::is_none")]
    pub notes_dir: Option<PathBuf>,

    /// Index file, relative to the notes directory unless absolute
    #[serde(rename = "Notes List File", skip_serializing_if = "Option::is_none")]
    pub notes_list_file: Option<PathBuf>,

    /// Template for new notes, relative to the notes directory unless absolute
    #[serde(
        rename = "Note Template Filename",
        skip_serializing_if = "Option::is_none"
    )]
    pub template_file: Option<PathBuf>,

    /// Editor command; empty means the platform default application
    #[serde(rename = "Document Editor", skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Directory of the file this config was loaded from
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let base_dir = path.parent().map(Path::to_path_buf);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self {
                base_dir,
                ..Self::default()
            });
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let file: ConfigFile = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        Ok(Self {
            base_dir,
            ..file.notebag
        })
    }

    /// Writes this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let file = ConfigFile {
            notebag: self.clone(),
        };
        let contents = toml::to_string_pretty(&file).context("failed to encode config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write config file: {}", path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notebag/NoteBag.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notebag")
            .join(CONFIG_FILENAME)
    }

    /// Resolve the notes directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `Notes Directory` setting (relative to the config file)
    /// 3. Current working directory
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        if let Some(dir) = cli_dir {
            return dir.clone();
        }
        match (&self.notes_dir, &self.base_dir) {
            (Some(dir), Some(base)) if dir.is_relative() => base.join(dir),
            (Some(dir), _) => dir.clone(),
            (None, _) => PathBuf::from("."),
        }
    }

    /// Resolve the editor command.
    ///
    /// Returns `None` when unset or blank, meaning the platform default
    /// application should open notes.
    pub fn editor(&self) -> Option<&str> {
        self.editor
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    /// Resolves every path the application needs for `notes_dir`.
    pub fn paths(&self, cli_dir: Option<&PathBuf>) -> NotePaths {
        let notes_dir = self.notes_dir(cli_dir);
        let index_file = resolve_in(
            &notes_dir,
            self.notes_list_file.as_deref(),
            DEFAULT_INDEX_FILE,
        );
        let template_file = resolve_in(
            &notes_dir,
            self.template_file.as_deref(),
            DEFAULT_TEMPLATE_FILE,
        );
        NotePaths {
            notes_dir,
            index_file,
            template_file,
        }
    }
}

fn resolve_in(dir: &Path, configured: Option<&Path>, default: &str) -> PathBuf {
    let file = configured
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new(default));
    dir.join(file)
}
