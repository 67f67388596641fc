//! Lookup of themes by name
//!
//! A [`Registry`] maps theme names to their JSON source: files of a directory,
//! or the themes bundled in the library (feature `bundled-themes`).
//! The name of a theme file is its file name up to the first `.`,
//! so `boxy_dark.json` is listed as `boxy_dark`.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{Error, Result, Theme};

#[cfg(feature = "bundled-themes")]
const BUNDLED: &[(&str, &str)] = &[
    ("boxy_dark", include_str!("../themes/boxy_dark.json")),
    ("boxy_light", include_str!("../themes/boxy_light.json")),
    ("minimal_dark", include_str!("../themes/minimal_dark.json")),
    ("minimal_light", include_str!("../themes/minimal_light.json")),
    ("scientific", include_str!("../themes/scientific.json")),
];

#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    #[cfg(feature = "bundled-themes")]
    Bundled(&'static str),
}

/// A set of themes, by name
#[derive(Debug, Clone, Default)]
pub struct Registry {
    themes: BTreeMap<String, Source>,
}

impl Registry {
    /// Build an empty registry
    pub fn new() -> Self {
        Registry::default()
    }

    /// Build a registry with the themes bundled in the library
    #[cfg(feature = "bundled-themes")]
    pub fn bundled() -> Self {
        let themes = BUNDLED
            .iter()
            .map(|&(name, json)| (name.to_string(), Source::Bundled(json)))
            .collect();
        Registry { themes }
    }

    /// Build a registry with every `*.json` file of a directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let mut reg = Registry::new();
        reg.add_dir(dir)?;
        Ok(reg)
    }

    /// Add every `*.json` file of a directory.
    /// A file named like an already registered theme replaces it.
    pub fn add_dir(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let Some(name) = theme_name(&path) else {
                continue;
            };
            log::trace!("registering theme '{}' from {}", name, path.display());
            self.themes.insert(name, Source::File(path));
        }
        Ok(())
    }

    /// Register a single theme file under the given name
    pub fn add_file(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.themes.insert(name.into(), Source::File(path.into()));
    }

    /// Names of the registered themes, sorted
    pub fn list(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    /// Whether a theme is registered under that name
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Load a theme by name
    pub fn load(&self, name: &str) -> Result<Theme> {
        let Some(source) = self.themes.get(name) else {
            return Err(Error::ThemeNotFound {
                name: name.to_string(),
                available: self.list(),
            });
        };
        log::debug!("loading theme '{}'", name);
        match source {
            Source::File(path) => Theme::from_file(path),
            #[cfg(feature = "bundled-themes")]
            Source::Bundled(json) => Theme::from_json(json),
        }
    }
}

fn theme_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let name = file_name.split('.').next()?;
    (!name.is_empty()).then(|| name.to_string())
}

/// Names of the bundled themes, sorted
#[cfg(feature = "bundled-themes")]
pub fn list_themes() -> Vec<String> {
    Registry::bundled().list()
}

/// Load a bundled theme by name
#[cfg(feature = "bundled-themes")]
pub fn load_theme(name: &str) -> Result<Theme> {
    Registry::bundled().load(name)
}
