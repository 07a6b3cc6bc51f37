//! Named flat-text templates and literal token substitution.
//!
//! Templates are plain strings carrying `{Token}` markers. There is no
//! engine: rendering replaces each known token literally and leaves
//! everything else untouched, including unknown `{...}` sequences.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("read template dir {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read template file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The template names shipped with the generator.
pub const BUILTIN_NAMES: &[&str] = &[
    "ModelTemplate",
    "IRepositoryTemplate",
    "RepositoryTemplate",
    "IServiceTemplate",
    "ServiceTemplate",
    "ControllerTemplate",
    "ApiControllerTemplate",
    "ViewModelTemplate",
];

/// A mapping from template name to flat text content, loaded once at
/// startup.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, String>,
}

impl TemplateStore {
    /// The bundled default template set.
    pub fn builtin() -> Self {
        let mut store = Self::default();
        store.insert("ModelTemplate", include_str!("../templates/ModelTemplate.txt"));
        store.insert(
            "IRepositoryTemplate",
            include_str!("../templates/IRepositoryTemplate.txt"),
        );
        store.insert(
            "RepositoryTemplate",
            include_str!("../templates/RepositoryTemplate.txt"),
        );
        store.insert(
            "IServiceTemplate",
            include_str!("../templates/IServiceTemplate.txt"),
        );
        store.insert(
            "ServiceTemplate",
            include_str!("../templates/ServiceTemplate.txt"),
        );
        store.insert(
            "ControllerTemplate",
            include_str!("../templates/ControllerTemplate.txt"),
        );
        store.insert(
            "ApiControllerTemplate",
            include_str!("../templates/ApiControllerTemplate.txt"),
        );
        store.insert(
            "ViewModelTemplate",
            include_str!("../templates/ViewModelTemplate.txt"),
        );
        store
    }

    /// Built-in set overlaid with every `*.txt` file in `dir`, keyed by
    /// file stem.
    pub fn from_dir(dir: &Path) -> Result<Self, TemplateError> {
        let mut store = Self::builtin();
        store.overlay_dir(dir)?;
        Ok(store)
    }

    /// Load every `*.txt` file in `dir` into the store, overriding
    /// entries with the same name.
    pub fn overlay_dir(&mut self, dir: &Path) -> Result<(), TemplateError> {
        let entries = fs::read_dir(dir).map_err(|source| TemplateError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| TemplateError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content =
                fs::read_to_string(&path).map_err(|source| TemplateError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
            self.insert(stem, &content);
        }
        Ok(())
    }

    pub fn insert(&mut self, name: &str, content: &str) {
        self.templates.insert(name.to_string(), content.to_string());
    }

    /// Template content by name. Unknown names yield empty content so a
    /// batch run degrades instead of aborting; callers that want to warn
    /// can check [`contains`](Self::contains) first.
    pub fn get(&self, name: &str) -> &str {
        self.templates.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Sorted template names, for listing.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Replace every literal `{token}` occurrence for each `(token, value)`
/// pair. Tokens not present in the map are left byte-identical in the
/// output; substitution order does not matter since markers are distinct
/// literals.
pub fn render(template: &str, tokens: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (token, value) in tokens {
        out = out.replace(&format!("{{{token}}}"), value);
    }
    out
}
