use std::path::{Path, PathBuf};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::name_case::NameCase;

/// Top-level tiersmith configuration.
///
/// Mirrors the recognized generation options: where table models are read
/// from, where artifacts are written, the namespace injected per artifact
/// kind, and the naming-case policy for schema identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TiersmithConfig {
    /// Directory holding table model files (JSON/YAML).
    #[serde(default = "default_schema_dir")]
    pub schema_dir: PathBuf,
    /// Optional directory of template overrides, loaded by file stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
    /// Root directory generated artifacts are written under.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_models_namespace")]
    pub models_namespace: String,
    #[serde(rename = "iRepositoriesNamespace", default = "default_irepositories_namespace")]
    pub irepositories_namespace: String,
    #[serde(default = "default_repositories_namespace")]
    pub repositories_namespace: String,
    #[serde(rename = "iServicesNamespace", default = "default_iservices_namespace")]
    pub iservices_namespace: String,
    #[serde(default = "default_services_namespace")]
    pub services_namespace: String,
    #[serde(default = "default_controllers_namespace")]
    pub controllers_namespace: String,
    #[serde(default = "default_view_models_namespace")]
    pub view_models_namespace: String,
    /// Naming-case policy applied to table and column names.
    #[serde(default)]
    pub table_naming_case: NameCase,
}

fn default_schema_dir() -> PathBuf {
    PathBuf::from("tables")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("generated")
}

fn default_models_namespace() -> String {
    "App.Models".to_string()
}

fn default_irepositories_namespace() -> String {
    "App.IRepositories".to_string()
}

fn default_repositories_namespace() -> String {
    "App.Repositories".to_string()
}

fn default_iservices_namespace() -> String {
    "App.IServices".to_string()
}

fn default_services_namespace() -> String {
    "App.Services".to_string()
}

fn default_controllers_namespace() -> String {
    "App.Controllers".to_string()
}

fn default_view_models_namespace() -> String {
    "App.ViewModels".to_string()
}

impl Default for TiersmithConfig {
    fn default() -> Self {
        Self {
            schema_dir: default_schema_dir(),
            template_dir: None,
            output_path: default_output_path(),
            models_namespace: default_models_namespace(),
            irepositories_namespace: default_irepositories_namespace(),
            repositories_namespace: default_repositories_namespace(),
            iservices_namespace: default_iservices_namespace(),
            services_namespace: default_services_namespace(),
            controllers_namespace: default_controllers_namespace(),
            view_models_namespace: default_view_models_namespace(),
            table_naming_case: NameCase::default(),
        }
    }
}

impl TiersmithConfig {
    /// Directory holding table model files.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Optional template-override directory.
    pub fn template_dir(&self) -> Option<&Path> {
        self.template_dir.as_deref()
    }

    /// Root directory artifacts are written under.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Naming-case policy for schema identifiers (flattened).
    pub fn naming_case(&self) -> NameCase {
        self.table_naming_case
    }
}
