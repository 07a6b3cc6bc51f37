//! Per-entity and schema-driven batch orchestration.

use std::path::PathBuf;

use tiersmith_config::{NameCase, TiersmithConfig};
use tiersmith_core::{RowsetDef, TableDef};
use tiersmith_naming::{sanitize_identifier, to_pascal_case};
use tiersmith_templates::{TemplateStore, render};

use crate::artifact::ArtifactKind;
use crate::property::{render_entity_properties, render_rowset_properties};
use crate::report::GenerateReport;
use crate::writer::write_artifact;

/// Drives template rendering and file emission for one configured output
/// root. Single-threaded; callers must not run two generators over
/// overlapping output roots.
pub struct Generator {
    config: TiersmithConfig,
    templates: TemplateStore,
}

impl Generator {
    pub fn new(config: TiersmithConfig, templates: TemplateStore) -> Self {
        Self { config, templates }
    }

    pub fn config(&self) -> &TiersmithConfig {
        &self.config
    }

    /// Entity type name for a raw table name under the naming policy.
    pub fn entity_name(&self, raw: &str) -> String {
        let name = sanitize_identifier(raw);
        match self.config.naming_case() {
            NameCase::Pascal => to_pascal_case(&name),
            NameCase::Preserve => name,
        }
    }

    /// Generate the six companion artifacts for one entity name + key
    /// type name, in order: repository interface, repository, service
    /// interface, service, controller, API controller.
    pub fn generate_single(
        &self,
        entity_name: &str,
        key_type_name: &str,
        overwrite: bool,
    ) -> GenerateReport {
        let mut report = GenerateReport::default();
        self.generate_single_into(entity_name, key_type_name, overwrite, &mut report);
        report
    }

    fn generate_single_into(
        &self,
        entity_name: &str,
        key_type_name: &str,
        overwrite: bool,
        report: &mut GenerateReport,
    ) {
        for kind in ArtifactKind::ALL {
            self.generate_artifact_into(kind, entity_name, key_type_name, overwrite, report);
        }
    }

    fn generate_artifact_into(
        &self,
        kind: ArtifactKind,
        entity_name: &str,
        key_type_name: &str,
        overwrite: bool,
        report: &mut GenerateReport,
    ) {
        let template_name = kind.template_name();
        if !self.templates.contains(template_name) {
            report.record_missing_template(template_name);
        }

        let tokens = self.artifact_tokens(kind, entity_name, key_type_name);
        let pairs: Vec<(&str, &str)> = tokens.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let content = render(self.templates.get(template_name), &pairs);

        let path = self.artifact_path(kind, entity_name);
        match write_artifact(&path, &content, overwrite) {
            Ok(outcome) => report.record_outcome(path, outcome),
            Err(err) => report.record_failure(path, err),
        }
    }

    /// Output path for one companion artifact.
    pub fn artifact_path(&self, kind: ArtifactKind, entity_name: &str) -> PathBuf {
        self.config
            .output_path()
            .join(kind.folder())
            .join(kind.file_name(entity_name))
    }

    /// Token set per artifact kind. Every template sees the model
    /// namespace, the entity name, and the key type; the interface and
    /// implementation namespaces vary by layer.
    fn artifact_tokens(
        &self,
        kind: ArtifactKind,
        entity_name: &str,
        key_type_name: &str,
    ) -> Vec<(&'static str, String)> {
        let c = &self.config;
        let mut tokens: Vec<(&'static str, String)> = vec![
            ("ModelsNamespace", c.models_namespace.clone()),
            ("ModelTypeName", entity_name.to_string()),
            ("KeyTypeName", key_type_name.to_string()),
        ];
        match kind {
            ArtifactKind::RepositoryInterface => {
                tokens.push(("IRepositoriesNamespace", c.irepositories_namespace.clone()));
            }
            ArtifactKind::Repository => {
                tokens.push(("IRepositoriesNamespace", c.irepositories_namespace.clone()));
                tokens.push(("RepositoriesNamespace", c.repositories_namespace.clone()));
            }
            ArtifactKind::ServiceInterface => {
                tokens.push(("IRepositoriesNamespace", c.irepositories_namespace.clone()));
                tokens.push(("IServicesNamespace", c.iservices_namespace.clone()));
            }
            ArtifactKind::Service => {
                tokens.push(("IRepositoriesNamespace", c.irepositories_namespace.clone()));
                tokens.push(("IServicesNamespace", c.iservices_namespace.clone()));
                tokens.push(("ServicesNamespace", c.services_namespace.clone()));
            }
            ArtifactKind::Controller | ArtifactKind::ApiController => {
                tokens.push(("IServicesNamespace", c.iservices_namespace.clone()));
                tokens.push(("ControllersNamespace", c.controllers_namespace.clone()));
            }
        }
        tokens
    }

    /// Render and write the entity model file for one table.
    pub fn generate_entity(&self, table: &TableDef, overwrite: bool) -> GenerateReport {
        let mut report = GenerateReport::default();
        self.generate_entity_into(table, overwrite, &mut report);
        report
    }

    fn generate_entity_into(
        &self,
        table: &TableDef,
        overwrite: bool,
        report: &mut GenerateReport,
    ) {
        let Some(pk) = table.primary_key() else {
            report.record_missing_primary_key(&table.name);
            return;
        };

        if !self.templates.contains("ModelTemplate") {
            report.record_missing_template("ModelTemplate");
        }

        let entity_name = self.entity_name(&table.name);
        let properties = render_entity_properties(table, self.config.naming_case());
        let comment = table.comment.clone().unwrap_or_default();
        let key_type_name = pk.r#type.to_csharp_type();

        let content = render(
            self.templates.get("ModelTemplate"),
            &[
                ("ModelsNamespace", self.config.models_namespace.as_str()),
                ("Comment", comment.as_str()),
                ("TableName", entity_name.as_str()),
                ("ModelName", entity_name.as_str()),
                ("KeyTypeName", key_type_name),
                ("ModelProperties", properties.as_str()),
            ],
        );

        let path = self
            .config
            .output_path()
            .join("Models")
            .join(format!("{entity_name}.cs"));
        match write_artifact(&path, &content, overwrite) {
            Ok(outcome) => report.record_outcome(path, outcome),
            Err(err) => report.record_failure(path, err),
        }
    }

    /// Schema-driven batch generation over every table.
    pub fn generate_all(&self, tables: &[TableDef], overwrite: bool) -> GenerateReport {
        self.generate_all_filtered(tables, |_| true, overwrite)
    }

    /// Schema-driven batch generation with a table predicate. Tables
    /// without a primary key are counted and skipped; everything else
    /// gets the entity file plus the six companion artifacts.
    pub fn generate_all_filtered(
        &self,
        tables: &[TableDef],
        filter: impl Fn(&TableDef) -> bool,
        overwrite: bool,
    ) -> GenerateReport {
        let mut report = GenerateReport::default();
        for table in tables.iter().filter(|t| filter(t)) {
            let Some(pk) = table.primary_key() else {
                report.record_missing_primary_key(&table.name);
                continue;
            };
            let entity_name = self.entity_name(&table.name);
            let key_type_name = pk.r#type.to_csharp_type().to_string();

            self.generate_entity_into(table, overwrite, &mut report);
            self.generate_single_into(&entity_name, &key_type_name, overwrite, &mut report);
        }
        report
    }

    /// Render one rowset into a view-model file named after the class.
    pub fn generate_view_model(
        &self,
        rowset: &RowsetDef,
        class_name: &str,
        overwrite: bool,
    ) -> GenerateReport {
        let mut report = GenerateReport::default();
        self.generate_view_model_into(rowset, class_name, overwrite, &mut report);
        report
    }

    fn generate_view_model_into(
        &self,
        rowset: &RowsetDef,
        class_name: &str,
        overwrite: bool,
        report: &mut GenerateReport,
    ) {
        if !self.templates.contains("ViewModelTemplate") {
            report.record_missing_template("ViewModelTemplate");
        }

        let properties = render_rowset_properties(rowset, self.config.naming_case());
        let content = render(
            self.templates.get("ViewModelTemplate"),
            &[
                (
                    "ViewModelsNamespace",
                    self.config.view_models_namespace.as_str(),
                ),
                ("ViewModelName", class_name),
                ("ViewModelProperties", properties.as_str()),
            ],
        );

        let path = self
            .config
            .output_path()
            .join("ViewModels")
            .join(format!("{class_name}.cs"));
        match write_artifact(&path, &content, overwrite) {
            Ok(outcome) => report.record_outcome(path, outcome),
            Err(err) => report.record_failure(path, err),
        }
    }

    /// One view-model file per rowset, class named after the shape.
    pub fn generate_view_models(&self, rowsets: &[RowsetDef], overwrite: bool) -> GenerateReport {
        let mut report = GenerateReport::default();
        for rowset in rowsets {
            let class_name = self.entity_name(&rowset.name);
            self.generate_view_model_into(rowset, &class_name, overwrite, &mut report);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;
    use tiersmith_core::{ColumnDef, ColumnType, RowsetColumn};

    fn col(name: &str, ty: ColumnType) -> ColumnDef {
        ColumnDef {
            name: name.to_string(),
            r#type: ty,
            nullable: false,
            primary_key: false,
            identity: false,
            max_length: None,
            comment: None,
        }
    }

    fn user_table() -> TableDef {
        let mut id = col("id", ColumnType::Int32);
        id.primary_key = true;
        id.identity = true;

        let mut user_name = col("user_name", ColumnType::Text);
        user_name.max_length = Some(50);

        TableDef {
            name: "user".into(),
            comment: Some("application users".into()),
            columns: vec![id, user_name],
        }
    }

    fn generator_at(root: &Path) -> Generator {
        let config = TiersmithConfig {
            output_path: root.to_path_buf(),
            ..Default::default()
        };
        Generator::new(config, TemplateStore::builtin())
    }

    #[test]
    fn end_to_end_user_table() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator_at(dir.path());

        let report = generator.generate_all(&[user_table()], false);

        assert!(!report.has_failures());
        assert_eq!(report.written_count(), 7);
        assert!(report.missing_primary_key.is_empty());

        let entity = fs::read_to_string(dir.path().join("Models").join("User.cs")).unwrap();
        assert!(entity.contains("namespace App.Models"));
        assert!(entity.contains("/// application users"));
        assert!(entity.contains("[Table(\"User\")]"));
        assert!(entity.contains("public class User : BaseModel<int>"));
        assert!(entity.contains("[Key]"));
        assert!(entity.contains("[DatabaseGenerated(DatabaseGeneratedOption.Identity)]"));
        assert!(entity.contains("public override int Id { get; set; }"));
        assert!(entity.contains("[Required]"));
        assert!(entity.contains("[MaxLength(50)]"));
        assert!(entity.contains("[Column(\"user_name\")]"));
        assert!(entity.contains("public string UserName { get; set; }"));

        for (folder, file) in [
            ("IRepositories", "IUserRepository.cs"),
            ("Repositories", "UserRepository.cs"),
            ("IServices", "IUserService.cs"),
            ("Services", "UserService.cs"),
            ("Controllers", "UserController.cs"),
            ("Controllers", "UserApiController.cs"),
        ] {
            assert!(
                dir.path().join(folder).join(file).exists(),
                "missing artifact {folder}/{file}"
            );
        }

        let repo = fs::read_to_string(dir.path().join("IRepositories/IUserRepository.cs")).unwrap();
        assert!(repo.contains("namespace App.IRepositories"));
        assert!(repo.contains("public interface IUserRepository : IRepository<User, int>"));
    }

    #[test]
    fn api_controller_keeps_route_parameter_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator_at(dir.path());

        generator.generate_single("User", "int", false);

        let api =
            fs::read_to_string(dir.path().join("Controllers").join("UserApiController.cs"))
                .unwrap();
        assert!(api.contains("public class UserApiController : ControllerBase"));
        // "{id}" is not a generation token and must survive rendering.
        assert!(api.contains("[HttpGet(\"{id}\")]"));
        assert!(api.contains("public IActionResult Get(int id)"));
    }

    #[test]
    fn table_without_primary_key_is_skipped_entirely() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator_at(dir.path());

        let table = TableDef {
            name: "audit_log".into(),
            comment: None,
            columns: vec![col("message", ColumnType::Text)],
        };

        let report = generator.generate_all(&[table], false);

        assert_eq!(report.written_count(), 0);
        assert_eq!(report.missing_primary_key, vec!["audit_log".to_string()]);
        assert!(!dir.path().join("Models").exists());
        assert!(!dir.path().join("Controllers").exists());
    }

    #[test]
    fn second_run_without_overwrite_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator_at(dir.path());
        let tables = [user_table()];

        let first = generator.generate_all(&tables, false);
        assert_eq!(first.written_count(), 7);

        let entity_path = dir.path().join("Models").join("User.cs");
        let before = fs::read_to_string(&entity_path).unwrap();

        let second = generator.generate_all(&tables, false);
        assert_eq!(second.written_count(), 0);
        assert_eq!(second.skipped_count(), 7);
        assert_eq!(fs::read_to_string(&entity_path).unwrap(), before);
    }

    #[test]
    fn overwrite_replaces_hand_edited_output() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator_at(dir.path());
        let tables = [user_table()];

        generator.generate_all(&tables, false);
        let entity_path = dir.path().join("Models").join("User.cs");
        fs::write(&entity_path, "// hand edited").unwrap();

        // Without overwrite the edit survives.
        generator.generate_all(&tables, false);
        assert_eq!(fs::read_to_string(&entity_path).unwrap(), "// hand edited");

        // With overwrite it is replaced by the latest render.
        let report = generator.generate_all(&tables, true);
        assert_eq!(report.written_count(), 7);
        let regenerated = fs::read_to_string(&entity_path).unwrap();
        assert!(regenerated.contains("public class User"));
    }

    #[test]
    fn missing_template_degrades_to_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TemplateStore::default();
        store.insert("ModelTemplate", "namespace {ModelsNamespace} {}");

        let config = TiersmithConfig {
            output_path: dir.path().to_path_buf(),
            ..Default::default()
        };
        let generator = Generator::new(config, store);

        let report = generator.generate_all(&[user_table()], false);

        assert!(!report.has_failures());
        assert_eq!(report.written_count(), 7);
        assert!(report.missing_templates.contains(&"IRepositoryTemplate".to_string()));
        // Degenerate output: the file exists but carries no content.
        let degenerate = dir.path().join("IRepositories").join("IUserRepository.cs");
        assert_eq!(fs::read_to_string(degenerate).unwrap(), "");
    }

    #[test]
    fn filter_limits_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator_at(dir.path());

        let mut order_id = col("id", ColumnType::Int64);
        order_id.primary_key = true;
        let order = TableDef {
            name: "order".into(),
            comment: None,
            columns: vec![order_id],
        };

        let report =
            generator.generate_all_filtered(&[user_table(), order], |t| t.name == "user", false);

        assert_eq!(report.written_count(), 7);
        assert!(dir.path().join("Models/User.cs").exists());
        assert!(!dir.path().join("Models/Order.cs").exists());
    }

    #[test]
    fn preserve_policy_keeps_raw_table_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = TiersmithConfig {
            output_path: dir.path().to_path_buf(),
            table_naming_case: tiersmith_config::NameCase::Preserve,
            ..Default::default()
        };
        let generator = Generator::new(config, TemplateStore::builtin());

        generator.generate_all(&[user_table()], false);

        assert!(dir.path().join("Models/user.cs").exists());
        assert!(dir.path().join("IRepositories/IuserRepository.cs").exists());
    }

    #[test]
    fn view_models_emit_one_file_per_rowset() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator_at(dir.path());

        let rowsets = [
            RowsetDef {
                name: "user_summary".into(),
                columns: vec![RowsetColumn {
                    name: "user_name".into(),
                    r#type: ColumnType::Text,
                }],
            },
            RowsetDef {
                name: "order_totals".into(),
                columns: vec![RowsetColumn {
                    name: "total".into(),
                    r#type: ColumnType::Decimal,
                }],
            },
        ];

        let report = generator.generate_view_models(&rowsets, false);
        assert_eq!(report.written_count(), 2);

        let summary =
            fs::read_to_string(dir.path().join("ViewModels").join("UserSummary.cs")).unwrap();
        assert!(summary.contains("namespace App.ViewModels"));
        assert!(summary.contains("public class UserSummary"));
        assert!(summary.contains("public string UserName { get; set; }"));
        assert!(dir.path().join("ViewModels/OrderTotals.cs").exists());
    }

    #[test]
    fn view_model_class_name_is_caller_supplied() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator_at(dir.path());

        let rowset = RowsetDef {
            name: "stats".into(),
            columns: vec![RowsetColumn {
                name: "count".into(),
                r#type: ColumnType::Int32,
            }],
        };

        let report = generator.generate_view_model(&rowset, "DashboardStats", false);
        assert_eq!(report.written_count(), 1);
        let content =
            fs::read_to_string(dir.path().join("ViewModels").join("DashboardStats.cs")).unwrap();
        assert!(content.contains("public class DashboardStats"));
    }
}
