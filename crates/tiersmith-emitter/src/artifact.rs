/// The six per-entity companion artifacts, in generation order.
///
/// The entity model and view models are rendered separately since their
/// token sets include column-derived property blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    RepositoryInterface,
    Repository,
    ServiceInterface,
    Service,
    Controller,
    ApiController,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::RepositoryInterface,
        ArtifactKind::Repository,
        ArtifactKind::ServiceInterface,
        ArtifactKind::Service,
        ArtifactKind::Controller,
        ArtifactKind::ApiController,
    ];

    pub fn template_name(self) -> &'static str {
        match self {
            ArtifactKind::RepositoryInterface => "IRepositoryTemplate",
            ArtifactKind::Repository => "RepositoryTemplate",
            ArtifactKind::ServiceInterface => "IServiceTemplate",
            ArtifactKind::Service => "ServiceTemplate",
            ArtifactKind::Controller => "ControllerTemplate",
            ArtifactKind::ApiController => "ApiControllerTemplate",
        }
    }

    /// Output folder under the configured root. Both controller kinds
    /// share a folder but not a file name.
    pub fn folder(self) -> &'static str {
        match self {
            ArtifactKind::RepositoryInterface => "IRepositories",
            ArtifactKind::Repository => "Repositories",
            ArtifactKind::ServiceInterface => "IServices",
            ArtifactKind::Service => "Services",
            ArtifactKind::Controller | ArtifactKind::ApiController => "Controllers",
        }
    }

    pub fn file_name(self, entity: &str) -> String {
        match self {
            ArtifactKind::RepositoryInterface => format!("I{entity}Repository.cs"),
            ArtifactKind::Repository => format!("{entity}Repository.cs"),
            ArtifactKind::ServiceInterface => format!("I{entity}Service.cs"),
            ArtifactKind::Service => format!("{entity}Service.cs"),
            ArtifactKind::Controller => format!("{entity}Controller.cs"),
            ArtifactKind::ApiController => format!("{entity}ApiController.cs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ArtifactKind::RepositoryInterface, "IRepositories", "IUserRepository.cs")]
    #[case(ArtifactKind::Repository, "Repositories", "UserRepository.cs")]
    #[case(ArtifactKind::ServiceInterface, "IServices", "IUserService.cs")]
    #[case(ArtifactKind::Service, "Services", "UserService.cs")]
    #[case(ArtifactKind::Controller, "Controllers", "UserController.cs")]
    #[case(ArtifactKind::ApiController, "Controllers", "UserApiController.cs")]
    fn folders_and_file_names(
        #[case] kind: ArtifactKind,
        #[case] folder: &str,
        #[case] file_name: &str,
    ) {
        assert_eq!(kind.folder(), folder);
        assert_eq!(kind.file_name("User"), file_name);
    }

    #[test]
    fn controller_kinds_do_not_collide() {
        assert_ne!(
            ArtifactKind::Controller.file_name("User"),
            ArtifactKind::ApiController.file_name("User"),
        );
    }

    #[test]
    fn generation_order_starts_at_data_access() {
        assert_eq!(ArtifactKind::ALL[0], ArtifactKind::RepositoryInterface);
        assert_eq!(ArtifactKind::ALL[5], ArtifactKind::ApiController);
    }
}
