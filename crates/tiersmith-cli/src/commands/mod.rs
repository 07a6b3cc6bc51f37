pub mod generate;
pub mod init;
pub mod new;
pub mod viewmodel;

pub use generate::cmd_generate;
pub use init::cmd_init;
pub use new::cmd_new;
pub use viewmodel::cmd_viewmodel;
