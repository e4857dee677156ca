//! Use Case Factory
//!
//! Creates use cases with the local file system wired in.

use crate::application::{CheckUseCase, EditUseCase, RestoreUseCase};
use crate::config::Config;
use crate::infrastructure::{FsBackupWriter, LocalFs};

pub type ConcreteEditUseCase = EditUseCase<LocalFs, FsBackupWriter<LocalFs>>;
pub type ConcreteCheckUseCase = CheckUseCase<LocalFs>;
pub type ConcreteRestoreUseCase = RestoreUseCase<LocalFs, FsBackupWriter<LocalFs>>;

fn backup_writer(config: &Config) -> FsBackupWriter<LocalFs> {
    FsBackupWriter::new(LocalFs::new()).with_label_format(config.backup.label_format.clone())
}

pub fn create_edit_use_case(config: &Config) -> ConcreteEditUseCase {
    EditUseCase::new(LocalFs::new(), backup_writer(config))
}

pub fn create_check_use_case(config: &Config) -> ConcreteCheckUseCase {
    CheckUseCase::new(LocalFs::new(), config.locator())
}

pub fn create_restore_use_case(config: &Config) -> ConcreteRestoreUseCase {
    RestoreUseCase::new(LocalFs::new(), backup_writer(config))
}
