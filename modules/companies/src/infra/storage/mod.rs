pub mod fs_repo;
pub mod json_dir;

pub use fs_repo::FsCompaniesRepository;
pub use json_dir::{JsonDirLoader, LoadError};
