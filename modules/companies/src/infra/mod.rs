pub mod storage;

pub use storage::FsCompaniesRepository;
