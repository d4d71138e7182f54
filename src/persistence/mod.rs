pub mod files;
pub mod metadata;
pub mod records;

pub use files::{atomic_write, ensure_data_dir, init_local_data_dir, meta_file, read_optional};
pub use metadata::{load_metadata, save_metadata, AppMetadata};
pub use records::TaskRecords;
