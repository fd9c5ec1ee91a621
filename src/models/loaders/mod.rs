pub mod toml_loader;

pub use toml_loader::{load_all_draft_files, load_draft_file, DraftFile};
