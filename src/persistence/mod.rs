pub mod files;
pub mod store;

pub use files::{
    atomic_write, config_file, data_file, ensure_data_dir, get_data_dir, init_local_data_dir,
};
pub use store::{AppData, JsonStore};
