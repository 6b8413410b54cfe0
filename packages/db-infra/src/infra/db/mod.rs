pub mod core;

pub use core::{connect, connect_and_migrate, run_migration, sanitize_db_url};
