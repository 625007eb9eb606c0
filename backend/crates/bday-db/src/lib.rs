pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{
    DEFAULT_BUSY_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS, DatabaseOptions, connect,
    connect_in_memory, run_migrations,
};
pub use error::{DbError, Result};
pub use repositories::sqlite_record_store::SqliteRecordStore;
