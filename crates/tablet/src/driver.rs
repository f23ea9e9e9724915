pub use tablet_core::driver::{Capability, Connection, Driver, Row};

#[cfg(feature = "sqlite")]
pub use tablet_driver_sqlite::Sqlite;
