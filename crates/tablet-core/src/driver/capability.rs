#[derive(Debug)]
pub struct Capability {
    /// SQL: statement parameters are numbered (`$1`, `$2`, ...) instead of
    /// anonymous `?` placeholders.
    pub numbered_params: bool,

    /// The database reports the key generated by an `INSERT` through
    /// [`Connection::last_insert_id`](super::Connection::last_insert_id).
    pub last_insert_id: bool,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        numbered_params: false,
        last_insert_id: true,
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self { ..Self::SQLITE };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        numbered_params: true,
        last_insert_id: false,
    };
}
