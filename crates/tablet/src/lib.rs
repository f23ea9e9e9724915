mod clock;
pub use clock::Clock;

pub mod db;
pub use db::Db;

pub mod driver;

mod engine;

mod model;
pub use model::Model;

mod record;
pub use record::Record;

pub use tablet_core::{
    bail, err,
    schema::{self, Field, FieldTy, Role, Schema, Stamp, Table},
    stmt::{self, Value},
    Error, Result,
};
