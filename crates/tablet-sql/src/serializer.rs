#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{And, Comma};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod statement;
mod value;

use tablet_core::{driver::Capability, stmt::Statement};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Picks the flavor matching a driver's capability.
    pub fn for_capability(capability: &Capability) -> Serializer {
        if capability.numbered_params {
            Serializer::postgresql()
        } else {
            Serializer::sqlite()
        }
    }

    /// Serialize `stmt`, pushing every bound value onto `params` in
    /// placeholder order.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }

    fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }
}
