mod assignments;
pub use assignments::{Assignment, Assignments};

mod delete;
pub use delete::Delete;

mod filter;
pub use filter::{Condition, Filter};

mod insert;
pub use insert::Insert;

mod num;

mod select;
pub use select::{Projection, Select};

mod statement;
pub use statement::Statement;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

mod value_chrono;
