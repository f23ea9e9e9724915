use super::{And, Comma, Ident, Params, ToSql};

use tablet_core::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::Select(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let projection = &self.projection;
        let filter = &self.filter;

        fmt!(f, "SELECT " projection " FROM " Ident(&self.table) filter);
    }
}

impl ToSql for &stmt::Projection {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Projection::All => fmt!(f, "*"),
            stmt::Projection::Count(alias) => fmt!(f, "COUNT(*) AS " Ident(alias)),
        }
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if !self.is_empty() {
            fmt!(f, " WHERE " And(self.conditions()));
        }
    }
}

impl ToSql for &stmt::Condition {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let value = &self.value;

        fmt!(f, Ident(&self.column) " = " value);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table_name = Ident(&self.table);

        if self.columns.is_empty() {
            // Every column falls back to its storage-side default.
            if f.serializer.is_mysql() {
                fmt!(f, "INSERT INTO " table_name " () VALUES ()");
            } else {
                fmt!(f, "INSERT INTO " table_name " DEFAULT VALUES");
            }
            return;
        }

        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(&self.values);

        fmt!(f, "INSERT INTO " table_name " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let filter = &self.filter;

        fmt!(f, "UPDATE " Ident(&self.table) " SET " Comma(&self.assignments) filter);
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let value = &self.value;

        fmt!(f, Ident(&self.column) " = " value);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let filter = &self.filter;

        fmt!(f, "DELETE FROM " Ident(&self.table) filter);
    }
}
