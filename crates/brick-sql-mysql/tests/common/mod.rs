#![allow(dead_code)]

use brick_sql_mysql::prelude::*;

pub const TABLE: &str = "main.some_table";

/// The three student rows shared by the INSERT tests.
pub fn students() -> Vec<Vec<SqlValue>> {
    [
        (123_i64, "Moshe", 41_i64, 92_i64),
        (456, "David", 34, 87),
        (789, "Rachel", 22, 98),
    ]
    .into_iter()
    .map(|(id, name, age, grade)| {
        vec![
            id.to_sql_value(),
            name.to_sql_value(),
            age.to_sql_value(),
            grade.to_sql_value(),
        ]
    })
    .collect()
}

/// Expected `INSERT ... VALUES` prefix for [`students`].
pub const STUDENTS_SQL: &str = "INSERT INTO main.some_table (id, name, age, grade) \
     VALUES (123, 'Moshe', 41, 92), (456, 'David', 34, 87), (789, 'Rachel', 22, 98)";

/// A fresh grammar, independent from the shared one.
pub fn bricks() -> MySqlBricks {
    MySqlBricks::new().expect("MySQL grammar builds")
}

/// Renders inline and checks that a second render is byte-identical.
pub fn render<T: std::fmt::Display>(stmt: &T) -> String {
    let first = stmt.to_string();
    let second = stmt.to_string();
    assert_eq!(first, second, "rendering is not idempotent");
    first
}
