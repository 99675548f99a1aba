//! Grammar configuration: custom clauses, quoting and placeholders.

mod common;
use common::*;

use brick_sql_core::clause;
use brick_sql_core::{GrammarError, RenderContext, StatementKind};
use brick_sql_mysql::clauses::{LIMIT, OFFSET};
use brick_sql_mysql::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn custom_clause_after_offset() {
    let mut bricks = bricks();
    bricks
        .register::<MySqlSelect, _>("lock", OFFSET, |_, _| Some(String::from("FOR UPDATE")))
        .expect("offset is a known clause");

    let stmt = bricks.select().columns(["id"]).from("jobs").limit(1);
    assert_eq!(render(&stmt), "SELECT id FROM jobs LIMIT 1 FOR UPDATE");
}

#[test]
fn builders_keep_their_grammar_snapshot() {
    let mut bricks = bricks();
    let before = bricks.select().columns(["id"]).from("jobs");
    bricks
        .register::<MySqlSelect, _>("lock", OFFSET, |_, _| Some(String::from("FOR UPDATE")))
        .expect("offset is a known clause");

    assert_eq!(render(&before), "SELECT id FROM jobs");
    assert_eq!(
        render(&bricks.select().columns(["id"]).from("jobs")),
        "SELECT id FROM jobs FOR UPDATE"
    );
}

#[test]
fn registering_existing_clause_replaces_it() {
    let mut bricks = bricks();
    bricks
        .register::<MySqlDelete, _>(LIMIT, clause::WHERE, |stmt, _| {
            stmt.limit_value().map(|n| format!("LIMIT {n} /* capped */"))
        })
        .expect("where is a known clause");

    assert_eq!(
        bricks.registry::<MySqlDelete>().names().collect::<Vec<_>>(),
        ["delete", "where", "limit", "order_by"]
    );
    assert_eq!(
        render(&bricks.delete("logs").order_by(["id"]).limit(5)),
        "DELETE FROM logs LIMIT 5 /* capped */ ORDER BY id"
    );
}

#[test]
fn unknown_anchor_is_rejected() {
    let mut bricks = bricks();
    let err = bricks
        .register::<MySqlInsert, _>("returning", "returning_anchor", |_, _| None)
        .unwrap_err();

    assert_eq!(
        err,
        GrammarError::UnknownAnchor {
            kind: StatementKind::Insert,
            name: String::from("returning"),
            anchor: String::from("returning_anchor"),
        }
    );
    assert_eq!(bricks.registry::<MySqlInsert>().len(), 5);
}

#[test]
fn custom_renderer_may_collect_parameters() {
    let mut bricks = bricks();
    bricks
        .register::<MySqlSelect, _>("tenant", clause::WHERE, |_, cx: &mut RenderContext| {
            Some(format!("/* tenant {} */", cx.value(&SqlValue::Int(42))))
        })
        .expect("where is a known clause");

    let (sql, params) = bricks.select().columns(["id"]).from("t").to_params();
    assert_eq!(sql, "SELECT id FROM t /* tenant ? */");
    assert_eq!(params, vec![SqlValue::Int(42)]);
}

#[test]
fn numbered_placeholders() {
    let config = GrammarConfig::for_dialect(&MySqlDialect::new())
        .with_placeholder(Placeholder::Numbered);
    let bricks = MySqlBricks::with_config(config).expect("MySQL grammar builds");

    let (sql, params) = bricks
        .update("users")
        .set("name", "Bob")
        .where_clause(col("id").eq(7))
        .limit(1)
        .to_params();
    assert_eq!(sql, "UPDATE users SET name = $1 WHERE id = $2 LIMIT 1");
    assert_eq!(params.len(), 2);
}

#[test]
fn quoting_can_be_disabled() {
    let config = GrammarConfig::new().with_auto_quote_char(None);
    let bricks = MySqlBricks::with_config(config).expect("MySQL grammar builds");

    let stmt = bricks.insert("t", ["user"]).values([1]);
    assert_eq!(render(&stmt), "INSERT INTO t (user) VALUES (1)");
}

#[test]
fn config_loads_from_json() {
    let config: GrammarConfig =
        serde_json::from_str(r#"{"auto_quote_char": "`", "placeholder": "numbered"}"#)
            .expect("valid config");
    let bricks = MySqlBricks::with_config(config).expect("MySQL grammar builds");
    assert_eq!(bricks.config().placeholder, Placeholder::Numbered);

    let stmt = bricks.select().columns(["order"]).from("t");
    assert_eq!(render(&stmt), "SELECT `order` FROM t");
}

#[test]
fn grammar_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MySqlBricks>();
    assert_send_sync::<MySqlSelect>();

    let bricks = bricks();
    let handle = std::thread::spawn(move || {
        bricks
            .select()
            .columns(["id"])
            .from("t")
            .limit(3)
            .to_string()
    });
    assert_eq!(handle.join().expect("thread"), "SELECT id FROM t LIMIT 3");
}
