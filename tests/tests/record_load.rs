use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use tablet::{driver::Row, Value};
use tests::{setup, Exec};

fn john() -> Row {
    [
        ("id", Value::I64(1)),
        ("first", Value::from("John")),
        ("last", Value::from("Smith")),
        ("created", Value::from("2020-01-01 00:00:00")),
        ("updated", Value::from("2020-01-01 00:00:00")),
    ]
    .into_iter()
    .collect()
}

fn jane() -> Row {
    [
        ("id", Value::I64(2)),
        ("first", Value::from("Jane")),
        ("last", Value::from("Smith")),
        ("created", Value::from("2021-06-30 12:00:00")),
        ("updated", Value::Null),
    ]
    .into_iter()
    .collect()
}

#[test]
fn load_by_key() {
    let (db, mut log, script) = setup();
    script.rows(vec![john()]);

    let people = db.model("people").unwrap();
    let person = people.load([("id", 1_i64)]).unwrap().unwrap();

    assert_eq!(
        log.pop(),
        Some(Exec {
            sql: "SELECT * FROM people WHERE id = ?".to_string(),
            params: vec![Value::I64(1)],
        })
    );

    let jan_1 = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(person.key(), Some(&Value::I64(1)));
    assert_eq!(person.get("first").unwrap(), &Value::from("John"));
    assert_eq!(person.get("created").unwrap(), &Value::Timestamp(jan_1));
    assert_eq!(person.get("updated").unwrap(), &Value::Timestamp(jan_1));
}

#[test]
fn load_without_match_is_none() {
    let (db, _log, _script) = setup();

    let people = db.model("people").unwrap();
    assert!(people.load([("id", 99_i64)]).unwrap().is_none());
}

#[test]
fn load_takes_the_first_row() {
    let (db, _log, script) = setup();
    script.rows(vec![john(), jane()]);

    let people = db.model("people").unwrap();
    let person = people.load([("last", "Smith")]).unwrap().unwrap();
    assert_eq!(person.key(), Some(&Value::I64(1)));
}

#[test]
fn criteria_keep_their_order() {
    let (db, mut log, _script) = setup();

    let people = db.model("people").unwrap();
    people
        .load_many([("last", "Smith"), ("first", "Jane")])
        .unwrap();

    let exec = log.pop().unwrap();
    assert_eq!(exec.sql, "SELECT * FROM people WHERE last = ? AND first = ?");
    assert_eq!(exec.params, [Value::from("Smith"), Value::from("Jane")]);
}

#[test]
fn load_many_without_criteria_scans() {
    let (db, mut log, script) = setup();
    script.rows(vec![john(), jane()]);

    let people = db.model("people").unwrap();
    let records = people
        .load_many(std::iter::empty::<(&str, Value)>())
        .unwrap();

    let exec = log.pop().unwrap();
    assert_eq!(exec.sql, "SELECT * FROM people");
    assert!(exec.params.is_empty());

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].get("first").unwrap(), &Value::from("Jane"));
    assert_eq!(records[1].get("updated").unwrap(), &Value::Null);
}

#[test]
fn load_all() {
    let (db, mut log, script) = setup();
    script.rows(vec![john(), jane()]);

    let people = db.model("people").unwrap();
    let keys: Vec<_> = people
        .load_all()
        .unwrap()
        .iter()
        .map(|record| record.key().cloned())
        .collect();

    assert_eq!(log.pop().unwrap().sql, "SELECT * FROM people");
    assert_eq!(keys, [Some(Value::I64(1)), Some(Value::I64(2))]);
}

#[test]
fn load_all_of_empty_table() {
    let (db, _log, _script) = setup();
    assert!(db.model("people").unwrap().load_all().unwrap().is_empty());
}

#[test]
fn count() {
    let (db, mut log, script) = setup();
    script.rows(vec![[("count", Value::I64(7))].into_iter().collect()]);

    let people = db.model("people").unwrap();
    assert_eq!(people.count().unwrap(), 7);
    assert_eq!(
        log.pop().unwrap().sql,
        "SELECT COUNT(*) AS count FROM people"
    );
}

#[test]
fn count_falls_back_to_first_column() {
    let (db, _log, script) = setup();
    script.rows(vec![[("COUNT(*)", Value::from("3"))].into_iter().collect()]);

    assert_eq!(db.model("people").unwrap().count().unwrap(), 3);
}

#[test]
fn unknown_columns_are_rejected() {
    let (db, _log, script) = setup();
    script.rows(vec![[("nickname", Value::from("JJ"))].into_iter().collect()]);

    let err = db
        .model("people")
        .unwrap()
        .load([("id", 1_i64)])
        .unwrap_err();
    assert!(err.is_unknown_field());
}

#[test]
fn unparsable_timestamps_are_conversion_errors() {
    let (db, _log, script) = setup();
    script.rows(vec![[("created", Value::from("last tuesday"))]
        .into_iter()
        .collect()]);

    let err = db
        .model("people")
        .unwrap()
        .load([("id", 1_i64)])
        .unwrap_err();
    assert!(err.is_type_conversion());
}
