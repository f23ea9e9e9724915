use pretty_assertions::assert_eq;
use tablet::{driver::Row, Value};
use tests::{setup, Exec};

#[test]
fn delete_without_key_fails() {
    let (db, log, _script) = setup();

    let people = db.model("people").unwrap();
    let person = people.create([("first", "John")]).unwrap();

    let err = people.delete(person).unwrap_err();
    assert!(err.is_no_primary_key());
    assert_eq!(
        err.to_string(),
        "cannot delete a `people` record with no primary key"
    );
    assert!(log.is_empty());
}

#[test]
fn delete_by_key() {
    let (db, mut log, script) = setup();
    let row: Row = [("id", Value::I64(5))].into_iter().collect();
    script.rows(vec![row]);

    let people = db.model("people").unwrap();
    let person = people.load([("id", 5_i64)]).unwrap().unwrap();
    log.clear();

    people.delete(person).unwrap();

    assert_eq!(
        log.pop(),
        Some(Exec {
            sql: "DELETE FROM people WHERE id = ?".to_string(),
            params: vec![Value::I64(5)],
        })
    );
}

#[test]
fn failed_delete_names_the_operation() {
    let (db, _log, script) = setup();
    let row: Row = [("id", Value::I64(5))].into_iter().collect();
    script.rows(vec![row]);

    let people = db.model("people").unwrap();
    let person = people.load([("id", 5_i64)]).unwrap().unwrap();
    script.fail_next("database is locked");

    let err = people.delete(person).unwrap_err();
    assert!(!err.is_driver());
    assert!(err.root().is_driver());
    assert_eq!(err.to_string(), "people.delete(): database is locked");
}
