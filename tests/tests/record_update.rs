use pretty_assertions::assert_eq;
use tablet::{driver::Row, Value};
use tests::{now, setup, Exec};

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

#[test]
fn update_stamps_updated_and_binds_key_last() {
    let (db, mut log, script) = setup();
    script.rows(vec![john()]);

    let people = db.model("people").unwrap();
    let mut person = people.load([("id", 1_i64)]).unwrap().unwrap();
    let created = person.get("created").unwrap().clone();
    log.clear();

    person.set("first", "Johnny").unwrap();
    people.save(&mut person).unwrap();

    assert_eq!(
        log.pop(),
        Some(Exec {
            sql: "UPDATE people SET first = ?, last = ?, created = ?, updated = ? WHERE id = ?"
                .to_string(),
            params: vec![
                Value::from("Johnny"),
                Value::from("Smith"),
                Value::from("2020-01-01 00:00:00"),
                Value::from("2020-01-02 03:04:05"),
                Value::I64(1),
            ],
        })
    );

    assert_eq!(person.get("created").unwrap(), &created);
    assert_eq!(person.get("updated").unwrap(), &Value::Timestamp(now()));
    assert_eq!(log.last_insert_id_calls(), 0);
}

#[test]
fn saving_an_inserted_record_updates_it() {
    let (db, mut log, script) = setup();
    script.insert_id(8_i64);

    let people = db.model("people").unwrap();
    let mut person = people.create([("first", "Ada")]).unwrap();
    people.save(&mut person).unwrap();
    people.save(&mut person).unwrap();

    assert_eq!(
        log.sql(),
        [
            "INSERT INTO people (first, created) VALUES (?, ?)",
            "UPDATE people SET first = ?, last = ?, created = ?, updated = ? WHERE id = ?",
        ]
    );

    log.pop();
    let update = log.pop().unwrap();
    assert_eq!(update.params[1], Value::Null);
    assert_eq!(update.params[4], Value::I64(8));
}

#[test]
fn failed_update_surfaces_the_driver_error() {
    let (db, _log, script) = setup();
    script.rows(vec![john()]).fail_next("database is locked");

    let people = db.model("people").unwrap();

    // The scripted failure hits the load.
    let err = people.load([("id", 1_i64)]).unwrap_err();
    assert!(err.is_driver());

    let mut person = people.load([("id", 1_i64)]).unwrap().unwrap();
    script.fail_next("database is locked");

    let err = people.save(&mut person).unwrap_err();
    assert!(err.root().is_driver());
    assert_eq!(err.to_string(), "people.save(): database is locked");
    assert_eq!(person.get("updated").unwrap(), &Value::Timestamp(now()));
}
