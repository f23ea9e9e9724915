use pretty_assertions::assert_eq;
use tablet::{driver::Capability, Clock, Db, Field, Value};
use tests::{now, people, setup, Exec, LoggingDriver};

#[test]
fn insert_touches_set_fields_and_created() {
    let (db, mut log, script) = setup();
    script.insert_id(42_i64);

    let people = db.model("people").unwrap();
    let mut person = people
        .create([("first", "John"), ("last", "Smith")])
        .unwrap();
    assert!(person.is_new());

    people.save(&mut person).unwrap();

    assert_eq!(
        log.pop(),
        Some(Exec {
            sql: "INSERT INTO people (first, last, created) VALUES (?, ?, ?)".to_string(),
            params: vec![
                Value::from("John"),
                Value::from("Smith"),
                Value::from("2020-01-02 03:04:05"),
            ],
        })
    );
    assert!(log.is_empty());

    assert_eq!(person.key(), Some(&Value::I64(42)));
    assert_eq!(person.get("id").unwrap(), &Value::I64(42));
    assert_eq!(person.get("created").unwrap(), &Value::Timestamp(now()));
    assert_eq!(person.get("updated").unwrap(), &Value::Null);
    assert!(!person.is_new());
}

#[test]
fn unset_fields_are_left_out() {
    let (db, mut log, script) = setup();
    script.insert_id(1_i64);

    let people = db.model("people").unwrap();
    let mut person = people.create([("first", "Ada")]).unwrap();
    people.save(&mut person).unwrap();

    let exec = log.pop().unwrap();
    assert_eq!(exec.sql, "INSERT INTO people (first, created) VALUES (?, ?)");
}

#[test]
fn explicit_null_counts_as_unset() {
    let (db, mut log, script) = setup();
    script.insert_id(1_i64);

    let people = db.model("people").unwrap();
    let mut person = people.new_record();
    person.set("first", "Ada").unwrap();
    person.set("last", Value::Null).unwrap();
    people.save(&mut person).unwrap();

    let exec = log.pop().unwrap();
    assert_eq!(exec.sql, "INSERT INTO people (first, created) VALUES (?, ?)");
}

#[test]
fn table_without_primary_key_skips_generated_key() {
    let driver = LoggingDriver::stub();
    let mut log = driver.exec_log();

    let db = Db::builder()
        .describe(
            "events",
            [("name", Field::text()), ("flag", Field::boolean())],
        )
        .unwrap()
        .build(driver)
        .unwrap();

    let events = db.model("events").unwrap();
    let mut event = events
        .create([("name", Value::from("boot")), ("flag", Value::Bool(true))])
        .unwrap();
    events.save(&mut event).unwrap();

    let exec = log.pop().unwrap();
    assert_eq!(exec.sql, "INSERT INTO events (name, flag) VALUES (?, ?)");
    assert_eq!(exec.params, [Value::from("boot"), Value::I64(1)]);
    assert_eq!(log.last_insert_id_calls(), 0);
    assert!(event.key().is_none());
}

#[test]
fn failed_insert_keeps_stamp_but_no_key() {
    let (db, log, script) = setup();
    script.fail_next("UNIQUE constraint failed: people.first");

    let people = db.model("people").unwrap();
    let mut person = people.create([("first", "John")]).unwrap();

    let err = people.save(&mut person).unwrap_err();
    assert!(err.root().is_driver());
    assert_eq!(
        err.to_string(),
        "people.save(): UNIQUE constraint failed: people.first"
    );

    assert_eq!(log.len(), 1);
    assert_eq!(log.last_insert_id_calls(), 0);
    assert_eq!(person.get("created").unwrap(), &Value::Timestamp(now()));
    assert!(person.is_new());
}

#[test]
fn driver_capability_picks_placeholders_and_guards_generated_keys() {
    let driver = LoggingDriver::stub().with_capability(&Capability::POSTGRESQL);
    let log = driver.exec_log();

    let db = Db::builder()
        .describe("people", people())
        .unwrap()
        .clock(Clock::fixed(now()))
        .build(driver)
        .unwrap();

    let people = db.model("people").unwrap();
    assert!(people.load([("first", "John"), ("last", "Smith")]).unwrap().is_none());
    assert_eq!(
        log.sql(),
        ["SELECT * FROM people WHERE first = $1 AND last = $2"]
    );

    // Without a way to read the generated key, the insert never runs.
    let mut person = people.create([("first", "John")]).unwrap();
    let err = people.save(&mut person).unwrap_err();
    assert_eq!(
        err.to_string(),
        "people.save(): driver cannot report generated keys; table=people"
    );
    assert_eq!(log.len(), 1);
    assert_eq!(log.last_insert_id_calls(), 0);
    assert!(person.is_new());
}
