use tablet::{Db, Field, Value};
use tests::{people, setup, LoggingDriver};

#[test]
fn undescribed_table() {
    let (db, log, _script) = setup();

    let err = db.model("pets").unwrap_err();
    assert!(err.is_table_not_described());
    assert_eq!(err.to_string(), "table `pets` has not been described");
    assert!(log.is_empty());
}

#[test]
fn two_primary_keys() {
    let mut builder = Db::builder();
    let err = builder
        .describe(
            "pairs",
            [("left", Field::primary_key()), ("right", Field::primary_key())],
        )
        .unwrap_err();
    assert!(err.is_invalid_schema());

    let db = builder.build(LoggingDriver::stub()).unwrap();
    assert!(!db.schema().contains("pairs"));
    assert!(db.model("pairs").unwrap_err().is_table_not_described());
}

#[test]
fn describing_twice() {
    let mut builder = Db::builder();
    builder.describe("people", people()).unwrap();

    let err = builder.describe("people", people()).unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn unknown_and_immutable_fields() {
    let (db, _log, _script) = setup();
    let people = db.model("people").unwrap();

    let err = people.create([("middle", "Q")]).unwrap_err();
    assert!(err.is_unknown_field());
    assert_eq!(err.to_string(), "unknown field `middle` in table `people`");

    let err = people.create([("id", Value::I64(1))]).unwrap_err();
    assert!(err.is_immutable_field());

    let record = people.new_record();
    assert!(record.get("middle").unwrap_err().is_unknown_field());
}

#[test]
fn records_stay_with_their_model() {
    let driver = LoggingDriver::stub();
    let db = Db::builder()
        .describe("people", people())
        .unwrap()
        .describe("pets", [("id", Field::primary_key()), ("name", Field::text())])
        .unwrap()
        .build(driver)
        .unwrap();

    let mut pet = db.model("pets").unwrap().new_record();
    assert!(db.model("people").unwrap().save(&mut pet).is_err());
}

#[test]
fn unsupported_connection_url() {
    let err = Db::builder().connect("postgresql://localhost/db").unwrap_err();
    assert!(err.is_invalid_connection_url());

    let err = Db::builder().connect("::").unwrap_err();
    assert!(err.is_invalid_connection_url());
}
