mod exec_log;
pub use exec_log::{Exec, ExecLog};

pub use logging_driver::{LoggingConnection, LoggingDriver, Script};

use chrono::{DateTime, TimeZone, Utc};
use tablet::{Clock, Db, Field};

/// Send `tracing` output of the library crates to the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fields of the `people` table used throughout the tests.
pub fn people() -> Vec<(&'static str, Field)> {
    vec![
        ("id", Field::primary_key()),
        ("first", Field::varchar(64)),
        ("last", Field::varchar(64)),
        ("created", Field::create_timestamp()),
        ("updated", Field::update_timestamp()),
    ]
}

/// The instant every test clock is frozen at.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap()
}

/// A database over a scripted connection with the `people` table described
/// and the clock frozen at [`now`].
pub fn setup() -> (Db, ExecLog, Script) {
    init_tracing();

    let driver = LoggingDriver::stub();
    let log = driver.exec_log();
    let script = driver.script();

    let db = Db::builder()
        .describe("people", people())
        .unwrap()
        .clock(Clock::fixed(now()))
        .build(driver)
        .unwrap();

    (db, log, script)
}
