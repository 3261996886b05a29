/// Timeline positions and wall-clock instants are both epoch milliseconds
/// stored as doubles, matching the `DOUBLE PRECISION` columns.
pub type Millis = f64;

/// Current wall-clock time as epoch milliseconds.
///
/// `posted_time_ms` is captured with this at comment creation.
pub fn now_ms() -> Millis {
    chrono::Utc::now().timestamp_millis() as Millis
}
