/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Fire intensity reading on a 1-10 scale.
pub type Intensity = u8;
