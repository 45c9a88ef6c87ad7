use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use dosecal_domain::SCHEDULING_TZ;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;

    /// The current instant in the scheduling timezone
    fn now(&self) -> DateTime<Tz> {
        SCHEDULING_TZ
            .timestamp_millis_opt(self.get_timestamp_millis())
            .single()
            .expect("A unix timestamp maps to exactly one instant")
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// System frozen at a given timestamp, used in tests
pub struct FixedSys(pub i64);
impl ISys for FixedSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.0
    }
}
