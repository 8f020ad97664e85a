use chrono::NaiveDateTime;

/// Wall-clock source for the past-date check. Injected rather than read
/// globally so validation stays deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the local system time, matching the merchant-local
/// calendar time the reserved slots are expressed in.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
