/// Wall-clock source for entry creation stamps and expiry checks, in Unix
/// seconds.
pub trait Clock: Send + Sync {
    fn now_secs(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now_secs(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}
