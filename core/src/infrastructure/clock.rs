use crate::domain::common::{generate_timestamp, ports::Clock};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        generate_timestamp()
    }
}
