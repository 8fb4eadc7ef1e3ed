use agora_core::{ClockError, DateTimeBroker};
use chrono::{DateTime, Utc};

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateTimeBroker;

impl DateTimeBroker for SystemDateTimeBroker {
    fn current_date_time(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(Utc::now())
    }
}
