use thiserror::Error;

pub const MAX_WAIT_MINUTES: u32 = 24 * 60;
pub const MAX_COVER_AMOUNT: u32 = 10_000;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidValue {
    #[error("The wait time must be between 0 and {MAX_WAIT_MINUTES} minutes")]
    WaitMinutes,
    #[error("The cover charge must be between 0 and {MAX_COVER_AMOUNT}")]
    CoverAmount,
    #[error("The report count is out of range")]
    ReportCount,
}

fn in_range(value: i64, max: u32) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| *v <= max)
}

pub fn wait_minutes(value: i64) -> Result<u32, InvalidValue> {
    in_range(value, MAX_WAIT_MINUTES).ok_or(InvalidValue::WaitMinutes)
}

pub fn cover_amount(value: i64) -> Result<u32, InvalidValue> {
    in_range(value, MAX_COVER_AMOUNT).ok_or(InvalidValue::CoverAmount)
}

pub fn report_count(value: i64) -> Result<u32, InvalidValue> {
    u32::try_from(value).map_err(|_| InvalidValue::ReportCount)
}
