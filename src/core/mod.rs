pub mod calculator;
pub mod punch;
pub mod status;
pub mod summary;
pub mod timesheet;
