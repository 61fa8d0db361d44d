pub mod hours;
pub mod sessions;
