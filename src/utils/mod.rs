pub mod filename;
pub mod uploads;
