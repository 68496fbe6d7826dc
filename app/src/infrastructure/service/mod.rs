pub mod console_reporter;
pub mod crab;
