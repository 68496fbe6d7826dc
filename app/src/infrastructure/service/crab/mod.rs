mod config_file;
pub mod crab_client;
pub mod models;

pub use self::crab_client::CrabClient;
