pub mod health;
pub mod records;
pub mod status_page;

pub use health::health_check;
pub use records::{get_records, get_zone, get_zones};
pub use status_page::status_page;
