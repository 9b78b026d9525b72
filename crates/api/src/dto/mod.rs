pub mod record;

pub use record::{RecordDto, StoreSummaryDto, ZoneDto};
