pub mod sdk;

pub use sdk::config::ConversionConfig;
pub use sdk::convert::{convert_file, convert_str, ConversionReport};
pub use sdk::error::ConversionError;
pub use sdk::hierarchy::{aggregate, Canton, HierarchyStats, Province};
pub use sdk::records::{parse_records, FlatRecord};
pub use sdk::text::{capitalize_word, to_proper_case};
