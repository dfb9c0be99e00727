pub mod discovery;
pub mod error;
pub mod gate;
pub mod paths;
pub mod select;

pub use discovery::{discover, discover_file, DiscoveryResult};
pub use error::{Result, TestgatesError};
pub use gate::{parse_test_gates, GateRecord};
pub use paths::find_epics_file;
pub use select::next_gate;
