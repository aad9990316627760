pub mod python;

pub use etascat_core::catalog::{generate_catalog, simulate_catalog, Catalog};
pub use etascat_core::errors::{EtasError, EtasResult};
pub use etascat_core::parameters::ProcessParameters;
pub use etascat_core::scheduler::{CatalogEvent, EventScheduler};
