pub use anyhow::{
    anyhow,
    bail,
    ensure,
    Context,
};
pub use tracing::{
    debug,
    error,
    info,
    instrument,
    warn,
};

pub use crate::categories::*;
pub use crate::errors::*;
pub use crate::schema::{
    EventRecord,
    EVENT_COLUMNS,
    NUMERIC_FEATURES,
};
