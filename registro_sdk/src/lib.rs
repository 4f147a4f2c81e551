pub mod client;
pub mod controller;
pub mod sync;
pub mod view;
pub mod render;
pub mod types;
pub mod error;

pub use client::LedgerClient;
pub use controller::{Controller, ResyncOutcome, Submission};
pub use sync::Synchronizer;
pub use view::{ViewBlock, ViewModel};
pub use render::{render, BlockUnit, Field, Screen, Surface};
pub use types::{BlockAck, BlockForm, BlockRecord, NewBlock, GENESIS_NAME};
pub use error::{ClientError, Result};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::LedgerClient;
    pub use crate::controller::{Controller, ResyncOutcome, Submission};
    pub use crate::sync::Synchronizer;
    pub use crate::view::{ViewBlock, ViewModel};
    pub use crate::render::{render, Screen, Surface};
    pub use crate::types::*;
    pub use crate::error::{ClientError, Result};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
