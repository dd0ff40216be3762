//! Dependency injection infrastructure for appcenter-fetch
//!
//! This module provides trait-based dependency injection so the version
//! lookup can be exercised without a network.
//!
//! # Example (Production)
//! ```no_run
//! use appcenter_fetch::di::ServiceContainer;
//!
//! # fn example() -> appcenter_fetch::core::AppCenterResult<()> {
//! let container = ServiceContainer::new()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use appcenter_fetch::di::{ServiceContainer, mocks::*};
//! use std::sync::Arc;
//!
//! # fn example() {
//! let config = Arc::new(MockConfigProvider::default());
//! let appcenter = Arc::new(MockAppCenterProvider::new());
//!
//! let container = ServiceContainer::with_providers(config, appcenter);
//! # }
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{AppCenterProvider, ConfigProvider};
