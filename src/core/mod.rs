//! Core module re-exported from `appcenter-core`.

pub use appcenter_core::core::*;
pub use appcenter_core::*;
