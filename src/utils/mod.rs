//! Utility modules: build info, scope guards, logging, file persistence.

pub mod build_info;
pub mod guard;
pub mod logging;
pub mod persistence;
