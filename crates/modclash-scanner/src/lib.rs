//! modclash scanner - Civilization V mod script collision detection
//!
//! This crate scans a mods directory read-only, attributes every `.lua`
//! script to the mod that ships it, and reports script names that more
//! than one mod provides.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::unnecessary_debug_formatting,
    clippy::needless_pass_by_value
)]

pub mod baseline;
pub mod collision;
pub mod config;
pub mod dedup;
pub mod enumerate;
pub mod error;
pub mod inventory;
pub mod output;
pub mod scan;
pub mod types;

pub use baseline::BaselineClassifier;
pub use collision::{ConflictClassifier, ConflictGroup, ConflictReport, Severity, Thresholds};
pub use config::{ScanConfig, DEFAULT_BASELINE};
pub use dedup::ScriptIndex;
pub use error::{ScanError, ScanResult};
pub use inventory::Inventory;
pub use scan::Scanner;
pub use types::{Package, ScriptReference};
