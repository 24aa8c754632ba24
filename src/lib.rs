pub mod config;
pub mod convert;
pub mod suggest;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use convert::{convert, ConversionContext};
pub use suggest::{suggest, UsageContext};
pub use units::{describe, format, list_units, UnitDescriptor, UnitError, UnitKind};
