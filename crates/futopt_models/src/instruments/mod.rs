//! Instrument descriptors.
//!
//! - [`OptionType`]: call or put, parsed case-insensitively from text

mod option_type;

pub use option_type::OptionType;
