//! # futopt_models (L2: Pricing Kernel)
//!
//! Black-76 pricing for European options on futures.
//!
//! This crate provides:
//! - The call/put discriminator [`instruments::OptionType`]
//! - Rounded premiums and analytical Greeks ([`analytical::Black76`])
//! - Implied volatility recovered from an observed premium
//!   ([`analytical::ImpliedVolSolver`])
//!
//! ## Usage Examples
//!
//! ```rust
//! use futopt_models::prelude::*;
//!
//! let model = Black76::new(300.0_f64, 350.0, 0.2, 0.55, 0.05);
//! assert_eq!(model.price_call(DEFAULT_DECIMALS), 3.6);
//! assert_eq!(model.price_put(DEFAULT_DECIMALS), 52.25);
//!
//! let vol = implied_volatility(OptionType::Call, 3.6, 300.0, 350.0, 0.55, 0.05, 0.02).unwrap();
//! assert_eq!(vol, 0.2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for `OptionType`, `Greeks` and
//!   `ImpliedVolResult`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;

/// Commonly used items in one import.
pub mod prelude {
    pub use crate::analytical::{
        call_price, implied_volatility, implied_volatility_by_name, put_price, Black76, Greeks,
        ImpliedVolSolver, DEFAULT_DAYS_PER_YEAR, DEFAULT_DECIMALS, DEFAULT_IV_TOLERANCE,
    };
    pub use crate::instruments::OptionType;
    pub use futopt_core::types::PricingError;
}
