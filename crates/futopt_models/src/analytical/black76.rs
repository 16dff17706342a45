//! Black-76 pricing model for European options on futures.
//!
//! This module provides the Black-Scholes-Merton model in its futures form
//! (cost of carry = 0) for pricing European call and put options, with
//! analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = e^(-rT)·(F·N(d₁) - K·N(d₂))
//! **Put Price**: P = e^(-rT)·(K·N(-d₂) - F·N(-d₁))
//!
//! Where:
//! - d₁ = (ln(F/K) + σ²T/2) / (σ√T)
//! - d₂ = (ln(F/K) - σ²T/2) / (σ√T)
//!
//! ## Degenerate Inputs
//!
//! Nothing here validates its inputs. A zero volatility or expiry divides by
//! zero and a non-positive future or strike takes the log of a non-positive
//! number, so those inputs produce infinities or NaN rather than an error:
//!
//! ```
//! use futopt_models::analytical::black76::call_price;
//!
//! assert!(call_price(100.0_f64, 100.0, 0.0, 1.0, 0.0, 2).is_nan());
//! ```

use futopt_core::math::distributions::{normal_cdf, normal_density};
use num_traits::Float;

use crate::instruments::OptionType;

/// Default `decimals` argument of the pricing functions.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Default day count used to express theta per day.
pub const DEFAULT_DAYS_PER_YEAR: u32 = 365;

/// Rounds a price with the `decimals` convention of the pricing functions.
///
/// Computes `round(value · 10·decimals) / (10·decimals)`. The scale is
/// `10·decimals`, not `10^decimals`: with the default of 2 prices land on a
/// 0.05 grid, `decimals = 1` is the only value that agrees with ordinary
/// one-decimal rounding, and `decimals = 0` yields NaN (0 / 0). Published
/// prices depend on this exact rule, so it is kept as is.
///
/// # Examples
/// ```
/// use futopt_models::analytical::black76::round_price;
///
/// assert_eq!(round_price(1.2345_f64, 1), 1.2);
/// assert_eq!(round_price(1.2345_f64, 2), 1.25);
/// assert!(round_price(1.2345_f64, 0).is_nan());
/// ```
#[inline]
pub fn round_price<T: Float>(value: T, decimals: u32) -> T {
    let scale = T::from(decimals).unwrap() * T::from(10.0).unwrap();
    (value * scale).round() / scale
}

/// Option sensitivities for one option type.
///
/// Vega is per 100 volatility points (see [`Black76::vega`]) and theta is per
/// day (see [`Black76::theta`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T> {
    /// ∂V/∂F
    pub delta: T,
    /// ∂²V/∂F²
    pub gamma: T,
    /// ∂V/∂σ / 100
    pub vega: T,
    /// ∂V/∂t per day
    pub theta: T,
}

/// Black-76 model for a single European option on a future.
///
/// Holds the five market inputs and evaluates prices and greeks from them.
/// Construction does not validate; see the module documentation for how
/// degenerate inputs behave.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use futopt_models::analytical::Black76;
///
/// let model = Black76::new(300.0_f64, 350.0, 0.2, 0.55, 0.05);
/// let call = model.call_value();
/// let put = model.put_value();
///
/// // Put-call parity on futures: C - P = e^(-rT)·(F - K)
/// let parity = call - put - model.discount() * (300.0 - 350.0);
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Black76<T: Float> {
    future: T,
    strike: T,
    volatility: T,
    expiry: T,
    rate: T,
}

impl<T: Float> Black76<T> {
    /// Creates a model from raw inputs.
    ///
    /// # Arguments
    /// * `future` - Underlying future price (F)
    /// * `strike` - Strike price (K)
    /// * `volatility` - Annualised volatility (σ)
    /// * `expiry` - Time to expiry as a year fraction (T)
    /// * `rate` - Annual risk-free rate (r)
    pub fn new(future: T, strike: T, volatility: T, expiry: T, rate: T) -> Self {
        Self {
            future,
            strike,
            volatility,
            expiry,
            rate,
        }
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: T) -> Self {
        Self { volatility, ..self }
    }

    /// Returns the future price.
    #[inline]
    pub fn future(&self) -> T {
        self.future
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the time to expiry.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount(&self) -> T {
        (-self.rate * self.expiry).exp()
    }

    /// d₁ = (ln(F/K) + σ²T/2) / (σ√T)
    #[inline]
    pub fn d1(&self) -> T {
        let two = T::from(2.0).unwrap();
        let log_moneyness = (self.future / self.strike).ln();
        let half_variance = self.volatility * self.volatility * self.expiry / two;

        (log_moneyness + half_variance) / (self.volatility * self.expiry.sqrt())
    }

    /// d₂ = (ln(F/K) - σ²T/2) / (σ√T)
    ///
    /// Evaluated directly rather than as `d1 - σ√T`; the two differ in the
    /// last bits.
    #[inline]
    pub fn d2(&self) -> T {
        let two = T::from(2.0).unwrap();
        let log_moneyness = (self.future / self.strike).ln();
        let half_variance = self.volatility * self.volatility * self.expiry / two;

        (log_moneyness - half_variance) / (self.volatility * self.expiry.sqrt())
    }

    /// Unrounded call value e^(-rT)·(F·N(d₁) - K·N(d₂)).
    #[inline]
    pub fn call_value(&self) -> T {
        self.discount()
            * (self.future * normal_cdf(self.d1()) - self.strike * normal_cdf(self.d2()))
    }

    /// Unrounded put value e^(-rT)·(K·N(-d₂) - F·N(-d₁)).
    #[inline]
    pub fn put_value(&self) -> T {
        self.discount()
            * (self.strike * normal_cdf(-self.d2()) - self.future * normal_cdf(-self.d1()))
    }

    /// Unrounded value for the given option type.
    #[inline]
    pub fn value(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.call_value(),
            OptionType::Put => self.put_value(),
        }
    }

    /// Call price rounded with [`round_price`].
    ///
    /// # Examples
    /// ```
    /// use futopt_models::analytical::{Black76, DEFAULT_DECIMALS};
    ///
    /// let model = Black76::new(300.0_f64, 350.0, 0.2, 0.55, 0.05);
    /// assert_eq!(model.price_call(DEFAULT_DECIMALS), 3.6);
    /// ```
    #[inline]
    pub fn price_call(&self, decimals: u32) -> T {
        round_price(self.call_value(), decimals)
    }

    /// Put price rounded with [`round_price`].
    #[inline]
    pub fn price_put(&self, decimals: u32) -> T {
        round_price(self.put_value(), decimals)
    }

    /// Rounded price for the given option type.
    #[inline]
    pub fn price(&self, option_type: OptionType, decimals: u32) -> T {
        round_price(self.value(option_type), decimals)
    }

    /// Call delta e^(-rT)·N(d₁).
    #[inline]
    pub fn delta_call(&self) -> T {
        self.discount() * normal_cdf(self.d1())
    }

    /// Put delta -e^(-rT)·N(-d₁).
    #[inline]
    pub fn delta_put(&self) -> T {
        -self.discount() * normal_cdf(-self.d1())
    }

    /// Delta for the given option type.
    #[inline]
    pub fn delta(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.delta_call(),
            OptionType::Put => self.delta_put(),
        }
    }

    /// Gamma e^(-rT)·φ(d₁) / (σ·F·√T), the same for calls and puts.
    #[inline]
    pub fn gamma(&self) -> T {
        self.discount() * normal_density(self.d1())
            / (self.volatility * self.future * self.expiry.sqrt())
    }

    /// Vega F·e^(-rT)·φ(d₁)·√T / 100, the same for calls and puts.
    ///
    /// The division by 100 expresses vega per volatility point: the price
    /// change for σ moving by 0.01.
    #[inline]
    pub fn vega(&self) -> T {
        let hundred = T::from(100.0).unwrap();
        self.future * self.discount() * normal_density(self.d1()) * self.expiry.sqrt() / hundred
    }

    /// Call theta per day.
    ///
    /// (-F·e^(-rT)·φ(d₁)·σ/(2√T) + r·F·e^(-rT)·N(d₁) - r·K·e^(-rT)·N(d₂)) / days
    #[inline]
    pub fn theta_call(&self, days_per_year: u32) -> T {
        let days = T::from(days_per_year).unwrap();
        let discount = self.discount();
        let d1 = self.d1();
        let d2 = self.d2();

        (self.time_decay(discount, d1) + self.rate * self.future * discount * normal_cdf(d1)
            - self.rate * self.strike * discount * normal_cdf(d2))
            / days
    }

    /// Put theta per day.
    ///
    /// (-F·e^(-rT)·φ(d₁)·σ/(2√T) - r·F·e^(-rT)·N(-d₁) + r·K·e^(-rT)·N(-d₂)) / days
    #[inline]
    pub fn theta_put(&self, days_per_year: u32) -> T {
        let days = T::from(days_per_year).unwrap();
        let discount = self.discount();
        let d1 = self.d1();
        let d2 = self.d2();

        (self.time_decay(discount, d1) - self.rate * self.future * discount * normal_cdf(-d1)
            + self.rate * self.strike * discount * normal_cdf(-d2))
            / days
    }

    /// Theta per day for the given option type.
    #[inline]
    pub fn theta(&self, option_type: OptionType, days_per_year: u32) -> T {
        match option_type {
            OptionType::Call => self.theta_call(days_per_year),
            OptionType::Put => self.theta_put(days_per_year),
        }
    }

    /// All greeks for one option type.
    ///
    /// # Examples
    /// ```
    /// use futopt_models::analytical::{Black76, DEFAULT_DAYS_PER_YEAR};
    /// use futopt_models::instruments::OptionType;
    ///
    /// let model = Black76::new(100.0_f64, 100.0, 0.2, 1.0, 0.05);
    /// let call = model.greeks(OptionType::Call, DEFAULT_DAYS_PER_YEAR);
    /// let put = model.greeks(OptionType::Put, DEFAULT_DAYS_PER_YEAR);
    ///
    /// assert_eq!(call.gamma, put.gamma);
    /// assert_eq!(call.vega, put.vega);
    /// assert!(call.delta > 0.0 && put.delta < 0.0);
    /// ```
    pub fn greeks(&self, option_type: OptionType, days_per_year: u32) -> Greeks<T> {
        Greeks {
            delta: self.delta(option_type),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(option_type, days_per_year),
        }
    }

    /// Common theta term -F·e^(-rT)·φ(d₁)·σ/(2√T).
    #[inline]
    fn time_decay(&self, discount: T, d1: T) -> T {
        let two = T::from(2.0).unwrap();
        -self.future * discount * normal_density(d1) * self.volatility / (two * self.expiry.sqrt())
    }
}

// ==========================================================
// Flat-argument interface
// ==========================================================

/// Rounded call price, see [`Black76::price_call`].
///
/// # Examples
/// ```
/// use futopt_models::analytical::black76::{call_price, put_price};
///
/// let call = call_price(300.0_f64, 350.0, 0.2, 0.55, 0.05, 2);
/// let put = put_price(300.0_f64, 350.0, 0.2, 0.55, 0.05, 2);
/// assert_eq!((call, put), (3.6, 52.25));
/// ```
#[inline]
pub fn call_price<T: Float>(
    future: T,
    strike: T,
    volatility: T,
    expiry: T,
    rate: T,
    decimals: u32,
) -> T {
    Black76::new(future, strike, volatility, expiry, rate).price_call(decimals)
}

/// Rounded put price, see [`Black76::price_put`].
#[inline]
pub fn put_price<T: Float>(
    future: T,
    strike: T,
    volatility: T,
    expiry: T,
    rate: T,
    decimals: u32,
) -> T {
    Black76::new(future, strike, volatility, expiry, rate).price_put(decimals)
}

/// Call delta, see [`Black76::delta_call`].
#[inline]
pub fn delta_call<T: Float>(future: T, strike: T, volatility: T, expiry: T, rate: T) -> T {
    Black76::new(future, strike, volatility, expiry, rate).delta_call()
}

/// Put delta, see [`Black76::delta_put`].
#[inline]
pub fn delta_put<T: Float>(future: T, strike: T, volatility: T, expiry: T, rate: T) -> T {
    Black76::new(future, strike, volatility, expiry, rate).delta_put()
}

/// Gamma, see [`Black76::gamma`].
#[inline]
pub fn gamma<T: Float>(future: T, strike: T, volatility: T, expiry: T, rate: T) -> T {
    Black76::new(future, strike, volatility, expiry, rate).gamma()
}

/// Vega per volatility point, see [`Black76::vega`].
#[inline]
pub fn vega<T: Float>(future: T, strike: T, volatility: T, expiry: T, rate: T) -> T {
    Black76::new(future, strike, volatility, expiry, rate).vega()
}

/// Call theta per day, see [`Black76::theta_call`].
#[inline]
pub fn theta_call<T: Float>(
    future: T,
    strike: T,
    volatility: T,
    expiry: T,
    rate: T,
    days_per_year: u32,
) -> T {
    Black76::new(future, strike, volatility, expiry, rate).theta_call(days_per_year)
}

/// Put theta per day, see [`Black76::theta_put`].
#[inline]
pub fn theta_put<T: Float>(
    future: T,
    strike: T,
    volatility: T,
    expiry: T,
    rate: T,
    days_per_year: u32,
) -> T {
    Black76::new(future, strike, volatility, expiry, rate).theta_put(days_per_year)
}
