#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Approximation-coefficient generation for functional bootstrapping.
//!
//! Homomorphic evaluation engines can only efficiently apply polynomials (or
//! trigonometric sums) to an encrypted value. This crate performs the
//! cleartext numerical-analysis half of functional bootstrapping: it turns
//! "evaluate `f`" into "evaluate a polynomial or trigonometric sum with these
//! coefficients", which an external depth-minimizing series evaluator then
//! applies to a ciphertext.
//!
//! Two independent, stateless components:
//! * [`math::chebyshev`] samples a function at Chebyshev nodes over an
//!   interval `[a, b]` and returns Chebyshev-basis coefficients.
//! * [`math::hermite`] samples a function at `p` equally spaced integer points
//!   and returns trigonometric-interpolation coefficients at one of three
//!   correction orders.
//!
//! Everything here is a pure function over caller-supplied inputs: no shared
//! state, no caching, and distinct calls may run concurrently without
//! synchronization. Within a call the independent output entries are computed
//! in parallel with rayon.

mod error;
pub use error::*;

mod params;
pub use params::*;

/// Coefficient-generation routines.
pub mod math;

pub use math::chebyshev::{
    chebyshev_coefficients, chebyshev_coefficients_complex, evaluate_chebyshev_series,
};
pub use math::hermite::hermite_interp_coefficients;
