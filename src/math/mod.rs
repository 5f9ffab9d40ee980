pub mod chebyshev;
pub mod hermite;
