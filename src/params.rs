use crate::{Error, Result};

/// The degree of a Chebyshev approximation. Must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApproximationDegree(pub u32);

impl ApproximationDegree {
    /// The number of coefficients a Chebyshev approximation of this degree
    /// produces. The constant term is included, so this is `degree + 1`.
    pub fn coefficient_count(&self) -> usize {
        self.0 as usize + 1
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.0 == 0 {
            return Err(Error::InvalidArgument(
                "the degree of approximation cannot be zero",
            ));
        }

        Ok(())
    }
}

/// The size `p` of the cyclic integer domain a Hermite interpolation covers,
/// i.e. the number of distinct values a bootstrapped slot can represent. Must
/// be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DomainSize(pub u32);

impl DomainSize {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.0 == 0 {
            return Err(Error::InvalidArgument(
                "the number of interpolation points cannot be zero",
            ));
        }

        Ok(())
    }
}

/// The correction order of a Hermite-style trigonometric interpolation.
///
/// Each order past the first appends frequency-shifted correction sequences
/// to the baseline interpolant, at the cost of a longer coefficient sequence
/// for the downstream evaluator to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HermiteOrder {
    /// The baseline trigonometric interpolant.
    First,
    /// Adds half-range corrections at frequencies `k`, `p + k` and `p - k`
    /// for `k` up to `p / 2`.
    Second,
    /// Adds full-range corrections at frequencies `k`, `p + k` and `p - k`
    /// for `k` up to `p - 1`.
    Third,
}

impl HermiteOrder {
    /// The number of coefficients an interpolation of this order produces
    /// over a domain of size `p`.
    pub fn coefficient_count(&self, p: DomainSize) -> usize {
        let p = p.0 as usize;

        match self {
            Self::First => p,
            Self::Second => 3 * p / 2,
            Self::Third => 2 * p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_coefficient_count_includes_the_constant_term() {
        assert_eq!(ApproximationDegree(1).coefficient_count(), 2);
        assert_eq!(ApproximationDegree(59).coefficient_count(), 60);
    }

    #[test]
    fn order_coefficient_counts_use_integer_division() {
        let p = DomainSize(5);

        assert_eq!(HermiteOrder::First.coefficient_count(p), 5);
        assert_eq!(HermiteOrder::Second.coefficient_count(p), 7);
        assert_eq!(HermiteOrder::Third.coefficient_count(p), 10);
    }
}
