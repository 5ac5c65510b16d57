use num_bigint::{BigInt, BigUint};
use pascal_shared_kernel::DomainResult;

use crate::factorial::factorial;

/// Binomial coefficient `C(n, k) = n! / (k! * (n - k)!)`.
///
/// Computed from three independent factorials with floor division, which is
/// exact whenever `0 <= k <= n`.
///
/// # Errors
///
/// Any argument outside `0 <= k <= n` ends up as a factorial of a negative
/// number and fails with [`pascal_shared_kernel::DomainError::NegativeInput`].
pub fn generate_row(n: impl Into<BigInt>, k: impl Into<BigInt>) -> DomainResult<BigUint> {
    let n = n.into();
    let k = k.into();
    let numerator = factorial(&n)?;
    let denominator = factorial(&k)? * factorial(&(&n - &k))?;
    Ok(numerator / denominator)
}
