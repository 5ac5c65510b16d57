use num_bigint::{BigInt, BigUint};
use num_traits::One;
use pascal_shared_kernel::{DomainError, DomainResult};

/// `n!` for a signed integer.
///
/// # Errors
///
/// Returns [`DomainError::NegativeInput`] when `n < 0`.
pub fn factorial(n: &BigInt) -> DomainResult<BigUint> {
    log::trace!("factorial({n})");
    let Some(n) = n.to_biguint() else {
        return Err(DomainError::NegativeInput { value: n.to_string() });
    };
    Ok(product_up_to(&n))
}

/// `n!` for a value given as text, e.g. straight from user input.
///
/// Surrounding whitespace is ignored and an optional sign is accepted.
///
/// # Errors
///
/// Returns [`DomainError::InvalidInput`] when the text is not a base-10
/// integer, or [`DomainError::NegativeInput`] when it is negative.
pub fn factorial_of(value: &str) -> DomainResult<BigUint> {
    let n: BigInt = value
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidInput { value: value.to_string() })?;
    factorial(&n)
}

/// `n!` for an unsigned machine integer; cannot fail.
pub fn factorial_u64(n: u64) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, i| acc * i)
}

fn product_up_to(n: &BigUint) -> BigUint {
    let mut fact = BigUint::one();
    let mut i = BigUint::one();
    while &i <= n {
        fact *= &i;
        i += 1u32;
    }
    fact
}
