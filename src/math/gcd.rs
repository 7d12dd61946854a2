use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GcdError {
    #[error("Cannot take the gcd of an empty set of integers")]
    EmptyInput,
}

/// Greatest common divisor of two integers by Euclid's method.
///
/// Signs are ignored. `gcd(0, 0)` is `0` rather than the mathematically
/// undefined value, and `gcd(x, 0)` is `|x|`. The result is unsigned so that
/// `|i64::MIN|` is representable.
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_u64(a.unsigned_abs(), b.unsigned_abs())
}

/// Greatest common divisor of every integer in `values`, folded pairwise.
pub fn gcd_all<I>(values: I) -> Result<u64, GcdError>
where
    I: IntoIterator<Item = i64>,
{
    let mut iter = values.into_iter();
    let first = iter.next().ok_or(GcdError::EmptyInput)?;

    let mut acc = first.unsigned_abs();
    for value in iter {
        // Once the running gcd hits 1 nothing can lower it.
        if acc == 1 {
            break;
        }
        acc = gcd_u64(acc, value.unsigned_abs());
    }

    Ok(acc)
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}
