pub mod gcd;

pub use gcd::{gcd, gcd_all, GcdError};
