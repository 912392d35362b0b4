pub mod bigint;
pub mod error;
pub mod karatsuba;
pub mod modular;
pub mod natural;
pub mod primality;
pub mod rational;
pub mod toom;

mod digits;

pub use bigint::BigInt;
pub use error::Error;
pub use natural::BigNat;
pub use rational::{BigRational, Ratio};
