pub mod arith;
pub mod callable;
pub mod category;
pub mod demos;
pub mod kleisli;
pub mod memoizer;
pub mod timing;

pub use callable::Callable;
pub use memoizer::{memoize, Memoizer, TryMemoizer};
pub use timing::{time_it, TimeIt, TimeUnit};
