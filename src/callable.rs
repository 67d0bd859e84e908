//! A single calling convention shared by plain closures and the wrappers
//! in this crate, so that memoizers and timers can be stacked in any order.

/// Something that can be invoked with `Args`.
///
/// Functions of several arguments take them as one tuple.
pub trait Callable<Args> {
    type Output;

    fn invoke(&mut self, args: Args) -> Self::Output;
}

impl<Args, R, F> Callable<Args> for F
where
    F: FnMut(Args) -> R,
{
    type Output = R;

    fn invoke(&mut self, args: Args) -> R {
        self(args)
    }
}
