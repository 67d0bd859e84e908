//! Identity and composition of plain functions.

/// Returns its argument unchanged.
pub fn identity<T>(x: T) -> T {
    x
}

/// `compose(f, g)(a) == f(g(a))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |a| f(g(a))
}

/// Composes `f` after `g` and binds the argument now; the result is only
/// computed when the returned thunk is called.
pub fn compose_applied<A, B, C, F, G>(f: F, g: G, args: A) -> impl Fn() -> C
where
    A: Clone,
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move || f(g(args.clone()))
}

pub fn plus_one(x: i64) -> i64 {
    x + 1
}

pub fn multiply_by_two(x: i64) -> i64 {
    x * 2
}
