//! Partial functions returning `Option`, and their composition in the
//! Kleisli category of `Option`.

/// Square root, absent for negative input (and NaN).
pub fn safe_root(x: f64) -> Option<f64> {
    if x >= 0.0 {
        Some(x.sqrt())
    } else {
        None
    }
}

/// Reciprocal, absent for zero.
pub fn safe_reciprocal(x: f64) -> Option<f64> {
    if x != 0.0 {
        Some(1.0 / x)
    } else {
        None
    }
}

/// Identity arrow of the Kleisli category.
pub fn unit<A>(a: A) -> Option<A> {
    Some(a)
}

/// Feeds a present value to `f`; an absent value short-circuits and `f`
/// is never called.
pub fn bind<A, B, F>(m: Option<A>, f: F) -> Option<B>
where
    F: FnOnce(A) -> Option<B>,
{
    match m {
        Some(a) => f(a),
        None => None,
    }
}

/// Runs `f`, then `g` on its result.
pub fn kleisli_compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> Option<C>
where
    F: Fn(A) -> Option<B>,
    G: Fn(B) -> Option<C>,
{
    move |a| bind(f(a), &g)
}

/// `sqrt(1 / x)`, absent for zero and negative input.
pub fn safe_root_reciprocal(x: f64) -> Option<f64> {
    kleisli_compose(safe_reciprocal, safe_root)(x)
}
