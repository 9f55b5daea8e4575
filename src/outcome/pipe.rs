//! Point-free forms of the core combinators.
//!
//! Each function here is the curried form of the corresponding
//! [`Outcome`] method: it takes the operation's function argument up
//! front and returns a reusable transformer closure. The transformer is
//! `Fn`, so one may be kept and applied to any number of outcomes. Every
//! curried form delegates to the method, so the two calling conventions
//! cannot drift apart.
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::outcome::pipe;
//!
//! let double = pipe::map(|n: i32| n * 2);
//! assert_eq!(double(Outcome::<i32, String>::Ok(21)), Outcome::Ok(42));
//! assert_eq!(double(Outcome::<i32, String>::Ok(4)), Outcome::Ok(8));
//! ```

use super::core::Outcome;

/// Curried form of [`Outcome::map`].
///
/// # Examples
///
/// ```rust
/// use outcome::Outcome;
/// use outcome::outcome::pipe;
///
/// let lengths = pipe::map(|s: String| s.len());
/// let outcome: Outcome<String, i32> = Outcome::Ok("hello".to_string());
/// assert_eq!(lengths(outcome), Outcome::Ok(5));
/// ```
pub fn map<T, U, E>(function: impl Fn(T) -> U) -> impl Fn(Outcome<T, E>) -> Outcome<U, E> {
    move |outcome| outcome.map(&function)
}

/// Curried form of [`Outcome::map_err`].
pub fn map_err<T, E, F2>(
    function: impl Fn(E) -> F2,
) -> impl Fn(Outcome<T, E>) -> Outcome<T, F2> {
    move |outcome| outcome.map_err(&function)
}

/// Curried form of [`Outcome::and_then`].
///
/// # Examples
///
/// ```rust
/// use outcome::Outcome;
/// use outcome::outcome::pipe;
///
/// let require_even = pipe::and_then(|n: i32| {
///     if n % 2 == 0 {
///         Outcome::Ok(n)
///     } else {
///         Outcome::Err("odd".to_string())
///     }
/// });
/// assert_eq!(require_even(Outcome::Ok(4)), Outcome::Ok(4));
/// ```
pub fn and_then<T, U, E>(
    function: impl Fn(T) -> Outcome<U, E>,
) -> impl Fn(Outcome<T, E>) -> Outcome<U, E> {
    move |outcome| outcome.and_then(&function)
}

/// Curried form of [`Outcome::or_else`].
pub fn or_else<T, E, F2>(
    function: impl Fn(E) -> Outcome<T, F2>,
) -> impl Fn(Outcome<T, E>) -> Outcome<T, F2> {
    move |outcome| outcome.or_else(&function)
}

/// Curried form of [`Outcome::tap`].
pub fn tap<T, E>(effect: impl Fn(&T)) -> impl Fn(Outcome<T, E>) -> Outcome<T, E> {
    move |outcome| outcome.tap(&effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curried_and_direct_forms_agree() {
        let direct: Outcome<i32, String> = Outcome::Ok(21).map(|n| n * 2);
        let curried = map(|n: i32| n * 2)(Outcome::<i32, String>::Ok(21));
        assert_eq!(direct, curried);
    }

    #[test]
    fn a_transformer_is_reusable() {
        let double = map(|n: i32| n * 2);
        assert_eq!(double(Outcome::<i32, String>::Ok(21)), Outcome::Ok(42));
        assert_eq!(double(Outcome::<i32, String>::Ok(4)), Outcome::Ok(8));
        assert_eq!(
            double(Outcome::<i32, String>::Err("gone".to_string())),
            Outcome::Err("gone".to_string())
        );
    }

    #[test]
    fn curried_forms_compose() {
        let parse = and_then(|s: &str| match s.parse::<i32>() {
            Ok(n) => Outcome::Ok(n),
            Err(_) => Outcome::Err("not a number".to_string()),
        });
        let double = map(|n: i32| n * 2);

        let outcome: Outcome<&str, String> = Outcome::Ok("21");
        assert_eq!(double(parse(outcome)), Outcome::Ok(42));
    }
}
