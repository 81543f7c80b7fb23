//! The `compose!` and `pipe!` macros.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`. A single argument is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use funk::compose;
/// use funk::control::Maybe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // add_one(double(5)) = 11
/// assert_eq!(compose!(add_one, double)(5), 11);
///
/// // Map a whole pipeline over a Maybe in one step
/// let describe = compose!(|n: i32| format!("#{n}"), add_one, double);
/// assert_eq!(Maybe::some(3).map(describe), Maybe::some("#7".to_string()));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

/// Applies functions to a value from left to right.
///
/// `pipe!(x, f, g)` is `g(f(x))`.
///
/// # Examples
///
/// ```
/// use funk::pipe;
/// use funk::control::Either;
///
/// let checked = |n: i32| if n > 0 { Either::Right(n) } else { Either::Left("not positive") };
/// let result = pipe!(-3, |n: i32| n * 2, checked);
/// assert_eq!(result, Either::Left("not positive"));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
