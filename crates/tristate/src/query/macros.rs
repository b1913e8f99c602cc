// Query-expression syntax for Maybe and Either
// Desugars `from` / `where` / `let` / `select` clauses into nested `bind` calls

/// Compose `Maybe` values with query syntax.
///
/// ```
/// use tristate::{maybe, Maybe};
///
/// let area = maybe! {
///     from width in Maybe::some(3);
///     from height in Maybe::some(4);
///     where width > 0 && height > 0;
///     select width * height
/// };
/// assert_eq!(area, Maybe::Some(12));
/// ```
///
/// Each `from` binds the payload of a `Maybe` expression and short-circuits
/// to `None` when it is empty. A failing `where` yields `None`. `select`
/// takes a bare value, so a comprehension can never produce a `Some`
/// holding nothing.
#[macro_export]
macro_rules! maybe {
    ($($query:tt)+) => {
        $crate::__query!(maybe; $($query)+)
    };
}

/// Compose `Either` values with query syntax over the right arm.
///
/// ```
/// use tristate::{either, Either};
///
/// let parsed: Either<String, i32> = Either::Right(20);
/// let total = either! {
///     from base in parsed;
///     from bonus in Either::<String, i32>::Right(2);
///     select base + bonus
/// };
/// assert_eq!(total, Either::Right(22));
/// ```
///
/// A `Left` or `Neither` from any `from` clause is returned unchanged; a
/// failing `where` yields `Neither`.
#[macro_export]
macro_rules! either {
    ($($query:tt)+) => {
        $crate::__query!(either; $($query)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __query {
    (maybe; select $result:expr) => {
        $crate::Maybe::Some($result)
    };
    (either; select $result:expr) => {
        $crate::Either::Right($result)
    };
    ($kind:ident; from $pat:pat_param in $source:expr; $($rest:tt)+) => {
        ($source).bind(move |$pat| $crate::__query!($kind; $($rest)+))
    };
    ($kind:ident; where $cond:expr; $($rest:tt)+) => {
        if $cond {
            $crate::__query!($kind; $($rest)+)
        } else {
            ::core::default::Default::default()
        }
    };
    ($kind:ident; let $pat:pat_param = $value:expr; $($rest:tt)+) => {{
        let $pat = $value;
        $crate::__query!($kind; $($rest)+)
    }};
}
