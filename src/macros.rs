/// Declares a `static` [`StringMap`](crate::StringMap) built on first use.
///
/// The map is constructed exactly once, by whichever thread touches it first,
/// and is immutable afterwards. An invalid pattern set (empty or duplicate
/// pattern) panics on that first access with the construction error.
///
/// ```
/// use lexime_switch::lazy_string_map;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Method { Get, Put, Delete, Unknown }
///
/// lazy_string_map! {
///     static METHODS: Method = {
///         "GET" => Method::Get,
///         "PUT" => Method::Put,
///         "DELETE" => Method::Delete,
///     } else Method::Unknown;
/// }
///
/// assert_eq!(METHODS.get("PUT"), Method::Put);
/// assert_eq!(METHODS.get("PATCH"), Method::Unknown);
/// ```
#[macro_export]
macro_rules! lazy_string_map {
    (
        $(#[$attr:meta])*
        $vis:vis static $name:ident : $ty:ty = {
            $($pattern:expr => $value:expr),+ $(,)?
        } else $default:expr;
    ) => {
        $(#[$attr])*
        $vis static $name: $crate::__private::Lazy<$crate::StringMap<$ty>> =
            $crate::__private::Lazy::new(|| {
                let patterns: &[&[u8]] = &[$($crate::__private::as_bytes($pattern)),+];
                let values: ::std::vec::Vec<$ty> = ::std::vec![$($value),+];
                match $crate::StringMap::new(patterns, values, $default) {
                    Ok(map) => map,
                    Err(err) => panic!(
                        "invalid string map `{}`: {}",
                        ::std::stringify!($name),
                        err
                    ),
                }
            });
    };
}

#[cfg(test)]
mod tests {
    use crate::Strategy;

    lazy_string_map! {
        static KEYWORDS: u8 = {
            "fn" => 1,
            "let" => 2,
            b"match" => 3,
            "loop" => 4,
            "while" => 5,
        } else 0;
    }

    lazy_string_map! {
        /// Duplicate on purpose.
        static BROKEN: u8 = { "a" => 1, "a" => 2 } else 0;
    }

    #[test]
    fn lazy_map_matches() {
        assert_eq!(KEYWORDS.get("fn"), 1);
        assert_eq!(KEYWORDS.get("match"), 3);
        assert_eq!(KEYWORDS.get("while"), 5);
        assert_eq!(KEYWORDS.get("for"), 0);
        assert_eq!(KEYWORDS.strategy(), Strategy::TrieWalk);
    }

    #[test]
    #[should_panic(expected = "invalid string map `BROKEN`: pattern #1 duplicates pattern #0")]
    fn lazy_map_rejects_duplicates() {
        let _ = BROKEN.get("a");
    }
}
