/*!
Macro helpers for the scanner.

Most of these macros perform checked versions of unsafe operations in tests
or when the `checked` cfg is enabled just to try catch any UB early.
Every unchecked access is preceded by a bounds check in the caller, so the
checked variants should never panic.
*/

macro_rules! get_unchecked {
    ($slice:expr, $index:expr) => {{
        #[cfg(any(all(test, debug), checked))]
        {
            ($slice)
                .get($index)
                .expect("attempt to index out of bounds")
        }

        #[cfg(not(any(all(test, debug), checked)))]
        {
            // SAFETY: the index must always be in bounds
            #[allow(unused_unsafe)]
            unsafe {
                ($slice).get_unchecked($index)
            }
        }
    }};
}

macro_rules! str_get_unchecked {
    ($str:expr, $range:expr) => {{
        #[cfg(any(all(test, debug), checked))]
        {
            ($str)
                .get($range)
                .expect("attempt to slice out of bounds or off a char boundary")
        }

        #[cfg(not(any(all(test, debug), checked)))]
        {
            // SAFETY: the range must be in bounds and fall on char boundaries
            // callers only split on ASCII bytes, which are always boundaries
            #[allow(unused_unsafe)]
            unsafe {
                ($str).get_unchecked($range)
            }
        }
    }};
}

macro_rules! test_assert {
    ($($tokens:tt)*) => {{
        #[cfg(test)]
        {
            debug_assert!($($tokens)*);
        }
    }};
}
