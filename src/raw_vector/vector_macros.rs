/// Internal helper macro used by `vector!` to count the number of
/// comma-separated expressions at compile time.
///
/// # Notes
/// - This macro is not intended to be used directly.
/// - It performs purely syntactic counting via macro expansion and does not
///   evaluate the expressions.
///
/// # Examples
/// ```
/// use raw_containers::*;
/// const N: usize = __count!(1, 2, 3, 4);
/// assert_eq!(N, 4);
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    () => { 0usize };
    ($head:expr $(, $tail:expr)*) => {
        1usize + $crate::__count!($($tail),*)
    };
}

/// Creates a `Vector` from a list of elements or a repeated value.
///
/// ## Forms
///
/// ### Empty vector
/// ```
/// use raw_containers::*;
/// let v: Vector<String> = vector![];
/// assert_eq!(v.capacity(), 0);
/// ```
///
/// ### Vector from elements
///
/// The block is sized to exactly the number of elements.
///
/// ```
/// use raw_containers::*;
/// let v = vector![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
/// ```
///
/// ### Repeated value
/// ```
/// use raw_containers::*;
/// let v = vector![String::from("a"); 2];
/// assert_eq!(v, &["a", "a"]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };

    ($elem:expr; $len:expr) => {
        $crate::Vector::from_elem($elem, $len)
    };

    ($($elem:expr),+ $(,)?) => {{
        let mut v = $crate::Vector::with_capacity($crate::__count!($($elem),*));
        $(
            v.push($elem);
        )+
        v
    }};
}

#[cfg(test)]
mod tests {
    use crate::Vector;

    #[test]
    fn macro_forms() {
        let empty: Vector<i32> = vector![];
        assert!(empty.is_empty());

        let listed = vector!["1".to_owned(), "2".to_owned(), "3".to_owned(),];
        assert_eq!(listed.capacity(), 3);
        assert!(listed.iter().eq(&["1", "2", "3"]));

        let single = vector![42];
        assert_eq!(single.capacity(), 1);
        assert_eq!(single, &[42]);

        let repeated = vector![7u8; 4];
        assert_eq!(repeated, &[7, 7, 7, 7]);

        let none = vector![0u8; 0];
        assert_eq!(none.capacity(), 0);
    }
}
