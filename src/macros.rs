#[macro_export]
macro_rules! plist {
    // Handle true
    (true) => {
        $crate::Value::Boolean(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Boolean(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::plist!($elem)),*])
    };

    // Handle empty dict
    ({}) => {
        $crate::Value::Dict($crate::Dict::new())
    };

    // Handle non-empty dict
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut dict = $crate::Dict::new();
        $(
            dict.insert($key.to_string(), $crate::plist!($value));
        )*
        $crate::Value::Dict(dict)
    }};

    // Fallback for any expression with a Value conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
