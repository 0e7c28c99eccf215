pub use colored;
pub use colored::control::ShouldColorize;

/// an ergonomic macro for colored strings in a terminal environment
///
/// ```ignore
/// let version = "0.1.0";
/// watercolor!("hot-props v{version}", @BrightGreen);
/// watercolor!("hot-props v{}", version, @BrightGreen);
/// ```
macro_rules! watercolor {
    ($fmt:expr, $($args:expr,)* @$color:ident$(,)?) => {{
        use $crate::watercolor::colored::Colorize;
        format!($fmt, $($args,)*).color($crate::watercolor::colored::Color::$color)
    }};
}

/// a macro calling [`watercolor`] and then [`println`]
macro_rules! output {
    ($($args:tt)*) => {{
       let colored_string = $crate::watercolor::watercolor!($($args)*);
       std::println!("{}", colored_string);
    }};
}

/// a macro calling [`watercolor`] and then [`eprintln`]
macro_rules! output_error {
    ($($args:tt)*) => {{
       let colored_string = $crate::watercolor::watercolor!($($args)*);
       std::eprintln!("{}", colored_string);
    }};
}

pub(crate) use output;
pub(crate) use output_error;
pub(crate) use watercolor;
