// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literal, const or variable
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! game {
    // GameRow shorthand: game!(opponent_pts, team_pts, "Tue, Oct 19")
    ($x:expr, $y:expr, $date:expr $(,)?) => {
        $crate::compare::GameRow {
            x: $x,
            y: $y,
            date: ::std::string::String::from($date),
        }
    };
}
