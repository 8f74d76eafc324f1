// src/compare/matcher.rs

/// True iff some row of `table` equals `row` field for field.
pub fn row_in_table<T: PartialEq>(row: &T, table: &[T]) -> bool {
    table.iter().any(|r| r == row)
}

/// `Some(original)` when `probe` is a row of `table`, `None` otherwise.
/// Callers drop the `None`s.
pub fn keep_row_if_in_table<O, P: PartialEq>(table: &[P], original: O, probe: &P) -> Option<O> {
    row_in_table(probe, table).then_some(original)
}
