use crate::core::Table;

/// Columns that show up in most group keys but rarely distinguish series.
pub const NOISY_LEGEND_COLUMNS: [&str; 3] = ["_start", "_stop", "result"];

#[must_use]
pub fn is_noisy_legend_column(name: &str) -> bool {
    NOISY_LEGEND_COLUMNS.contains(&name)
}

/// Drops noisy columns whose values are all equal in `table`.
///
/// `_start` and `_stop` are part of almost every group key yet hold one
/// value per response, so they only clutter the hover legend. A noisy column
/// that varies (several `result` names from a multi-query response) is
/// kept, as is every non-noisy column. Order is preserved. A noisy column
/// missing from the table carries no information and is dropped.
#[must_use]
pub fn filter_noisy_columns<S: AsRef<str>>(columns: &[S], table: &Table) -> Vec<String> {
    let mut kept = Vec::with_capacity(columns.len());
    for column in columns {
        let name: &str = column.as_ref();
        let keep = !is_noisy_legend_column(name)
            || table
                .column_data(name)
                .is_some_and(|data| !data.is_constant());
        if keep {
            kept.push(name.to_owned());
        }
    }
    kept
}
