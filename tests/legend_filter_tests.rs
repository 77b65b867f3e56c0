use vis_resolver::core::{ColumnData, Table, filter_noisy_columns};

fn strings(values: &[&str]) -> ColumnData {
    ColumnData::String(values.iter().map(|v| (*v).to_owned()).collect())
}

fn table() -> Table {
    Table::builder()
        .column("_start", ColumnData::Time(vec![10.0, 10.0, 10.0]))
        .and_then(|b| b.column("_stop", ColumnData::Time(vec![20.0, 20.0, 20.0])))
        .and_then(|b| b.column("result", strings(&["cpu", "mem", "cpu"])))
        .and_then(|b| b.column("host", strings(&["a", "a", "a"])))
        .and_then(|b| b.column("_value", ColumnData::Number(vec![1.0, 2.0, 3.0])))
        .expect("valid table")
        .build()
}

#[test]
fn constant_noisy_columns_are_removed() {
    let filtered = filter_noisy_columns(&["_start", "a"], &table());
    assert_eq!(filtered, vec!["a".to_owned()]);
}

#[test]
fn varying_noisy_columns_are_kept() {
    let filtered = filter_noisy_columns(&["result", "a"], &table());
    assert_eq!(filtered, vec!["result".to_owned(), "a".to_owned()]);
}

#[test]
fn non_noisy_columns_are_never_removed() {
    // `host` is constant but is not a noisy column.
    let filtered = filter_noisy_columns(&["host", "_stop", "_value", "missing"], &table());
    assert_eq!(
        filtered,
        vec!["host".to_owned(), "_value".to_owned(), "missing".to_owned()]
    );
}

#[test]
fn order_is_preserved() {
    let filtered = filter_noisy_columns(&["_value", "result", "_start", "host"], &table());
    assert_eq!(filtered, vec!["_value", "result", "host"]);
}

#[test]
fn noisy_column_missing_from_table_is_removed() {
    let table = Table::builder()
        .column("_value", ColumnData::Number(vec![1.0]))
        .expect("valid table")
        .build();
    assert!(filter_noisy_columns(&["result"], &table).is_empty());
}
