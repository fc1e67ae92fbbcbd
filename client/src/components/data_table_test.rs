use super::*;

#[test]
fn page_count_rounds_up_and_is_never_zero() {
    assert_eq!(page_count(0, PAGE_SIZE), 1);
    assert_eq!(page_count(10, PAGE_SIZE), 1);
    assert_eq!(page_count(11, PAGE_SIZE), 2);
    assert_eq!(page_count(25, PAGE_SIZE), 3);
}

#[test]
fn page_range_slices_requested_page() {
    assert_eq!(page_range(25, 1, PAGE_SIZE), 0..10);
    assert_eq!(page_range(25, 2, PAGE_SIZE), 10..20);
    assert_eq!(page_range(25, 3, PAGE_SIZE), 20..25);
}

#[test]
fn page_range_clamps_out_of_bounds_pages() {
    assert_eq!(page_range(25, 0, PAGE_SIZE), 0..10);
    assert_eq!(page_range(25, 9, PAGE_SIZE), 20..25);
    assert_eq!(page_range(0, 1, PAGE_SIZE), 0..0);
}

#[test]
fn column_cell_renders_row() {
    let column: Column<(i64, &str)> = Column { title: "Name", cell: |row| row.1.to_owned() };
    let copy = column;
    assert_eq!((copy.cell)(&(1, "Beef")), "Beef");
    assert_eq!(column.title, "Name");
}

#[test]
fn pending_rows_show_loading() {
    assert_eq!(table_state::<u32>(None, "Nothing here"), TableState::Loading);
}

#[test]
fn empty_rows_show_empty_text() {
    let rows: Vec<u32> = Vec::new();
    assert_eq!(table_state(Some(rows.as_slice()), "Nothing here"), TableState::Empty("Nothing here"));
}

#[test]
fn present_rows_are_listed() {
    let rows = vec![1_u32, 2, 3];
    assert_eq!(table_state(Some(rows.as_slice()), "Nothing here"), TableState::Rows(&[1, 2, 3][..]));
}
