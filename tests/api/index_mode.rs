use hexgrid_core::IndexMode;

#[test]
fn into_u8() {
    let result = u8::from(IndexMode::Cell);
    let expected = 1;
    assert_eq!(result, expected);
}

#[test]
fn display() {
    let result = IndexMode::Cell.to_string();
    let expected = "Cell".to_owned();
    assert_eq!(result, expected);
}
