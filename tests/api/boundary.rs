use hexgrid_core::CellIndex;

#[test]
fn display() {
    let index = CellIndex::try_from(0x8a1fb46622dffff).expect("cell");
    let result = index.boundary().to_string();

    assert!(result.starts_with('['), "opening bracket");
    assert!(result.ends_with(']'), "closing bracket");
    assert_eq!(result.matches('-').count(), 5, "six vertices for a hexagon");
}

#[test]
fn pentagon() {
    let index = CellIndex::base_cells().nth(4).expect("pentagon base cell");
    let result = index.boundary().to_string();

    assert_eq!(result.matches('-').count(), 4, "five vertices for a pentagon");
}
