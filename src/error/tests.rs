use crate::error::{
    HexGridError, InvalidBaseCell, InvalidCellIndex, InvalidDirection,
    InvalidFace, InvalidLatLng, InvalidResolution,
};
use std::error::Error as _;

// All errors must have a non-empty display.
#[test]
fn display() {
    let hex_grid = HexGridError::new("error");

    assert!(!hex_grid.to_string().is_empty());
    assert!(!InvalidResolution::new(Some(32), "error")
        .to_string()
        .is_empty());
    assert!(!InvalidCellIndex::new(Some(0), "error")
        .to_string()
        .is_empty());
    assert!(!InvalidLatLng::new(f64::NAN, "error").to_string().is_empty());
    assert!(!InvalidFace::new(33, "error").to_string().is_empty());
    assert!(!InvalidBaseCell::new(128, "error").to_string().is_empty());
    assert!(!InvalidDirection::new(9, "error").to_string().is_empty());
}

#[test]
fn source() {
    let hex_grid = HexGridError::new("error");

    assert!(hex_grid.source().is_none());
    assert!(InvalidResolution::new(Some(32), "error").source().is_none());
    assert!(InvalidCellIndex::new(Some(0), "error").source().is_none());
    assert!(InvalidLatLng::new(f64::NAN, "error").source().is_none());
    assert!(InvalidFace::new(33, "error").source().is_none());
    assert!(InvalidBaseCell::new(128, "error").source().is_none());
    assert!(InvalidDirection::new(9, "error").source().is_none());
}
