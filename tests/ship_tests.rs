use battleship_solitaire::{BoardError, Orientation, Placement};

#[test]
fn test_vertical_placement_cells() {
    let p = Placement::new(Orientation::Vertical, 1, 3, 4);
    assert_eq!(p.start(), 1);
    assert_eq!(p.end(), 9);
    assert_eq!(p.cells(4).collect::<Vec<_>>(), vec![1, 5, 9]);
    assert_eq!(p.origin(4), (0, 1));
}

#[test]
fn test_horizontal_placement_cells() {
    let p = Placement::new(Orientation::Horizontal, 4, 2, 4);
    assert_eq!(p.end(), 5);
    assert_eq!(p.cells(4).collect::<Vec<_>>(), vec![4, 5]);
    assert_eq!(p.origin(4), (1, 0));
}

#[test]
fn test_single_cell_ship() {
    let v = Placement::new(Orientation::Vertical, 7, 1, 5);
    let h = Placement::new(Orientation::Horizontal, 7, 1, 5);
    assert_eq!(v.cells(5).collect::<Vec<_>>(), vec![7]);
    assert_eq!(h.cells(5).collect::<Vec<_>>(), vec![7]);
}

#[test]
fn test_bounds_checked_placement() -> Result<(), BoardError> {
    let p = Placement::at(Orientation::Horizontal, 2, 1, 3, 4)?;
    assert_eq!((p.start(), p.end()), (9, 11));

    assert_eq!(
        Placement::at(Orientation::Horizontal, 0, 2, 3, 4),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        Placement::at(Orientation::Vertical, 2, 0, 3, 4),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        Placement::at(Orientation::Vertical, 0, 0, 0, 4),
        Err(BoardError::ShipOutOfBounds)
    );
    Ok(())
}

#[test]
fn test_orientation_helpers() {
    assert_eq!(Orientation::Vertical.flipped(), Orientation::Horizontal);
    assert_eq!(Orientation::Horizontal.flipped(), Orientation::Vertical);
    assert_eq!(Orientation::Vertical.step(6), 6);
    assert_eq!(Orientation::Horizontal.step(6), 1);
}
