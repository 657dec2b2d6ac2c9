//! Shape and piece tests - templates and clockwise rotation

use blockfall::core::{Piece, Shape};
use blockfall::types::ShapeKind;

fn cells(shape: &Shape) -> Vec<(i32, i32)> {
    shape.occupied().collect()
}

#[test]
fn test_template_dimensions() {
    let dims: Vec<_> = ShapeKind::ALL
        .iter()
        .map(|&k| {
            let s = Shape::template(k);
            (s.width(), s.height())
        })
        .collect();
    assert_eq!(
        dims,
        vec![(4, 1), (3, 2), (3, 2), (2, 2), (3, 2), (3, 2), (3, 2)]
    );
}

#[test]
fn test_i_rotation_alternates_orientation() {
    let i = Shape::template(ShapeKind::I);
    let r1 = i.rotated();
    assert_eq!(cells(&r1), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    assert_eq!(r1.rotated(), i);
}

#[test]
fn test_t_rotation_sequence() {
    let north = Shape::template(ShapeKind::T);
    // . X .      X .
    // X X X  ->  X X
    //            X .
    let east = north.rotated();
    assert_eq!(east, Shape::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]));

    let south = east.rotated();
    assert_eq!(south, Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]));

    let west = south.rotated();
    assert_eq!(west, Shape::from_rows(&[&[0, 1], &[1, 1], &[0, 1]]));
}

#[test]
fn test_s_and_z_rotation() {
    let s = Shape::template(ShapeKind::S).rotated();
    assert_eq!(s, Shape::from_rows(&[&[1, 0], &[1, 1], &[0, 1]]));

    let z = Shape::template(ShapeKind::Z).rotated();
    assert_eq!(z, Shape::from_rows(&[&[0, 1], &[1, 1], &[1, 0]]));
}

#[test]
fn test_o_rotation_is_identity() {
    let o = Shape::template(ShapeKind::O);
    assert_eq!(o.rotated(), o);
}

/// Four quarter turns restore every template exactly. Non-square shapes
/// swap width and height on each turn, so only the even turns match the
/// original bounding box; because rotation keeps the piece's offset, an
/// odd number of turns also moves where the piece sits on the board.
#[test]
fn test_four_rotations_is_identity() {
    for kind in ShapeKind::ALL {
        let original = Shape::template(kind);
        let mut shape = original.clone();
        for turn in 1..=4 {
            shape = shape.rotated();
            if turn % 2 == 1 {
                assert_eq!(shape.width(), original.height(), "{:?}", kind);
                assert_eq!(shape.height(), original.width(), "{:?}", kind);
            }
        }
        assert_eq!(shape, original, "{:?}", kind);
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    for kind in ShapeKind::ALL {
        let mut shape = Shape::template(kind);
        for _ in 0..4 {
            shape = shape.rotated();
            assert_eq!(shape.occupied().count(), 4, "{:?}", kind);
        }
    }
}

#[test]
fn test_piece_rotated_is_pure() {
    let piece = Piece::new(ShapeKind::L, 2, 5);
    let before = piece.clone();
    let _ = piece.rotated();
    let _ = piece.rotated();
    assert_eq!(piece, before);
}

#[test]
fn test_piece_cells_absolute() {
    let piece = Piece::new(ShapeKind::Z, 3, 10);
    let cells: Vec<_> = piece.cells().collect();
    assert_eq!(cells, vec![(3, 10), (4, 10), (4, 11), (5, 11)]);
    assert_eq!(piece.color_id(), 7);
}
