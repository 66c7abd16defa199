use broadside::{BitBoard, BitBoardError, Mask};

#[test]
fn test_set_get_and_count() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());
    bb.set(1, 2).unwrap();
    bb.set(3, 3).unwrap();
    assert!(bb.get(1, 2).unwrap());
    assert!(!bb.get(2, 1).unwrap());
    assert_eq!(bb.count_ones(), 2);
    assert_eq!(
        bb.get(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { x: 4, y: 0 }
    );
}

#[test]
fn test_not_stays_inside_board() {
    let bb = Mask::new();
    assert_eq!((!bb).count_ones(), 100);
    let full_u64 = !BitBoard::<u64, 8>::new();
    assert_eq!(full_u64.count_ones(), 64);
}

#[test]
fn test_iter_is_row_major_xy() {
    let bb = BitBoard::<u32, 5>::from_cells([(4, 0), (0, 1), (2, 4)]).unwrap();
    assert_eq!(bb.iter().collect::<Vec<_>>(), vec![(4, 0), (0, 1), (2, 4)]);
}

#[test]
fn test_and_or() {
    let a = BitBoard::<u16, 4>::from_cells([(0, 0), (1, 1)]).unwrap();
    let b = BitBoard::<u16, 4>::from_cells([(1, 1), (2, 2)]).unwrap();
    assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![(1, 1)]);
    assert_eq!((a | b).count_ones(), 3);
}
