use utmatrix::data::linear_algebra::MAX_MATRIX_SIZE;
use utmatrix::data::linear_algebra::error::Error;
use utmatrix::data::linear_algebra::matrix::Matrix;
use utmatrix::io::read_matrix;

fn diagonal(values: &[i64]) -> Matrix<i64> {
    let mut m = Matrix::new(values.len() as isize).unwrap();
    for (i, &value) in values.iter().enumerate() {
        let i = i as isize;
        m[i][i] = value;
    }
    m
}

#[test]
fn can_create_matrix() {
    let m = Matrix::<i64>::new(5).unwrap();
    assert_eq!(m.len(), 5);

    assert!(matches!(
        Matrix::<i64>::new(MAX_MATRIX_SIZE as isize + 1),
        Err(Error::InvalidSize { .. }),
    ));
    assert_eq!(Matrix::<i64>::new(-5), Err(Error::NegativeLength));
}

#[test]
fn rows_are_triangular() {
    let m = Matrix::<i64>::new(3).unwrap();
    let shape = m.iter_rows()
        .map(|row| (row.len(), row.start_index()))
        .collect::<Vec<_>>();
    assert_eq!(shape, vec![(3, 0), (2, 1), (1, 2)]);
}

#[test]
fn copied_matrix_is_equal_and_has_its_own_memory() {
    let m = diagonal(&[1, 2, 3]);
    let mut copy = m.clone();
    assert_eq!(m, copy);

    copy[0][0] = 2;
    copy[1][1] = 3;
    copy[2][2] = 4;
    assert_ne!(m, copy);
    assert_eq!(m, diagonal(&[1, 2, 3]));
}

#[test]
fn can_set_and_get_element() {
    let mut m = Matrix::<i64>::new(4).unwrap();
    m[0][0] = 4;
    assert_eq!(m[0][0], 4);
    assert_eq!(m.cell(0, 0), Ok(&4));

    assert!(matches!(m.get(0).unwrap().get(-1), Err(Error::NegativeIndex { .. })));
    assert!(matches!(m.get(0).unwrap().get(5), Err(Error::IndexTooLarge { .. })));
}

#[test]
fn assignment_changes_size() {
    let m = diagonal(&[1, 1]);
    let mut target = Matrix::<i64>::new(5).unwrap();
    assert_eq!(target.len(), 5);

    target = m.clone();
    assert_eq!(target.len(), 2);
    assert_ne!(target[0][0], 0);
    assert_ne!(target[1][1], 0);
}

#[test]
fn matrices_with_different_size_are_not_equal() {
    assert_ne!(diagonal(&[1; 5]), diagonal(&[1; 2]));
}

#[test]
fn add_and_subtract() {
    let m = diagonal(&[2, 2, 2]);
    let n = diagonal(&[1, 1, 1]);
    assert_eq!(n.add_matrix(&m), Ok(diagonal(&[3, 3, 3])));
    assert_eq!(diagonal(&[4, 4, 4]).sub_matrix(&n), Ok(diagonal(&[3, 3, 3])));

    let large = Matrix::<i64>::new(5).unwrap();
    let small = Matrix::<i64>::new(2).unwrap();
    assert!(matches!(large.add_matrix(&small), Err(Error::SizeMismatch { .. })));
    assert!(matches!(large.sub_matrix(&small), Err(Error::SizeMismatch { .. })));
}

#[test]
fn text_round_trip() {
    let mut m = Matrix::<i64>::new(3).unwrap();
    read_matrix("1 2 3\n4 5\n6\n".as_bytes(), &mut m).unwrap();

    let mut n = Matrix::<i64>::new(3).unwrap();
    read_matrix(m.to_string().as_bytes(), &mut n).unwrap();
    assert_eq!(m, n);
}
