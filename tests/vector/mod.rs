use utmatrix::data::linear_algebra::MAX_VECTOR_SIZE;
use utmatrix::data::linear_algebra::error::Error;
use utmatrix::data::linear_algebra::vector::Vector;

/// Vector of length 3 starting at index 2 holding `values`.
fn offset_vector(values: [i64; 3]) -> Vector<i64> {
    let mut v = Vector::new(3, 2).unwrap();
    for (i, value) in values.into_iter().enumerate() {
        v[2 + i as isize] = value;
    }
    v
}

#[test]
fn can_create_vector_with_positive_length() {
    let v = Vector::<i64>::new(5, 0).unwrap();
    assert_eq!(v.len(), 5);
    assert_eq!(v.start_index(), 0);
}

#[test]
fn cant_create_too_large_vector() {
    assert!(matches!(
        Vector::<i64>::new(MAX_VECTOR_SIZE as isize + 1, 0),
        Err(Error::InvalidSize { .. }),
    ));
}

#[test]
fn cant_create_vector_with_negative_length_or_start_index() {
    assert_eq!(Vector::<i64>::new(-5, 0), Err(Error::NegativeLength));
    assert_eq!(Vector::<i64>::new(5, -2), Err(Error::NegativeLength));
}

#[test]
fn copied_vector_is_equal_and_has_its_own_memory() {
    let v = offset_vector([1, 2, 3]);
    let mut copy = v.clone();
    assert_eq!(v, copy);

    copy[2] = 2;
    copy[3] = 3;
    copy[4] = 4;
    assert_ne!(v, copy);
    assert_eq!(v[2], 1);
}

#[test]
fn can_get_start_index_and_size() {
    let v = Vector::<i64>::new(4, 2).unwrap();
    assert_eq!(v.len(), 4);
    assert_eq!(v.start_index(), 2);
}

#[test]
fn access_out_of_bounds_fails() {
    let mut v = Vector::<i64>::new(4, 2).unwrap();
    assert!(matches!(v.get(1), Err(Error::NegativeIndex { .. })));
    assert!(matches!(v.get(6), Err(Error::IndexTooLarge { .. })));
    assert!(matches!(v.set(MAX_VECTOR_SIZE as isize + 1, 1), Err(Error::IndexTooLarge { .. })));
    assert!(v.get(5).is_ok());
}

#[test]
fn assignment() {
    let v = offset_vector([1, 1, 1]);

    let mut same = v.clone();
    same = same.clone();
    assert_eq!(same, v);

    let mut longer = Vector::<i64>::new(5, 2).unwrap();
    longer.clone_from(&v);
    assert_eq!(longer.len(), 3);
    assert_eq!(longer, v);
}

#[test]
fn vectors_with_different_size_are_not_equal() {
    let v = Vector::constant(1, 5, 2).unwrap();
    let w = Vector::constant(1, 2, 2).unwrap();
    assert_ne!(v, w);
}

#[test]
fn scalar_operations() {
    let zeros = offset_vector([0, 0, 0]);
    let ones = offset_vector([1, 1, 1]);
    let threes = offset_vector([3, 3, 3]);

    assert_eq!(&zeros + 1, ones);
    assert_eq!(&ones - 1, zeros);
    assert_eq!(&ones * 3, threes);
    assert_eq!(ones, offset_vector([1, 1, 1]));
}

#[test]
fn vector_operations() {
    let v = offset_vector([2, 2, 2]);
    let w = offset_vector([1, 1, 1]);
    assert_eq!(w.add_vector(&v), Ok(offset_vector([3, 3, 3])));
    assert_eq!(offset_vector([4, 4, 4]).sub_vector(&w), Ok(offset_vector([3, 3, 3])));

    let short = Vector::constant(1, 2, 2).unwrap();
    let long = Vector::constant(2, 5, 2).unwrap();
    assert!(matches!(long.add_vector(&short), Err(Error::SizeMismatch { left: 5, right: 2 })));
    assert!(matches!(long.sub_vector(&short), Err(Error::SizeMismatch { left: 5, right: 2 })));
    assert!(matches!(long.inner_product(&short), Err(Error::SizeMismatch { .. })));
}

#[test]
fn inner_product() {
    let v = offset_vector([1, 2, 3]);
    let w = offset_vector([2, 3, 4]);
    assert_eq!(w.inner_product(&v), Ok(20));
}
