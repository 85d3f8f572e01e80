//! Integration tests for the borrowed matrix views.

use chlib::{Matrix, MatrixError, MatrixView, MatrixViewMut, Real};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn view_requires_exact_buffer_length() {
    let buffer = [0.0; 5];
    let result = MatrixView::from_slice(2, 3, &buffer);
    assert_eq!(
        result.unwrap_err(),
        MatrixError::LengthMismatch { rows: 2, cols: 3, len: 5 }
    );
}

#[test]
fn view_rejects_zero_dimensions() {
    let buffer: [Real; 0] = [];
    assert!(MatrixView::from_slice(0, 0, &buffer[..]).is_err());
}

// ---------------------------------------------------------------------------
// Read access
// ---------------------------------------------------------------------------

#[test]
fn view_reads_column_major() {
    let buffer = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let v = MatrixView::from_slice(3, 2, &buffer).unwrap();
    assert_eq!(v.shape(), (3, 2));
    assert_eq!(v.get(1, 1).unwrap(), 1.0);
    assert_eq!(v.get(3, 1).unwrap(), 3.0);
    assert_eq!(v.get(1, 2).unwrap(), 4.0);
    assert_eq!(v.get(3, 2).unwrap(), 6.0);
    assert!(v.get(4, 1).is_err());
}

#[test]
fn view_to_matrix_copies_entries() {
    let buffer = [1.0, 2.0, 3.0, 4.0];
    let v = MatrixView::from_slice(2, 2, &buffer).unwrap();
    let owned = v.to_matrix().unwrap();
    assert_eq!(
        owned,
        Matrix::from_entries(2, 2, buffer.to_vec()).unwrap()
    );
}

#[test]
fn buffer_remains_usable_after_view_drop() {
    let buffer = vec![7.0; 6];
    {
        let v = MatrixView::from_slice(2, 3, &buffer).unwrap();
        assert_eq!(v.get(2, 3).unwrap(), 7.0);
    }
    assert_eq!(buffer.len(), 6);
    assert_eq!(buffer[5], 7.0);
}

// ---------------------------------------------------------------------------
// Write access
// ---------------------------------------------------------------------------

#[test]
fn view_mut_writes_through_to_buffer() {
    let mut buffer = vec![0.0; 4];
    {
        let mut v = MatrixViewMut::from_slice(2, 2, &mut buffer).unwrap();
        v.set(1, 1, 1.0).unwrap();
        v.set(2, 2, 4.0).unwrap();
        assert_eq!(v.get(1, 1).unwrap(), 1.0);
    }
    // column-major: (1,1) is slot 0 and (2,2) is slot 3
    assert_eq!(buffer, vec![1.0, 0.0, 0.0, 4.0]);
}

#[test]
fn view_mut_bounds_checks_like_matrix() {
    let mut buffer = vec![0.0; 4];
    let mut v = MatrixViewMut::from_slice(2, 2, &mut buffer).unwrap();
    assert!(v.set(0, 1, 1.0).is_err());
    assert!(v.set(1, 3, 1.0).is_err());
}

#[test]
fn view_mut_reborrows_as_read_view() {
    let mut buffer = vec![1.0, 2.0, 3.0, 4.0];
    let v = MatrixViewMut::from_slice(2, 2, &mut buffer).unwrap();
    let r = v.as_view();
    assert_eq!(r.get(2, 1).unwrap(), 2.0);
}
