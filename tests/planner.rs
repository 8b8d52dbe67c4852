use std::sync::Arc;

use sepdft::dft::dft1d;
use sepdft::{Complex64, DftError, DftPlanner, Grid, SeparableDft2d, Transformer};

/// Agreement between twiddle modes; they differ only in rounding.
const EPSILON: f64 = 1e-9;

#[test]
fn twiddle_table_values() {
    let mut planner = DftPlanner::<f64>::new();
    let table = planner.get_twiddles(4).unwrap();
    assert_eq!(table.len(), 4);
    let expected = [(0.0, 1.0), (1.0, 0.0), (0.0, -1.0), (-1.0, 0.0)];
    for (&(s, c), &(es, ec)) in table.iter().zip(expected.iter()) {
        assert!((s - es).abs() < 1e-15 && (c - ec).abs() < 1e-15);
    }
}

#[test]
fn tables_are_shared() {
    let mut planner = DftPlanner::<f64>::new();
    let a = planner.get_twiddles(12).unwrap();
    let b = planner.get_twiddles(12).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(planner.get_twiddles(0), Err(DftError::EmptyInput));
}

#[test]
fn planned_transform_matches_direct() {
    let grid = Grid::from_fn(7, 5, |x, y| Complex64::new(x as f64 - 2.0, (y * y) as f64)).unwrap();
    let direct = SeparableDft2d::default();
    let planned = SeparableDft2d::from_planner(DftPlanner::new());
    assert!(planned.is_planned());
    assert!(!direct.is_planned());
    for &inverse in &[false, true] {
        let a = direct.transform(&grid, inverse).unwrap();
        let b = planned.transform(&grid, inverse).unwrap();
        assert!(a.max_abs_diff(&b).unwrap() < EPSILON);
    }
    assert_eq!(planned.cached_lengths(), 2);
    assert_eq!(direct.cached_lengths(), 0);
}

#[test]
fn square_grid_shares_one_table() {
    let grid = Grid::<f64>::zeros(6, 6).unwrap();
    let planned = SeparableDft2d::with_planner();
    planned.forward(&grid).unwrap();
    assert_eq!(planned.cached_lengths(), 1);
}

#[test]
fn dft1d_of_column_equals_first_pass() {
    // With width 1 the second pass is the identity, so the 2D result is the
    // 1D transform scaled by 1/height.
    let column: Vec<Complex64> = (0..6).map(|i| Complex64::new(i as f64, 1.0)).collect();
    let one_d = dft1d(&column, false).unwrap();
    let grid = Grid::from_columns(vec![column]).unwrap();
    let two_d = SeparableDft2d::default().forward(&grid).unwrap();
    for (y, v) in one_d.iter().enumerate() {
        let scaled = v.scale(1.0 / 6.0);
        assert!((two_d[(0, y)].re - scaled.re).abs() < EPSILON);
        assert!((two_d[(0, y)].im - scaled.im).abs() < EPSILON);
    }
}
