//! Basic usage of sepdft
//! Forward and inverse 2D DFT of a small real-valued image.

use sepdft::{Complex64, DftError, Grid, SeparableDft2d, Transformer};

fn main() -> Result<(), DftError> {
    let image = Grid::from_columns(vec![
        vec![Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)],
        vec![Complex64::new(3.0, 0.0), Complex64::new(4.0, 0.0)],
    ])?;
    let dft = SeparableDft2d::default();

    let spectrum = dft.forward(&image)?;
    for (x, column) in spectrum.columns().enumerate() {
        for (y, c) in column.iter().enumerate() {
            println!("R[{}][{}] = {:.6} {:+.6}i", x, y, c.re, c.im);
        }
    }

    let restored = dft.inverse(&spectrum)?;
    println!(
        "round-trip max error: {:e}",
        restored.max_abs_diff(&image).unwrap_or(f64::NAN)
    );
    Ok(())
}
