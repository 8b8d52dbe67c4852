//! Running both passes on the Rayon pool.

use sepdft::parallel::{parallel_threshold, transform_parallel};
use sepdft::{Complex64, DftError, Grid, SeparableDft2d, Transformer};

fn main() -> Result<(), DftError> {
    let image = Grid::from_fn(96, 64, |x, y| Complex64::new(((x ^ y) & 15) as f64, 0.0))?;

    let parallel = transform_parallel(&image, false)?;
    let sequential = SeparableDft2d::default().forward(&image)?;
    println!("parallel threshold: {} cells", parallel_threshold());
    println!(
        "parallel vs default max difference: {:e}",
        parallel.max_abs_diff(&sequential).unwrap_or(f64::NAN)
    );
    Ok(())
}
