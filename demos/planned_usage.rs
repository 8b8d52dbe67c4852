//! Reusing cached twiddle tables across many same-sized transforms.

use sepdft::{Complex64, DftError, Grid, SeparableDft2d, Transformer};

fn main() -> Result<(), DftError> {
    let dft = SeparableDft2d::<f64>::with_planner();
    for frame in 0..4 {
        let image = Grid::from_fn(32, 24, |x, y| {
            Complex64::new(((x + frame) % 8) as f64 + (y % 3) as f64, 0.0)
        })?;
        let spectrum = dft.forward(&image)?;
        let dc = spectrum[(0, 0)];
        println!("frame {}: DC = {:.3}", frame, dc.re);
    }
    println!("cached lengths: {}", dft.cached_lengths());
    Ok(())
}
