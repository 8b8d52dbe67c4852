//! Demonstrates enabling verbose logging for sepdft.
use sepdft::{Complex64, Grid, SeparableDft2d, Transformer};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let grid = Grid::from_fn(4, 3, |x, y| Complex64::new((x + y) as f64, 0.0)).unwrap();
    let dft = SeparableDft2d::with_planner();
    let spectrum = dft.forward(&grid).unwrap();
    dft.inverse(&spectrum).unwrap();
}
