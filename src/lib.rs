use tracing::debug;
use tracing::info;
use tracing::trace;

pub mod config;
pub mod error;
pub mod evolve;
pub mod grid;
pub mod io;
pub mod render;
pub mod rule;
pub mod seed;

pub use config::Config;
pub use error::Error;
pub use evolve::evolve;
pub use grid::Grid;
pub use render::rasterize;
pub use rule::Rule;
pub use seed::Seed;

/// State of a single cell. `true` is alive (drawn black).
pub type Cell = bool;

/// Read the seed, grow the automaton, and write the picture, as described by `config`.
pub fn run(config: &Config) -> error::Result<()> {
    let seed = io::read_seed(&config.seed)?;
    debug!("seed is '{seed}'");

    let grid = evolve::evolve_with(&seed, config.rule, config.rows, |r, row| {
        trace!(row = r, "{}", row_string(row));
    });
    debug!("array after calculating:\n{grid}");

    let img = render::rasterize_scaled(&grid, config.scale)?;
    io::write_png(&img, &config.output)?;

    info!(
        rule = config.rule.number(),
        rows = grid.rows(),
        width = grid.width(),
        population = grid.population(),
        path = %config.output.display(),
        "wrote {}x{} image",
        img.width(),
        img.height(),
    );

    Ok(())
}

fn row_string(row: &[Cell]) -> String {
    row.iter().map(|&c| if c { '1' } else { '0' }).collect()
}
