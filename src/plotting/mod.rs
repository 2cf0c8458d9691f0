mod chart;
mod styles;
#[cfg(test)]
mod tests;

pub use chart::{generate_plot, PlotError};
