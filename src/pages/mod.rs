//! Page components for the portfolio.

mod portfolio;

pub use portfolio::Portfolio;
