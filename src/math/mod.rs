//! Numeric building blocks shared by the response and design modules

mod polynomial;

pub use polynomial::{find_roots, poly_div, poly_from_roots, polyval};
