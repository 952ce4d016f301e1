//! Dependency document loading, shape validation and writing

pub mod io;
pub mod shape;

pub use io::{load_yaml, render_yaml, write_yaml};
pub use shape::{DEPENDENCIES_KEY, DependencyDocument};
