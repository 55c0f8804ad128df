//! Game implementations.

pub mod bowling;
