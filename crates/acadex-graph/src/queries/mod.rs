//! Analytical queries over the AcademicWorld graph.

pub mod catalog;
pub mod publications;
pub mod rankings;
