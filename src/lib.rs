//! Static chart reports for a student survey on ChatGPT use in academia.
//!
//! Loads `survey.csv`, computes per-column frequency tables, and renders a
//! fixed set of bar, histogram, and pie charts into `charts/`. A chart whose
//! output file already exists is left untouched.

pub mod chart;
pub mod color;
pub mod data;
pub mod report;
