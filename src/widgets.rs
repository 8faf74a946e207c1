//! Reusable rendering helpers shared by windows

pub mod scrollbar;
