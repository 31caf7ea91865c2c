//! Small helpers shared by the generators.

pub mod date;
pub mod html;
pub mod mime;
pub mod xml;
