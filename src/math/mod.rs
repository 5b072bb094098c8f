pub mod color;
pub mod wcag;
