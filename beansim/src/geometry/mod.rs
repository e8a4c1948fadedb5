pub mod vector;
pub mod angle;
pub mod circle;
pub mod arc;
