pub mod color;
pub mod entity;
pub mod layer;
pub mod line;
pub mod mesh;
pub mod points;
