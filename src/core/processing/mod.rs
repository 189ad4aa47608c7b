pub mod background;
pub mod crop;
pub mod pipeline;
pub mod recolor;
