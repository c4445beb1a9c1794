pub mod pipeline;
pub mod stage1_research;
pub mod stage2_write;
pub mod stage3_review;

pub use pipeline::*;
pub use stage1_research::*;
pub use stage2_write::*;
pub use stage3_review::*;
