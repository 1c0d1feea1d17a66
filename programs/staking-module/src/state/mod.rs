pub mod global_pool;
pub mod user_position;

pub use global_pool::*;
pub use user_position::*;
