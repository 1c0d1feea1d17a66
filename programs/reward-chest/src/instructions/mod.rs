pub mod initialize;
pub mod fund;
pub mod toggle_module;
pub mod pull;
pub mod transfer_ownership;

pub use initialize::*;
pub use fund::*;
pub use toggle_module::*;
pub use pull::*;
pub use transfer_ownership::*;
