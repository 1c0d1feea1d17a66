pub mod initialize;
pub mod deposit;
pub mod withdraw;
pub mod withdraw_all_for_user;
pub mod claim;
pub mod set_authorized;
pub mod set_reward_rate;
pub mod update_pool;
pub mod transfer_ownership;
pub mod get_current_user_info;

pub use initialize::*;
pub use deposit::*;
pub use withdraw::*;
pub use withdraw_all_for_user::*;
pub use claim::*;
pub use set_authorized::*;
pub use set_reward_rate::*;
pub use update_pool::*;
pub use transfer_ownership::*;
pub use get_current_user_info::*;
