pub mod initialize_global_state;
pub mod update_global_state;
pub mod initialize_pair;
pub mod vote;

pub use initialize_global_state::*;
pub use update_global_state::*;
pub use initialize_pair::*;
pub use vote::*;
