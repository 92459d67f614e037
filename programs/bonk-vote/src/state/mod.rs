pub mod global_state;
pub mod pair;
pub mod events;

pub use global_state::*;
pub use pair::*;
pub use events::*;
