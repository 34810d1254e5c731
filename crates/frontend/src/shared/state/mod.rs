pub mod shared_state;

pub use shared_state::SharedState;
