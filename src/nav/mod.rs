mod interaction;
mod position;
mod screen;
mod store;

pub use interaction::{
    ExpansionState, ModalState, Side, SideOutcome, ToggleState, activate_side,
};
pub use position::{decode_position, encode_position};
pub use screen::{Direction, Screen, advance};
pub use store::{FileStore, MemoryStore, PositionStore, persist_screen, restore_screen};
