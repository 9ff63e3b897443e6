mod load;
pub mod markup;
mod types;

pub use load::{ContentSource, ImageRef};
pub use markup::{InlineStyle, Segment, parse_markup, plain_text};
pub use types::{Chapter, Event, Journal, Labels, ModalContent, People, Proposal};
