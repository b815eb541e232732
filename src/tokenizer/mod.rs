mod emission;
mod engine;
mod latch;


pub use emission::{Emission, TokenKind};
pub use engine::{tokenize, Tokens};
