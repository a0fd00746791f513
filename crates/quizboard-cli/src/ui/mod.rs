pub use self::{render::*, responder::*};

mod render;
mod responder;
