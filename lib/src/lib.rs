mod data;
mod engine;
mod restrictions;
mod results;
pub mod scorers;

pub use data::WordPool;
pub use engine::*;
pub use restrictions::*;
pub use results::*;
