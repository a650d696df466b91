pub mod compare;
pub mod game;
pub mod overview;
pub mod page;
pub mod session;
pub mod stats;

pub use compare::*;
pub use game::*;
pub use overview::*;
pub use page::*;
pub use session::*;
pub use stats::*;
