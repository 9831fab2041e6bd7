//! Motion-mode game: a body translated one lattice step per tick until
//! its head leaves the playfield.

mod body;
mod engine;
mod heading;

pub use body::Body;
pub use engine::{MotionEngine, MotionStatus, MotionUpdate};
pub use heading::Heading;
