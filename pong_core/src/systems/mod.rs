pub mod bounce;
pub mod layout;
pub mod movement;
pub mod scoring;
pub mod serve;

pub use bounce::*;
pub use layout::*;
pub use movement::*;
pub use scoring::*;
pub use serve::*;
