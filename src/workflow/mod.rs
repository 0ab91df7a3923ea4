pub mod io;
pub mod model;
pub mod template;

pub use io::*;
pub use model::*;
pub use template::*;
