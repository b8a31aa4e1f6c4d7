pub use self::map::{MapOpt, map_opt};
pub use self::sequence::{Preceded, Terminated, preceded, terminated};
pub use self::tuple::{Tuple, tuple};

mod map;
mod sequence;
mod tuple;
