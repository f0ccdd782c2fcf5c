mod create;
mod detail;
mod index;

pub use self::create::*;
pub use self::detail::*;
pub use self::index::*;
