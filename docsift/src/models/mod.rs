mod content;
mod format;
mod source;

pub use content::*;
pub use format::*;
pub use source::*;
