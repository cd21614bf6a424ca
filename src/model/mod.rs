mod column;
mod dataset;
mod record;
mod season;

pub use column::*;
pub use dataset::*;
pub use record::*;
pub use season::*;
