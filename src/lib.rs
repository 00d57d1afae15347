mod error;
mod model;
mod smf_writer;
mod util;

pub mod vlq;

pub use error::*;
pub use model::config::*;
pub use model::samples::*;
pub use model::song::*;
pub use smf_writer::*;
pub use util::*;
