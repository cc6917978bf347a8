mod config;
mod logger;
mod routing;
mod snssai_info;
mod userplane;

pub use config::*;
pub use logger::*;
pub use routing::*;
pub use snssai_info::*;
pub use userplane::*;
