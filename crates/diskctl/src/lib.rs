pub mod cup;
pub mod geom;
pub mod macros;
pub mod proto;
