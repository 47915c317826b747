//! Built-in operations on tour values

pub mod iter;
pub mod mapping;
pub mod math;
pub mod numeric;
pub mod sequence;
pub mod set;
pub mod tuple;

pub use iter::{list_comp, range, range_step, Range};
pub use mapping::Mapping;
pub use numeric::BinOp;
pub use sequence::Sequence;
pub use set::Set;
pub use tuple::Tuple;
