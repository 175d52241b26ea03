mod addr;
pub mod logger;
mod shape;

pub use addr::{
    format_address, format_address_with, print_address, print_address_with, FormatAddress,
    DEFAULT_SEPARATOR,
};
pub use shape::{is_sequence_container, is_tuple, shape_of, Integer, Shape, Shaped, TupleRender};
