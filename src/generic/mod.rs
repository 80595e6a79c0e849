//! Generic structures, supporting the operation of the library.

pub mod product;
