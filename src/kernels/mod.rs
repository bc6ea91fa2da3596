//! Pure, stateless encoding kernels shared by the output algebras.

pub mod varint;
