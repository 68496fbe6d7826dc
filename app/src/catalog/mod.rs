mod builtin;
mod file;

#[rustfmt::skip]
pub use self::{
    builtin::BuiltinCatalog,
    file::FileCatalog,
};
