//! Module reference resolution.
//!
//! Turns a module reference into a file name and its contents:
//!
//! 1. Separator-free references without the module extension get `.yang` appended
//! 2. The reference is read relative to the working directory; a hit registers
//!    the file's directory in the search path
//! 3. References containing `/` stop there
//! 4. Bare references are tried under each registered directory, in order

mod error;
mod extension;
mod lexical;
mod module;
mod module_resolver;

pub use error::{ReadOutcome, ResolutionAttempt, ResolveError};
pub use extension::{MODULE_EXTENSION, REFERENCE_SEPARATOR, complete_reference, has_separator};
pub use lexical::{clean, dir, join};
pub use module::ResolvedModule;
pub use module_resolver::ModuleResolver;
