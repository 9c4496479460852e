mod diagnostic;

pub use diagnostic::{Diagnostic, Severity};
