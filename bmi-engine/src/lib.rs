pub mod engine;
pub mod policy;
pub mod validator;

pub use engine::{classify, compute, EngineError};
pub use policy::ValidationPolicy;
pub use validator::{validate, Problem, ValidationError, ValidationErrors};
