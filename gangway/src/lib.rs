pub mod convert;
pub mod endpoint;
pub mod error;
pub mod normalized_path;
pub mod parameters;
pub mod response;

pub use convert::{
    convert_path, convert_path_with_types, converter_token, ensure_distinct_parameters,
};
pub use endpoint::{endpoint_name, unique_endpoint_name};
pub use error::DuplicateParameterError;
pub use normalized_path::NormalizedPath;
pub use parameters::path_parameter_types;
pub use response::{is_framework_response, Response};
