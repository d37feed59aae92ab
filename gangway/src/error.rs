use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[snafu(display("duplicate path parameter `{name}` in `{template}`"))]
pub struct DuplicateParameterError {
    /// The colliding name, after hyphen flattening.
    pub name: String,
    pub template: String,
}
