use thiserror::Error;

/// Precondition violations on the environment handed in by the build tool.
///
/// Resolution itself never fails: an unrecognized (framework, platform,
/// board) tuple degrades to an empty override rather than an error.
#[derive(Error, Debug)]
pub enum BuildConfError {
    #[error("build environment does not define {var}")]
    MissingVariable { var: String },

    #[error("PIOFRAMEWORK is set but lists no framework")]
    EmptyFrameworkList,
}
