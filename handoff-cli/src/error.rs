use handoff_library::diag::EcoString;

#[derive(Debug)]
pub enum CliError {
    UnknownTopic(EcoString),
    Execution,
    IoError(std::io::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError(err)
    }
}
