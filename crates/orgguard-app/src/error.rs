use thiserror::Error;

/// Why a policy check could not produce a result.
///
/// Every variant is transparent: `Display` and `source()` are the collaborator's own.
/// The variant only records which collaborator failed.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Fetching or decoding a configuration layer failed.
    #[error(transparent)]
    Config(anyhow::Error),

    /// The enablement decision failed.
    #[error(transparent)]
    Enablement(anyhow::Error),

    /// The repository content lookup failed.
    #[error(transparent)]
    Lookup(anyhow::Error),
}

impl CheckError {
    pub fn into_inner(self) -> anyhow::Error {
        match self {
            CheckError::Config(e) | CheckError::Enablement(e) | CheckError::Lookup(e) => e,
        }
    }
}
