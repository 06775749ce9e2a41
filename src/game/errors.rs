use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("no country matches the selected filters")]
    NoCandidates,
}
