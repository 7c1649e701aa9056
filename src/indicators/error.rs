use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IndicatorError {
    #[error("insufficient history: {bars} bars, {required} required")]
    InsufficientHistory { bars: usize, required: usize },
    #[error("{0} is undefined at the latest bar")]
    Undefined(&'static str),
    #[error("{0} is not finite at the latest bar")]
    NonFinite(&'static str),
}
