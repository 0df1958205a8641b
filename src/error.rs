use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("precision {precision} is out of range [4, 16]")]
    InvalidPrecision { precision: u8 },

    #[error("sparse precision {sparse_precision} is out of range [{precision}, 25]")]
    InvalidSparsePrecision { precision: u8, sparse_precision: u8 },

    #[error("cannot merge estimators with different parameters: {lhs} and {rhs}")]
    ParamMismatch { lhs: Config, rhs: Config },

    #[error("invalid format: {0}")]
    Format(String),
}

impl Error {
    /// Whether the error was caused by invalid estimator parameters
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::InvalidPrecision { .. } | Error::InvalidSparsePrecision { .. }
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

macro_rules! format_err {
    ($($arg:tt)*) => {
        crate::error::Error::Format(std::format!($($arg)*))
    };
}
pub(crate) use format_err;
