use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoilError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Singular Joukowsky mapping at z = {re} + {im}i")]
    SingularMapping { re: f64, im: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed point record on line {line}: {content:?}")]
    Parse { line: usize, content: String },

    #[error("Plotting error: {0}")]
    Plot(String),
}

impl FoilError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        FoilError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for FoilError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        FoilError::Plot(e.to_string())
    }
}

pub type FoilResult<T> = Result<T, FoilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let e = FoilError::invalid("t", "must lie in the open interval (0, 1), got 1");
        assert_eq!(
            "Invalid parameter `t`: must lie in the open interval (0, 1), got 1",
            e.to_string()
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> FoilResult<()> {
            let r: std::io::Result<()> = Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            ));
            r?;
            Ok(())
        }

        assert!(matches!(fails(), Err(FoilError::Io(_))));
    }
}
