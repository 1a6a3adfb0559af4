use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonoError {
    #[error("invalid integer {token:?} at position {position}")]
    Parse { token: String, position: usize },

    #[error("sum {exact} does not fit in 64 bits")]
    Overflow { exact: i128 },

    #[error("modulus must be positive")]
    InvalidModulus,
}

pub type MonoResult<T> = Result<T, MonoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MonoError::Parse {
            token: "x1".into(),
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid integer \"x1\" at position 3");
        assert_eq!(
            MonoError::Overflow {
                exact: i128::from(i64::MAX) + 1
            }
            .to_string(),
            "sum 9223372036854775808 does not fit in 64 bits"
        );
    }
}
