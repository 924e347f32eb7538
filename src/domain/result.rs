//! Result type alias for envcheck

use super::errors::EnvCheckError;

/// Result type alias for envcheck operations
///
/// # Examples
///
/// ```
/// use envcheck::domain::result::Result;
/// use envcheck::domain::errors::EnvCheckError;
///
/// fn failing_function() -> Result<()> {
///     Err(EnvCheckError::UnknownVariable { name: "PORT".to_string() })
/// }
/// ```
pub type Result<T> = std::result::Result<T, EnvCheckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::SchemaError;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_schema_error_propagates_with_question_mark() {
        fn declare() -> std::result::Result<(), SchemaError> {
            Err(SchemaError::EmptyName)
        }

        fn outer() -> Result<()> {
            declare()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
