use super::{CatalogError, ConfigError, ServeError, ValidationError};

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        ValidationError::TestExpectation { message }
    }
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        ValidationError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ConfigError {
    fn from(message: &'static str) -> Self {
        ConfigError::TestExpectation { message }
    }
}

impl From<String> for ConfigError {
    fn from(value: String) -> Self {
        ConfigError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for CatalogError {
    fn from(message: &'static str) -> Self {
        CatalogError::TestExpectation { message }
    }
}

impl From<String> for CatalogError {
    fn from(value: String) -> Self {
        CatalogError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ServeError {
    fn from(message: &'static str) -> Self {
        ServeError::TestExpectation { message }
    }
}

impl From<String> for ServeError {
    fn from(value: String) -> Self {
        ServeError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}
