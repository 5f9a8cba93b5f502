use std::fmt;

/* A record refused at the boundary, before it reaches the calculations */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyField { field: &'static str },
    InvalidDecimal { field: &'static str, value: String },
    InvalidTimestamp { field: &'static str, value: String },
    UnknownKind(String),
    NonPositiveQuantity { id: String },
    Negative { id: String, field: &'static str },
    Overflow { id: String, field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::EmptyField { field } => write!(f, "Field {field} is empty"),
            ValidationError::InvalidDecimal { field, value } => {
                write!(f, "Field {field} is not a decimal number: {value}")
            }
            ValidationError::InvalidTimestamp { field, value } => write!(
                f,
                "Field {field} is neither a RFC 3339 date nor a unix timestamp: {value}"
            ),
            ValidationError::UnknownKind(kind) => {
                write!(f, "Unknown transaction kind {kind}, expected BUY or SELL")
            }
            ValidationError::NonPositiveQuantity { id } => {
                write!(f, "Transaction {id} must have a quantity greater than zero")
            }
            ValidationError::Negative { id, field } => {
                write!(f, "Transaction {id} has a negative {field}")
            }
            ValidationError::Overflow { id, field } => {
                write!(f, "Transaction {id} has a {field} too large to compute with")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
