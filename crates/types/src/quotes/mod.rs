//! Quote domain models and request/response shapes

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{AggregatorError, QuoteValidationError};
pub use request::{QuoteParams, QuoteRequest, SwapPrepareParams, SwapPrepareRequest};
pub use response::{AggregatedQuote, NormalizedQuote, PreparedSwap, QuoteResponse};

/// Result type for aggregation operations
pub type AggregatorResult<T> = Result<T, AggregatorError>;

/// Result type for quote request validation
pub type QuoteValidationResult<T> = Result<T, QuoteValidationError>;
