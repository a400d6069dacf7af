//! Best-effort parsing of SQS queue URLs
//!
//! Recovers the queue name, account ID and region from strings that are
//! believed to be SQS queue URLs, for labelling spans and metrics. Malformed
//! input never errors; it simply yields `None`.
//!
//! ```
//! let url = Some("https://sqs.us-east-1.amazonaws.com/123456789012/my-queue");
//!
//! assert_eq!(sqsurl_core::get_queue_name(url).as_deref(), Some("my-queue"));
//! assert_eq!(sqsurl_core::get_account_id(url).as_deref(), Some("123456789012"));
//! assert_eq!(sqsurl_core::get_region(url).as_deref(), Some("us-east-1"));
//! ```

pub mod parser;
pub mod resource;
pub mod validate;

pub use parser::{get_account_id, get_queue_name, get_region, parse_url, ParsedUrl};
pub use resource::SqsRemoteResource;
