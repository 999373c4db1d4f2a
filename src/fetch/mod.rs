pub mod fetcher;
pub mod retry;
pub mod transport;

pub use fetcher::Fetcher;
pub use retry::{RetryPolicy, Sleeper, ThreadSleeper};
pub use transport::{HttpTransport, Transport};
