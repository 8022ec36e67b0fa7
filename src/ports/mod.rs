mod command_runner;
mod diagnostics;
mod remote_fetcher;

pub use command_runner::{CommandOutput, CommandRunner};
pub use diagnostics::Diagnostics;
pub use remote_fetcher::{FetchedResource, RemoteFetcher};
