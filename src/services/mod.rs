mod http_remote_fetcher;
mod path_resolver;
mod remote_content_gate;
mod shell_command_runner;
mod stderr_diagnostics;

pub use http_remote_fetcher::HttpRemoteFetcher;
pub use path_resolver::{PathResolver, ResolvedImport};
pub use remote_content_gate::fetch_admitted;
pub use shell_command_runner::ShellCommandRunner;
pub use stderr_diagnostics::{DIAGNOSTIC_TAG, StderrDiagnostics};
