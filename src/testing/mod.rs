mod fake_command_runner;
mod fake_fetcher;
mod recording_diagnostics;

pub use fake_command_runner::FakeCommandRunner;
pub use fake_fetcher::FakeFetcher;
pub use recording_diagnostics::RecordingDiagnostics;
