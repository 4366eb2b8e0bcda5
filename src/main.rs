use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    github_activity::cli::run(args).await
}
