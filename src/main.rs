use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    precision_education::init_tracing();

    match precision_education::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Fatal startup error");
            ExitCode::FAILURE
        }
    }
}
