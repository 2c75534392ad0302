use b64_inspect::errors::AppError;

fn main() {
    if let Err(e) = b64_inspect::cli::run() {
        if matches!(e, AppError::Cancelled) {
            eprintln!("{}", e);
            return;
        }
        if e.is_unexpected() {
            tracing::error!("{:?}", e);
        }
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}
