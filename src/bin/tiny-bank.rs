use anyhow::{Result, bail};
use tiny_bank::bin_utils::Service;
use tiny_bank::transaction::TransferIdPolicy;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_writer(std::io::stderr)
        .init();

    let transfer_id_policy = match std::env::args().nth(1).as_deref() {
        None => TransferIdPolicy::SharedId,
        Some("split-ids") => TransferIdPolicy::DistinctIds,
        Some(other) => bail!("Unknown argument `{other}`, expected `split-ids`"),
    };

    let service = Service {
        output: &mut std::io::stdout(),
        transfer_id_policy,
        error_printer: Box::new(|err| tracing::error!("Error: {err}")),
    };
    service.run()
}
