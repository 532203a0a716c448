use clap::Parser;
use soundex_repl::{run, Args};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soundex=info,soundex_repl=info,soundex_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let encoder = args.build_encoder()?;
    tracing::info!(
        groups = encoder.groups().len(),
        result_length = encoder.result_length(),
        "encoder ready"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = run(&encoder, stdin.lock(), stdout.lock())?;
    tracing::info!(encoded = summary.encoded, "session finished");
    Ok(())
}
