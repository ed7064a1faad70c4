use {rotating_file_logger::SinkBuilder, std::sync::Arc, tracing_subscriber::util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("./logs")?;
    // Every formatted event is one raw record; the sink adds no timestamp of its own.
    let sink = SinkBuilder::new("./logs/tracing.log")
        .max_bytes(64 * 1024)
        .backup_count(3)
        .build()?;
    tracing_subscriber::fmt()
        .with_writer(Arc::new(sink))
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .finish()
        .try_init()?;

    tracing::info!("This is an info message");
    tracing::warn!("This is a warning message");
    tracing::error!("This is an error message");

    Ok(())
}
