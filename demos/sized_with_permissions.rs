use rotating_file_logger::{LoggerBuilder, RotationSize};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("./logs")?;
    let logger = LoggerBuilder::new("./logs/sized.log")
        .max_size(RotationSize::KB(16)) // Rotate at 16KB
        .backup_count(5) // Keep sized.log.1 through sized.log.5
        .file_mode(0o640) // Set file permissions to: owner rw, group r, others none
        .build()?;

    // Simulate writing logs that will trigger size-based rotation
    for i in 1..=1000 {
        logger.info(&[
            &"Log entry",
            &i,
            &"- this is a sample log message that will contribute to file size",
        ])?;
    }

    Ok(())
}
