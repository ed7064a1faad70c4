use rotating_file_logger::{LoggerBuilder, RotationSize, Severity};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("./logs")?;
    let logger = LoggerBuilder::new("./logs/logger.log")
        .level(Severity::Info)
        .max_size(RotationSize::KB(256))
        .backup_count(3)
        .build()?;

    logger.debug(&[&"This is a debug message"])?;
    logger.info(&[&"This is an info message"])?;
    logger.warning(&[&"This is a warning message"])?;
    logger.error(&[&"This is an error message, code", &500])?;

    logger.close()?;
    Ok(())
}
