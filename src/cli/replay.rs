//! Replay a recorded chatbot log file through the monitor

use feedback_monitor_core::{error::Result, monitoring::replay_file, ResponseLogger, ServiceConfig};
use std::path::PathBuf;

/// Handle log replay command
pub async fn handle(config: &ServiceConfig, file: PathBuf) -> Result<()> {
    let logger = ResponseLogger::new(config.latency_warn_ms);
    let summary = replay_file(&logger, &file).await?;

    println!("Replayed {} interactions from {}", summary.total, file.display());
    println!("   info:     {}", summary.info);
    println!("   warning:  {}", summary.warning);
    println!("   error:    {}", summary.error);
    println!("   with PII: {}", summary.with_pii);

    Ok(())
}
