use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use shortenit::cli::{Cli, Commands};
use shortenit::config::{get_config, init_config};
use shortenit::runtime::modes;
use shortenit::system::init_logging;

/// 返回后运行时才关闭，已派发的遥测任务会在进程退出前完成
#[actix_web::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_config(cli.config.as_deref());
    let config = get_config();
    let _guard = init_logging(&config.logging);
    debug!("Configuration: {:?}", config);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            modes::run_server().await.inspect_err(|e| {
                error!("Server exited with error: {}", e);
            })?;
            Ok(ExitCode::SUCCESS)
        }
        cmd => match modes::run_cli(cmd).await {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(e) => {
                eprintln!("{}", e.format_colored());
                Ok(ExitCode::FAILURE)
            }
        },
    }
}
