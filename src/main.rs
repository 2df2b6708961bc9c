use chestnut::core::report::render_calculation;
use chestnut::utils::{error::GrowthError, logger};
use chestnut::{calculate, CalculatorArgs};
use clap::Parser;

fn main() {
    let args = CalculatorArgs::parse();

    let file_config = match args.growth.load_file_config() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    // 初始化日誌
    logger::init_cli_logger(
        args.growth.verbose,
        file_config.as_ref().and_then(|c| c.log_level()),
    );

    tracing::info!("Starting chestnut calculator");
    let params = args.growth.resolve(file_config.as_ref());
    tracing::debug!("Resolved parameters: {:?}", params);

    match calculate(&params, args.ceil) {
        Ok(report) => print!("{}", render_calculation(&report)),
        Err(e) if e.is_invalid_parameter() => {
            // 輸入無效只印出訊息，正常結束
            if let Some((field, value)) = e.rejected_parameter() {
                tracing::warn!("Rejected parameter {} = {}", field, value);
            }
            println!("{}", e.user_friendly_message());
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &GrowthError) -> ! {
    tracing::error!("❌ chestnut failed: {} (Severity: {:?})", e, e.severity());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
