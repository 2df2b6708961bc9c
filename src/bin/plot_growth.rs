use chestnut::core::report::render_plot_summary;
use chestnut::utils::{error::GrowthError, logger};
use chestnut::{GrowthPlotter, PlotArgs, PngRenderer};
use clap::Parser;

fn main() {
    let args = PlotArgs::parse();

    let file_config = match args.growth.load_file_config() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    // 初始化日誌
    logger::init_cli_logger(
        args.growth.verbose,
        file_config.as_ref().and_then(|c| c.log_level()),
    );

    tracing::info!("Starting growth plotter");
    let params = args.growth.resolve(file_config.as_ref());
    let out = args.output_path(file_config.as_ref());
    tracing::debug!("Resolved parameters: {:?}, output: {}", params, out.display());

    let plotter = GrowthPlotter::new(PngRenderer::new());
    match plotter.run(&params, &out) {
        Ok(outcome) => print!(
            "{}",
            render_plot_summary(&outcome.path, &outcome.result.elapsed)
        ),
        // 無效參數視為致命錯誤，不產生圖檔
        Err(e) if e.is_invalid_parameter() => {
            if let Some((field, value)) = e.rejected_parameter() {
                tracing::error!("Rejected parameter {} = {}", field, value);
            }
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &GrowthError) -> ! {
    tracing::error!("❌ plot_growth failed: {} (Severity: {:?})", e, e.severity());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
