use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 函式庫與兩個執行檔的 tracing target
const LOG_TARGETS: [&str; 2] = ["chestnut", "plot_growth"];

/// 每個 target 套用相同層級，例如 `chestnut=debug,plot_growth=debug`
pub fn directives(verbose: bool, level: Option<&str>) -> String {
    let level = match (verbose, level) {
        (true, _) => "debug",
        (false, Some(level)) => level,
        (false, None) => "warn",
    };

    let mut directives: Vec<String> = LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect();
    if verbose {
        directives.push("warn".to_string());
    }
    directives.join(",")
}

/// 建立日誌過濾器：RUST_LOG 優先，其次為設定檔層級，最後為預設值
pub fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbose, level)))
}

/// 日誌寫到 stderr，stdout 只保留報表輸出
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = build_filter(verbose, level);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_cover_both_binaries() {
        assert_eq!(directives(true, None), "chestnut=debug,plot_growth=debug,warn");
        assert_eq!(directives(true, Some("error")), "chestnut=debug,plot_growth=debug,warn");
        assert_eq!(directives(false, Some("info")), "chestnut=info,plot_growth=info");
        assert_eq!(directives(false, None), "chestnut=warn,plot_growth=warn");
    }
}
