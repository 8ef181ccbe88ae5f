use clap::Parser;

mod controller;
mod ui;

use ui::MattersApp;

/// Matters: personalized explanations for your saved connections.
#[derive(Parser, Debug)]
struct Args {
    /// Window title.
    #[arg(long, default_value = "Matters")]
    window_title: String,
    /// Initial window width in logical points.
    #[arg(long, default_value_t = 1100.0)]
    window_width: f32,
    /// Initial window height in logical points.
    #[arg(long, default_value_t = 720.0)]
    window_height: f32,
    /// Tracing env-filter directive, e.g. `debug` or `connections_core=debug`.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter.as_str())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(args.window_title.clone())
            .with_inner_size([args.window_width, args.window_height])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        &args.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(MattersApp::new()))),
    )
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn args_default_to_the_standard_window() {
        let args = Args::parse_from(["matters"]);
        assert_eq!(args.window_title, "Matters");
        assert_eq!(args.window_width, 1100.0);
        assert_eq!(args.window_height, 720.0);
        assert_eq!(args.log_filter, "info");
    }

    #[test]
    fn args_accept_window_overrides() {
        let args = Args::parse_from([
            "matters",
            "--window-title",
            "Matters (dev)",
            "--window-width",
            "1440",
            "--window-height",
            "900",
            "--log-filter",
            "debug",
        ]);
        assert_eq!(args.window_title, "Matters (dev)");
        assert_eq!(args.window_width, 1440.0);
        assert_eq!(args.window_height, 900.0);
        assert_eq!(args.log_filter, "debug");
    }
}
