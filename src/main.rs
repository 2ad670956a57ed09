use clap::Parser;
use orderscope::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use orderscope::adapter::inbound::cli::output::{self, OutputConfig};
use orderscope::adapter::inbound::cli::{config, dashboard, summary};
use orderscope::error::Result;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(e) = run(cli.command) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Dashboard(args) => dashboard::handler::execute(&args),
        Commands::Summary(args) => summary::execute(&args),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(args.config.as_deref()),
        Commands::Config(ConfigCommand::Validate(args)) => {
            config::execute_validate(args.config.as_deref())
        }
    }
}
