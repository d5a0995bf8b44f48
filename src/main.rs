use cfgdiff::areas::ignore_list::DEFAULT_IGNORE_FILE;
use cfgdiff::areas::session::Session;
use cfgdiff::areas::settings::Settings;
use cfgdiff::artifacts::core::PagerWriter;
use cfgdiff::artifacts::normalize::line::Separator;
use cfgdiff::artifacts::structure::parser::{DEFAULT_GROUP_WORDS, ParseOptions};
use cfgdiff::logging;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "cfgdiff",
    version = "0.1.0",
    about = "Context-aware diff for hierarchical device configurations",
    long_about = "Compares two saved device configurations and prints every change \
    together with the section or group it belongs to. \
    Comment lines starting with '!' and blank lines are ignored.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The previous configuration")]
    left: PathBuf,
    #[arg(index = 2, help = "The current configuration; its file name names the device")]
    right: PathBuf,
    #[arg(short = 'n', long, help = "Do not print the banner above the report")]
    no_header: bool,
    #[arg(
        long,
        env = "CFGDIFF_IGNORE_FILE",
        default_value = DEFAULT_IGNORE_FILE,
        help = "File listing devices whose changes are never reported"
    )]
    ignore_file: PathBuf,
    #[arg(
        long,
        default_value_t = DEFAULT_GROUP_WORDS,
        help = "Leading words sibling lines must share to form a group"
    )]
    group_words: usize,
    #[arg(
        long,
        value_parser = parse_boundary,
        help = "Also close blocks at dropped lines: 'b' for blank, 'c' for comment"
    )]
    boundary: Option<Separator>,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to color the report")]
    color: ColorChoice,
    #[arg(long, help = "Show the report in a pager")]
    pager: bool,
    #[arg(long, help = "Do not reverse-resolve device addresses in the banner")]
    no_resolve: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self, paged: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => !paged && std::io::stdout().is_terminal(),
        }
    }
}

fn parse_boundary(value: &str) -> Result<Separator, String> {
    Separator::try_parse(value)
        .ok_or_else(|| format!("invalid boundary '{value}', expected letters from 'bc'"))
}

impl Cli {
    fn settings(&self) -> Settings {
        let parse = ParseOptions::new(self.group_words, self.boundary.unwrap_or_default());
        let color = self.color.enabled(self.pager);
        colored::control::set_override(color);

        Settings::new(self.left.clone(), self.right.clone(), parse)
            .with_no_header(self.no_header)
            .with_ignore_file(Some(self.ignore_file.clone()))
            .with_color(color)
            .with_resolve(!self.no_resolve)
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let pwd = std::env::current_dir()?;
    let settings = cli.settings();

    if cli.pager {
        let writer = PagerWriter::new(Pager::new());
        let session = Session::new(&pwd, settings, Box::new(writer.clone()))?;
        session.compare()?;
        writer.finish()
    } else {
        let session = Session::new(&pwd, settings, Box::new(std::io::stdout()))?;
        session.compare()?;
        session.writer().flush()?;
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(?error, "comparison failed");
            eprintln!("cfgdiff: {error:#}");
            ExitCode::FAILURE
        }
    }
}
