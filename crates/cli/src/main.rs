use std::{
    fs,
    io::{Write, stdout},
    path::{Path, PathBuf},
    time::Instant,
};

use clap::{
    ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
    builder::styling::{AnsiColor, Color, Style, Styles},
};

use dept::{DEFAULT_OUTPUT, SortOrder, build_map, to_json, write_json_text};

const VERSION: &str = "0.1.0";

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_GREEN: &str = "\x1b[1;32m";
const ANSI_YELLOW: &str = "\x1b[1;33m";

const AFTER_HELP: &str = "
\x1b[1;33mQUICK REFERENCE\x1b[0m

\x1b[1;32mUSAGE:\x1b[0m
  \x1b[96mdept\x1b[0m [-o, --output-path FILE] [--sort legacy|name|source] [--stdout | --check]

\x1b[1;32mOPTIONS:\x1b[0m
  \x1b[96m-h\x1b[0m, \x1b[96m--help\x1b[0m
  \x1b[96m-v\x1b[0m, \x1b[96m--version\x1b[0m

\x1b[1;32mEXAMPLES:\x1b[0m
  \x1b[96mdept\x1b[0m
  \x1b[96mdept\x1b[0m -o data/dept.json
  \x1b[96mdept\x1b[0m --check -o data/dept.json
  \x1b[96mdept\x1b[0m --sort name --stdout
";

fn cli_styles() -> Styles {
    Styles::styled().literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SortArg {
    /// `name,code` compared by code unit (existing dept.json order)
    Legacy,
    /// display name compared by code unit
    Name,
    /// table order, unsorted
    Source,
}

impl From<SortArg> for SortOrder {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Legacy => SortOrder::Legacy,
            SortArg::Name => SortOrder::Name,
            SortArg::Source => SortOrder::Source,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "dept",
    version = VERSION,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(short = 'v', long = "version", action = ArgAction::SetTrue)]
    version: bool,

    #[arg(short = 'o', long = "output-path", default_value = DEFAULT_OUTPUT)]
    output_path: PathBuf,

    #[arg(long = "sort", value_enum, default_value_t = SortArg::Legacy)]
    sort: SortArg,

    /// Print the JSON instead of writing it
    #[arg(long = "stdout", action = ArgAction::SetTrue, conflicts_with = "check")]
    stdout: bool,

    /// Compare the existing file with the generated JSON and fail on difference
    #[arg(long = "check", action = ArgAction::SetTrue)]
    check: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Cli::command();
    cmd = cmd
        .styles(cli_styles())
        .color(ColorChoice::Auto)
        .after_help(AFTER_HELP);

    let matches = cmd.get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if cli.version {
        println!("{VERSION}");
        return Ok(());
    }

    let cwd = std::env::current_dir().map_err(|e| format!("get current dir failed: {e}"))?;
    run(&cli, &cwd).map_err(|e| e.into())
}

fn run(cli: &Cli, cwd: &Path) -> Result<(), String> {
    let t0 = Instant::now();
    let order = SortOrder::from(cli.sort);
    let map = build_map(order);
    let json = to_json(&map)?;

    if cli.stdout {
        println!("{json}");
        return Ok(());
    }

    let out_path = resolve_user_path(cwd, &cli.output_path);
    let name = basename(&out_path);

    if cli.check {
        let existing = fs::read(&out_path).map_err(|e| format!("{name}: read failed: {e}"))?;
        if existing != json.as_bytes() {
            return Err(format!(
                "{name}: out of date (sort={order}, expected {} bytes, found {} bytes)",
                json.len(),
                existing.len()
            ));
        }
        println!(
            "{ANSI_YELLOW}[check]{ANSI_RESET} {name} is up to date  entries={}, sort={order}",
            map.len()
        );
        let _ = stdout().flush();
        return Ok(());
    }

    let bytes = write_json_text(&out_path, &json).map_err(|e| format!("{name}: {e}"))?;

    println!(
        "{ANSI_GREEN}[ok]{ANSI_RESET} output: {name}  entries={}, bytes={bytes}, sort={order}, time={:.3}s",
        map.len(),
        t0.elapsed().as_secs_f64()
    );
    let _ = stdout().flush();
    Ok(())
}

fn resolve_user_path(cwd: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        cwd.join(p)
    }
}

#[inline]
fn basename(p: &Path) -> std::borrow::Cow<'_, str> {
    p.file_name()
        .unwrap_or_else(|| p.as_os_str())
        .to_string_lossy()
}
