use anyhow::{Context, Result, bail};
use chipmark_config::{Config, load_references};
use chipmark_engine::{EagerResolver, LazyResolver, ReferenceEntry, Renderer};
use std::{
    env,
    io::{self, Read, Write},
    path::PathBuf,
    process,
};

const USAGE: &str = "Usage: chipmark-cli [FILE] [--references REFS.toml] [--lazy]";

/// Parsed command line. Reads stdin when `file` is `None`.
#[derive(Debug, Default, PartialEq)]
struct Args {
    file: Option<PathBuf>,
    references: Option<PathBuf>,
    lazy: bool,
    help: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--lazy" => parsed.lazy = true,
            "--references" => match args.next() {
                Some(path) => parsed.references = Some(PathBuf::from(path)),
                None => bail!("--references needs a path"),
            },
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            _ if parsed.file.is_some() => bail!("only one input file can be given"),
            _ => parsed.file = Some(PathBuf::from(&arg)),
        }
    }
    if parsed.lazy && parsed.references.is_some() {
        bail!("--lazy and --references cannot be combined");
    }
    Ok(parsed)
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// `None` selects lazy rendering. An explicit `--references` wins over the
/// config file's `references_path`.
fn reference_list(args: &Args, config: &Config) -> Result<Option<Vec<ReferenceEntry>>> {
    if args.lazy {
        return Ok(None);
    }
    let Some(path) = args.references.as_ref().or(config.references_path.as_ref()) else {
        return Ok(None);
    };
    let references = load_references(path)?;
    log::info!(
        "Loaded {} reference(s) from {}",
        references.len(),
        path.display()
    );
    Ok(Some(references))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config_path = Config::config_path();
    let config = match Config::load()? {
        Some(config) => {
            log::info!("Loaded render config from {}", config_path.display());
            config
        }
        None => {
            log::debug!("No config file at {}, using defaults", config_path.display());
            Config::default()
        }
    };

    let text = read_input(args.file.as_ref())?;
    let renderer = Renderer::new(config.render.clone());
    let html = match reference_list(&args, &config)? {
        Some(references) => renderer.render(&text, &EagerResolver::new(&references)),
        None => renderer.render(&text, &LazyResolver),
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{html}").context("Failed to write output")?;
    Ok(())
}
