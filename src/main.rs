use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliArgs {
    catalog: Option<PathBuf>,
    seconds: Option<u16>,
}

fn main() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1).collect())?;
    reel::app::run_with_startup(reel::app::AppStartupOptions {
        catalog_path: args.catalog,
        clip_seconds: args.seconds,
    })
}

fn parse_args(args: Vec<String>) -> anyhow::Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--catalog" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    anyhow::bail!("--catalog requires a file path");
                };
                if value.trim().is_empty() {
                    anyhow::bail!("--catalog cannot be empty");
                }
                out.catalog = Some(PathBuf::from(value.trim()));
            }
            "--seconds" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    anyhow::bail!("--seconds requires a number");
                };
                let seconds: u16 = value
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("--seconds expects a whole number"))?;
                if seconds == 0 {
                    anyhow::bail!("--seconds must be at least 1");
                }
                out.seconds = Some(seconds);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => anyhow::bail!("unknown argument {other}"),
        }
        index += 1;
    }
    Ok(out)
}

fn print_help() {
    println!("ReelTUI");
    println!("  --catalog <path>   Catalog file to play instead of the default");
    println!("  --seconds <n>      Seconds each clip plays before auto-advance");
}
