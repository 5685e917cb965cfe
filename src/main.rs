mod report;

use std::io::{self, IsTerminal, Read};

use supportkit::{PackageDescriptor, Registry, resolve, scan_str};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let text = match read_config(config.config_path.as_deref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut registry = Registry::new();
    let scan = scan_str(&mut registry, &text);
    let resolution = resolve(&registry, &config.package);
    report::print_run(&config.package, &resolution, &scan, config.color);
}

struct CliConfig {
    package: PackageDescriptor,
    config_path: Option<String>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut package = PackageDescriptor::default();
    let mut config_path: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("supportkit {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--app-store" => package.is_app_store = true,
            "-p" | "--identifier" => package.identifier = flag_value(&arg, args.next())?,
            "--store-identifier" => package.store_identifier = flag_value(&arg, args.next())?,
            "--name" => package.name = flag_value(&arg, args.next())?,
            "--author" => package.author = flag_value(&arg, args.next())?,
            "--version-string" => package.version = flag_value(&arg, args.next())?,
            "--" => {
                if let Some(path) = args.next() {
                    set_config_path(&mut config_path, path)?;
                }
                break;
            }
            _ if arg.starts_with("--") && arg.contains('=') => {
                let (flag, value) = arg.split_once('=').unwrap_or((arg.as_str(), ""));
                match flag {
                    "--identifier" => package.identifier = value.to_string(),
                    "--store-identifier" => package.store_identifier = value.to_string(),
                    "--name" => package.name = value.to_string(),
                    "--author" => package.author = value.to_string(),
                    "--version-string" => package.version = value.to_string(),
                    _ => return Err(format!("error: unknown option '{flag}'")),
                }
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => set_config_path(&mut config_path, arg)?,
        }
    }

    if package.identifier.is_empty() {
        return Err(format!("error: --identifier is required\n\n{}", help_text()));
    }

    Ok(CliConfig { package, config_path, color })
}

fn flag_value(flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("error: {flag} expects a value"))
}

fn set_config_path(slot: &mut Option<String>, path: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: config file provided multiple times".to_string());
    }
    *slot = Some(path);
    Ok(())
}

fn read_config(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|err| format!("error: failed to read '{path}': {err}")),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("error: failed to read stdin: {err}"))?;
            Ok(buffer)
        }
    }
}

fn help_text() -> String {
    format!(
        "supportkit {version}

Resolve support-contact rules for one package.

Usage:
  supportkit [OPTIONS] [--] [config-file]

Reads contact-rule configuration from <config-file>, or stdin when no file
is given, and prints the resolved links and attachments for the package
described by the options.

Options:
  -p, --identifier <id>       Package identifier to resolve for (required).
      --store-identifier <id> Store identifier of the package.
      --name <name>           Human-readable package name.
      --author <author>       Package author.
      --version-string <v>    Package version string.
      --app-store             Mark the package as store-installed.
      --color                 Force ANSI color output.
      --no-color              Disable ANSI color output.
  -h, --help                  Show this help message.
  -V, --version               Print version information.

Exit codes:
  0  Success.
  2  Invalid arguments or unreadable configuration.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
