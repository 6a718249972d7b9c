mod cli_report;

use adlint::{Context, Document, Retailer, Ruleset, Surface, evaluate, validate_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let raw = match read_document(config.path.as_deref()) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let document: Document = match serde_json::from_str(&raw) {
        Ok(document) => document,
        Err(err) => {
            eprintln!("error: invalid document JSON: {err}");
            std::process::exit(2);
        }
    };

    let ctx = Context { surface: config.surface };
    let report = match config.retailer {
        Some(retailer) => evaluate(&Ruleset::retailer(retailer), &document, &ctx),
        None => validate_with(&document, &ctx),
    };

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: could not serialize report: {err}");
                std::process::exit(1);
            }
        }
    } else {
        cli_report::print_report(&report, config.color);
    }

    std::process::exit(if report.is_compliant() { 0 } else { 1 });
}

#[derive(Debug)]
struct CliConfig {
    path: Option<String>,
    surface: Option<Surface>,
    retailer: Option<Retailer>,
    json: bool,
    color: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliConfig, String> {
    let mut path: Option<String> = None;
    let mut surface: Option<Surface> = None;
    let mut retailer: Option<Retailer> = None;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = args.into_iter();

    let set_path = |value: String, path: &mut Option<String>| -> Result<(), String> {
        if path.is_some() {
            return Err("error: document path provided multiple times".to_string());
        }
        *path = Some(value);
        Ok(())
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("adlint {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--json" => json = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--surface" => {
                let value = args.next().ok_or_else(|| "error: --surface expects a value".to_string())?;
                surface = Some(value.parse().map_err(|e| format!("error: {e}"))?);
            }
            "--retailer" => {
                let value = args.next().ok_or_else(|| "error: --retailer expects a value".to_string())?;
                retailer = Some(value.parse().map_err(|e| format!("error: {e}"))?);
            }
            "--" => {
                // Everything after the separator is a positional.
                for rest in args.by_ref() {
                    set_path(rest, &mut path)?;
                }
                break;
            }
            _ if arg.starts_with("--surface=") => {
                let value = arg.trim_start_matches("--surface=");
                surface = Some(value.parse().map_err(|e| format!("error: {e}"))?);
            }
            _ if arg.starts_with("--retailer=") => {
                let value = arg.trim_start_matches("--retailer=");
                retailer = Some(value.parse().map_err(|e| format!("error: {e}"))?);
            }
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => set_path(arg, &mut path)?,
        }
    }

    Ok(CliConfig { path, surface, retailer, json, color })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliConfig, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn double_dash_consumes_every_remaining_positional() {
        let config = parse(&["--json", "--", "creative.json"]).unwrap();
        assert_eq!(config.path.as_deref(), Some("creative.json"));
        assert!(config.json);

        // A second positional after the separator is still an error.
        let err = parse(&["--", "a.json", "b.json"]).unwrap_err();
        assert!(err.contains("multiple times"), "{err}");
    }

    #[test]
    fn double_dash_treats_flag_like_arguments_as_paths() {
        let config = parse(&["--", "--json"]).unwrap();
        assert_eq!(config.path.as_deref(), Some("--json"));
        assert!(!config.json);
    }

    #[test]
    fn surface_and_retailer_values_parse_in_both_spellings() {
        let config = parse(&["--surface", "brand", "creative.json"]).unwrap();
        assert_eq!(config.surface, Some(Surface::Brand));

        let config = parse(&["--retailer=amazon", "creative.json"]).unwrap();
        assert_eq!(config.retailer, Some(Retailer::Amazon));

        assert!(parse(&["--oops"]).is_err());
    }
}

fn read_document(path: Option<&str>) -> Result<String, String> {
    match path {
        Some("-") | None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("error: failed to read stdin: {err}"))?;
            if buffer.trim().is_empty() {
                return Err(format!("error: no document provided\n\n{}", help_text()));
            }
            Ok(buffer)
        }
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("error: failed to read '{path}': {err}")),
    }
}

fn help_text() -> String {
    format!(
        "adlint {version}

Rule-based compliance checker for retail-media ad creatives.

Usage:
  adlint [OPTIONS] [--] <document.json>
  adlint [OPTIONS]               (reads the document from stdin)

The document is a canvas snapshot: an element list plus canvas dimensions,
as exported by the creative editor.

Options:
  --surface <name>      Display surface: brand, checkout-double-density,
                        checkout-single-density or social. Defaults to the
                        strictest font-size minimum.
  --retailer <name>     Validate against a generic retailer profile
                        (amazon, flipkart, dmart, general) instead of the
                        Tesco profile.
  --json                Print the report as JSON.
  --color               Force ANSI color output.
  --no-color            Disable ANSI color output.
  -h, --help            Show this help message.
  -V, --version         Print version information.

Exit codes:
  0  Compliant (warnings may still need acknowledgment).
  1  One or more hard-fail rules violated.
  2  Invalid arguments or unreadable document.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
