//! # node_inspect
//!
//! Maps file-info JSON to display nodes and prints them.

use cli_console::{inspect, read_input, render, InspectConfig, BASE_URL_ENV, USER_ENV};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();

    let config = parse_args(&args)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            print_usage(&args[0]);
            process::exit(1);
        })
        .with_env_fallbacks();

    let result = read_input(config.input.as_deref())
        .and_then(|text| inspect(&config, &text))
        .and_then(|nodes| render(&nodes, config.pretty));

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!(error = %e, "inspection failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_args(args: &[String]) -> Result<InspectConfig, String> {
    let mut config = InspectConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--base-url" | "-b" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --base-url".to_string());
                }
                config.base_url = Some(args[i].clone());
            }
            "--user" | "-u" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --user".to_string());
                }
                config.user = Some(args[i].clone());
            }
            "--owner" | "-o" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --owner".to_string());
                }
                config.owner = Some(args[i].clone());
            }
            "--input" | "-i" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --input".to_string());
                }
                config.input = Some(PathBuf::from(&args[i]));
            }
            "--strict" => {
                config.strict = true;
            }
            "--pretty" => {
                config.pretty = true;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -b, --base-url <URL>   Server base URL (default: ${})", BASE_URL_ENV);
    eprintln!("  -u, --user <UID>       Logged-in user (default: ${})", USER_ENV);
    eprintln!("  -o, --owner <UID>      Owner to map records for (default: logged-in user)");
    eprintln!("  -i, --input <FILE>     Read records from FILE instead of stdin");
    eprintln!("      --strict           Reject entry types other than file and folder");
    eprintln!("      --pretty           Pretty-print the output");
    eprintln!("  -h, --help             Show this help message");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("node_inspect")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_all_options() {
        let config = parse_args(&args(&[
            "--base-url",
            "https://cloud.example.com",
            "-u",
            "alice",
            "--owner",
            "bob",
            "-i",
            "records.json",
            "--strict",
            "--pretty",
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_deref(), Some("https://cloud.example.com"));
        assert_eq!(config.user.as_deref(), Some("alice"));
        assert_eq!(config.owner.as_deref(), Some("bob"));
        assert_eq!(config.input, Some(PathBuf::from("records.json")));
        assert!(config.strict);
        assert!(config.pretty);
    }

    #[test]
    fn test_parse_no_options() {
        assert_eq!(parse_args(&args(&[])).unwrap(), InspectConfig::default());
    }

    #[test]
    fn test_missing_value() {
        assert!(parse_args(&args(&["--owner"])).is_err());
    }

    #[test]
    fn test_unknown_option() {
        let err = parse_args(&args(&["--verbose"])).unwrap_err();
        assert_eq!(err, "Unknown option: --verbose");
    }
}
