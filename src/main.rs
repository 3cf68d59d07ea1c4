mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use routelint::{checkers, config, output, validate};
use serde_json::Value;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            path,
            format,
            output: output_path,
            legacy,
            config: config_path,
        } => {
            let content = std::fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("Error: failed to read input file {}: {e}", path.display());
                std::process::exit(2);
            });

            let parsed: Value = serde_json::from_str(&content).unwrap_or_else(|e| {
                eprintln!("Error: failed to parse {}: {e}", path.display());
                std::process::exit(2);
            });

            // Accept either a batch (array) or a single route object.
            let raw_routes: Vec<Value> = match parsed {
                Value::Array(items) => items,
                obj @ Value::Object(_) => vec![obj],
                _ => {
                    eprintln!(
                        "Error: {} must contain a JSON array of route objects (or one object)",
                        path.display()
                    );
                    std::process::exit(2);
                }
            };

            let mut config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            if legacy {
                config.apply_legacy();
            }

            let source = path.display().to_string();
            let report = validate::run_validation(&source, &raw_routes, &config);
            let formatted = output::format_report(&report, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            std::process::exit(if report.passed { 0 } else { 1 });
        }

        Commands::ListChecks => {
            let rules = checkers::all_rules();
            println!("{}", "Built-in Rules".bold().underline());
            println!();

            let mut current_checker = "";
            for rule in &rules {
                if rule.checker != current_checker {
                    if !current_checker.is_empty() {
                        println!();
                    }
                    println!("  {}", rule.checker.bold());
                    current_checker = rule.checker;
                }

                let severity = match rule.severity {
                    "error" => "ERROR".red().bold().to_string(),
                    "warning" => " WARN".yellow().bold().to_string(),
                    _ => rule.severity.to_string(),
                };

                println!(
                    "    [{severity}] {id:<30} {message}",
                    id = rule.id,
                    message = rule.message,
                );
            }

            println!();
            println!("  Total: {} rules", rules.len());
        }

        Commands::Explain { rule_id } => {
            let rules = checkers::all_rules();
            match rules.iter().find(|r| r.id == rule_id) {
                Some(rule) => {
                    println!("{}", rule.id.bold());
                    println!();
                    println!("  Checker:      {}", rule.checker);
                    println!("  Severity:     {}", rule.severity);
                    println!("  Description:  {}", rule.message);
                    println!("  Remediation:  {}", rule.remediation);
                }
                None => {
                    eprintln!("Unknown rule: {rule_id}");
                    eprintln!("Use 'routelint list-checks' to see all available rules.");
                    std::process::exit(2);
                }
            }
        }
    }
}
