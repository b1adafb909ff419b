use clap::Parser;
use std::fs;
use tickmark::application::{init, AnnotateService, ConfigService, ScanService};
use tickmark::cli::{self, Cli, Commands, PrefixAction};
use tickmark::error::TickmarkError;
use tickmark::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TickmarkError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Config { key, value, list }) => {
            // Discover repository
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                // List all config
                let config = service.list()?;
                println!("base-url = {}", config.base_url);
                println!("styles = {}", config.use_styles);
                println!("prefixes = {}", config.prefixes.join(", "));
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, service.get(&k)?);
                    Ok(())
                } else {
                    // Get config value
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: tickmark config [--list | <key> [<value>]]");
                println!("Valid keys: base-url, styles, created");
                Ok(())
            }
        }
        Some(Commands::Prefix { action }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            match action {
                PrefixAction::Add { prefix } => {
                    service.add_prefix(&prefix)?;
                    println!("Added prefix {}", prefix);
                    Ok(())
                }
                PrefixAction::Remove { prefix } => {
                    service.remove_prefix(&prefix)?;
                    println!("Removed prefix {}", prefix);
                    Ok(())
                }
                PrefixAction::List => {
                    let prefixes = service.list_prefixes()?;
                    println!("{}", cli::format_prefix_list(&prefixes).trim_end());
                    Ok(())
                }
            }
        }
        Some(Commands::Scan { file, cursor }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ScanService::new(repo);

            let records = service.execute(file.as_deref(), cursor)?;
            println!("{}", cli::format_match_list(&records).trim_end());
            Ok(())
        }
        Some(Commands::Annotate { file, output }) => {
            let repo = FileSystemRepository::discover()?;
            let service = AnnotateService::new(repo);

            match file {
                Some(filename) => {
                    let html = service.render_note(&filename)?;
                    match output {
                        Some(target) => {
                            fs::write(&target, html)?;
                            println!("Wrote {}", target.display());
                        }
                        None => println!("{}", html),
                    }
                    Ok(())
                }
                None => {
                    let written = service.annotate_all(output.as_deref())?;
                    println!("{}", cli::format_written_list(&written).trim_end());
                    Ok(())
                }
            }
        }
        None => {
            // No command, show help
            println!("tickmark - Annotate ticket identifiers in markdown notes");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
