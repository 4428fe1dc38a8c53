use clap::Parser;
use directories::ProjectDirs;
use docshelf::api::{Category, DocumentStore, NewDocument};
use docshelf::config::DocshelfConfig;
use docshelf::error::{DocshelfError, Result};
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_env("DOCSHELF_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("docshelf={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let mut store = open_store(&cli)?;

    match cli.command {
        Some(Commands::Add {
            path,
            category,
            year,
            author,
            title,
        }) => {
            let doc = NewDocument {
                year,
                author,
                title,
            };
            let record = store.add(&path, &category, doc)?;
            print::print_success(&format!("Document added: {}", record.relative_path));
            Ok(())
        }
        Some(Commands::Rm { filename, category }) => {
            store.remove(&filename, &category)?;
            print::print_success(&format!("Document removed: {}", filename));
            Ok(())
        }
        Some(Commands::Mv {
            old_name,
            new_name,
            category,
        }) => {
            let final_name = store.rename(&old_name, &new_name, &category)?;
            print::print_success(&format!("Document renamed: {} -> {}", old_name, final_name));
            Ok(())
        }
        Some(Commands::List { category, year }) => handle_list(&store, category, year),
        Some(Commands::ByType) => {
            for (category, records) in store.group_by_category()? {
                print::print_group_header(category.as_str(), records.len());
                print::print_records(&records);
            }
            Ok(())
        }
        Some(Commands::ByYear) => {
            for (year, records) in store.group_by_year()? {
                print::print_group_header(&year.to_string(), records.len());
                print::print_records(&records);
            }
            Ok(())
        }
        Some(Commands::Search { query }) => {
            print::print_records(&store.search(&query)?);
            Ok(())
        }
        Some(Commands::Stats) => {
            print::print_statistics(&store.statistics()?);
            Ok(())
        }
        Some(Commands::Doctor) => {
            let report = store.doctor()?;
            if report.is_clean() {
                print::print_success("No inconsistencies found.");
            } else {
                print::print_warning(&format!(
                    "Removed {} stale index entr(ies); {} file(s) on disk have no metadata.",
                    report.pruned_entries, report.untracked_files
                ));
            }
            Ok(())
        }
        Some(Commands::Categories) => {
            print::print_categories();
            Ok(())
        }
        None => handle_list(&store, None, None),
    }
}

fn handle_list(store: &DocumentStore, category: Option<String>, year: Option<i32>) -> Result<()> {
    let category = category.map(|c| c.parse::<Category>()).transpose()?;
    print::print_records(&store.list(category, year)?);
    Ok(())
}

fn open_store(cli: &Cli) -> Result<DocumentStore> {
    let proj_dirs = ProjectDirs::from("com", "docshelf", "docshelf");

    let config = match &proj_dirs {
        Some(dirs) => DocshelfConfig::load(dirs.config_dir()).unwrap_or_default(),
        None => DocshelfConfig::default(),
    };

    let default_root = proj_dirs.as_ref().map(|dirs| dirs.data_dir().to_path_buf());
    let root = config
        .resolve_root(cli.root.clone(), default_root)
        .ok_or_else(|| {
            DocshelfError::Config("could not determine a data directory, pass --root".to_string())
        })?;
    tracing::debug!(root = %root.display(), "using storage root");

    DocumentStore::open(root)
}
