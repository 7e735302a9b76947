use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fundlens::prelude::*;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fundlens")]
#[command(about = "A Rust-based analysis dashboard for startup funding data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    //overall market analysis
    Overall {
        //path to the funding csv
        #[arg(long)]
        data: PathBuf,

        //monthly series flavor (total, count)
        #[arg(long, default_value = "total")]
        monthly: String,
    },

    //detail view for one investor
    Investor {
        //path to the funding csv
        #[arg(long)]
        data: PathBuf,

        //investor name, matched as a substring of the investors column
        #[arg(long)]
        name: String,
    },

    //detail view for one startup
    Startup {
        //path to the funding csv
        #[arg(long)]
        data: PathBuf,

        //startup name, matched exactly
        #[arg(long)]
        name: String,
    },

    //print the selector options for a mode
    Options {
        //path to the funding csv
        #[arg(long)]
        data: PathBuf,

        //mode to list options for (startup, investors)
        #[arg(long)]
        mode: String,
    },

    //interactive dashboard session
    Dashboard {
        //path to the funding csv, overrides the config file
        #[arg(long)]
        data: Option<PathBuf>,

        //path to a json configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Overall { data, monthly } => {
            let monthly_mode = MonthlyMode::parse(&monthly)
                .ok_or_else(|| anyhow::anyhow!("Unknown monthly mode: {}", monthly))?;
            let dataset = load_dataset(&data)?;
            run_overall(&dataset, monthly_mode)?;
        }
        Commands::Investor { data, name } => {
            let dataset = load_dataset(&data)?;
            run_investor(&dataset, &name)?;
        }
        Commands::Startup { data, name } => {
            let dataset = load_dataset(&data)?;
            run_startup(&dataset, &name)?;
        }
        Commands::Options { data, mode } => {
            let dataset = load_dataset(&data)?;
            run_options(&dataset, &mode)?;
        }
        Commands::Dashboard { data, config } => {
            let config = match config {
                Some(path) => AppConfiguration::from_json_file(&path)
                    .context(format!("Failed to load configuration from {:?}", path))?,
                None => AppConfiguration::default(),
            };
            let data_path = data.unwrap_or_else(|| config.data_path.clone());
            let dataset = load_dataset(&data_path)?;
            run_dashboard(&dataset, &config)?;
        }
    }

    Ok(())
}

//loads the table once, every command works off this handle
fn load_dataset(path: &PathBuf) -> Result<Dataset> {
    println!("Loading data from {:?}...", path);
    let dataset =
        Dataset::load(path).context(format!("Failed to load data from {:?}", path))?;
    println!("Loaded {} funding records\n", dataset.len());
    Ok(dataset)
}

fn run_overall(dataset: &Dataset, monthly_mode: MonthlyMode) -> Result<()> {
    println!("Overall Analysis");
    println!("================\n");

    let summary = OverallSummary::from_records(dataset.records())?;
    print_cards(&overall_cards(&summary));

    let title = match monthly_mode {
        MonthlyMode::Total => "Total Investment Per Month",
        MonthlyMode::Count => "Investment by Month-Year",
    };
    let series = monthly_series(dataset.records(), monthly_mode);

    println!();
    print_series(&monthly_chart(title, series));

    Ok(())
}

fn run_investor(dataset: &Dataset, name: &str) -> Result<()> {
    println!("Investor Analysis: {}", name);
    println!("==================\n");

    let detail = InvestorDetail::from_records(dataset.records(), name)?;

    println!("Most Recent Investments");
    investments_table(&detail.investments).printstd();

    println!("\nBiggest Investments");
    ranking_table("Startup", &detail.biggest_investments).printstd();

    println!();
    print_series(&biggest_investments_chart(&detail.biggest_investments));

    println!();
    print_series(&investment_distribution_chart(&detail.biggest_investments));

    println!();
    print_series(&yoy_chart(&detail.year_over_year));

    Ok(())
}

fn run_startup(dataset: &Dataset, name: &str) -> Result<()> {
    println!("Startup Analysis: {}", name);
    println!("=================\n");

    let detail = StartupDetail::from_records(dataset.records(), name)?;
    print_cards(&startup_cards(&detail));

    println!();
    print_series(&yoy_chart(&detail.year_over_year));

    Ok(())
}

fn run_options(dataset: &Dataset, mode: &str) -> Result<()> {
    let mode = AnalysisMode::parse(mode)
        .ok_or_else(|| anyhow::anyhow!("Unknown mode: {}", mode))?;

    let options = match mode {
        AnalysisMode::Startup => startup_options(dataset.records()),
        AnalysisMode::Investors => investor_options(dataset.records()),
        AnalysisMode::OverallAnalysis => {
            anyhow::bail!("Overall analysis has no selector options")
        }
    };

    for option in options {
        println!("{}", option);
    }

    Ok(())
}

//interactive stdin loop driving one session's navigation state
fn run_dashboard(dataset: &Dataset, config: &AppConfiguration) -> Result<()> {
    println!("Startup Funding Analysis");
    println!("========================");
    let modes: Vec<&str> = AnalysisMode::ALL.iter().map(|m| m.label()).collect();
    println!("Modes: {}", modes.join(", "));
    println!("Commands: mode <name>, pick <name>, show, hide, options, quit\n");

    let mut registry = SessionRegistry::new();
    let session_id = "local";
    registry.state_mut(session_id).select_mode(config.default_mode);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        let state = registry.state_mut(session_id);
        print!("[{}]> ", state.mode.label());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, argument) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "mode" => match AnalysisMode::parse(argument) {
                Some(mode) => state.select_mode(mode),
                None => println!("Unknown mode: {}", argument),
            },
            "pick" => match state.mode {
                AnalysisMode::Startup => state.selected_startup = Some(argument.to_string()),
                AnalysisMode::Investors => state.selected_investor = Some(argument.to_string()),
                AnalysisMode::OverallAnalysis => {
                    println!("Overall analysis has nothing to pick")
                }
            },
            "hide" => state.hide(),
            "options" => {
                if let Err(error) = run_options(dataset, &state.mode.label().to_lowercase()) {
                    println!("{}", error);
                }
            }
            "show" => {
                state.reveal();
                if let Err(error) = show_current_view(dataset, state, config) {
                    match error.downcast_ref::<AnalysisError>() {
                        Some(AnalysisError::NoData { view }) => {
                            println!("No data for this view: {}", view)
                        }
                        None => return Err(error),
                    }
                }
            }
            "" => {
                //re-render on empty input when the view is already revealed
                if state.is_revealed() {
                    show_current_view(dataset, state, config).ok();
                }
            }
            _ => println!("Unknown command: {}", command),
        }
    }

    Ok(())
}

fn show_current_view(
    dataset: &Dataset,
    state: &SessionState,
    config: &AppConfiguration,
) -> Result<()> {
    match state.mode {
        AnalysisMode::OverallAnalysis => run_overall(dataset, config.monthly_mode),
        AnalysisMode::Startup => match &state.selected_startup {
            Some(name) => run_startup(dataset, name),
            None => {
                println!("Pick a startup first (pick <name>)");
                Ok(())
            }
        },
        AnalysisMode::Investors => match &state.selected_investor {
            Some(name) => run_investor(dataset, name),
            None => {
                println!("Pick an investor first (pick <name>)");
                Ok(())
            }
        },
    }
}
