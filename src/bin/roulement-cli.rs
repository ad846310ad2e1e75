#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use roulement::{
    calendar::{month_calendars, month_range},
    config::{EmployeeConfig, TeamConfig},
    io,
    scheduler::{SchedError, ScheduleCoordinator},
    storage::{JsonStorage, Storage},
    summary::{preview, TextSummary},
    Schedule,
};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Générateur de plannings en roulement travail/repos
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON d'équipe (équipe de référence si absent)
    #[arg(long, global = true)]
    team: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer un planning et l'exporter en CSV
    Generate {
        /// YYYY-MM-DD
        #[arg(long, default_value = "2025-08-01")]
        start_date: String,
        #[arg(long, default_value_t = 90, allow_negative_numbers = true)]
        days: i64,
        #[arg(long, default_value = ".")]
        out_dir: String,
        /// Export JSON complet (optionnel)
        #[arg(long)]
        json: Option<String>,
        /// Exporte aussi les grilles mensuelles (générale et par employé)
        #[arg(long)]
        calendars: bool,
    },

    /// Générer un mois complet
    Month {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long, default_value = ".")]
        out_dir: String,
    },

    /// Afficher les premiers jours d'un mois
    Preview {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long, default_value_t = 7)]
        days: usize,
    },

    /// Vérifier l'effectif quotidien sur une période
    Check {
        /// YYYY-MM-DD
        #[arg(long, default_value = "2025-08-01")]
        start_date: String,
        #[arg(long, default_value_t = 365, allow_negative_numbers = true)]
        days: i64,
    },

    /// Écrire la configuration de l'équipe de référence
    InitTeam {
        #[arg(long)]
        out: String,
    },

    /// Construire une équipe depuis un CSV (cycle de référence)
    ImportTeam {
        #[arg(long)]
        csv: String,
        #[arg(long)]
        out: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "2025-08-01")]
        reference_date: String,
        #[arg(long)]
        required_working: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Generate {
            start_date,
            days,
            out_dir,
            json,
            calendars,
        } => {
            let team = load_team(cli.team.as_deref())?;
            let start = parse_date(&start_date)?;
            let days = positive_days(days)?;
            println!("Start date: {start}");
            println!("Duration: {days} days");
            println!("Output directory: {out_dir}");

            let schedule = ScheduleCoordinator::new(&team, start)?.generate(days)?;
            write_outputs(&schedule, Path::new(&out_dir), calendars)?;
            if let Some(path) = json {
                io::export_schedule_json(&path, &schedule)?;
                println!("{path}");
            }
            print_preview(&schedule, 7);
            0
        }
        Commands::Month {
            year,
            month,
            out_dir,
        } => {
            let team = load_team(cli.team.as_deref())?;
            let (first, len) = month_range(year, month)?;
            let schedule = ScheduleCoordinator::new(&team, first)?.generate(len)?;
            write_outputs(&schedule, Path::new(&out_dir), true)?;
            print_preview(&schedule, 7);
            0
        }
        Commands::Preview { year, month, days } => {
            let team = load_team(cli.team.as_deref())?;
            let (first, len) = month_range(year, month)?;
            let count = u32::try_from(days).unwrap_or(u32::MAX).clamp(1, len);
            let schedule = ScheduleCoordinator::new(&team, first)?.generate(count)?;
            print_preview(&schedule, days);
            0
        }
        Commands::Check { start_date, days } => {
            let team = load_team(cli.team.as_deref())?;
            let start = parse_date(&start_date)?;
            let days = positive_days(days)?;
            let mut coordinator = ScheduleCoordinator::new(&team, start)?;
            match coordinator.generate(days) {
                Ok(schedule) => {
                    println!(
                        "OK: {} day(s), {} working each day",
                        schedule.len(),
                        coordinator.required_working()
                    );
                    0
                }
                Err(err @ SchedError::Inconsistent { .. }) => {
                    eprintln!("{err}");
                    // Code 2 = configuration d'équipe incohérente
                    2
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::InitTeam { out } => {
            let storage = JsonStorage::open(&out)?;
            storage.save(&TeamConfig::reference())?;
            println!("Team written to {out}");
            0
        }
        Commands::ImportTeam {
            csv,
            out,
            reference_date,
            required_working,
        } => {
            let employees: Vec<EmployeeConfig> = io::import_team_csv(&csv)?;
            let team = TeamConfig {
                name: None,
                reference_date: parse_date(&reference_date)?,
                required_working,
                employees,
                ..TeamConfig::reference()
            };
            let storage = JsonStorage::open(&out)?;
            storage.save(&team)?;
            println!("Team of {} written to {out}", team.employees.len());
            0
        }
    };

    std::process::exit(code);
}

fn load_team(path: Option<&str>) -> Result<TeamConfig> {
    match path {
        Some(p) => JsonStorage::open(p)?.load(),
        None => Ok(TeamConfig::reference()),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date format {raw:?}, expected YYYY-MM-DD"))
}

fn positive_days(days: i64) -> Result<u32> {
    u32::try_from(days)
        .ok()
        .filter(|d| *d > 0)
        .ok_or_else(|| {
            SchedError::InvalidArgument(format!("number of days must be positive, got {days}"))
                .into()
        })
}

fn write_outputs(schedule: &Schedule, dir: &Path, calendars: bool) -> Result<()> {
    for path in io::export_schedule_csv(dir, schedule)? {
        println!("{}", path.display());
    }
    if !calendars {
        return Ok(());
    }
    for cal in month_calendars(schedule, None)? {
        let path = dir.join(format!("calendar_{}_{:02}.csv", cal.year, cal.month));
        io::export_calendar_csv(&path, &cal)?;
        println!("{}", path.display());
    }
    for name in &schedule.employees {
        for cal in month_calendars(schedule, Some(name.as_str()))? {
            let path = dir.join(format!(
                "calendar_{}_{}_{:02}.csv",
                name.to_lowercase(),
                cal.year,
                cal.month
            ));
            io::export_calendar_csv(&path, &cal)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn print_preview(schedule: &Schedule, days: usize) {
    println!();
    println!("Preview ({} first day(s)):", days.min(schedule.len()));
    println!("{}", "-".repeat(80));
    for line in preview(schedule, days, &TextSummary) {
        println!("{line}");
    }
}
