use std::fmt::Display;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use saju_base::{
    ALL_ELEMENTS, ALL_POSITIONS, Branch, FourPillars, Gender, LuckCycles, Pillar, SajuProfile,
    Shensha, Stem, compute_profile, ten_god, twelve_stage, void_branches,
};
use saju_config::EngineConfig;
use saju_engine::{BirthRequest, SajuEngine, SajuReport, StaticCalendar};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillar (saju) chart CLI")]
struct Cli {
    /// Emit log events as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Heavenly stem metadata
    Stem {
        /// Stem character, e.g. 甲
        symbol: Stem,
    },
    /// Earthly branch metadata
    Branch {
        /// Branch character, e.g. 子
        symbol: Branch,
    },
    /// Ten-god of a target stem relative to a day master
    TenGod {
        /// Day master stem
        day: Stem,
        /// Target stem
        target: Stem,
    },
    /// Twelve life stage of a stem over a branch
    Stage {
        stem: Stem,
        branch: Branch,
    },
    /// Void branches of a day pillar
    Void {
        /// Day pillar, e.g. 甲子
        day_pillar: Pillar,
    },
    /// Profile of raw pillars without a calendar
    Chart {
        #[arg(long)]
        year: Pillar,
        #[arg(long)]
        month: Pillar,
        #[arg(long)]
        day: Pillar,
        /// Hour pillar; omit when the birth hour is unknown
        #[arg(long)]
        hour: Option<Pillar>,
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// Full report from a calendar fixture file
    Report {
        /// Calendar fixture (JSON)
        #[arg(long)]
        calendar: PathBuf,
        /// Birth date YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Birth time HH:MM; omit when unknown
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
        /// Treat the date as a lunar date
        #[arg(long)]
        lunar: bool,
        /// Lunar date falls in a leap month
        #[arg(long, requires = "lunar")]
        leap_month: bool,
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// Target year for annual and monthly cycles (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// Engine config file (TOML or JSON); defaults to SAJU_CONFIG and env
        #[arg(long)]
        config: Option<PathBuf>,
        /// IANA timezone of the birth
        #[arg(long)]
        timezone: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| format!("expected HH:MM, got {s}: {e}"))
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn or_exit<T, E: Display>(result: Result<T, E>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{what}: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", or_exit(serde_json::to_string_pretty(value), "Failed to encode JSON"));
}

fn load_config(path: Option<&PathBuf>) -> EngineConfig {
    let config = match path {
        Some(p) => EngineConfig::from_file(p),
        None => EngineConfig::load(),
    };
    or_exit(config, "Failed to load config")
}

fn print_profile(profile: &SajuProfile) {
    let dm = profile.pillars.day_master;
    println!(
        "Day master: {} ({}, {} {})",
        dm,
        dm.name(),
        dm.element().name(),
        dm.polarity().name()
    );
    for pos in ALL_POSITIONS {
        let Some(cp) = profile.pillars.get(pos) else {
            println!("  {:<5} --", pos.name());
            continue;
        };
        let p = &cp.enriched;
        println!(
            "  {:<5} {}  stem {:<18} branch {:<18} stage {:<12} spirit {}",
            pos.name(),
            p.pillar,
            p.ten_god_stem.name(),
            p.ten_god_branch.name(),
            p.twelve_stage.name(),
            cp.twelve_spirit.name()
        );
    }

    let s = &profile.strength;
    println!(
        "Strength: {:.1} / {:.0} ({:.1}/100) - {} [{}], season {}",
        s.total,
        s.max_score,
        s.score_100,
        s.band.name(),
        s.tier.name(),
        s.season.name()
    );
    println!(
        "  support: seasonal {}, rooting {}, numerical {} ({} helping)",
        s.seasonal_support, s.rooting_support, s.numerical_support, s.helping_count
    );

    let elements: Vec<String> = ALL_ELEMENTS
        .iter()
        .map(|&e| format!("{} {:.1}%", e.name(), profile.five_elements.percent_of(e)))
        .collect();
    println!("Elements: {}", elements.join(", "));

    let active: Vec<&str> = profile.shensha.active.iter().map(|s| s.name()).collect();
    println!("Active stars: {}", active.join(", "));
    for pos in ALL_POSITIONS {
        let stars = profile.shensha.by_pillar.get(pos);
        if stars.is_empty() {
            continue;
        }
        let names = |v: &[Shensha]| {
            v.iter().map(|s| s.hanja()).collect::<Vec<_>>().join(" ")
        };
        println!(
            "  {:<5} stem [{}] branch [{}]",
            pos.name(),
            names(&stars.stem),
            names(&stars.branch)
        );
    }

    let rel = &profile.relationship;
    println!(
        "Relationship: peach blossom {} / {} at {:?}, spouse stars {} hit(s)",
        rel.peach_blossom.target_from_year,
        rel.peach_blossom.target_from_day,
        rel.peach_blossom.positions,
        rel.spouse_stars.hit_count
    );
}

fn print_luck(luck: &LuckCycles) {
    let direction = if luck.direction.is_forward() {
        "forward"
    } else {
        "backward"
    };
    match luck.start {
        Some(start) => println!(
            "Luck: {direction}, starting {}-{:02}-{:02}",
            start.year, start.month, start.day
        ),
        None => println!("Luck: {direction}"),
    }
    for d in &luck.decades {
        let pillar = d
            .pillar
            .as_ref()
            .map_or_else(|| "--".to_string(), |p| p.pillar.to_string());
        let mark = if luck.current_decade == Some(d.index) { "*" } else { " " };
        println!(
            " {mark}age {:>3}-{:<3} {}-{}  {}",
            d.start_age, d.end_age, d.start_year, d.end_year, pillar
        );
    }
    for a in &luck.annual {
        println!(
            "  {} (age {:>3})  {}  {}",
            a.year,
            a.age,
            a.pillar.pillar,
            a.pillar.ten_god_stem.name()
        );
    }
    for m in &luck.monthly {
        println!(
            "  {}-{:02}  {}  {}",
            m.year,
            m.month,
            m.pillar.pillar,
            m.pillar.ten_god_stem.name()
        );
    }
}

fn print_report(report: &SajuReport) {
    println!(
        "Solar date: {}{}",
        report.solar_date,
        if report.hour_known { "" } else { " (hour unknown)" }
    );
    if let Some(term) = &report.almanac.solar_term {
        println!("Solar term: {term}");
    }
    print_profile(&report.profile);
    print_luck(&report.luck);
    for s in &report.skipped {
        match s.month {
            Some(m) => println!("Skipped {} {}-{:02}: {}", s.horizon.name(), s.year, m, s.error),
            None => println!("Skipped {} {}: {}", s.horizon.name(), s.year, s.error),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Commands::Stem { symbol } => {
            println!(
                "{} ({}) - {} {}",
                symbol,
                symbol.name(),
                symbol.element().name(),
                symbol.polarity().name()
            );
        }

        Commands::Branch { symbol } => {
            println!(
                "{} ({}) - {} {}, {}",
                symbol,
                symbol.name(),
                symbol.element().name(),
                symbol.polarity().name(),
                symbol.zodiac().name()
            );
        }

        Commands::TenGod { day, target } => {
            let god = ten_god(day, target);
            println!("{} ({})", god.name(), god.hanja());
        }

        Commands::Stage { stem, branch } => {
            println!("{}", twelve_stage(stem, branch).name());
        }

        Commands::Void { day_pillar } => match void_branches(day_pillar) {
            Some([a, b]) => println!("{a} {b}"),
            None => {
                eprintln!("{day_pillar} is not in the sexagenary cycle");
                std::process::exit(1);
            }
        },

        Commands::Chart {
            year,
            month,
            day,
            hour,
            gender,
            json,
        } => {
            let chart = FourPillars::new(year, month, day, hour);
            let profile = compute_profile(&chart, gender);
            if json {
                print_json(&profile);
            } else {
                print_profile(&profile);
            }
        }

        Commands::Report {
            calendar,
            date,
            time,
            lunar,
            leap_month,
            gender,
            year,
            config,
            timezone,
            json,
        } => {
            let config = load_config(config.as_ref());
            let calendar = or_exit(
                StaticCalendar::from_path(&calendar),
                "Failed to load calendar",
            );
            let engine = or_exit(SajuEngine::new(calendar, config), "Invalid config");

            let mut request = if lunar {
                BirthRequest::lunar(date, leap_month, time, gender)
            } else {
                BirthRequest::solar(date, time, gender)
            };
            if let Some(tz) = timezone {
                request = request.with_timezone(tz);
            }
            let target = year.unwrap_or_else(|| chrono::Local::now().year());
            let report = or_exit(engine.report(&request, target), "Failed to compute report");
            if json {
                print_json(&report);
            } else {
                print_report(&report);
            }
        }
    }
}
