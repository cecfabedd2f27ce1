use clap::{Args, Parser, Subcommand, ValueEnum};
use saju_rs::{
    BirthInput, CalendarType, CivilDate, CivilDateTime, CorrectionConfig, CorrectionReport,
    FourPillars, Gender, Lookup, LuckConfig, Pillar, PillarsReport, compute_pillars_with,
    lunar_to_solar, solar_to_lunar,
};
use saju_time::correct_with;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "saju", about = "Sexagenary four-pillars CLI")]
struct Cli {
    /// Print debug tracing to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars of a birth
    Pillars {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        clock: ClockArgs,
    },
    /// Decade luck cycles of a birth
    Luck {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        clock: ClockArgs,
        /// Number of decades
        #[arg(long, default_value = "10")]
        count: usize,
    },
    /// Convert a lunar date to solar
    LunarToSolar {
        year: i32,
        month: u32,
        day: u32,
        /// The month is the leap month
        #[arg(long)]
        leap: bool,
    },
    /// Convert a solar date (YYYY-MM-DD) to lunar
    SolarToLunar { date: String },
    /// Correct a wall-clock instant (YYYY-MM-DDThh:mm) to true solar time
    Correct {
        datetime: String,
        #[command(flatten)]
        clock: ClockArgs,
    },
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date YYYY-MM-DD (lunar when --lunar is given)
    date: String,
    /// Wall-clock birth time hh:mm; omit when unknown
    #[arg(long)]
    time: Option<String>,
    /// Read the date as lunar
    #[arg(long)]
    lunar: bool,
    /// Lunar month is the leap month
    #[arg(long, requires = "lunar")]
    leap: bool,
    #[arg(long, value_enum, default_value = "male")]
    gender: GenderArg,
}

#[derive(Args)]
struct ClockArgs {
    /// Local meridian in degrees east
    #[arg(long, default_value = "127.0")]
    meridian: f64,
    /// Do not remove historical daylight saving
    #[arg(long)]
    no_dst: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

impl ClockArgs {
    fn config(&self) -> CorrectionConfig {
        CorrectionConfig {
            local_meridian_deg: self.meridian,
            apply_daylight_saving: !self.no_dst,
            ..CorrectionConfig::default()
        }
    }
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn parse_time(s: &str) -> Result<(u32, u32), String> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("expected hh:mm, got {s}"))?;
    let hour: u32 = h.parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = m.parse().map_err(|e| format!("{e}"))?;
    Ok((hour, minute))
}

fn parse_date_parts(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((year, month, day))
}

fn birth_input(args: &BirthArgs) -> BirthInput {
    // Lunar dates such as day 30 are not valid solar dates, so only split here.
    let (year, month, day) = parse_date_parts(&args.date).unwrap_or_else(|e| fail(e));
    let input = if args.lunar {
        BirthInput::lunar(year, month, day, args.leap, args.gender.into())
    } else {
        BirthInput::solar(year, month, day, args.gender.into())
    };
    match &args.time {
        Some(t) => {
            let (hour, minute) = parse_time(t).unwrap_or_else(|e| fail(e));
            input.with_time(hour, minute)
        }
        None => input,
    }
}

fn compute(birth: &BirthArgs, clock: &ClockArgs) -> (BirthInput, PillarsReport) {
    let input = birth_input(birth);
    let report = compute_pillars_with(&input, &clock.config()).unwrap_or_else(|e| fail(e));
    (input, report)
}

fn print_pillar(label: &str, p: Option<&Pillar>) {
    match p {
        Some(p) => println!(
            "  {label:<6} {}  {:<10} {} / {}",
            p.name(),
            p.index.romanized(),
            p.stem_element().name(),
            p.branch_element().name()
        ),
        None => println!("  {label:<6} --   (time unknown)"),
    }
}

fn print_pillars(fp: &FourPillars) {
    print_pillar("Year", Some(&fp.year));
    print_pillar("Month", Some(&fp.month));
    print_pillar("Day", Some(&fp.day));
    print_pillar("Hour", fp.hour.as_ref());
}

fn print_correction(r: &CorrectionReport) {
    println!("Wall clock:      {}", r.input);
    if let Some(dst) = r.daylight_saving_minutes {
        println!("  daylight saving  -{dst} min");
    }
    if r.in_legal_time_epoch {
        println!("  127.5°E legal time epoch (no adjustment applied)");
    }
    println!("  longitude        -{} min", r.longitude_minutes);
    println!("True solar time: {}", r.corrected);
}

fn print_solar_date(input: &BirthInput, date: &Lookup<CivilDate>) {
    if input.calendar == CalendarType::Lunar {
        let leap = if input.is_leap_month { " (leap)" } else { "" };
        println!(
            "Lunar {:04}-{:02}-{:02}{leap} -> solar {}",
            input.year,
            input.month,
            input.day,
            date.value()
        );
    }
    if !date.is_found() {
        println!("  warning: outside lunar table, date read as solar");
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    match cli.command {
        Commands::Pillars { birth, clock } => {
            let (input, report) = compute(&birth, &clock);
            print_solar_date(&input, &report.solar_date);
            if let Some(c) = &report.correction {
                print_correction(c);
            }
            println!("Pillars:");
            print_pillars(&report.pillars);
        }

        Commands::Luck {
            birth,
            clock,
            count,
        } => {
            let (input, report) = compute(&birth, &clock);
            print_solar_date(&input, &report.solar_date);
            let config = LuckConfig {
                cycle_count: count,
                ..LuckConfig::default()
            };
            let cycle = report.decade_cycle_with(&config);
            println!(
                "Pillars: {}  gender {}  direction {}",
                report.pillars,
                input.gender.name(),
                cycle.direction().name()
            );
            println!(
                "Onset: {} days to section -> age {}",
                cycle.onset_days(),
                cycle.onset_age()
            );
            for entry in cycle {
                println!("  {entry}");
            }
        }

        Commands::LunarToSolar {
            year,
            month,
            day,
            leap,
        } => match lunar_to_solar(year, month, day, leap) {
            Ok(Lookup::Found(d)) => println!("{d}"),
            Ok(Lookup::OutOfRange(d)) => println!("{d} (outside lunar table, unconverted)"),
            Err(e) => fail(e),
        },

        Commands::SolarToLunar { date } => {
            let d: CivilDate = date.parse().unwrap_or_else(|e| fail(e));
            match solar_to_lunar(d) {
                Lookup::Found(l) => println!("{l}"),
                Lookup::OutOfRange(l) => println!("{l} (outside lunar table, unconverted)"),
            }
        }

        Commands::Correct { datetime, clock } => {
            let t: CivilDateTime = datetime.parse().unwrap_or_else(|e| fail(e));
            print_correction(&correct_with(t, &clock.config()));
        }
    }
}
