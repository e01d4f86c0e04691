use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jataka_engine::{
    BirthForm, BirthInput, EngineConfig, Horoscope, IST_OFFSET_HOURS, compute_horoscope,
};
use jataka_time::UtcTime;
use jataka_vedic_base::{
    Language, deg_to_dms, nakshatra_from_longitude, navamsa_from_longitude, rashi_from_longitude,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jataka", about = "Vedic sidereal horoscope CLI")]
struct Cli {
    /// JSON engine configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output language: en or ta (overrides the config file)
    #[arg(long, global = true)]
    language: Option<String>,
    /// Log pipeline steps at debug level
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full horoscope for a birth
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Print the horoscope as JSON
        #[arg(long)]
        json: bool,
    },
    /// Assistant digest for a birth
    Digest {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Mahadasha/bhukti timeline for a birth
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Also list bhuktis
        #[arg(long)]
        bhuktis: bool,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Navamsa (D9) rashi from sidereal longitude
    Navamsa {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
}

#[derive(Args)]
struct BirthArgs {
    /// Person's name
    #[arg(long)]
    name: String,
    /// Date of birth, DD-MM-YYYY
    #[arg(long)]
    dob: String,
    /// Time of birth, HH:MM
    #[arg(long)]
    tob: String,
    /// AM or PM; omit for a 24-hour time
    #[arg(long)]
    ampm: Option<String>,
    /// Place name
    #[arg(long, default_value = "Chennai")]
    place: String,
    /// Latitude in degrees, north positive
    #[arg(long, default_value = "13.08", allow_hyphen_values = true)]
    lat: String,
    /// Longitude in degrees, east positive
    #[arg(long, default_value = "80.27", allow_hyphen_values = true)]
    lon: String,
    /// Hours ahead of UTC
    #[arg(long, default_value_t = IST_OFFSET_HOURS, allow_hyphen_values = true)]
    utc_offset: f64,
}

impl BirthArgs {
    fn to_input(&self) -> BirthInput {
        let form = BirthForm {
            name: self.name.clone(),
            dob: self.dob.clone(),
            tob: self.tob.clone(),
            ampm: self.ampm.clone(),
            place: self.place.clone(),
            latitude: self.lat.clone(),
            longitude: self.lon.clone(),
            utc_offset_hours: self.utc_offset,
        };
        BirthInput::try_from(&form).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        })
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> EngineConfig {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }),
        None => EngineConfig::default(),
    };
    if let Some(code) = &cli.language {
        config.language = Language::from_code(code).unwrap_or_else(|| {
            eprintln!("Invalid language: {code}");
            eprintln!("Valid: en, ta");
            std::process::exit(1);
        });
    }
    tracing::debug!(?config, "engine config");
    config
}

fn fmt_jd(jd: f64) -> String {
    let t = UtcTime::from_jd(jd);
    format!("{:04}-{:02}-{:02}", t.year, t.month, t.day)
}

fn print_chart(h: &Horoscope, language: Language) {
    println!("{} - {}", h.birth.name, h.birth.place);
    println!(
        "Born {:04}-{:02}-{:02} {:02}:{:02} (UTC{:+}) = {}  JD {:.6}",
        h.birth.year,
        h.birth.month,
        h.birth.day,
        h.birth.hour,
        h.birth.minute,
        h.birth.utc_offset_hours,
        h.birth_utc,
        h.jd
    );
    println!("Ayanamsha (Lahiri): {:.6} deg", h.ayanamsa);
    println!();
    println!(
        "{:<12} {:>9}  {:<12} {:>6}  {:<16} {:>4}  {:>5}  {:<12}",
        "Body", "Long", "Rashi", "Deg", "Nakshatra", "Pada", "House", "Navamsa"
    );
    for p in std::iter::once(&h.lagna).chain(&h.grahas) {
        println!(
            "{:<12} {:>9.4}  {:<12} {:>6.2}  {:<16} {:>4}  {:>5}  {:<12}",
            p.body.display_name(language),
            p.longitude,
            p.rashi.display_name(language),
            p.degrees_in_rashi,
            p.nakshatra.display_name(language),
            p.pada,
            p.house,
            p.navamsa.rashi.display_name(language)
        );
    }

    println!();
    println!("Rasi chart:");
    for (house, bodies) in h.rasi_chart.iter() {
        let symbols: Vec<&str> = bodies.iter().map(|b| b.symbol()).collect();
        println!("  {house:>2}: {}", symbols.join(" "));
    }

    let pc = &h.panchang;
    println!();
    println!(
        "Tithi: {} ({})  Karana: {}  Yoga: {}  Vaar: {}",
        pc.tithi.tithi.display_name(language),
        pc.tithi.paksha.display_name(language),
        pc.karana.karana.display_name(language),
        pc.yoga.yoga.display_name(language),
        pc.vaar.display_name(language)
    );

    println!();
    for y in &h.yogas {
        println!("Yoga: {} - {}", y.kind.display_name(language), y.effect);
    }
    for d in &h.doshas {
        println!(
            "Dosha: {} ({}, house {}) - {} Remedy: {}",
            d.kind.display_name(language),
            d.severity.name(),
            d.house,
            d.effect,
            d.remedy
        );
    }

    if let Some(first) = h.dasas.first() {
        println!();
        println!(
            "Birth dasa: {} ({:.4} of {} years remaining)",
            first.graha.display_name(language),
            first.years,
            first.full_years
        );
    }
}

fn print_dasha(h: &Horoscope, language: Language, with_bhuktis: bool) {
    for d in &h.dasas {
        println!(
            "{:<10} {} -> {}  {:>8.4} y{}",
            d.graha.display_name(language),
            fmt_jd(d.start_jd),
            fmt_jd(d.end_jd),
            d.years,
            if d.is_partial { " (balance)" } else { "" }
        );
        if with_bhuktis {
            for b in &d.bhuktis {
                println!(
                    "    {:<10} {} -> {}  {:>8.4} y",
                    b.graha.display_name(language),
                    fmt_jd(b.start_jd),
                    fmt_jd(b.end_jd),
                    b.years
                );
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(&cli);
    let language = config.language;

    match cli.command {
        Commands::Chart { ref birth, json } => {
            let h = compute_horoscope(&birth.to_input(), &config);
            if json {
                match h.to_json_pretty() {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Failed to serialize horoscope: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_chart(&h, language);
            }
        }

        Commands::Digest { ref birth } => {
            let h = compute_horoscope(&birth.to_input(), &config);
            println!("{}", h.digest(language));
        }

        Commands::Dasha { ref birth, bhuktis } => {
            let h = compute_horoscope(&birth.to_input(), &config);
            print_dasha(&h, language, bhuktis);
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.display_name(language),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra), lord {}",
                info.nakshatra.display_name(language),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.nakshatra.lord().display_name(language)
            );
        }

        Commands::Navamsa { lon } => {
            let info = navamsa_from_longitude(lon);
            println!(
                "{} (division {}) - D9 longitude {:.4} deg",
                info.rashi.display_name(language),
                info.pada,
                info.longitude
            );
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
        }
    }
}
