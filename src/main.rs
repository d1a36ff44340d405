use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use van_deemter_toolbox::app::{self, AppError, Session};
use van_deemter_toolbox::deemter::Coefficients;
use van_deemter_toolbox::input::InputSnapshot;
use van_deemter_toolbox::{config, export, i18n, summary};

#[derive(Parser)]
#[command(name = "van_deemter_toolbox_cli")]
#[command(about = "Van Deemter equation calculator: plate height H = A + B/u + C*u", long_about = None)]
struct Cli {
    /// Language (auto, en, de, ko)
    #[arg(short = 'L', long, global = true, default_value = "auto")]
    lang: String,
    /// Path to the configuration file
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the optimum and the selected point for the given coefficients
    Summary {
        #[command(flatten)]
        coefficients: CoefficientArgs,
        /// Selected linear flow rate u
        #[arg(short, long)]
        u: Option<f64>,
    },
    /// Write the sampled curve as CSV
    Export {
        #[command(flatten)]
        coefficients: CoefficientArgs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Menu-driven interactive session
    Interactive,
}

#[derive(clap::Args)]
struct CoefficientArgs {
    /// Eddy diffusion term A
    #[arg(short, long)]
    a: Option<f64>,
    /// Longitudinal diffusion term B
    #[arg(short, long)]
    b: Option<f64>,
    /// Mass transfer term C
    #[arg(short, long)]
    c: Option<f64>,
}

impl CoefficientArgs {
    fn apply(&self, base: Coefficients) -> Coefficients {
        Coefficients {
            a: self.a.unwrap_or(base.a),
            b: self.b.unwrap_or(base.b),
            c: self.c.unwrap_or(base.c),
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let lang = i18n::resolve_language(&cli.lang, None);
            let tr = i18n::Translator::new(&lang);
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default_at(&cli.config)?;
    let mut session = Session::new(cfg, cli.config.clone(), &cli.lang);

    match &cli.command {
        Some(Commands::Summary { coefficients, u }) => {
            let requested = InputSnapshot {
                coefficients: coefficients.apply(session.snapshot.coefficients),
                flow_rate: u.unwrap_or(session.snapshot.flow_rate),
            };
            session.snapshot = session.config.bounds.clamp(&requested);
            let analysis = session.analysis()?;
            println!("{}", summary::equation_label(&analysis.coefficients));
            println!(
                "{}",
                summary::render(&analysis, &session.tr, session.config.precision)
            );
        }
        Some(Commands::Export {
            coefficients,
            output,
        }) => {
            let requested = InputSnapshot {
                coefficients: coefficients.apply(session.snapshot.coefficients),
                ..session.snapshot
            };
            session.snapshot = session.config.bounds.clamp(&requested);
            let analysis = session.analysis()?;
            match output {
                Some(path) => export::save_curve_csv(path, &analysis.curve, &analysis.coefficients)?,
                None => export::write_curve_csv(
                    &analysis.curve,
                    &analysis.coefficients,
                    io::stdout().lock(),
                )?,
            }
        }
        Some(Commands::Interactive) | None => app::run(&mut session)?,
    }
    Ok(())
}
