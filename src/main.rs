use clap::{Args, Parser, Subcommand};
use newscheck::config::DEFAULT_CONNECT_TIMEOUT_SECS;
use newscheck::terminal::{BusyIndicator, render_text};
use newscheck::{CliError, HttpPredictor, PredictorConfig, Timeouts};
use panel::view::{PLACEHOLDER, TITLE};
use panel::{DEFAULT_PREDICT_URL, PanelEvent, PanelState, PredictionResult, SubmitOutcome, render, submit};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "newscheck", about = "Check news text against a fake news prediction service")]
struct Cli {
    #[arg(long, env = "NEWSCHECK_PREDICT_URL", default_value = DEFAULT_PREDICT_URL)]
    endpoint: String,

    #[arg(long, env = "NEWSCHECK_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout_secs: u64,

    #[arg(long, env = "NEWSCHECK_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    #[arg(long, global = true, help = "Print results as JSON")]
    json: bool,

    #[arg(long, global = true, help = "Disable ANSI colors")]
    no_color: bool,

    #[arg(short, long, global = true, help = "Log transport details to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a single text and exit.
    Check(CheckArgs),
    /// Read one text per line from stdin and check each.
    Interactive,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Text to check. Read from `--input` (or stdin) when omitted.
    text: Option<String>,

    #[arg(long, conflicts_with = "text", help = "Input file path, or - for stdin")]
    input: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct Output {
    json: bool,
    color: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PredictorConfig::new(
        &cli.endpoint,
        Timeouts {
            connect_secs: cli.connect_timeout_secs,
            request_secs: cli.request_timeout_secs,
        },
    )?;
    let predictor = HttpPredictor::new(&config)?;
    tracing::debug!(endpoint = %predictor.endpoint(), "predictor ready");

    let output = Output {
        json: cli.json,
        color: !cli.no_color && !cli.json,
    };

    match cli.command {
        Command::Check(args) => run_check(&predictor, args, output).await,
        Command::Interactive => run_interactive(&predictor, output).await,
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_check(predictor: &HttpPredictor, args: CheckArgs, output: Output) -> Result<(), CliError> {
    let text = match (args.text, args.input.as_deref()) {
        (Some(text), _) => text,
        (None, Some(path)) if path != "-" => tokio::fs::read_to_string(path).await?,
        (None, _) => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let mut state = PanelState::default();
    state.apply(PanelEvent::Edit(text));
    let busy = BusyIndicator::new(predictor, !output.json);
    if submit(&mut state, &busy).await == SubmitOutcome::Skipped {
        return Err(CliError::EmptyInput);
    }

    print_result(&state, output)?;
    if state.result.is_failure() {
        return Err(CliError::PredictionFailed(format!(
            "service at {} could not be used",
            predictor.endpoint()
        )));
    }
    Ok(())
}

async fn run_interactive(predictor: &HttpPredictor, output: Output) -> Result<(), CliError> {
    if !output.json {
        eprintln!("{TITLE}");
        eprintln!("{PLACEHOLDER} (one per line, Ctrl-D to quit)");
    }

    let busy = BusyIndicator::new(predictor, !output.json);
    let mut state = PanelState::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut checked = 0_usize;
    let mut failed = 0_usize;

    while let Some(line) = lines.next_line().await? {
        state.apply(PanelEvent::Edit(line));
        if submit(&mut state, &busy).await == SubmitOutcome::Skipped {
            continue;
        }
        checked = checked.saturating_add(1);
        if state.result.is_failure() {
            failed = failed.saturating_add(1);
        }
        print_result(&state, output)?;
    }

    tracing::info!(checked, failed, "interactive session finished");
    Ok(())
}

fn print_result(state: &PanelState, output: Output) -> Result<(), CliError> {
    if output.json {
        println!("{}", serde_json::to_string(&result_json(&state.result)?)?);
        return Ok(());
    }
    let rendered = render_text(&render(state), output.color);
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

fn result_json(result: &PredictionResult) -> Result<Value, CliError> {
    let outcome = match result {
        PredictionResult::Absent => return Ok(Value::Null),
        PredictionResult::Success(_) => "success",
        PredictionResult::Failure(_) => "failure",
    };
    let prediction = match result.prediction() {
        Some(prediction) => serde_json::to_value(prediction)?,
        None => Value::Null,
    };
    Ok(serde_json::json!({ "outcome": outcome, "prediction": prediction }))
}
