use clap::Parser;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor, Stylize};
use crossterm::{execute, queue};
use drill_core::logging::init_tracing;
use drill_core::persistence::load_stats;
use drill_core::report::render_stats;
use drill_core::{DrillConfig, DrillEngine, DrillError};
use std::io::{self, stdin, stdout, BufRead, Write};
use std::process::ExitCode;
use tracing::{info, warn};

fn main() -> ExitCode {
    init_tracing();

    let config = DrillConfig::parse();

    let result = if config.show_stats {
        print_stats(&config)
    } else {
        run_drill(&config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn print_stats(config: &DrillConfig) -> Result<(), DrillError> {
    let table = render_stats(&load_stats(config.stats_dir()));
    let mut out = stdout();
    if let Some((header, body)) = table.split_once('\n') {
        execute!(out, Print(header.bold()), Print("\n"), Print(body))
            .map_err(|e| DrillError::io("<stdout>", e))?;
    }
    Ok(())
}

fn run_drill(config: &DrillConfig) -> Result<(), DrillError> {
    let mut engine = DrillEngine::from_config(config)?;
    info!("drill started");

    let stdin = stdin();
    let mut lines = stdin.lock().lines();
    let mut out = stdout();

    loop {
        checkpoint(&engine);

        let Some(word) = engine.next_prompt() else {
            break;
        };
        prompt(&mut out, &word.from, engine.success_rate(&word.id))
            .map_err(|e| DrillError::io("<stdout>", e))?;

        let input = match lines.next() {
            Some(line) => line.map_err(|e| DrillError::io("<stdin>", e))?,
            None => break,
        };

        if !engine.submit(&word, &input) {
            execute!(
                out,
                SetForegroundColor(Color::Red),
                Print("Wrong!"),
                ResetColor,
                Print(format!(" It should be {}\n", word.to.join(", ")))
            )
            .map_err(|e| DrillError::io("<stdout>", e))?;
        }
    }

    println!();
    checkpoint(&engine);
    info!("drill finished");
    Ok(())
}

fn prompt(out: &mut impl Write, from: &str, rate: f64) -> io::Result<()> {
    queue!(out, Print(from.bold()), Print(format!(" ({rate:.2}): ")))?;
    out.flush()
}

// A failed save must not end the session.
fn checkpoint(engine: &DrillEngine) {
    if let Err(e) = engine.save_stats() {
        warn!(error = %e, dir = %engine.stats_dir().display(), "could not save stats");
    }
}
