//! Command-line pricing demo.
//!
//! Prints a JSON report comparing the Black-Scholes closed form with the
//! three Monte Carlo estimators. This harness is the user-facing boundary:
//! it parses the option-type token and formats pricing errors for humans;
//! the library itself never catches its own errors.
//!
//! Usage:
//! ```text
//! price_demo [spot strike expiry rate vol option_type [num_simulations [seed]]]
//! ```

use std::env;
use std::process::ExitCode;

use serde_json::json;

use ferrovan::core::{OptionType, PricingError};
use ferrovan::mc::paths::{DEFAULT_NUM_PATHS, DEFAULT_NUM_STEPS, simulate_paths};
use ferrovan::mc::{DEFAULT_NUM_SIMULATIONS, DEFAULT_SEED};
use ferrovan::pricing::european::black_scholes_price;
use ferrovan::pricing::monte_carlo::{
    monte_carlo_antithetic_price, monte_carlo_crude_price, monte_carlo_importance_price,
};

struct Request {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
    num_simulations: usize,
    seed: u64,
}

fn parse_args(args: &[String]) -> Result<Request, String> {
    // No args: the classic textbook configuration.
    if args.is_empty() {
        return Ok(Request {
            spot: 100.0,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.05,
            vol: 0.2,
            option_type: OptionType::Call,
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            seed: DEFAULT_SEED,
        });
    }

    if args.len() < 6 || args.len() > 8 {
        return Err(
            "expected: spot strike expiry rate vol option_type [num_simulations [seed]]"
                .to_string(),
        );
    }

    let parse_f64 = |raw: &str, name: &str| {
        raw.parse::<f64>()
            .map_err(|_| format!("invalid numeric value for {name}: `{raw}`"))
    };

    let option_type: OptionType = args[5].parse().map_err(|e: PricingError| e.to_string())?;
    let num_simulations = match args.get(6) {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| format!("invalid num_simulations: `{raw}`"))?,
        None => DEFAULT_NUM_SIMULATIONS,
    };
    let seed = match args.get(7) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| format!("invalid seed: `{raw}`"))?,
        None => DEFAULT_SEED,
    };

    Ok(Request {
        spot: parse_f64(&args[0], "spot")?,
        strike: parse_f64(&args[1], "strike")?,
        expiry: parse_f64(&args[2], "expiry")?,
        rate: parse_f64(&args[3], "rate")?,
        vol: parse_f64(&args[4], "vol")?,
        option_type,
        num_simulations,
        seed,
    })
}

fn run(req: &Request) -> Result<serde_json::Value, PricingError> {
    let bs = black_scholes_price(
        req.option_type,
        req.spot,
        req.strike,
        req.rate,
        req.vol,
        req.expiry,
    )?;
    let crude = monte_carlo_crude_price(
        req.option_type,
        req.spot,
        req.strike,
        req.rate,
        req.vol,
        req.expiry,
        req.num_simulations,
        req.seed,
    )?;
    let antithetic = monte_carlo_antithetic_price(
        req.option_type,
        req.spot,
        req.strike,
        req.rate,
        req.vol,
        req.expiry,
        req.num_simulations,
        req.seed,
    )?;
    let importance = monte_carlo_importance_price(
        req.option_type,
        req.spot,
        req.strike,
        req.rate,
        req.vol,
        req.expiry,
        req.num_simulations,
        req.seed,
    )?;

    // Display-path summary, in place of the chart a GUI front-end would draw.
    let paths = simulate_paths(
        req.spot,
        req.expiry,
        req.rate,
        req.vol,
        DEFAULT_NUM_PATHS,
        DEFAULT_NUM_STEPS,
        req.seed,
    )?;
    let terminal = paths.row(paths.nrows() - 1);
    let mean_terminal = terminal.iter().sum::<f64>() / terminal.len() as f64;
    let min_terminal = terminal.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_terminal = terminal.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    Ok(json!({
        "request": {
            "spot": req.spot,
            "strike": req.strike,
            "expiry": req.expiry,
            "rate": req.rate,
            "vol": req.vol,
            "option_type": req.option_type,
            "num_simulations": req.num_simulations,
            "seed": req.seed,
        },
        "prices": {
            "black_scholes": bs,
            "monte_carlo_crude": crude,
            "monte_carlo_antithetic": antithetic,
            "monte_carlo_importance": importance,
        },
        "simulated_paths": {
            "num_paths": DEFAULT_NUM_PATHS,
            "num_steps": DEFAULT_NUM_STEPS,
            "terminal_mean": mean_terminal,
            "terminal_min": min_terminal,
            "terminal_max": max_terminal,
        },
    }))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let request = match parse_args(&args) {
        Ok(request) => request,
        Err(msg) => {
            eprintln!("price_demo: {msg}");
            return ExitCode::FAILURE;
        }
    };

    match run(&request) {
        Ok(report) => {
            println!("{report:#}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("price_demo: {err}");
            ExitCode::FAILURE
        }
    }
}
