// src/bin/fbb.rs
//
// ‥ … ≤ ≥ ≠ ≟ ×

//! Driver program _fbb_ drives the correctness checks of [_fbblib_].
//!
//! Processes user-passed command-line arguments, then for each
//! configuration of the parameter grid sets up the fixtures and runs the
//! correctness check of every variant. One line is printed per check.
//! Exits with failure if any variant disagrees with the expected result.
//!
//! Timing is done by the criterion benches, `cargo bench`, not by _fbb_.
//!
//! [_fbblib_]: fbblib

#![allow(non_camel_case_types)]

use std::process::ExitCode;

use ::clap::{
    Parser,
    ValueEnum,
};
use ::const_format::concatcp;

use ::fbblib::common::{
    bench_rng,
    Count,
    Key,
    SEED_DEFAULT,
};
use ::fbblib::debug::printers::e_err;
use ::fbblib::harness::containment_suite::verify_containment;
use ::fbblib::harness::lookup_suite::LookupFixture;
use ::fbblib::harness::params::{
    lookup_params_product,
    LookupParams,
    ENTRY_COUNTS,
    POSITION_INDEXES,
    REQUEST_COUNTS,
    UPPER_LIMITS,
};
use ::fbblib::harness::verify::{
    Summary,
    VerifyResult,
};
use ::fbblib::printer::printers::{
    ColorChoice,
    PrinterVerify,
};
use ::fbblib::variants::containment::ContainmentVariant;
use ::fbblib::variants::lookup::LookupVariant;
use ::si_trace_print::stack::stack_offset_set;
use ::si_trace_print::{
    defn,
    defo,
    defx,
};

use ::anyhow;

// --------------------
// command-line parsing

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

/// CLI enum of which suites to check.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Suite {
    all,
    containment,
    lookup,
}

const CLI_HELP_AFTER: &str = "\
The containment suite checks every variant at each of the 9 positions of a
3×3 grid of points around the rectangle left=20 right=50 top=30 bottom=70.
Only position 4, the center, is inside.

The lookup suite checks every variant for every key 0 ≤ KEY ≤ UPPER_LIMIT
of each configuration UPPER_LIMIT × REQUEST_COUNT × ENTRY_COUNT.

Run the benchmarks with `cargo bench`.";

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "fbb",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(Frozen Bounds Bench)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Author: ", env!("CARGO_PKG_AUTHORS"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Which suite of correctness checks to run.
    #[clap(
        required = false,
        short = 's',
        long,
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Suite::all,
    )]
    suite: CLI_Suite,

    /// Seed of the random source used to generate lookup datasets.
    #[clap(
        required = false,
        long,
        verbatim_doc_comment,
        default_value_t = SEED_DEFAULT,
    )]
    seed: u64,

    /// Upper limit of lookup keys. May be passed more than once.
    /// Default is each of 2000 and 10000.
    #[clap(
        required = false,
        short = 'u',
        long,
        verbatim_doc_comment,
        value_parser = cli_parse_upper_limit,
    )]
    upper_limit: Vec<Key>,

    /// Lookups per benchmarked operation. May be passed more than once.
    /// Default is 1000.
    #[clap(
        required = false,
        short = 'r',
        long,
        verbatim_doc_comment,
    )]
    request_count: Vec<Count>,

    /// Random entries drawn per dataset, before removing duplicate keys.
    /// May be passed more than once.
    /// Default is each of 300 and 600.
    #[clap(
        required = false,
        short = 'e',
        long,
        verbatim_doc_comment,
    )]
    entry_count: Vec<Count>,

    /// Choose to print using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,
}

/// `clap` argument parser for `--upper-limit`.
/// Keys are drawn from `0..UPPER_LIMIT` so `0` is not allowed.
fn cli_parse_upper_limit(upper_limit: &str) -> std::result::Result<Key, String> {
    let value: Key = match upper_limit.parse::<Key>() {
        Ok(val) => val,
        Err(err) => return Err(format!("Unable to parse a number for --upper-limit {:?} {}", upper_limit, err)),
    };
    if value == 0 {
        return Err(format!("--upper-limit must be 1 ≤ UPPER_LIMIT, it was {:?}", upper_limit));
    }

    Ok(value)
}

/// Processed command-line arguments.
struct CliConfig {
    suite: CLI_Suite,
    seed: u64,
    lookup_params: Vec<LookupParams>,
    color_choice: ColorChoice,
}

/// Process user-passed arguments. Empty grid arguments fall back to the
/// declared grid.
fn cli_process_args() -> CliConfig {
    let args = CLI_Args::parse();

    defo!("args {:?}", args);

    let upper_limits: &[Key] = match args.upper_limit.is_empty() {
        true => &UPPER_LIMITS[..],
        false => args.upper_limit.as_slice(),
    };
    let request_counts: &[Count] = match args.request_count.is_empty() {
        true => &REQUEST_COUNTS[..],
        false => args.request_count.as_slice(),
    };
    let entry_counts: &[Count] = match args.entry_count.is_empty() {
        true => &ENTRY_COUNTS[..],
        false => args.entry_count.as_slice(),
    };
    let lookup_params = lookup_params_product(upper_limits, request_counts, entry_counts);
    defo!("lookup_params {:?}", lookup_params);

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };
    defo!("color_choice {:?}", color_choice);

    CliConfig {
        suite: args.suite,
        seed: args.seed,
        lookup_params,
        color_choice,
    }
}

/// Print and tally one check.
fn report(
    printer: &mut PrinterVerify,
    summary: &mut Summary,
    name: &str,
    result: VerifyResult,
) -> anyhow::Result<()> {
    summary.update(&result);
    printer.print_result(name, &result)?;

    Ok(())
}

/// Check every containment variant at every grid position.
fn run_containment(
    printer: &mut PrinterVerify,
    summary: &mut Summary,
) -> anyhow::Result<()> {
    defn!();
    for position_index in POSITION_INDEXES.iter() {
        for variant in ContainmentVariant::ALL.iter() {
            let name = format!("containment {} position {}", variant, position_index);
            report(printer, summary, &name, verify_containment(*variant, *position_index))?;
        }
    }
    defx!();

    Ok(())
}

/// Check every lookup variant for every configuration.
fn run_lookup(
    printer: &mut PrinterVerify,
    summary: &mut Summary,
    lookup_params: &[LookupParams],
    seed: u64,
) -> anyhow::Result<()> {
    defn!("seed {}", seed);
    for params in lookup_params.iter() {
        let fixture = LookupFixture::setup(*params, bench_rng(seed));
        for variant in LookupVariant::ALL.iter() {
            let name = format!(
                "lookup {} {} ({} entries)",
                variant,
                params,
                fixture.dataset().len(),
            );
            report(printer, summary, &name, fixture.verify(*variant))?;
        }
    }
    defx!();

    Ok(())
}

fn run(config: &CliConfig) -> anyhow::Result<Summary> {
    let mut printer = PrinterVerify::new(config.color_choice);
    let mut summary = Summary::new();

    if matches!(config.suite, CLI_Suite::all | CLI_Suite::containment) {
        run_containment(&mut printer, &mut summary)?;
    }
    if matches!(config.suite, CLI_Suite::all | CLI_Suite::lookup) {
        run_lookup(&mut printer, &mut summary, &config.lookup_params, config.seed)?;
    }
    printer.print_summary(&summary)?;

    Ok(summary)
}

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let config = cli_process_args();

    let exitcode = match run(&config) {
        Ok(summary) => match summary.ok() {
            true => ExitCode::SUCCESS,
            false => ExitCode::FAILURE,
        },
        Err(err) => {
            e_err!("{}", err);
            ExitCode::FAILURE
        }
    };
    defx!("exitcode {:?}", exitcode);

    exitcode
}
