/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

mod commands;
mod config;
mod logging;

use clap::Parser;
use clap::Subcommand;

use crate::commands::compose::ComposeCommand;
use crate::commands::max::MaxCommand;
use crate::commands::zip::ZipCommand;
use crate::config::Config;
use crate::config::OutputFormat;

#[derive(Parser)]
#[command(about = "Demonstrates named-operator reduction and function composition")]
struct Cli {
    /// Print results as JSON (overrides HIGHER_ORDER_OUTPUT).
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[clap(about = r#"Evaluate sin(cos(x))"#)]
    Compose(ComposeCommand),

    #[clap(about = r#"Fold operands left to right with named operators"#)]
    Zip(ZipCommand),

    #[clap(about = r#"Print the largest of the given values"#)]
    Max(MaxCommand),
}

fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let config = Config::from_env()?;
    logging::initialize_logging(&config.log_filter);
    tracing::debug!(?config, "resolved configuration");

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let report = match args.command {
        Command::Compose(command) => command.run(&config),
        Command::Zip(command) => command.run(),
        Command::Max(command) => command.run(),
    }?;

    println!("{}", report.render(format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_zip() {
        let cli = Cli::try_parse_from([
            "hodemo",
            "zip",
            "--operands",
            "1,1,3,0,4",
            "--operators",
            "add,mult,add,div",
            "--steps",
        ])
        .unwrap();
        assert!(!cli.json);
        let Command::Zip(command) = cli.command else {
            panic!("expected zip");
        };
        assert_eq!(command.run().unwrap().to_string().lines().last(), Some("1"));
    }

    #[test]
    fn parses_negative_operands() {
        let cli = Cli::try_parse_from([
            "hodemo",
            "--json",
            "zip",
            "--operands=-7,2",
            "--operators",
            "div",
        ])
        .unwrap();
        assert!(cli.json);
        let Command::Zip(command) = cli.command else {
            panic!("expected zip");
        };
        assert_eq!(command.run().unwrap().to_string(), "-3");
    }

    #[test]
    fn rejects_unknown_operator() {
        let result = Cli::try_parse_from([
            "hodemo",
            "zip",
            "--operands",
            "1,2",
            "--operators",
            "pow",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_max() {
        let cli = Cli::try_parse_from(["hodemo", "max", "3", "-9", "2"]).unwrap();
        let Command::Max(command) = cli.command else {
            panic!("expected max");
        };
        assert_eq!(command.run().unwrap().to_string(), "3");
    }

    #[test]
    fn parses_compose() {
        let cli = Cli::try_parse_from(["hodemo", "compose", "--at", "5"]).unwrap();
        let Command::Compose(command) = cli.command else {
            panic!("expected compose");
        };
        let report = command.run(&Config::default()).unwrap();
        assert_eq!(report.to_string(), 5.0f64.cos().sin().to_string());
    }
}
