// This file is part of supra-conversion.
// Copyright (C) 2025 Supra Conversion Contributors
// SPDX-License-Identifier: Apache-2.0
// Licensed under the Apache License, Version 2.0 (the "License");
// You may not use this file except in compliance with the License.
// You may obtain a copy of the License at
// http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command-line access to the Supra BCS conversion helpers.
#![deny(unreachable_pub)]
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use supra_conversion::display::{bytes_to_hex, hex_to_bytes};
use supra_conversion::types::parse_integer;
use supra_conversion::{
    BcsBackend, CanonicalBackend, ConversionConfig, ConversionError, ConversionUtils, ElementType,
    NativeBackend, VectorValues,
};
use tracing::{Level, debug, error};
use tracing_subscriber::Registry;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Whether to output debugging information
    #[arg(short, long, env = "SUPRA_CONVERT_VERBOSE")]
    verbose: bool,
    /// The serialization backend to encode with
    #[arg(long, value_enum, default_value_t = BackendKind::Native, env = "SUPRA_CONVERT_BACKEND")]
    backend: BackendKind,
    /// A JSON conversion config file
    #[arg(long, env = "SUPRA_CONVERT_CONFIG")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Subcommands,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum BackendKind {
    Native,
    Bcs,
}

#[derive(Subcommand, Debug)]
enum Subcommands {
    /// Encode a Move identifier
    Identifier { name: String },
    /// Encode a string
    String { value: String },
    /// Decode an encoded string given as hex
    DecodeString { hex: String },
    /// Encode a hex account address
    Address { hex: String },
    /// Encode a u64 (decimal or 0x hex)
    U64 { value: String },
    /// Encode a u256 (decimal or 0x hex)
    U256 { value: String },
    /// Encode a bool
    Bool {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    /// Encode a homogeneous vector
    Vector {
        /// The element type: u8, u64, bool, string or address
        #[arg(long = "type")]
        element_type: ElementType,
        values: Vec<String>,
    },
    /// Decode an encoded vector<u8> given as hex
    DecodeBytes { hex: String },
    /// Render an on-chain hex value for display
    Display {
        hex: String,
        /// The Move type of the value
        #[arg(long = "type", default_value = "String")]
        type_name: String,
    },
    /// Print the hex of a string's UTF-8 bytes
    TextToHex { text: String },
}

fn run<B: CanonicalBackend>(
    utils: &ConversionUtils<B>,
    command: &Subcommands,
) -> Result<String, ConversionError> {
    debug!(?command, "running conversion");
    Ok(match command {
        Subcommands::Identifier { name } => bytes_to_hex(&utils.string_to_identifier_bytes(name)?),
        Subcommands::String { value } => bytes_to_hex(&utils.serialize_string(value)?),
        Subcommands::DecodeString { hex } => utils.deserialize_string(&hex_to_bytes(hex)?)?,
        Subcommands::Address { hex } => bytes_to_hex(&utils.address_to_bytes(hex)?),
        Subcommands::U64 { value } => bytes_to_hex(&utils.serialize_u64(&parse_integer(value)?)?),
        Subcommands::U256 { value } => {
            bytes_to_hex(&utils.serialize_u256(&parse_integer(value)?)?)
        }
        Subcommands::Bool { value } => bytes_to_hex(&utils.serialize_bool(*value)?),
        Subcommands::Vector {
            element_type,
            values,
        } => bytes_to_hex(&utils.serialize_vector(&VectorValues::parse(*element_type, values)?)?),
        Subcommands::DecodeBytes { hex } => {
            bytes_to_hex(&utils.deserialize_vector_of_bytes(&hex_to_bytes(hex)?)?)
        }
        Subcommands::Display { hex, type_name } => {
            utils.hex_to_display_string_for_type(hex, type_name)
        }
        Subcommands::TextToHex { text } => utils.text_to_hex(text),
    })
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    let result = args
        .config
        .as_deref()
        .map(ConversionConfig::from_json_file)
        .transpose()
        .and_then(|config| {
            let config = config.unwrap_or_default();
            match args.backend {
                BackendKind::Native => run(
                    &ConversionUtils::with_backend(NativeBackend).with_config(config),
                    &args.command,
                ),
                BackendKind::Bcs => run(
                    &ConversionUtils::with_backend(BcsBackend).with_config(config),
                    &args.command,
                ),
            }
        });
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(Targets::new().with_default(level)),
        )
        .try_init()
        .ok();
}
