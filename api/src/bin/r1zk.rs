#![allow(clippy::upper_case_acronyms)]

use r1zk::commands;
use r1zk::errors::ApiError;
use r1zk::Groth16Error;
use rand_chacha::ChaChaRng;
use rand_core::SeedableRng;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;
use tracing::Level;

#[derive(StructOpt, Debug)]
#[structopt(
    about = "Groth16 trusted setup, prover and verifier over JSON R1CS circuits.",
    rename_all = "kebab-case"
)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    #[structopt(subcommand)]
    action: Actions,
}

#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
enum Actions {
    /// Generates pk.json and vk.json for a circuit
    Setup {
        #[structopt(long, parse(from_os_str), default_value = "r1cs.json")]
        r1cs: PathBuf,
        /// Only the number of public inputs is used
        #[structopt(long, parse(from_os_str), default_value = "witness.json")]
        witness: PathBuf,
        #[structopt(long, parse(from_os_str), default_value = ".")]
        out_dir: PathBuf,
    },

    /// Generates a proof for a witness
    Prove {
        #[structopt(long, parse(from_os_str), default_value = "pk.json")]
        pk: PathBuf,
        #[structopt(long, parse(from_os_str), default_value = "r1cs.json")]
        r1cs: PathBuf,
        #[structopt(long, parse(from_os_str), default_value = "witness.json")]
        witness: PathBuf,
        #[structopt(long, parse(from_os_str), default_value = "proof.json")]
        proof: PathBuf,
        /// Randomize the proof with fresh blinding scalars
        #[structopt(long)]
        blind: bool,
    },

    /// Checks a proof against the public inputs of a witness file
    Verify {
        #[structopt(long, parse(from_os_str), default_value = "vk.json")]
        vk: PathBuf,
        #[structopt(long, parse(from_os_str), default_value = "proof.json")]
        proof: PathBuf,
        #[structopt(long, parse(from_os_str), default_value = "witness.json")]
        witness: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    use Actions::*;
    let cli = Cli::from_args();
    init_logging(cli.verbose);

    let result = match cli.action {
        Setup {
            r1cs,
            witness,
            out_dir,
        } => commands::setup(&mut ChaChaRng::from_entropy(), &r1cs, &witness, &out_dir).map(|_| 0),

        Prove {
            pk,
            r1cs,
            witness,
            proof,
            blind,
        } => commands::prove(
            &mut ChaChaRng::from_entropy(),
            &pk,
            &r1cs,
            &witness,
            &proof,
            blind,
        )
        .map(|_| 0),

        Verify { vk, proof, witness } => match commands::verify(&vk, &proof, &witness) {
            Ok(true) => {
                println!("proof is valid");
                Ok(0)
            }
            Ok(false) | Err(ApiError::Groth16(Groth16Error::PairingFailure)) => {
                println!("proof is invalid");
                Ok(1)
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    }
}
