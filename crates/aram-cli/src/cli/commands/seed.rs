use aram_core::{generate_seed, AramError};

use super::SeedArgs;
use crate::exit_codes::SUCCESS;

pub fn run(args: SeedArgs) -> anyhow::Result<i32> {
    let length = usize::try_from(args.length).map_err(|_| AramError::InvalidArgument {
        message: format!("seed length must be positive, got {}", args.length),
    })?;

    for _ in 0..args.count {
        println!("{}", generate_seed(length, &args.alphabet)?);
    }
    Ok(SUCCESS)
}
