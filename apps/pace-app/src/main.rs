//! Pace configuration CLI.
//!
//! Provides four modes of operation:
//! - `list`: Print the registered robots and environments
//! - `show`: Resolve an environment and print it as TOML
//! - `check`: Validate an environment TOML file from disk
//! - `sample`: Draw identification parameter vectors within the task bounds

use clap::{Parser, Subcommand};

use pace_core::error::PaceError;
use pace_registry::prelude::ConfigRegistry;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Pace sim-to-real configuration registry.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the registered robots and environments.
    List,

    /// Resolve an environment and print it as TOML.
    Show {
        /// Environment name (e.g. go2, bigreddog).
        name: String,
    },

    /// Validate an environment TOML file.
    Check {
        /// Path to the TOML file.
        file: String,
    },

    /// Draw identification parameter vectors within the task bounds.
    Sample {
        /// Environment name.
        name: String,

        /// Random seed.
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Number of vectors to draw.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_list(registry: &ConfigRegistry) {
    println!("robots:");
    for name in registry.robot_names() {
        let joints = registry.robot(name).map_or(0, |r| r.joint_count());
        println!("  {name} ({joints} joints)");
    }
    println!();
    println!("environments:");
    for name in registry.environment_names() {
        if let Ok(env) = registry.resolve(name) {
            println!(
                "  {name} (dt={}, decimation={}, control={:.0} Hz)",
                env.sim.dt,
                env.sim.decimation,
                env.sim.control_hz()
            );
        }
    }
}

fn run_show(registry: &ConfigRegistry, name: &str) -> Result<(), PaceError> {
    let env = registry.resolve(name)?;
    print!("{}", env.to_toml_string().map_err(PaceError::Config)?);
    Ok(())
}

fn run_check(file: &str) -> Result<(), PaceError> {
    use pace_registry::prelude::EnvironmentConfig;

    let env = EnvironmentConfig::from_file(file).map_err(PaceError::Config)?;
    println!(
        "{file}: ok (environment `{}`, robot `{}`, {} joints, {} bound rows)",
        env.name,
        env.robot.name,
        env.robot.joint_count(),
        env.task.bounds.len()
    );
    Ok(())
}

fn run_sample(registry: &ConfigRegistry, name: &str, seed: u64, count: u32) -> Result<(), PaceError> {
    let env = registry.resolve(name)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for i in 0..count {
        let vector = env.task.bounds.sample(&mut rng);
        println!("sample {} (seed {seed}):", i + 1);
        for (label, block) in [
            ("armature", vector.armature()),
            ("damping", vector.damping()),
            ("friction", vector.friction()),
            ("encoder_bias", vector.encoder_bias()),
        ] {
            let values: Vec<String> = block.iter().map(|v| format!("{v:.4}")).collect();
            println!("  {label}: [{}]", values.join(", "));
        }
        println!("  delay: {} steps", vector.delay_steps());
    }
    Ok(())
}

fn run_info(registry: &ConfigRegistry) {
    println!("pace v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  pace-core     {}", env!("CARGO_PKG_VERSION"));
    println!("  pace-actuator {}", env!("CARGO_PKG_VERSION"));
    println!("  pace-task     {}", env!("CARGO_PKG_VERSION"));
    println!("  pace-assets   {}", env!("CARGO_PKG_VERSION"));
    println!("  pace-registry {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!(
        "environments: {}",
        registry.environment_names().collect::<Vec<_>>().join(", ")
    );
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    let registry = match ConfigRegistry::builtin() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Show { name }) => run_show(&registry, &name),
        Some(Commands::Check { file }) => run_check(&file),
        Some(Commands::Sample { name, seed, count }) => run_sample(&registry, &name, seed, count),
        Some(Commands::Info) => {
            run_info(&registry);
            Ok(())
        }
        Some(Commands::List) | None => {
            run_list(&registry);
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
