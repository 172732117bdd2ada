use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use urdf_chain::{read_urdf, SerialChain};

/// Print the link registry of a URDF file and optionally a serial chain.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// URDF file to read
    urdf: PathBuf,

    /// Assemble the chain from the base to this link
    #[arg(long)]
    leaf: Option<String>,

    /// Joint coordinates for forward kinematics, one per chain link
    #[arg(long, num_args = 1.., allow_negative_numbers = true, requires = "leaf")]
    q: Vec<f64>,
}

fn run(args: &Args) -> urdf_chain::Result<()> {
    let registry = read_urdf(&args.urdf)?;
    info!("read {} links from {}", registry.len(), args.urdf.display());

    for (name, entry) in registry.iter() {
        let s = entry.link.screw_axis();
        println!(
            "{:<24} parent: {:<24} {:?} mass: {:>10.4} screw: [{:.4}, {:.4}, {:.4}, {:.4}, {:.4}, {:.4}]",
            name,
            entry.parent.as_deref().unwrap_or("-"),
            entry.link.joint_type(),
            entry.link.mass(),
            s[0],
            s[1],
            s[2],
            s[3],
            s[4],
            s[5],
        );
    }

    let Some(leaf) = &args.leaf else {
        return Ok(());
    };
    let chain = SerialChain::from_registry(&registry, leaf)?;
    println!("chain: {}", chain.names().join(" -> "));

    let q = if args.q.is_empty() {
        vec![0.0; chain.dof()]
    } else {
        args.q.clone()
    };
    for (name, pose) in chain.names().iter().zip(chain.forward_kinematics(&q)?) {
        let t = pose.translation.vector;
        let (roll, pitch, yaw) = pose.rotation.euler_angles();
        println!(
            "{:<24} xyz: [{:.4}, {:.4}, {:.4}] rpy: [{:.4}, {:.4}, {:.4}]",
            name, t.x, t.y, t.z, roll, pitch, yaw
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
