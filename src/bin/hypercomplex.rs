use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use hypercomplex::{DualQuaternion, Quaternion, Vector3};

    #[derive(Debug, Parser)]
    #[command(about = "Hypercomplex number types", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Construct and print two demonstration dual quaternions
        Demo {
            /// Normalize the dual quaternions before printing them
            #[arg(long)]
            normalize: bool,

            /// Invert the dual quaternions before printing them
            #[arg(long)]
            invert: bool,

            /// Also print the dual norm of each dual quaternion
            #[arg(long)]
            norm: bool,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Demo {
                normalize,
                invert,
                norm,
            } => demo(normalize, invert, norm),
        }
    }

    fn demo(normalize: bool, invert: bool, print_norm: bool) -> Result<()> {
        let v1 = Vector3::new(0.2, 0.3, 0.4);
        let v2 = Vector3::new(0.1, 0.3, 0.5);
        let v3 = Vector3::new(0.3, 0.1, 0.2);
        let v4 = Vector3::new(0.2, 0.2, 0.3);

        let q1 = Quaternion::new(1.0, v1);
        let q2 = Quaternion::new(0.2, v2);
        let q3 = Quaternion::new(0.2, v3);
        let q4 = Quaternion::new(0.1, v4);

        let mut dual_quaternions = [DualQuaternion::new(q1, q2), DualQuaternion::new(q3, q4)];

        for dq in &mut dual_quaternions {
            if normalize {
                dq.normalize()?;
            }
            if invert {
                dq.inverse()?;
            }
        }

        for dq in &dual_quaternions {
            println!("{dq}");
            if print_norm {
                println!("norm: {}", dq.norm()?);
            }
        }

        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
