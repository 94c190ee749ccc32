use std::path::PathBuf;

use rowscan_build::TargetTypes;

use crate::Cli;
use crate::output::OutputTarget;

/// Everything a run needs, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub targets: TargetTypes,
    pub output: OutputTarget,
    pub runtime_path: String,
    pub inputs: Vec<PathBuf>,
}

impl GenerateConfig {
    /// Build the run configuration, or `None` when no type names were given.
    pub fn from_cli(cli: Cli) -> Option<Self> {
        let targets = TargetTypes::new(cli.types);
        if targets.is_empty() {
            return None;
        }

        let output = match cli.output {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Stdout,
        };

        Some(Self {
            targets,
            output,
            runtime_path: cli.runtime,
            inputs: cli.inputs,
        })
    }
}
