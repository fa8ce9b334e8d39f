use serde::Serialize;

use volpack::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::FFDConfig;

/// Everything written to the solution file: the input instance, the configuration
/// used and the resulting placement.
#[derive(Serialize, Debug, Clone)]
pub struct Output {
    pub timestamp: String,
    pub instance: ExtInstance,
    pub config: FFDConfig,
    pub solution: ExtSolution,
}
