use circ_pack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::TGFConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct TGFOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: TGFConfig,
}
