use serde::{Deserialize, Serialize};

use sheetfit::io::ext_repr::ExtReport;

use crate::config::SheetfitConfig;

/// Contents of `report.json` written by `compute --output-folder`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CalcOutput {
    #[serde(flatten)]
    pub report: ExtReport,
    pub config: SheetfitConfig,
    /// RFC 3339 timestamp of the computation
    pub created: String,
}
