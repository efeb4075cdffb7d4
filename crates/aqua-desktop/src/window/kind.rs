use serde::{Deserialize, Serialize};

/// The closed set of applications a window can host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// Command interpreter console
    Terminal,
    /// Directory listing
    FileBrowser,
    /// System information panel
    About,
    /// Modal text editor
    Editor,
}
