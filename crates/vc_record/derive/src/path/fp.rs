pub(crate) use vc_macro_utils::full_path::{ControlFlowFP, ModulePathFP};
