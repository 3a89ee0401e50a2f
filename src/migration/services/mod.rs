mod asset_flag_resolver;
mod entry_parser;
mod item_emitter;
mod section_walker;

pub use asset_flag_resolver::{AssetFlagResolver, PRIVATE_ASSETS_ALL};
pub use entry_parser::DependencyEntryParser;
pub use item_emitter::ItemEmitter;
pub use section_walker::{DependencySectionWalker, WalkSummary};
