use crate::args::Args;
pub use sloc_tally_engine::config::{Config, ConfigBuilder};
use sloc_tally_engine::error::EngineError;
use sloc_tally_engine::options::{EntryOrder, ErrorPolicy};

/// Engine settings only; the output format stays with the CLI (`Args::format`).
impl TryFrom<&Args> for Config {
    type Error = EngineError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let order = if args.sort { EntryOrder::Sorted } else { EntryOrder::Listing };
        let on_error = if args.keep_going { ErrorPolicy::Continue } else { ErrorPolicy::Halt };

        Ok(ConfigBuilder::default()
            .root(args.dir.clone())
            .order(order)
            .on_error(on_error)
            .build()?)
    }
}
