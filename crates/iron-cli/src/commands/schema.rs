use anyhow::Context;
use iron_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output;

/// Handle `iron schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let Some(name) = args.type_name.as_deref() else {
        return output::output(&registry.list(), flags);
    };

    let schema = registry.get(name).with_context(|| {
        format!(
            "unknown schema '{name}'; available: {}",
            registry.list().join(", ")
        )
    })?;
    output::output(schema, flags)
}
