use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => commands::add::handle(&args, ctx, flags),
        Commands::Edit(args) => commands::edit::handle(&args, ctx, flags),
        Commands::Delete(args) => commands::delete::handle(&args, ctx, flags),
        Commands::List(args) => commands::list::handle(&args, ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Report(args) => commands::report::handle(&args, ctx, flags),
        Commands::Locations => commands::locations::handle(ctx, flags),
        Commands::Calendar(args) => commands::calendar::handle(&args, ctx, flags),
        Commands::Config => commands::config::handle(ctx, flags),
    }
}
