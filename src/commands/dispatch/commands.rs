//! Command implementations for all trains commands

use crate::cli::{Commands, CountArgs, RoutesArgs};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{count, distance, graph, routes, shortest};
use trains_core::error::{Result, TrainsError};
use trains_core::graph::RouteBound;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Distance { route } => execute_distance(ctx, route),
            Commands::Shortest { from, to } => {
                let service = ctx.route_service()?;
                shortest::execute(ctx.cli, &service, *from, *to)
            }
            Commands::Routes(args) => execute_routes(ctx, args),
            Commands::Count(args) => execute_count(ctx, args),
            Commands::Graph => {
                let service = ctx.route_service()?;
                graph::execute(ctx.cli, service.graph())
            }
        };
        tracing::debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}

fn execute_distance(ctx: &CommandContext, route: &str) -> Result<()> {
    let route = route.parse()?;
    let service = ctx.route_service()?;
    distance::execute(ctx.cli, &service, &route)
}

fn execute_routes(ctx: &CommandContext, args: &RoutesArgs) -> Result<()> {
    let bound = match (args.max_stops, args.exact_stops) {
        (_, Some(n)) => RouteBound::exact_stops(n),
        (Some(n), None) => RouteBound::max_stops(n),
        (None, None) => {
            return Err(TrainsError::UsageError(
                "routes needs --max-stops or --exact-stops".to_string(),
            ))
        }
    };
    let service = ctx.enumerating_service(&args.limits)?;
    routes::execute(ctx.cli, &service, args.from, args.to, bound)
}

fn execute_count(ctx: &CommandContext, args: &CountArgs) -> Result<()> {
    let service = ctx.enumerating_service(&args.limits)?;
    count::execute(ctx.cli, &service, args.from, args.to, args.max_distance)
}
