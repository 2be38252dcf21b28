//! PokeMMO Dex MCP Server
//!
//! Exposes the bot commands as Model Context Protocol tools over stdio, using the rmcp
//! SDK. MCP has no notion of chat channels, so the command-channel gate does not apply.

use std::sync::Arc;

use pokemmo_dex::{render_reply, ChannelGate, Command, Config, Dispatcher, LookupEngine};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

const MCP_AUTHOR: &str = "Trainer";

#[derive(Clone)]
pub struct PokeDexService {
    tool_router: ToolRouter<PokeDexService>,
    dispatcher: Arc<Dispatcher>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NameRequest {
    #[schemars(description = "Name of the Pokemon, e.g. 'bulbasaur' or 'mr-mime'")]
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TypeRequest {
    #[schemars(description = "Name of the type, or 'all' to list every type")]
    pub type_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TierRequest {
    #[schemars(description = "Name of the PvP tier, or 'all' to list every tier")]
    pub tier_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EggGroupRequest {
    #[schemars(description = "Name of the egg group, or 'all' to list every group")]
    pub group_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AbilityRequest {
    #[schemars(description = "Name of the ability to look up")]
    pub ability_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MoveRequest {
    #[schemars(description = "Name of the move to look up")]
    pub move_name: String,
}

#[tool_router]
impl PokeDexService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            tool_router: Self::tool_router(),
            dispatcher: Arc::new(dispatcher),
        }
    }

    fn answer(&self, command: Command, argument: Option<&str>) -> Result<CallToolResult, McpError> {
        let reply = self.dispatcher.run(command, MCP_AUTHOR, argument);
        let text = render_reply(&reply).join("\n\n");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Current in-game day, time, season, Shoal Cave tide and roaming legendaries")]
    async fn game_time(&self) -> Result<CallToolResult, McpError> {
        self.answer(Command::Time, None)
    }

    #[tool(description = "List every bot command and its description")]
    async fn list_commands(&self) -> Result<CallToolResult, McpError> {
        self.answer(Command::Commands, None)
    }

    #[tool(description = "Types, abilities, base stats, capture rate, egg groups and evolutions of a Pokemon")]
    async fn pokemon(
        &self,
        Parameters(request): Parameters<NameRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.answer(Command::Pokemon, Some(&request.name))
    }

    #[tool(description = "Pokemon and moves of a type, or all types")]
    async fn types(
        &self,
        Parameters(request): Parameters<TypeRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.answer(Command::Types, Some(&request.type_name))
    }

    #[tool(description = "Pokemon in a PvP tier, or all tiers")]
    async fn tiers(
        &self,
        Parameters(request): Parameters<TierRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.answer(Command::Tiers, Some(&request.tier_name))
    }

    #[tool(description = "Pokemon species in an egg group, or all egg groups")]
    async fn egg_group(
        &self,
        Parameters(request): Parameters<EggGroupRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.answer(Command::EggGroup, Some(&request.group_name))
    }

    #[tool(description = "Egg moves of a Pokemon with up to 30 breeding chains each")]
    async fn egg_moves(
        &self,
        Parameters(request): Parameters<NameRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.answer(Command::EggMoves, Some(&request.name))
    }

    #[tool(description = "Wild encounter locations of a Pokemon")]
    async fn locations(
        &self,
        Parameters(request): Parameters<NameRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.answer(Command::Locations, Some(&request.name))
    }

    #[tool(description = "Moves a Pokemon can learn, by level or by other methods")]
    async fn learnable_moves(
        &self,
        Parameters(request): Parameters<NameRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.answer(Command::LearnMoves, Some(&request.name))
    }

    #[tool(description = "Effect of an ability and the Pokemon that have it")]
    async fn ability(
        &self,
        Parameters(request): Parameters<AbilityRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.answer(Command::Ability, Some(&request.ability_name))
    }

    #[tool(description = "Type, power, PP, accuracy and effect of a move and the Pokemon that learn it")]
    async fn lookup_move(
        &self,
        Parameters(request): Parameters<MoveRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.answer(Command::Move, Some(&request.move_name))
    }
}

#[tool_handler]
impl ServerHandler for PokeDexService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    info!(?config, "PokeMMO Dex MCP server starting");

    let dispatcher = Dispatcher::new(LookupEngine::new(config.data_store()), ChannelGate::open());
    let service = PokeDexService::new(dispatcher);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    info!("server running, waiting for shutdown");
    let quit_reason = server.waiting().await?;

    info!(?quit_reason, "PokeMMO Dex MCP server exiting");
    Ok(())
}
