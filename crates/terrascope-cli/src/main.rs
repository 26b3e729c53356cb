use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use glam::IVec3;
use terrascope_address::{Address, CodeHash};
use terrascope_cli::report;
use terrascope_cli::CliError;
use terrascope_core::math::{chunk_to_voxel, chunk_y_range, voxel_to_chunk};
use terrascope_explorer::{ChunkAddressService, DirSource, ExplorerConfig, MemorySource};
use terrascope_terrain::{
    blueprint_diff, decode_hex, slice, BlockPalette, BlueprintRequest, NoOverrides,
};

#[derive(Parser)]
#[command(name = "terrascope", about = "Locate and decode on-chain terrain chunks")]
struct Cli {
    /// Explorer config (RON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// World (deployer) address, overrides the config
    #[arg(long, global = true)]
    world: Option<Address>,
    /// Proxy init-code hash, overrides the config
    #[arg(long, global = true)]
    proxy_hash: Option<CodeHash>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the chunk address for a voxel and print every step
    Resolve {
        #[command(flatten)]
        voxel: VoxelArgs,
    },
    /// Convert voxel coordinates to chunk coordinates
    ChunkCoords {
        #[command(flatten)]
        voxel: VoxelArgs,
    },
    /// Convert chunk coordinates to the chunk's minimum-corner voxel
    VoxelCoords {
        #[arg(long, allow_hyphen_values = true)]
        cx: i32,
        #[arg(long, allow_hyphen_values = true)]
        cy: i32,
        #[arg(long, allow_hyphen_values = true)]
        cz: i32,
    },
    /// Decode a terrain payload header
    Decode {
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Print one Y cross-section of a terrain payload
    Slice {
        /// World Y (wraps to the chunk-relative layer)
        #[arg(long, allow_hyphen_values = true)]
        y: i32,
        /// Highlight one cell (chunk-relative X and Z)
        #[arg(long, num_args = 2, value_names = ["X", "Z"])]
        mark: Option<Vec<usize>>,
        /// Block palette (RON)
        #[arg(long)]
        palette: Option<PathBuf>,
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Print the blueprint request for a terrain payload as JSON
    Blueprint {
        #[arg(long, allow_hyphen_values = true)]
        cx: i32,
        #[arg(long, allow_hyphen_values = true)]
        cy: i32,
        #[arg(long, allow_hyphen_values = true)]
        cz: i32,
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Resolve, load bytecode from a dump directory, and decode
    Fetch {
        #[command(flatten)]
        voxel: VoxelArgs,
        /// Directory of <address>.hex bytecode files
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Block palette (RON)
        #[arg(long)]
        palette: Option<PathBuf>,
        /// Also print the blueprint request
        #[arg(long)]
        blueprint: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct VoxelArgs {
    #[arg(long, allow_hyphen_values = true)]
    x: String,
    #[arg(long, allow_hyphen_values = true)]
    y: String,
    #[arg(long, allow_hyphen_values = true)]
    z: String,
}

#[derive(Args)]
struct PayloadArgs {
    /// Payload as hex, with or without 0x
    #[arg(long, conflicts_with = "file")]
    hex: Option<String>,
    /// File containing the payload as hex
    #[arg(long)]
    file: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::Resolve { voxel } => {
            let voxel = voxel.parse()?;
            let service = ChunkAddressService::new(config, MemorySource::new());
            print!("{}", report::format_resolution(&service.resolve(voxel)));
        }
        Command::ChunkCoords { voxel } => {
            let chunk = voxel_to_chunk(voxel.parse()?);
            println!("{} {} {}", chunk.x, chunk.y, chunk.z);
        }
        Command::VoxelCoords { cx, cy, cz } => {
            let origin = chunk_to_voxel(IVec3::new(cx, cy, cz));
            println!("{} {} {}", origin.x, origin.y, origin.z);
        }
        Command::Decode { payload } => {
            let chunk = decode_hex(&payload.load()?)?;
            print!("{}", report::format_header(&chunk.header, chunk.present_cells));
        }
        Command::Slice {
            y,
            mark,
            palette,
            payload,
        } => {
            let chunk = decode_hex(&payload.load()?)?;
            let palette = load_palette(palette.as_deref())?;
            let range = chunk_y_range(y);
            let origin = IVec3::new(0, *range.start(), 0);
            let highlight = mark.map(|m| (m[0], m[1]));
            print!(
                "{}",
                report::format_slice(&slice(&chunk.grid, y), origin, &palette, highlight)
            );
        }
        Command::Blueprint {
            cx,
            cy,
            cz,
            payload,
        } => {
            let chunk = decode_hex(&payload.load()?)?;
            let blocks = blueprint_diff(&chunk.grid, chunk_to_voxel(IVec3::new(cx, cy, cz)));
            if blocks.is_empty() {
                log::info!("nothing to draw for chunk [{cx}, {cy}, {cz}]");
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&BlueprintRequest::new(blocks))?
            );
        }
        Command::Fetch {
            voxel,
            data_dir,
            palette,
            blueprint,
            json,
        } => {
            let voxel = voxel.parse()?;
            let dir = data_dir
                .or_else(|| config.data_dir.clone())
                .ok_or(CliError::MissingDataDir)?;
            let service = ChunkAddressService::new(config, DirSource::new(dir));
            let chunk = service.fetch(voxel)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&chunk)?);
            } else {
                let palette = load_palette(palette.as_deref())?;
                print!("{}", report::format_resolution(&chunk.resolved));
                println!();
                print!("{}", report::format_header(&chunk.header, chunk.present_cells));
                println!();
                print!(
                    "{}",
                    report::format_slice(
                        &chunk.slice(voxel.y, &NoOverrides),
                        chunk.resolved.origin,
                        &palette,
                        chunk.highlight(voxel),
                    )
                );
            }

            if blueprint {
                let request = chunk
                    .blueprint_request(&NoOverrides)
                    .unwrap_or_else(BlueprintRequest::clear);
                println!("{}", serde_json::to_string_pretty(&request)?);
            }
        }
    }

    Ok(())
}

impl VoxelArgs {
    fn parse(&self) -> Result<IVec3, CliError> {
        Ok(terrascope_explorer::parse_voxel_input(&self.x, &self.y, &self.z)?)
    }
}

impl PayloadArgs {
    fn load(&self) -> Result<String, CliError> {
        match (&self.hex, &self.file) {
            (Some(hex), _) => Ok(hex.clone()),
            (None, Some(path)) => read_file(path),
            (None, None) => Err(CliError::MissingPayload),
        }
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_config(cli: &Cli) -> Result<ExplorerConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => ExplorerConfig::from_ron(&read_file(path)?)?,
        None => ExplorerConfig::default(),
    };
    if let Some(world) = cli.world {
        config.world_address = world;
    }
    if let Some(hash) = cli.proxy_hash {
        config.proxy_init_code_hash = hash;
    }
    log::debug!("using world {}", config.world_address);
    Ok(config)
}

fn load_palette(path: Option<&Path>) -> Result<BlockPalette, CliError> {
    match path {
        Some(path) => Ok(BlockPalette::from_ron(&read_file(path)?)?),
        None => Ok(BlockPalette::default()),
    }
}
