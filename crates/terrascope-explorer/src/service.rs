use glam::IVec3;
use serde::Serialize;
use terrascope_address::{resolve_chunk_address, Address, Salt};
use terrascope_core::math::{chunk_to_voxel, voxel_to_chunk, voxel_to_local};
use terrascope_core::types::{ChunkCoord, VoxelCoord};
use terrascope_terrain::blueprint::{blueprint_diff_with_overrides, BlueprintBlock, BlueprintRequest};
use terrascope_terrain::slice::{slice_with_overrides, ChunkSlice};
use terrascope_terrain::{decode, DecodedChunk, LiveOverrides, TerrainHeader};

use crate::config::ExplorerConfig;
use crate::error::ExplorerError;
use crate::source::BytecodeSource;
use crate::trace::Trace;

/// A voxel coordinate resolved down to its chunk's storage address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedChunk {
    pub voxel: VoxelCoord,
    pub chunk: ChunkCoord,
    /// Minimum-corner voxel of the chunk.
    pub origin: VoxelCoord,
    pub salt: Salt,
    pub proxy: Address,
    pub address: Address,
    pub trace: Trace,
}

/// A fetched and decoded chunk.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkReport {
    pub resolved: ResolvedChunk,
    pub header: TerrainHeader,
    pub present_cells: usize,
    #[serde(skip)]
    pub decoded: DecodedChunk,
}

impl ChunkReport {
    /// Y cross-section at world (or chunk-relative) `y`, overrides applied.
    pub fn slice<O: LiveOverrides + ?Sized>(&self, y: i32, overrides: &O) -> ChunkSlice {
        slice_with_overrides(&self.decoded.grid, self.resolved.origin, y, overrides)
    }

    pub fn blueprint<O: LiveOverrides + ?Sized>(&self, overrides: &O) -> Vec<BlueprintBlock> {
        blueprint_diff_with_overrides(&self.decoded.grid, self.resolved.origin, overrides)
    }

    /// Placement request for the whole chunk, or None when there is nothing to draw.
    pub fn blueprint_request<O: LiveOverrides + ?Sized>(
        &self,
        overrides: &O,
    ) -> Option<BlueprintRequest> {
        let blocks = self.blueprint(overrides);
        (!blocks.is_empty()).then(|| BlueprintRequest::new(blocks))
    }

    /// Chunk-relative (x, z) of a voxel if it lies inside this chunk.
    pub fn highlight(&self, voxel: VoxelCoord) -> Option<(usize, usize)> {
        (voxel_to_chunk(voxel) == self.resolved.chunk).then(|| {
            let local = voxel_to_local(voxel);
            (local.x as usize, local.z as usize)
        })
    }
}

/// Voxel coordinate in, decoded terrain out.
///
/// Derivation is pure; only `fetch` touches the bytecode source.
pub struct ChunkAddressService<S> {
    config: ExplorerConfig,
    source: S,
}

impl<S> ChunkAddressService<S> {
    pub fn new(config: ExplorerConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Derive the chunk, salt, proxy and final address for a voxel.
    pub fn resolve(&self, voxel: VoxelCoord) -> ResolvedChunk {
        let mut trace = Trace::new();
        trace.push(format_args!("Input Voxel Coords: {}", fmt_coord(voxel)));

        let chunk = voxel_to_chunk(voxel);
        trace.push(format_args!("Calculated Chunk Coords: {}", fmt_coord(chunk)));

        let derived = resolve_chunk_address(
            &self.config.world_address,
            chunk,
            Some(&self.config.proxy_init_code_hash),
        );
        trace.push(format_args!("Generated Salt (32 bytes): {}", derived.salt));
        trace.push(format_args!("CREATE2 Proxy Address: {}", derived.proxy.to_checksum()));
        trace.push(format_args!(
            "Final CREATE3 Chunk Address: {}",
            derived.address.to_checksum()
        ));

        ResolvedChunk {
            voxel,
            chunk,
            origin: chunk_to_voxel(chunk),
            salt: derived.salt,
            proxy: derived.proxy,
            address: derived.address,
            trace,
        }
    }
}

impl<S: BytecodeSource> ChunkAddressService<S> {
    /// Resolve a voxel, fetch its chunk's bytecode and decode it.
    pub fn fetch(&self, voxel: VoxelCoord) -> Result<ChunkReport, ExplorerError> {
        let resolved = self.resolve(voxel);

        let bytecode = self
            .source
            .fetch_bytecode(&resolved.address)?
            .filter(|code| !code.is_empty())
            .ok_or(ExplorerError::ChunkNotExplored {
                address: resolved.address,
            })?;
        log::info!(
            "fetched {} bytes for chunk {} at {}",
            bytecode.len(),
            fmt_coord(resolved.chunk),
            resolved.address
        );

        let decoded = decode(&bytecode)?;
        Ok(ChunkReport {
            header: decoded.header,
            present_cells: decoded.present_cells,
            resolved,
            decoded,
        })
    }
}

fn fmt_coord(v: IVec3) -> String {
    format!("[{}, {}, {}]", v.x, v.y, v.z)
}
