use std::collections::BTreeSet;

use terrascope_core::constants::CHUNK_WIDTH;
use terrascope_core::types::VoxelCoord;
use terrascope_explorer::ResolvedChunk;
use terrascope_terrain::{BlockPalette, ChunkSlice, TerrainHeader};

const W: usize = CHUNK_WIDTH as usize;

/// Resolution trace followed by the final address.
pub fn format_resolution(resolved: &ResolvedChunk) -> String {
    format!(
        "{}\n\nChunk address: {}\n",
        resolved.trace,
        resolved.address.to_checksum()
    )
}

/// Header fields and how much of the grid the payload carried.
pub fn format_header(header: &TerrainHeader, present_cells: usize) -> String {
    let total = W * W * W;
    let mut out = String::new();
    out.push_str(&format!("Version: 0x{:04x} ({})\n", header.version, header.version));
    out.push_str(&format!("Biome: 0x{:02x} ({})\n", header.biome, header.biome));
    out.push_str(&format!("Surface: 0x{:02x} ({})\n", header.surface, header.surface));
    if present_cells < total {
        out.push_str(&format!(
            "Cells: {present_cells}/{total} (partial, missing cells read as 0)\n"
        ));
    } else {
        out.push_str(&format!("Cells: {total}/{total}\n"));
    }
    out
}

/// Text rendering of a Y cross-section: rows are Z, columns are X.
///
/// `origin` is the chunk's minimum-corner voxel, used for axis labels.
/// `highlight` brackets one (x, z) cell.
pub fn format_slice(
    slice: &ChunkSlice,
    origin: VoxelCoord,
    palette: &BlockPalette,
    highlight: Option<(usize, usize)>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Y: {}\n", origin.y + slice.relative_y as i32));
    out.push_str(&format!(
        "x: {} .. {}, z: {} .. {}\n",
        origin.x,
        origin.x + CHUNK_WIDTH - 1,
        origin.z,
        origin.z + CHUNK_WIDTH - 1
    ));

    let mut seen = BTreeSet::new();
    for z in 0..W {
        out.push_str(&format!("{:>6} ", origin.z + z as i32));
        for x in 0..W {
            let block = slice.get(x, z);
            seen.insert(block);
            if highlight == Some((x, z)) {
                out.push_str(&format!("[{block:>3}]"));
            } else {
                out.push_str(&format!(" {block:>3} "));
            }
        }
        out.push('\n');
    }

    out.push_str("\nLegend:\n");
    for block in seen {
        let label = match palette.get(block) {
            Some(entry) => format!("{} {}", entry.name, entry.color),
            None if block == 0 => "no data".to_string(),
            None => "transparent".to_string(),
        };
        out.push_str(&format!("{block:>5}  {label}\n"));
    }
    out
}
