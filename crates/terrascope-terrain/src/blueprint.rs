use glam::IVec3;
use serde::Serialize;
use terrascope_core::constants::{BLOCK_AIR, BLUEPRINT_BOUNDARY_MARKER, BLUEPRINT_CLEAR_TO_AIR};
use terrascope_core::math::{is_boundary, local_to_voxel};
use terrascope_core::types::VoxelCoord;

use crate::grid::TerrainGrid;
use crate::overrides::{LiveOverrides, NoOverrides};

/// One placement for the external blueprint API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintBlock {
    pub object_type_id: u16,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub orientation: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintOptions {
    pub show_blocks_to_mine: bool,
    pub show_blocks_to_build: bool,
}

impl Default for BlueprintOptions {
    fn default() -> Self {
        Self {
            show_blocks_to_mine: true,
            show_blocks_to_build: true,
        }
    }
}

/// Request body for the placement API's `setBlueprint` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlueprintRequest {
    pub blocks: Vec<BlueprintBlock>,
    pub options: BlueprintOptions,
}

impl BlueprintRequest {
    pub fn new(blocks: Vec<BlueprintBlock>) -> Self {
        Self {
            blocks,
            options: BlueprintOptions::default(),
        }
    }

    /// An empty request, which removes any overlay currently shown.
    pub fn clear() -> Self {
        Self::new(Vec::new())
    }
}

/// Blueprint that clears explored terrain and outlines the chunk.
///
/// For each cell in X, Y, Z order:
/// - occupied (> 1): emit object 1, so the cell shows as air
/// - air on the chunk shell: emit the boundary marker
/// - no data (0): skipped
pub fn blueprint_diff(grid: &TerrainGrid, origin: VoxelCoord) -> Vec<BlueprintBlock> {
    blueprint_diff_with_overrides(grid, origin, &NoOverrides)
}

/// Same as [`blueprint_diff`], reading each cell through live overrides first.
pub fn blueprint_diff_with_overrides<O: LiveOverrides + ?Sized>(
    grid: &TerrainGrid,
    origin: VoxelCoord,
    overrides: &O,
) -> Vec<BlueprintBlock> {
    let mut blocks = Vec::new();
    for (x, y, z, decoded) in grid.iter() {
        let world = local_to_voxel(origin, IVec3::new(x as i32, y as i32, z as i32));
        let block = overrides.block_override(world).unwrap_or(decoded);

        let object_type_id = if block > BLOCK_AIR {
            BLUEPRINT_CLEAR_TO_AIR
        } else if block == BLOCK_AIR && is_boundary(x, y, z) {
            BLUEPRINT_BOUNDARY_MARKER
        } else {
            continue;
        };

        blocks.push(BlueprintBlock {
            object_type_id,
            x: world.x,
            y: world.y,
            z: world.z,
            orientation: 0,
        });
    }

    log::debug!("blueprint for chunk at {origin}: {} blocks", blocks.len());
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::OverrideMap;

    #[test]
    fn test_all_air_outlines_boundary() {
        let blocks = blueprint_diff(&TerrainGrid::filled(1), IVec3::ZERO);
        // 16^3 - 14^3 shell cells.
        assert_eq!(blocks.len(), 4096 - 2744);
        assert!(blocks.iter().all(|b| b.object_type_id == 110));
        assert!(blocks
            .iter()
            .all(|b| [b.x, b.y, b.z].iter().any(|&c| c == 0 || c == 15)));
    }

    #[test]
    fn test_no_data_yields_empty_blueprint() {
        assert!(blueprint_diff(&TerrainGrid::empty(), IVec3::new(16, 0, -32)).is_empty());
    }

    #[test]
    fn test_occupied_cells_clear_to_air() {
        let mut grid = TerrainGrid::empty();
        grid.set(0, 0, 0, 4);
        grid.set(7, 7, 7, 21);
        grid.set(8, 8, 8, 1); // interior air: skipped
        let blocks = blueprint_diff(&grid, IVec3::new(-16, 32, 48));
        assert_eq!(
            blocks,
            vec![
                BlueprintBlock {
                    object_type_id: 1,
                    x: -16,
                    y: 32,
                    z: 48,
                    orientation: 0
                },
                BlueprintBlock {
                    object_type_id: 1,
                    x: -9,
                    y: 39,
                    z: 55,
                    orientation: 0
                },
            ]
        );
    }

    #[test]
    fn test_output_order_is_x_major() {
        let mut grid = TerrainGrid::empty();
        grid.set(1, 0, 0, 5);
        grid.set(0, 1, 0, 5);
        grid.set(0, 0, 1, 5);
        let coords: Vec<_> = blueprint_diff(&grid, IVec3::ZERO)
            .iter()
            .map(|b| (b.x, b.y, b.z))
            .collect();
        assert_eq!(coords, vec![(0, 0, 1), (0, 1, 0), (1, 0, 0)]);
    }

    #[test]
    fn test_overrides_change_policy_per_cell() {
        let grid = TerrainGrid::filled(1);
        let overrides: OverrideMap = [
            (IVec3::new(0, 0, 0), 4u8),  // shell air -> occupied
            (IVec3::new(5, 5, 5), 22u8), // interior air -> occupied
            (IVec3::new(15, 0, 0), 0u8), // shell air -> no data
        ]
        .into_iter()
        .collect();
        let blocks = blueprint_diff_with_overrides(&grid, IVec3::ZERO, &overrides);

        let at = |x: i32, y: i32, z: i32| blocks.iter().find(|b| (b.x, b.y, b.z) == (x, y, z));
        assert_eq!(at(0, 0, 0).map(|b| b.object_type_id), Some(1));
        assert_eq!(at(5, 5, 5).map(|b| b.object_type_id), Some(1));
        assert!(at(15, 0, 0).is_none());
        // One shell cell dropped, one interior cell added.
        assert_eq!(blocks.len(), 1352);
    }

    #[test]
    fn test_request_serializes_in_api_shape() {
        let request = BlueprintRequest::new(vec![BlueprintBlock {
            object_type_id: 110,
            x: 1,
            y: 2,
            z: 3,
            orientation: 0,
        }]);
        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(json["blocks"][0]["objectTypeId"], 110);
        assert_eq!(json["options"]["showBlocksToMine"], true);
        assert_eq!(json["options"]["showBlocksToBuild"], true);
        assert!(BlueprintRequest::clear().blocks.is_empty());
    }
}
