use glam::IVec3;
use terrascope_core::types::VoxelCoord;

use crate::error::ExplorerError;

fn parse_axis(axis: char, value: &str) -> Result<i32, ExplorerError> {
    value
        .trim()
        .parse()
        .map_err(|_| ExplorerError::InvalidCoordinateInput {
            axis,
            value: value.to_string(),
        })
}

/// Parse three coordinate fields as typed by a user.
///
/// Blank or non-integer fields are rejected before any derivation runs.
pub fn parse_voxel_input(x: &str, y: &str, z: &str) -> Result<VoxelCoord, ExplorerError> {
    Ok(IVec3::new(
        parse_axis('x', x)?,
        parse_axis('y', y)?,
        parse_axis('z', z)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_input() {
        let v = parse_voxel_input("12", " -40 ", "+7").expect("valid input");
        assert_eq!(v, IVec3::new(12, -40, 7));
    }

    #[test]
    fn test_blank_field_rejected() {
        let result = parse_voxel_input("1", "", "3");
        assert!(matches!(
            result,
            Err(ExplorerError::InvalidCoordinateInput { axis: 'y', .. })
        ));
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let result = parse_voxel_input("1", "2", "12abc");
        match result {
            Err(ExplorerError::InvalidCoordinateInput { axis, value }) => {
                assert_eq!(axis, 'z');
                assert_eq!(value, "12abc");
            }
            other => panic!("expected InvalidCoordinateInput, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(parse_voxel_input("99999999999", "0", "0").is_err());
    }
}
