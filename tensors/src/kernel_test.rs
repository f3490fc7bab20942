use super::*;
use crate::snapshot::TensorSnapshot;

/// Kernel of shape `[rows][cols][inputs][outputs]`. Each value spells its
/// 1-based indices as digits, so `[0][1][2][3]` holds `1234.0`.
fn kernel(rows: usize, cols: usize, inputs: usize, outputs: usize) -> Kernel {
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    (0..inputs)
                        .map(|i| (0..outputs).map(|o| ((r + 1) * 1000 + (c + 1) * 100 + (i + 1) * 10 + o + 1) as f64).collect())
                        .collect()
                })
                .collect()
        })
        .collect()
}

#[test]
fn channel_bounds_read_first_cell() {
    let bounds = ChannelBounds::of(&kernel(2, 3, 4, 5));
    assert_eq!(bounds, ChannelBounds { inputs: 4, outputs: 5 });
    assert_eq!(bounds.max_input(), Some(3));
    assert_eq!(bounds.max_output(), Some(4));
}

#[test]
fn channel_bounds_degrade_to_zero_for_empty_kernel() {
    let bounds = ChannelBounds::of(&Vec::new());
    assert_eq!(bounds, ChannelBounds::default());
    assert_eq!(bounds.max_input(), None);
    assert_eq!(bounds.max_output(), None);
}

#[test]
fn channel_bounds_at_absent_step_are_zero() {
    let snapshot = TensorSnapshot::from_steps([(3, kernel(1, 1, 2, 2))]);
    assert_eq!(ChannelBounds::at_step(&snapshot, 3), ChannelBounds { inputs: 2, outputs: 2 });
    assert_eq!(ChannelBounds::at_step(&snapshot, 4), ChannelBounds::default());
}

#[test]
fn clamp_pulls_channels_into_range() {
    let bounds = ChannelBounds { inputs: 2, outputs: 3 };
    assert_eq!(bounds.clamp(5, 1), (1, 1));
    assert_eq!(bounds.clamp(0, 9), (0, 2));
    assert_eq!(ChannelBounds::default().clamp(4, 4), (0, 0));
}

#[test]
fn slice_selects_channel_pair_for_every_cell() {
    let grid = slice(&kernel(2, 3, 4, 5), 2, 4);
    assert_eq!(grid.len(), 2);
    assert_eq!(grid[0], vec![Some(1135.0), Some(1235.0), Some(1335.0)]);
    assert_eq!(grid[1], vec![Some(2135.0), Some(2235.0), Some(2335.0)]);
}

#[test]
fn slice_leaves_out_of_range_cells_blank() {
    let mut ragged = kernel(1, 2, 2, 2);
    ragged[0][1].truncate(1);
    let grid = slice(&ragged, 1, 0);
    assert_eq!(grid, vec![vec![Some(1121.0), None]]);
}

#[test]
fn grid_at_absent_step_is_empty() {
    let snapshot = TensorSnapshot::from_steps([(0, kernel(2, 2, 1, 1))]);
    assert_eq!(grid_at(&snapshot, 0, 0, 0).len(), 2);
    assert!(grid_at(&snapshot, 1, 0, 0).is_empty());
}
