/// Side length of the grid.
pub const GRID_SIZE: usize = 3;
/// Total number of cells, row-major indexed 0..9.
pub const BOARD_CELLS: usize = GRID_SIZE * GRID_SIZE;
/// Index of the center cell, the third tier of the computer heuristic.
pub const CENTER_CELL: usize = 4;

/// The eight winning lines: rows, columns, diagonals. Declaration order is
/// load-bearing for the computer heuristic, which takes the first
/// qualifying pattern when several complete simultaneously.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
