//! Shortest path across a weighted grid
//!
//! Each cell has a terrain cost; moving onto a cell pays that cost. The
//! search leans on the queue's `update_key` whenever a cheaper route to an
//! already-discovered cell turns up.
//!
//! ```bash
//! cargo run --example dijkstra_grid
//! ```

use indexed_pqueue::pathfinding::{dijkstra, SearchNode};

const WIDTH: usize = 8;
const HEIGHT: usize = 6;

/// Terrain cost per cell; the band of 9s is a mountain ridge worth
/// walking around.
const TERRAIN: [[u32; WIDTH]; HEIGHT] = [
    [1, 1, 1, 1, 9, 1, 1, 1],
    [1, 2, 2, 1, 9, 1, 3, 1],
    [1, 2, 9, 9, 9, 1, 3, 1],
    [1, 2, 1, 1, 1, 1, 3, 1],
    [1, 1, 1, 5, 5, 5, 3, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Cell {
    x: usize,
    y: usize,
}

impl SearchNode for Cell {
    type Cost = u32;

    fn successors(&self) -> Vec<(Self, u32)> {
        let mut next = Vec::with_capacity(4);
        let mut step = |x: usize, y: usize| {
            next.push((Cell { x, y }, TERRAIN[y][x]));
        };

        if self.x > 0 {
            step(self.x - 1, self.y);
        }
        if self.x + 1 < WIDTH {
            step(self.x + 1, self.y);
        }
        if self.y > 0 {
            step(self.x, self.y - 1);
        }
        if self.y + 1 < HEIGHT {
            step(self.x, self.y + 1);
        }
        next
    }

    fn is_goal(&self) -> bool {
        self.x == WIDTH - 1 && self.y == 0
    }
}

fn main() {
    let start = Cell { x: 0, y: HEIGHT - 1 };

    match dijkstra(&start) {
        Some((path, cost)) => {
            println!("reached ({}, 0) for total cost {cost}", WIDTH - 1);

            for y in 0..HEIGHT {
                let row: String = (0..WIDTH)
                    .map(|x| {
                        if path.iter().any(|c| c.x == x && c.y == y) {
                            '*'
                        } else {
                            char::from_digit(TERRAIN[y][x], 10).unwrap_or('?')
                        }
                    })
                    .collect();
                println!("{row}");
            }
        }
        None => println!("no path"),
    }
}
