//! Snapshot rendering (terminal).
//!
//! This module turns a world snapshot into a text grid for the demo.

use std::collections::{HashMap, HashSet};

use blast_grid::game::snapshot::Snapshot;
use blast_grid::game::types::{Phase, Position};

/// Draw the grid, then a status line with the score.
pub fn render_grid(snapshot: &Snapshot) -> String {
    let fixed: HashSet<Position> = snapshot.fixed_walls.iter().copied().collect();
    let breakable: HashSet<Position> = snapshot.breakable_walls.iter().copied().collect();
    let fire: HashSet<Position> = snapshot.explosion.iter().copied().collect();
    let bombs: HashSet<Position> = snapshot.bombs.iter().map(|b| b.pos).collect();
    let enemies: HashMap<Position, u32> = snapshot.enemies.iter().map(|e| (e.pos, e.id.0)).collect();

    let mut out = String::new();
    for y in 0..snapshot.grid_size {
        for x in 0..snapshot.grid_size {
            let pos = Position::new(x, y);
            // Actors first, then the blast, then whatever the cell holds.
            let symbol = if pos == snapshot.player {
                if snapshot.player_alive { "P".to_string() } else { "X".to_string() }
            } else if let Some(id) = enemies.get(&pos) {
                format!("E{id}")
            } else if fire.contains(&pos) {
                "**".to_string()
            } else if bombs.contains(&pos) {
                "()".to_string()
            } else if fixed.contains(&pos) {
                "██".to_string()
            } else if breakable.contains(&pos) {
                "▒▒".to_string()
            } else {
                "  ".to_string()
            };
            out.push_str(&format!("{:<3}", symbol));
        }
        out.push('\n');
    }

    let status = match snapshot.phase {
        Phase::Playing => "playing",
        Phase::GameOver => "GAME OVER (r to restart)",
    };
    out.push_str(&format!("Score: {}  [{}]\n", snapshot.score, status));
    out
}
