//! Target selection for the automated contestant.
//!
//! The hunt/target heuristic escalates in three stages: uniform search
//! while nothing has been hit, probing the axis-aligned neighbors of
//! confirmed hits, and finishing along the line once two adjacent hits
//! pin the ship's orientation.

use crate::grid::Mask;
use rand::Rng;

/// Choose the next target given the chronological hit history, the set of
/// confirmed hits, and the set of not-yet-attacked coordinates.
///
/// Confirmed hits are scanned in order. Each hit contributes its in-bounds
/// neighbors as two axis pairs, {north, south} and {east, west}:
///
/// - both members unattacked: both become low-priority candidates;
/// - one member unattacked and its partner a recorded hit: the ship's
///   orientation is confirmed, the open member becomes the sole candidate
///   and the scan stops;
/// - one member unattacked and its partner a miss or off the board: the
///   open member becomes a low-priority candidate.
///
/// Falls back to a uniform draw over the remaining targets when no hit
/// yields a candidate. Returns `None` once no targets remain.
pub fn select_target<R: Rng + ?Sized>(
    hits: &[(usize, usize)],
    hit_mask: &Mask,
    remaining: &Mask,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let size = remaining.size();
    let open = |r: usize, c: usize| remaining.get(r, c).unwrap_or(false);
    let was_hit = |r: usize, c: usize| hit_mask.get(r, c).unwrap_or(false);

    let mut candidates: Vec<(usize, usize)> = Vec::new();

    'scan: for &(row, col) in hits {
        let north = (row > 0).then(|| (row - 1, col));
        let south = (row + 1 < size).then_some((row + 1, col));
        let east = (col + 1 < size).then_some((row, col + 1));
        let west = (col > 0).then(|| (row, col - 1));

        for pair in [[north, south], [east, west]] {
            let unattacked: Vec<(usize, usize)> = pair
                .iter()
                .flatten()
                .copied()
                .filter(|&(r, c)| open(r, c))
                .collect();

            match unattacked.len() {
                2 => candidates.extend(unattacked),
                1 => {
                    let partner = pair
                        .iter()
                        .flatten()
                        .copied()
                        .find(|&(r, c)| !open(r, c));
                    if partner.is_some_and(|(r, c)| was_hit(r, c)) {
                        // Two adjacent hits in a line: finish it.
                        candidates.clear();
                        candidates.push(unattacked[0]);
                        break 'scan;
                    }
                    candidates.push(unattacked[0]);
                }
                _ => {}
            }
        }
    }

    if !candidates.is_empty() {
        return Some(candidates[rng.random_range(0..candidates.len())]);
    }

    let count = remaining.count_ones();
    if count == 0 {
        return None;
    }
    remaining.iter_set_cells().nth(rng.random_range(0..count))
}
