//! The draw engine: validation plus random-without-replacement assignment.
//!
//! The engine owns private copies of its inputs and never touches the
//! caller's slices. Randomness comes from an injected [`rand::Rng`], and
//! progress is reported through an event callback, so the algorithm can be
//! exercised without timing or captured output.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::core::errors::{Collection, DrawError};
use crate::core::types::{DrawEvent, DrawOptions, DrawOrder, DrawResult, Pairing};

/// Check draw preconditions without drawing.
///
/// Order: blank entries, duplicate entrants, duplicate picks, then pick
/// sufficiency. Surplus picks are allowed.
pub fn validate_inputs(entrants: &[String], picks: &[String]) -> Result<(), DrawError> {
    check_blank(Collection::Entrants, entrants)?;
    check_blank(Collection::Picks, picks)?;

    let duplicate_entrants = duplicates(entrants);
    if !duplicate_entrants.is_empty() {
        return Err(DrawError::DuplicateEntrants(duplicate_entrants));
    }
    let duplicate_picks = duplicates(picks);
    if !duplicate_picks.is_empty() {
        return Err(DrawError::DuplicatePicks(duplicate_picks));
    }

    if picks.len() < entrants.len() {
        return Err(DrawError::InsufficientPicks {
            picks: picks.len(),
            entrants: entrants.len(),
        });
    }
    Ok(())
}

/// Assign one distinct pick to every entrant.
///
/// Rounds are driven by the sequence `options.order` selects; each round
/// draws from a shrinking pool of the other sequence. With
/// `options.deterministic` the pool is consumed by position instead, so
/// `entrants[i]` receives `picks[i]`.
///
/// In [`DrawOrder::Picks`] rounds stop once every entrant has been drawn, so
/// surplus picks at the end of the list stay undrawn.
///
/// `on_event` observes every round as it happens; it cannot alter the result.
/// Nothing is emitted when validation fails.
pub fn draw<R, F>(
    entrants: &[String],
    picks: &[String],
    options: &DrawOptions,
    rng: &mut R,
    mut on_event: F,
) -> Result<DrawResult, DrawError>
where
    R: Rng + ?Sized,
    F: FnMut(&DrawEvent),
{
    debug!(
        entrants = entrants.len(),
        picks = picks.len(),
        order = %options.order,
        deterministic = options.deterministic,
        "running draw"
    );
    validate_inputs(entrants, picks)?;

    let order = options.order;
    let (mut drivers, mut pool) = match order {
        DrawOrder::Entrants | DrawOrder::Shuffle => (entrants.to_vec(), picks.to_vec()),
        DrawOrder::Picks => (picks.to_vec(), entrants.to_vec()),
    };
    if order == DrawOrder::Shuffle {
        drivers.shuffle(rng);
        debug!(?drivers, "shuffled entrants");
    }
    if options.deterministic {
        // Popping from the back of a reversed pool walks it front to back.
        pool.reverse();
    }

    let mut pairings = Vec::with_capacity(entrants.len());
    for (index, driver) in drivers.into_iter().enumerate() {
        let Some(drawn) = draw_from_pool(&mut pool, options.deterministic, rng) else {
            break;
        };
        let round = index + 1;
        on_event(&DrawEvent::RoundStarted {
            round,
            order,
            driver: driver.clone(),
        });
        on_event(&DrawEvent::Drawing { round });

        let pairing = if order.is_pick_driven() {
            Pairing {
                entrant: drawn,
                pick: driver,
            }
        } else {
            Pairing {
                entrant: driver,
                pick: drawn,
            }
        };
        debug!(round, entrant = %pairing.entrant, pick = %pairing.pick, "assigned pick");

        on_event(&DrawEvent::Resolved {
            round,
            order,
            pairing: pairing.clone(),
        });
        on_event(&DrawEvent::RoundFinished { round });
        pairings.push(pairing);
    }

    let undrawn = undrawn_picks(picks, &pairings);
    debug!(drawn = pairings.len(), undrawn = undrawn.len(), "draw complete");
    on_event(&DrawEvent::Undrawn {
        picks: undrawn.clone(),
    });

    Ok(DrawResult {
        order,
        pairings,
        undrawn,
    })
}

/// Take the next element out of the pool, or `None` once it is empty.
fn draw_from_pool<R: Rng + ?Sized>(
    pool: &mut Vec<String>,
    deterministic: bool,
    rng: &mut R,
) -> Option<String> {
    if deterministic {
        return pool.pop();
    }
    if pool.is_empty() {
        return None;
    }
    let slot = rng.gen_range(0..pool.len());
    Some(pool.swap_remove(slot))
}

fn undrawn_picks(picks: &[String], pairings: &[Pairing]) -> Vec<String> {
    let drawn: HashSet<&str> = pairings.iter().map(|pairing| pairing.pick.as_str()).collect();
    picks
        .iter()
        .filter(|pick| !drawn.contains(pick.as_str()))
        .cloned()
        .collect()
}

fn check_blank(collection: Collection, values: &[String]) -> Result<(), DrawError> {
    match values.iter().position(|value| value.trim().is_empty()) {
        Some(index) => Err(DrawError::BlankEntry {
            collection,
            position: index + 1,
        }),
        None => Ok(()),
    }
}

/// Every value that appears more than once, reported once in first-seen order.
fn duplicates(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut found = Vec::new();
    for value in values {
        if !seen.insert(value.as_str()) && reported.insert(value.as_str()) {
            found.push(value.clone());
        }
    }
    found
}
